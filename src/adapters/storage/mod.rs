//! Export persistence
//!
//! This module provides a trait-based abstraction for writing exports to
//! named disks, either immediately or as a deferred job.

pub mod disk;
pub mod factory;
pub mod models;
pub mod traits;

pub use disk::DiskStorage;
pub use factory::create_storage_service;
pub use models::{QueueHandle, StoredFile};
pub use traits::StorageService;
