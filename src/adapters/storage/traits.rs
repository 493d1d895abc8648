//! Storage service trait
//!
//! The dispatcher hands fully resolved arguments to a [`StorageService`];
//! anything beyond resolution (type inference, disk lookup, writing,
//! deferral) belongs to the implementation.

use super::models::{QueueHandle, StoredFile};
use crate::core::exportable::Exportable;
use crate::domain::{DiskOptions, Result, WriterType};
use async_trait::async_trait;
use std::sync::Arc;

/// Persists exports to named disks, now or later
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Generate the export and write it to `path` on `disk`
    ///
    /// # Arguments
    ///
    /// * `export` - Data producer
    /// * `path` - Path relative to the disk root
    /// * `disk` - Disk name; `None` selects the default disk
    /// * `writer_type` - Output format; `None` infers it from `path`
    /// * `options` - Backend-specific options such as `visibility`
    ///
    /// # Errors
    ///
    /// Returns an error if the disk, path, options or encoding is invalid,
    /// or the write fails.
    async fn store(
        &self,
        export: Arc<dyn Exportable>,
        path: &str,
        disk: Option<&str>,
        writer_type: Option<WriterType>,
        options: &DiskOptions,
    ) -> Result<StoredFile>;

    /// Hand the same store off to be performed later
    ///
    /// Returns as soon as the job is accepted.
    ///
    /// # Errors
    ///
    /// Returns an error if the job cannot be accepted.
    async fn queue(
        &self,
        export: Arc<dyn Exportable>,
        path: &str,
        disk: Option<&str>,
        writer_type: Option<WriterType>,
        options: &DiskOptions,
    ) -> Result<QueueHandle>;
}
