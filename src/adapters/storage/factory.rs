//! Storage service factory
//!
//! This module provides the factory function that builds the storage
//! service described by the configuration.

use crate::adapters::storage::disk::DiskStorage;
use crate::adapters::storage::traits::StorageService;
use crate::config::schema::FolioConfig;
use std::sync::Arc;

/// Create the storage service for the configuration
///
/// Every configured disk is a local directory, so this always returns a
/// [`DiskStorage`].
///
/// # Arguments
///
/// * `config` - The Folio configuration
///
/// # Returns
///
/// Returns an Arc-wrapped trait object that implements StorageService
pub fn create_storage_service(config: &FolioConfig) -> Arc<dyn StorageService> {
    tracing::info!(
        default_disk = %config.filesystem.default_disk,
        disks = config.filesystem.disks.len(),
        "Creating disk storage"
    );

    Arc::new(DiskStorage::from_config(config)) as Arc<dyn StorageService>
}
