//! Export dispatch
//!
//! The [`ExportDispatcher`] resolves each call against the export's declared
//! defaults and then delivers it in one of four modes:
//!
//! - `download` - encode now and wrap the bytes as an attachment response
//! - `raw` - encode now and return the bytes
//! - `store` - hand off to the [`StorageService`] and wait for the write
//! - `queue` - hand off to the [`StorageService`] as a deferred job

use crate::adapters::storage::{create_storage_service, QueueHandle, StorageService, StoredFile};
use crate::adapters::writer::WriterFactory;
use crate::config::FolioConfig;
use crate::core::exportable::Exportable;
use crate::core::resolve::{resolve_download, resolve_store};
use crate::core::response::DownloadResponse;
use crate::domain::{ExportRequest, FolioError, Result, WriterType};
use crate::{log_delivery_complete, log_delivery_start, log_error_with_context};
use bytes::Bytes;
use std::sync::Arc;
use std::time::Instant;

/// Delivers exports as downloads, raw bytes, or stored files
#[derive(Clone)]
pub struct ExportDispatcher {
    storage: Arc<dyn StorageService>,
    writers: WriterFactory,
}

impl ExportDispatcher {
    /// Dispatcher over explicit collaborators
    pub fn new(storage: Arc<dyn StorageService>, writers: WriterFactory) -> Self {
        Self { storage, writers }
    }

    /// Dispatcher wired from configuration
    pub fn from_config(config: &FolioConfig) -> Self {
        Self::new(
            create_storage_service(config),
            WriterFactory::new(config.csv.clone()),
        )
    }

    /// Encode `export` and wrap it as a downloadable attachment
    ///
    /// The file name is taken from `request`, then the export's defaults,
    /// then [`Exportable::file_name`]. The writer type is taken from
    /// `request`, then the export's defaults, then the file extension.
    /// Custom headers are applied over the computed ones.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingFileName`] before any data is produced
    /// if no file name can be resolved, [`FolioError::NoTypeDetected`] if
    /// the format cannot be determined, and otherwise whatever the export
    /// or writer returns.
    pub fn download(&self, export: &dyn Exportable, request: ExportRequest) -> Result<DownloadResponse> {
        let start = Instant::now();
        let resolved = resolve_download(&request, &export.defaults(), || export.file_name())?;

        let writer_type = resolved
            .writer_type
            .or_else(|| WriterType::from_path(&resolved.file_name))
            .ok_or_else(|| FolioError::NoTypeDetected(resolved.file_name.clone()))?;

        log_delivery_start!("download", resolved.file_name);

        let contents = self.encode(export, writer_type).inspect_err(|e| {
            log_error_with_context!(e, "Download failed");
        })?;
        let bytes = contents.len();

        let response =
            DownloadResponse::from_bytes(contents, &resolved.file_name, Some(writer_type), &resolved.headers)?;

        log_delivery_complete!("download", resolved.file_name, bytes, start.elapsed());
        Ok(response)
    }

    /// Encode `export` and return the bytes
    ///
    /// The writer type is `writer_type` when given, otherwise the export's
    /// declared default.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingWriterType`] if neither is set, and
    /// otherwise whatever the export or writer returns.
    pub fn raw(&self, export: &dyn Exportable, writer_type: Option<WriterType>) -> Result<Bytes> {
        let writer_type = writer_type
            .or(export.defaults().writer_type)
            .ok_or(FolioError::MissingWriterType)?;

        let contents = self.encode(export, writer_type)?;
        tracing::debug!(writer_type = %writer_type, bytes = contents.len(), "Encoded raw export");
        Ok(Bytes::from(contents))
    }

    /// Persist `export` through the storage service
    ///
    /// Path, disk, writer type and disk options are resolved from `request`
    /// over the export's defaults. The storage service receives `None` for
    /// anything neither source sets.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingFilePath`] without calling the storage
    /// service if no path can be resolved; otherwise the storage service's
    /// result is returned unchanged.
    pub async fn store(&self, export: Arc<dyn Exportable>, request: ExportRequest) -> Result<StoredFile> {
        let start = Instant::now();
        let resolved = resolve_store(&request, &export.defaults())?;

        log_delivery_start!("store", resolved.file_name);

        let stored = self
            .storage
            .store(
                export,
                &resolved.file_name,
                resolved.disk.as_deref(),
                resolved.writer_type,
                &resolved.disk_options,
            )
            .await
            .inspect_err(|e| {
                log_error_with_context!(e, "Store failed");
            })?;

        log_delivery_complete!("store", resolved.file_name, stored.bytes, start.elapsed());
        Ok(stored)
    }

    /// Hand `export` to the storage service as a deferred job
    ///
    /// Resolution is identical to [`ExportDispatcher::store`]. Returns as
    /// soon as the storage service accepts the job.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::MissingFilePath`] without calling the storage
    /// service if no path can be resolved; otherwise the storage service's
    /// result is returned unchanged.
    pub async fn queue(&self, export: Arc<dyn Exportable>, request: ExportRequest) -> Result<QueueHandle> {
        let resolved = resolve_store(&request, &export.defaults())?;

        let handle = self
            .storage
            .queue(
                export,
                &resolved.file_name,
                resolved.disk.as_deref(),
                resolved.writer_type,
                &resolved.disk_options,
            )
            .await?;

        tracing::info!(
            job_id = %handle.id,
            path = %resolved.file_name,
            "Export queued"
        );
        Ok(handle)
    }

    fn encode(&self, export: &dyn Exportable, writer_type: WriterType) -> Result<Vec<u8>> {
        let sheet = export.sheet()?;
        self.writers.write(writer_type, &sheet)
    }
}

impl std::fmt::Debug for ExportDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExportDispatcher")
            .field("writers", &self.writers)
            .finish_non_exhaustive()
    }
}
