//! Storage result types

use crate::config::Visibility;
use crate::domain::{FolioError, Result, WriterType};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::PathBuf;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// A file written to a disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StoredFile {
    /// Disk the file was written to
    pub disk: String,

    /// Path relative to the disk root
    pub path: String,

    /// Location on the local filesystem
    pub absolute_path: PathBuf,

    /// Format the file was written in
    pub writer_type: WriterType,

    /// Size in bytes
    pub bytes: u64,

    /// Hex-encoded SHA-256 of the contents
    pub checksum: String,

    /// Visibility applied to the file
    pub visibility: Visibility,
}

/// Handle to a deferred store job
///
/// Returned as soon as the job is handed off. Jobs run on the tokio
/// runtime can be awaited with [`QueueHandle::wait`]; jobs handed to an
/// external system are detached.
#[derive(Debug)]
pub struct QueueHandle {
    /// Job identifier
    pub id: Uuid,

    /// Target path
    pub path: String,

    /// Target disk, if one was named
    pub disk: Option<String>,

    /// When the job was queued
    pub queued_at: DateTime<Utc>,

    job: Option<JoinHandle<Result<StoredFile>>>,
}

impl QueueHandle {
    /// Handle for a job running on the local runtime
    pub fn spawned(path: impl Into<String>, disk: Option<String>, job: JoinHandle<Result<StoredFile>>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
            disk,
            queued_at: Utc::now(),
            job: Some(job),
        }
    }

    /// Handle for a job owned by another system
    pub fn detached(path: impl Into<String>, disk: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
            disk,
            queued_at: Utc::now(),
            job: None,
        }
    }

    /// True when the job can be awaited
    pub fn is_awaitable(&self) -> bool {
        self.job.is_some()
    }

    /// True when the job has completed (always false for detached jobs)
    pub fn is_finished(&self) -> bool {
        self.job.as_ref().map(JoinHandle::is_finished).unwrap_or(false)
    }

    /// Wait for the job and return the stored file
    ///
    /// # Errors
    ///
    /// Returns the job's own error, or [`FolioError::Queue`] if the job
    /// panicked, was cancelled, or is detached.
    pub async fn wait(self) -> Result<StoredFile> {
        let id = self.id;
        match self.job {
            Some(job) => job
                .await
                .map_err(|e| FolioError::Queue(format!("Job {id} did not complete: {e}")))?,
            None => Err(FolioError::Queue(format!(
                "Job {id} is detached and cannot be awaited"
            ))),
        }
    }
}
