//! Store command implementation
//!
//! This module implements the `store` command, which reads a JSON dataset
//! and writes it to a configured disk through the export dispatcher.

use crate::config::load_config;
use crate::core::{ExportDispatcher, SheetExport};
use crate::domain::{DiskOptions, ExportRequest, FolioError, Sheet, WriterType};
use clap::Args;
use std::sync::Arc;

/// Arguments for the store command
#[derive(Args, Debug)]
pub struct StoreArgs {
    /// JSON dataset with `title`, `headings` and `rows`
    pub input: String,

    /// Path on the disk to write to
    pub path: String,

    /// Disk name (defaults to filesystem.default_disk)
    #[arg(long)]
    pub disk: Option<String>,

    /// Output format (xlsx, csv, tsv); inferred from the path if omitted
    #[arg(long)]
    pub writer_type: Option<WriterType>,

    /// Disk option as key=value (repeatable)
    #[arg(long = "option", value_name = "KEY=VALUE")]
    pub options: Vec<String>,

    /// Run the store as a queued job and wait for it
    #[arg(long)]
    pub queue: bool,
}

impl StoreArgs {
    /// Execute the store command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(input = %self.input, path = %self.path, "Starting store command");

        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                tracing::error!(error = %e, "Failed to load configuration");
                eprintln!("Failed to load configuration: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        let options = match parse_options(&self.options) {
            Ok(o) => o,
            Err(e) => {
                eprintln!("{e}");
                return Ok(2);
            }
        };

        let sheet = read_sheet(&self.input).await?;
        let export = Arc::new(SheetExport::new(sheet));

        let mut request = ExportRequest::new(&self.path).disk_options(options);
        if let Some(disk) = &self.disk {
            request = request.disk(disk);
        }
        if let Some(writer_type) = self.writer_type {
            request = request.writer_type(writer_type);
        }

        let dispatcher = ExportDispatcher::from_config(&config);
        let result = if self.queue {
            match dispatcher.queue(export, request).await {
                Ok(handle) => {
                    println!("Queued job {} at {}", handle.id, handle.queued_at.to_rfc3339());
                    handle.wait().await
                }
                Err(e) => Err(e),
            }
        } else {
            dispatcher.store(export, request).await
        };

        match result {
            Ok(stored) => {
                println!("Stored export:");
                println!("  Disk: {}", stored.disk);
                println!("  Path: {}", stored.path);
                println!("  File: {}", stored.absolute_path.display());
                println!("  Type: {}", stored.writer_type);
                println!("  Size: {} bytes", stored.bytes);
                println!("  SHA-256: {}", stored.checksum);
                Ok(0)
            }
            Err(e @ (FolioError::Storage(_) | FolioError::NoTypeDetected(_) | FolioError::MissingFilePath)) => {
                tracing::error!(error = %e, "Store rejected");
                eprintln!("Store failed: {e}");
                Ok(2)
            }
            Err(e) => {
                tracing::error!(error = %e, "Store failed");
                eprintln!("Store failed: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }
}

/// Parse repeated `key=value` arguments into disk options
fn parse_options(raw: &[String]) -> Result<DiskOptions, String> {
    raw.iter()
        .map(|pair| match pair.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(format!("Invalid --option '{pair}'. Expected KEY=VALUE")),
        })
        .collect()
}

async fn read_sheet(path: &str) -> anyhow::Result<Sheet> {
    let contents = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read {path}: {e}"))?;
    let sheet = serde_json::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse {path}: {e}"))?;
    Ok(sheet)
}
