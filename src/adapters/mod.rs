//! External system integrations for Folio.
//!
//! This module provides adapters that sit behind the export dispatcher:
//!
//! - [`writer`] - Spreadsheet encoders (XLSX, CSV, TSV)
//! - [`storage`] - Storage abstraction layer (trait-based) and local disks
//!
//! # Design Pattern
//!
//! Adapters follow the **Adapter Pattern** to isolate external dependencies and
//! enable testing with mock implementations. The storage layer uses trait-based
//! abstraction so the dispatcher can delegate to any backend.
//!
//! ```rust,no_run
//! use folio::adapters::storage::create_storage_service;
//! use folio::config::FolioConfig;
//! use folio::core::{ExportDispatcher, SheetExport};
//! use folio::domain::{ExportRequest, Sheet};
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = FolioConfig::default();
//! let dispatcher = ExportDispatcher::from_config(&config);
//!
//! let export = Arc::new(SheetExport::new(Sheet::new().with_headings(["id"])));
//! let stored = dispatcher.store(export, ExportRequest::new("ids.csv")).await?;
//! println!("{} bytes written to {}", stored.bytes, stored.absolute_path.display());
//! # Ok(())
//! # }
//! ```

pub mod storage;
pub mod writer;
