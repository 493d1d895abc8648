// Folio - Spreadsheet Export Delivery
// Copyright (c) 2025 Folio Contributors
// Licensed under the MIT License

//! # Folio - Spreadsheet Export Delivery
//!
//! Folio turns tabular data into XLSX, CSV or TSV files and delivers them to
//! callers in one of four ways.
//!
//! ## Overview
//!
//! This library provides the core functionality for:
//! - **Downloading** an export as an HTTP attachment response
//! - **Encoding** an export to raw bytes
//! - **Storing** an export on a named disk
//! - **Queueing** a store to run later on the tokio runtime
//!
//! ## Architecture
//!
//! Folio follows a layered architecture:
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Business logic (resolution, dispatch, responses)
//! - [`adapters`] - Spreadsheet writers and disk storage
//! - [`domain`] - Core domain types and models
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging and observability
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use folio::config::load_config;
//! use folio::core::{ExportDispatcher, Exportable};
//! use folio::domain::{ExportDefaults, ExportRequest, Result, Sheet, WriterType};
//! use std::sync::Arc;
//!
//! struct UsersExport;
//!
//! impl Exportable for UsersExport {
//!     fn sheet(&self) -> Result<Sheet> {
//!         Ok(Sheet::new().with_headings(["id", "email"]).with_row(["1", "a@example.com"]))
//!     }
//!
//!     fn defaults(&self) -> ExportDefaults {
//!         ExportDefaults::new().file_name("users.xlsx").disk("local")
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let config = load_config("folio.toml")?;
//!     let dispatcher = ExportDispatcher::from_config(&config);
//!
//!     // Store with the export's own defaults
//!     let stored = dispatcher.store(Arc::new(UsersExport), ExportRequest::empty()).await?;
//!     println!("Stored {} bytes at {}", stored.bytes, stored.absolute_path.display());
//!
//!     // Or override them per call
//!     let csv = dispatcher.raw(&UsersExport, Some(WriterType::Csv))?;
//!     println!("{}", String::from_utf8_lossy(&csv));
//!     Ok(())
//! }
//! ```
//!
//! ## Returning Exports From Handlers
//!
//! An export paired with a dispatcher implements `axum::response::IntoResponse`:
//!
//! ```rust,no_run
//! use folio::core::{ExportDispatcher, ExportableExt, ResponsableExport, SheetExport};
//! use folio::domain::{ExportDefaults, Sheet};
//! use std::sync::Arc;
//!
//! fn handler(dispatcher: Arc<ExportDispatcher>) -> ResponsableExport<SheetExport> {
//!     SheetExport::new(Sheet::new().with_headings(["id"]))
//!         .with_defaults(ExportDefaults::new().file_name("ids.csv"))
//!         .into_responsable(dispatcher)
//! }
//! ```
//!
//! ## Error Handling
//!
//! Folio uses the [`domain::FolioError`] type for all errors:
//!
//! ```rust,no_run
//! use folio::domain::FolioError;
//!
//! fn example() -> Result<(), FolioError> {
//!     // Errors are automatically converted using the ? operator
//!     let config = folio::config::load_config("folio.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Logging
//!
//! Folio uses structured logging with the `tracing` crate:
//!
//! ```rust,no_run
//! use tracing::{info, warn};
//!
//! info!(file_name = "users.xlsx", "Starting export delivery");
//! warn!(option = "cache_control", "Ignoring disk option");
//! ```

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
