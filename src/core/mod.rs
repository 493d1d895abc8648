//! Core business logic for Folio.
//!
//! This module contains the export capability and the delivery orchestration.
//!
//! # Modules
//!
//! - [`exportable`] - The [`Exportable`] trait and its delivery shorthands
//! - [`resolve`] - Merging call arguments over export defaults
//! - [`dispatch`] - Delivery as download, raw bytes, stored file or queued job
//! - [`response`] - Attachment responses
//! - [`responsable`] - Exports returned directly from request handlers
//!
//! # Delivery Workflow
//!
//! Every delivery follows the same steps:
//!
//! 1. **Resolve**: Merge the call's [`ExportRequest`](crate::domain::ExportRequest)
//!    over the export's [`ExportDefaults`](crate::domain::ExportDefaults)
//! 2. **Fail fast**: Missing file names or paths are reported before any data is produced
//! 3. **Deliver**: Encode in-process, or delegate to the storage service
//!
//! # Example
//!
//! ```rust,no_run
//! use folio::config::load_config;
//! use folio::core::{ExportDispatcher, ExportableExt, SheetExport};
//! use folio::domain::{ExportRequest, Sheet};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("folio.toml")?;
//! let dispatcher = ExportDispatcher::from_config(&config);
//!
//! let export = SheetExport::new(Sheet::new().with_headings(["id", "email"]));
//! let response = export.download(&dispatcher, ExportRequest::new("users.xlsx"))?;
//!
//! println!("{}", response.header("Content-Disposition").unwrap_or_default());
//! # Ok(())
//! # }
//! ```

pub mod dispatch;
pub mod exportable;
pub mod resolve;
pub mod responsable;
pub mod response;

pub use dispatch::ExportDispatcher;
pub use exportable::{Exportable, ExportableExt, SheetExport};
pub use resolve::{resolve_download, resolve_store};
pub use responsable::{Responsable, ResponsableExport};
pub use response::DownloadResponse;
