//! Domain models and types for Folio.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Writer types** ([`WriterType`]) and tabular data ([`Sheet`], [`CellValue`])
//! - **Call arguments and defaults** ([`ExportRequest`], [`ExportDefaults`],
//!   [`ResolvedConfiguration`])
//! - **Error types** ([`FolioError`], [`WriterError`], [`StorageError`])
//! - **Result type alias** ([`Result`])
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T, FolioError>`]:
//!
//! ```rust
//! use folio::domain::{FolioError, Result};
//!
//! fn example() -> Result<()> {
//!     Err(FolioError::MissingFilePath)
//! }
//!
//! assert!(example().is_err());
//! ```

pub mod errors;
pub mod request;
pub mod result;
pub mod sheet;
pub mod writer_type;

// Re-export commonly used types for convenience
pub use errors::{FolioError, StorageError, WriterError};
pub use request::{DiskOptions, ExportDefaults, ExportRequest, HeaderMapping, ResolvedConfiguration};
pub use result::Result;
pub use sheet::{CellValue, Sheet};
pub use writer_type::WriterType;
