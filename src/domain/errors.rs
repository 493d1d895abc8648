//! Domain error types
//!
//! This module defines the error hierarchy for Folio. The two configuration
//! errors raised by the resolver ([`FolioError::MissingFileName`] and
//! [`FolioError::MissingFilePath`]) carry fixed messages and are always
//! returned before any bytes are generated or any collaborator is called.

use thiserror::Error;

/// Main Folio error type
///
/// This is the primary error type used throughout the crate.
/// It wraps writer and storage errors and provides context for error handling.
#[derive(Debug, Error)]
pub enum FolioError {
    /// No file name could be resolved for a download
    #[error("A filename needs to be passed in order to download the export")]
    MissingFileName,

    /// No file path could be resolved for a store or queue call
    #[error("A filepath needs to be passed in order to store the export")]
    MissingFilePath,

    /// Writer type could not be inferred from the file name
    #[error(
        "No writer type could be detected for '{0}'. Make sure you either pass a valid extension to the filename or pass an explicit type."
    )]
    NoTypeDetected(String),

    /// No writer type was passed or declared for raw contents
    #[error("A writer type needs to be passed in order to export raw contents")]
    MissingWriterType,

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Spreadsheet encoding errors
    #[error("Writer error: {0}")]
    Writer(#[from] WriterError),

    /// Disk storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Deferred job errors
    #[error("Queue error: {0}")]
    Queue(String),

    /// Header name or value rejected by the response adapter
    #[error("Invalid header: {0}")]
    InvalidHeader(String),

    /// Export data producer failures
    #[error("Export error: {0}")]
    Export(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(String),
}

/// Spreadsheet writer errors
///
/// These errors don't expose the third-party encoder types.
#[derive(Debug, Error)]
pub enum WriterError {
    /// XLSX workbook encoding failed
    #[error("Failed to encode XLSX workbook: {0}")]
    Xlsx(String),

    /// CSV encoding failed
    #[error("Failed to encode CSV: {0}")]
    Csv(String),

    /// Writer options are not usable
    #[error("Invalid writer options: {0}")]
    InvalidOptions(String),
}

/// Disk storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    /// Disk name is not configured
    #[error("Disk [{0}] does not have a configured driver")]
    DiskNotFound(String),

    /// Path escapes the disk root or is otherwise unusable
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// Disk option has an unsupported value
    #[error("Invalid disk option {key}={value}")]
    InvalidOption { key: String, value: String },

    /// Writing the file failed
    #[error("Failed to write {path}: {message}")]
    WriteFailed { path: String, message: String },
}

// Conversion from std::io::Error
impl From<std::io::Error> for FolioError {
    fn from(err: std::io::Error) -> Self {
        FolioError::Io(err.to_string())
    }
}

// Conversion from serde_json::Error
impl From<serde_json::Error> for FolioError {
    fn from(err: serde_json::Error) -> Self {
        FolioError::Serialization(err.to_string())
    }
}

// Conversion from toml parse errors
impl From<toml::de::Error> for FolioError {
    fn from(err: toml::de::Error) -> Self {
        FolioError::Configuration(format!("TOML parse error: {err}"))
    }
}
