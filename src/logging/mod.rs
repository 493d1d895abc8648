//! Logging and observability
//!
//! This module provides structured logging with support for:
//! - Console output filtered by level or `RUST_LOG`
//! - JSON-formatted local file logging with rotation
//!
//! # Example
//!
//! ```no_run
//! use folio::logging::init_logging;
//! use folio::config::LoggingConfig;
//!
//! let config = LoggingConfig::default();
//! let _guard = init_logging("info", &config).expect("Failed to initialize logging");
//!
//! tracing::info!(file_name = "users.xlsx", "Export downloaded");
//! ```

pub mod structured;

// Re-export commonly used items
pub use structured::{init_logging, LoggingGuard};

/// Log the start of a delivery
///
/// # Example
///
/// ```no_run
/// use folio::log_delivery_start;
///
/// log_delivery_start!("store", "reports/users.csv");
/// ```
#[macro_export]
macro_rules! log_delivery_start {
    ($mode:expr, $file_name:expr) => {
        tracing::info!(mode = $mode, file_name = %$file_name, "Starting export delivery");
    };
}

/// Log the completion of a delivery
///
/// # Example
///
/// ```no_run
/// use folio::log_delivery_complete;
/// use std::time::Duration;
///
/// log_delivery_complete!("download", "users.xlsx", 2048, Duration::from_millis(12));
/// ```
#[macro_export]
macro_rules! log_delivery_complete {
    ($mode:expr, $file_name:expr, $bytes:expr, $duration:expr) => {
        tracing::info!(
            mode = $mode,
            file_name = %$file_name,
            bytes = $bytes,
            duration_ms = $duration.as_millis() as u64,
            "Export delivered"
        );
    };
}

/// Log an error with context
///
/// # Example
///
/// ```no_run
/// use folio::log_error_with_context;
/// use folio::domain::FolioError;
///
/// let error = FolioError::MissingFileName;
/// log_error_with_context!(&error, "Download failed");
/// ```
#[macro_export]
macro_rules! log_error_with_context {
    ($error:expr, $context:expr) => {
        tracing::error!(
            error = %$error,
            context = $context,
            "Error occurred"
        );
    };
}
