//! Configuration management for Folio.
//!
//! Folio uses TOML configuration files with support for:
//! - Environment variable substitution (`${VAR_NAME}`)
//! - `FOLIO_*` environment overrides
//! - Default values for every section
//! - Validation on load
//!
//! # Example Configuration
//!
//! ```toml
//! [application]
//! log_level = "info"
//!
//! [csv]
//! delimiter = ","
//! enclosure = "\""
//! line_ending = "\n"
//! use_bom = false
//!
//! [filesystem]
//! default_disk = "local"
//!
//! [filesystem.disks.local]
//! root = "storage/app"
//! visibility = "private"
//!
//! [filesystem.disks.public]
//! root = "${FOLIO_PUBLIC_ROOT}"
//! visibility = "public"
//! ```
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use folio::config::load_config;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("folio.toml")?;
//! println!("Default disk: {}", config.filesystem.default_disk);
//! # Ok(())
//! # }
//! ```

pub mod loader;
pub mod schema;

// Re-export commonly used types
pub use loader::{load_config, load_config_from_str};
pub use schema::{
    ApplicationConfig, CsvConfig, DiskConfig, FilesystemConfig, FolioConfig, LoggingConfig,
    Visibility,
};
