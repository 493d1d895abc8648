//! Configuration schema types
//!
//! This module defines the configuration structure for Folio.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Main Folio configuration
///
/// This is the root configuration structure that maps to the TOML file.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FolioConfig {
    /// Application-level settings
    #[serde(default)]
    pub application: ApplicationConfig,

    /// CSV/TSV writer settings
    #[serde(default)]
    pub csv: CsvConfig,

    /// Named disks
    #[serde(default)]
    pub filesystem: FilesystemConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl FolioConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid
    pub fn validate(&self) -> Result<(), String> {
        self.application.validate()?;
        self.csv.validate()?;
        self.filesystem.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}

/// Application-level configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl ApplicationConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.log_level.as_str()) {
            return Err(format!(
                "Invalid log_level '{}'. Must be one of: {}",
                self.log_level,
                valid_levels.join(", ")
            ));
        }
        Ok(())
    }
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

/// CSV writer configuration
///
/// TSV output uses the same settings with a tab delimiter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvConfig {
    /// Field delimiter, a single ASCII character
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Quote character, a single ASCII character
    #[serde(default = "default_enclosure")]
    pub enclosure: String,

    /// Record terminator, `"\n"` or `"\r\n"`
    #[serde(default = "default_line_ending")]
    pub line_ending: String,

    /// Prefix the output with a UTF-8 byte order mark
    #[serde(default)]
    pub use_bom: bool,
}

impl CsvConfig {
    fn validate(&self) -> Result<(), String> {
        single_ascii_byte("csv.delimiter", &self.delimiter)?;
        single_ascii_byte("csv.enclosure", &self.enclosure)?;

        let valid_endings = ["\n", "\r\n"];
        if !valid_endings.contains(&self.line_ending.as_str()) {
            return Err(format!(
                "Invalid csv.line_ending {:?}. Must be \"\\n\" or \"\\r\\n\"",
                self.line_ending
            ));
        }
        Ok(())
    }

    /// Delimiter as a byte
    pub fn delimiter_byte(&self) -> u8 {
        self.delimiter.as_bytes().first().copied().unwrap_or(b',')
    }

    /// Enclosure as a byte
    pub fn enclosure_byte(&self) -> u8 {
        self.enclosure.as_bytes().first().copied().unwrap_or(b'"')
    }
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            enclosure: default_enclosure(),
            line_ending: default_line_ending(),
            use_bom: false,
        }
    }
}

fn single_ascii_byte(field: &str, value: &str) -> Result<(), String> {
    if value.len() != 1 || !value.is_ascii() {
        return Err(format!(
            "{field} must be a single ASCII character, got {value:?}"
        ));
    }
    Ok(())
}

/// Disk visibility
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    /// World readable
    Public,
    /// Owner only
    #[default]
    Private,
}

impl Visibility {
    /// Parses a `visibility` disk option value
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "public" => Some(Visibility::Public),
            "private" => Some(Visibility::Private),
            _ => None,
        }
    }

    /// Unix permission bits applied to stored files
    pub fn file_mode(&self) -> u32 {
        match self {
            Visibility::Public => 0o644,
            Visibility::Private => 0o600,
        }
    }
}

/// Named disk configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiskConfig {
    /// Root directory every path on this disk is relative to
    pub root: String,

    /// Visibility applied when no `visibility` option is given
    #[serde(default)]
    pub visibility: Visibility,
}

/// Filesystem configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilesystemConfig {
    /// Disk used when a call does not name one
    #[serde(default = "default_disk")]
    pub default_disk: String,

    /// Disks keyed by name
    #[serde(default = "default_disks")]
    pub disks: BTreeMap<String, DiskConfig>,
}

impl FilesystemConfig {
    fn validate(&self) -> Result<(), String> {
        if self.disks.is_empty() {
            return Err("filesystem.disks cannot be empty".to_string());
        }

        if !self.disks.contains_key(&self.default_disk) {
            return Err(format!(
                "filesystem.default_disk '{}' is not configured in filesystem.disks",
                self.default_disk
            ));
        }

        for (name, disk) in &self.disks {
            if name.trim().is_empty() {
                return Err("filesystem.disks cannot contain an empty disk name".to_string());
            }
            if disk.root.trim().is_empty() {
                return Err(format!("filesystem.disks.{name}.root cannot be empty"));
            }
        }
        Ok(())
    }
}

impl Default for FilesystemConfig {
    fn default() -> Self {
        Self {
            default_disk: default_disk(),
            disks: default_disks(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Enable local file logging
    #[serde(default)]
    pub local_enabled: bool,

    /// Local log directory
    #[serde(default = "default_local_path")]
    pub local_path: String,

    /// Log rotation strategy
    #[serde(default = "default_local_rotation")]
    pub local_rotation: String,
}

impl LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        let valid_rotations = ["daily", "hourly", "never"];
        if !valid_rotations.contains(&self.local_rotation.as_str()) {
            return Err(format!(
                "Invalid logging.local_rotation '{}'. Must be one of: {}",
                self.local_rotation,
                valid_rotations.join(", ")
            ));
        }

        if self.local_enabled && self.local_path.trim().is_empty() {
            return Err(
                "logging.local_path cannot be empty when local logging is enabled".to_string(),
            );
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            local_enabled: false,
            local_path: default_local_path(),
            local_rotation: default_local_rotation(),
        }
    }
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_delimiter() -> String {
    ",".to_string()
}

fn default_enclosure() -> String {
    "\"".to_string()
}

fn default_line_ending() -> String {
    "\n".to_string()
}

fn default_disk() -> String {
    "local".to_string()
}

fn default_disks() -> BTreeMap<String, DiskConfig> {
    let mut disks = BTreeMap::new();
    disks.insert(
        "local".to_string(),
        DiskConfig {
            root: "storage/app".to_string(),
            visibility: Visibility::Private,
        },
    );
    disks
}

fn default_local_path() -> String {
    "/var/log/folio".to_string()
}

fn default_local_rotation() -> String {
    "daily".to_string()
}
