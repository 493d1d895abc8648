//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::FolioConfig;
use crate::domain::errors::FolioError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into FolioConfig
/// 4. Applies environment variable overrides (FOLIO_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns an error if the file cannot be read, a referenced environment
/// variable is missing, parsing fails or validation fails.
///
/// # Examples
///
/// ```no_run
/// use folio::config::loader::load_config;
///
/// let config = load_config("folio.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<FolioConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(FolioError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        FolioError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file read.
pub fn load_config_from_str(contents: &str) -> Result<FolioConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: FolioConfig = toml::from_str(&contents)
        .map_err(|e| FolioError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config);

    config.validate().map_err(|e| {
        FolioError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    tracing::debug!(
        default_disk = %config.filesystem.default_disk,
        disks = config.filesystem.disks.len(),
        "Configuration loaded"
    );

    Ok(config)
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are copied untouched.
///
/// # Errors
///
/// Returns an error listing every referenced variable that is not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
        .map_err(|e| FolioError::Configuration(format!("Invalid substitution pattern: {e}")))?;
    let mut result = String::new();
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(FolioError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using FOLIO_* prefix
///
/// Environment variables follow the pattern: FOLIO_<SECTION>_<KEY>
/// For example: FOLIO_FILESYSTEM_DEFAULT_DISK, FOLIO_CSV_DELIMITER
fn apply_env_overrides(config: &mut FolioConfig) {
    // Application overrides
    if let Ok(val) = std::env::var("FOLIO_APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    // CSV overrides
    if let Ok(val) = std::env::var("FOLIO_CSV_DELIMITER") {
        config.csv.delimiter = val;
    }
    if let Ok(val) = std::env::var("FOLIO_CSV_ENCLOSURE") {
        config.csv.enclosure = val;
    }
    if let Ok(val) = std::env::var("FOLIO_CSV_USE_BOM") {
        config.csv.use_bom = val.parse().unwrap_or(false);
    }

    // Filesystem overrides
    if let Ok(val) = std::env::var("FOLIO_FILESYSTEM_DEFAULT_DISK") {
        config.filesystem.default_disk = val;
    }

    // Logging overrides
    if let Ok(val) = std::env::var("FOLIO_LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().unwrap_or(false);
    }
    if let Ok(val) = std::env::var("FOLIO_LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }
}
