//! Integration tests for configuration loading and validation
//!
//! Note: Tests that modify environment variables should be run with --test-threads=1
//! to avoid interference between tests.

use folio::config::{load_config, load_config_from_str, Visibility};
use std::io::Write;
use std::sync::Mutex;
use tempfile::NamedTempFile;

// Mutex to serialize tests that modify environment variables
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Helper function to clean up environment variables
fn cleanup_env_vars() {
    std::env::remove_var("FOLIO_APPLICATION_LOG_LEVEL");
    std::env::remove_var("FOLIO_CSV_DELIMITER");
    std::env::remove_var("FOLIO_CSV_USE_BOM");
    std::env::remove_var("FOLIO_FILESYSTEM_DEFAULT_DISK");
    std::env::remove_var("TEST_EXPORT_ROOT");
}

fn write_config(contents: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    temp_file.write_all(contents.as_bytes()).unwrap();
    temp_file.flush().unwrap();
    temp_file
}

#[test]
fn test_load_complete_config() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let temp_file = write_config(
        r#"
[application]
log_level = "debug"

[csv]
delimiter = ";"
enclosure = "'"
line_ending = "\r\n"
use_bom = true

[filesystem]
default_disk = "exports"

[filesystem.disks.exports]
root = "/srv/exports"
visibility = "public"

[filesystem.disks.archive]
root = "/srv/archive"

[logging]
local_enabled = true
local_path = "/tmp/folio"
local_rotation = "hourly"
"#,
    );

    let config = load_config(temp_file.path()).unwrap();

    assert_eq!(config.application.log_level, "debug");
    assert_eq!(config.csv.delimiter_byte(), b';');
    assert_eq!(config.csv.enclosure_byte(), b'\'');
    assert_eq!(config.csv.line_ending, "\r\n");
    assert!(config.csv.use_bom);
    assert_eq!(config.filesystem.default_disk, "exports");
    assert_eq!(config.filesystem.disks.len(), 2);
    assert_eq!(config.filesystem.disks["exports"].visibility, Visibility::Public);
    assert_eq!(config.filesystem.disks["archive"].visibility, Visibility::Private);
    assert!(config.logging.local_enabled);
    assert_eq!(config.logging.local_rotation, "hourly");
}

#[test]
fn test_empty_config_uses_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let config = load_config_from_str("").unwrap();

    assert_eq!(config.application.log_level, "info");
    assert_eq!(config.csv.delimiter, ",");
    assert_eq!(config.filesystem.default_disk, "local");
    assert_eq!(config.filesystem.disks["local"].root, "storage/app");
    assert!(!config.logging.local_enabled);
}

#[test]
fn test_env_var_substitution() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("TEST_EXPORT_ROOT", "/data/exports");

    let config = load_config_from_str(
        r#"
[filesystem.disks.local]
root = "${TEST_EXPORT_ROOT}/local"
"#,
    )
    .unwrap();

    assert_eq!(config.filesystem.disks["local"].root, "/data/exports/local");
    cleanup_env_vars();
}

#[test]
fn test_missing_env_var_is_reported() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let err = load_config_from_str(
        r#"
[filesystem.disks.local]
root = "${TEST_EXPORT_ROOT}"
"#,
    )
    .unwrap_err();

    assert!(err.to_string().contains("TEST_EXPORT_ROOT"));
}

#[test]
fn test_env_overrides() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("FOLIO_APPLICATION_LOG_LEVEL", "warn");
    std::env::set_var("FOLIO_CSV_DELIMITER", "|");
    std::env::set_var("FOLIO_CSV_USE_BOM", "true");

    let config = load_config_from_str("[application]\nlog_level = \"debug\"\n").unwrap();

    assert_eq!(config.application.log_level, "warn");
    assert_eq!(config.csv.delimiter, "|");
    assert!(config.csv.use_bom);
    cleanup_env_vars();
}

#[test]
fn test_env_override_is_validated() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();
    std::env::set_var("FOLIO_FILESYSTEM_DEFAULT_DISK", "s3");

    let err = load_config_from_str("").unwrap_err();

    assert!(err.to_string().contains("'s3'"));
    cleanup_env_vars();
}

#[test]
fn test_invalid_values_are_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    assert!(load_config_from_str("[application]\nlog_level = \"loud\"\n").is_err());
    assert!(load_config_from_str("[csv]\ndelimiter = \"::\"\n").is_err());
    assert!(load_config_from_str("[logging]\nlocal_rotation = \"weekly\"\n").is_err());
    assert!(load_config_from_str(
        "[filesystem.disks.local]\nroot = \"/tmp\"\nvisibility = \"hidden\"\n"
    )
    .is_err());
}

#[test]
fn test_invalid_toml() {
    let _lock = ENV_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    cleanup_env_vars();

    let err = load_config_from_str("[application\nlog_level = ").unwrap_err();
    assert!(err.to_string().contains("Configuration error"));
}
