//! Integration tests for logging functionality

use folio::config::LoggingConfig;
use folio::logging::init_logging;
use tempfile::TempDir;

#[test]
fn test_logging_config_default() {
    let config = LoggingConfig::default();
    assert!(!config.local_enabled);
    assert_eq!(config.local_rotation, "daily");
    assert_eq!(config.local_path, "/var/log/folio");
}

#[test]
fn test_file_logging_creates_directory() {
    let temp_dir = TempDir::new().unwrap();
    let log_path = temp_dir.path().join("logs");

    let config = LoggingConfig {
        local_enabled: true,
        local_path: log_path.to_string_lossy().to_string(),
        local_rotation: "never".to_string(),
    };

    // Only one global subscriber can be installed per process
    let guard = init_logging("debug", &config).unwrap();
    tracing::info!(file_name = "users.csv", "Export delivered");
    drop(guard);

    assert!(log_path.exists());
    let second = init_logging("debug", &LoggingConfig::default());
    assert!(second.is_err());
}
