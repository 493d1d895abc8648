//! Validate config command implementation
//!
//! This module implements the `validate-config` command for validating
//! the Folio configuration file.

use crate::config::load_config;
use clap::Args;

/// Arguments for the validate-config command
#[derive(Args, Debug)]
pub struct ValidateArgs {}

impl ValidateArgs {
    /// Execute the validate-config command
    pub async fn execute(&self, config_path: &str) -> anyhow::Result<i32> {
        tracing::info!(config_path = %config_path, "Validating configuration");

        println!("🔍 Validating configuration file: {config_path}");
        println!();

        // Loading also validates every section
        let config = match load_config(config_path) {
            Ok(c) => c,
            Err(e) => {
                println!("❌ Configuration is invalid");
                println!("   Error: {e}");
                return Ok(2); // Configuration error exit code
            }
        };

        println!("✅ Configuration is valid");
        println!();
        println!("Configuration Summary:");
        println!("  Log Level: {}", config.application.log_level);
        println!(
            "  CSV: delimiter {:?}, enclosure {:?}, BOM {}",
            config.csv.delimiter, config.csv.enclosure, config.csv.use_bom
        );
        println!("  Default Disk: {}", config.filesystem.default_disk);
        for (name, disk) in &config.filesystem.disks {
            println!("  Disk {name}: {} ({:?})", disk.root, disk.visibility);
        }
        println!(
            "  File Logging: {}",
            if config.logging.local_enabled {
                config.logging.local_path.as_str()
            } else {
                "disabled"
            }
        );
        println!();
        Ok(0)
    }
}
