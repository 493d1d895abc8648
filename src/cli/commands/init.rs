//! Init command implementation
//!
//! This module implements the `init` command for generating a sample
//! configuration file.

use clap::Args;
use std::fs;
use std::path::Path;

/// Arguments for the init command
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Path where to create the configuration file
    #[arg(short, long, default_value = "folio.toml")]
    pub output: String,

    /// Overwrite existing file
    #[arg(long)]
    pub force: bool,
}

impl InitArgs {
    /// Execute the init command
    pub async fn execute(&self) -> anyhow::Result<i32> {
        tracing::info!(output = %self.output, "Initializing configuration file");

        println!("📝 Initializing Folio configuration");
        println!();

        if Path::new(&self.output).exists() && !self.force {
            println!("❌ Configuration file already exists: {}", self.output);
            println!("   Use --force to overwrite");
            return Ok(2); // Configuration error exit code
        }

        match fs::write(&self.output, Self::generate_config()) {
            Ok(_) => {
                println!("✅ Configuration file created: {}", self.output);
                println!();
                println!("Next steps:");
                println!("  1. Edit {} and point the disks at real directories", self.output);
                println!("  2. Validate configuration: folio validate-config");
                println!("  3. Store a dataset: folio store data.json reports/data.xlsx");
                println!();
                Ok(0)
            }
            Err(e) => {
                println!("❌ Failed to write configuration file");
                println!("   Error: {e}");
                Ok(5) // Fatal error exit code
            }
        }
    }

    /// Generate the sample configuration
    fn generate_config() -> String {
        r#"# Folio Configuration File
# Spreadsheet export delivery

[application]
log_level = "info"  # trace | debug | info | warn | error

[csv]
delimiter = ","
enclosure = "\""
line_ending = "\n"  # "\n" or "\r\n"
use_bom = false

[filesystem]
default_disk = "local"

# Every disk is a directory; stored paths are relative to its root
[filesystem.disks.local]
root = "storage/app"
visibility = "private"  # private (0600) | public (0644)

# Values may reference environment variables, e.g. root = "${EXPORT_ROOT}"
[filesystem.disks.public]
root = "storage/public"
visibility = "public"

[logging]
local_enabled = false
local_path = "/var/log/folio"
local_rotation = "daily"  # daily | hourly | never
"#
        .to_string()
    }
}
