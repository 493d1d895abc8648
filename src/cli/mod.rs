//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Folio using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Folio - Spreadsheet Export Delivery
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version, about, long_about = None)]
#[command(author = "Folio Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "folio.toml", env = "FOLIO_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "FOLIO_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write a JSON dataset to a configured disk
    Store(commands::store::StoreArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
