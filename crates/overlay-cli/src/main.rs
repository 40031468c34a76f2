//! # overlay-cli
//!
//! Command-line tool for overlay node addresses.
//!
//! ## Usage
//!
//! ```bash
//! # Inspect a hex address
//! overlay-addr inspect 0123456789
//!
//! # Convert from integer or wire bytes
//! overlay-addr from-int 0x0123456789
//! overlay-addr from-bytes 0123456789
//!
//! # Random test fixtures
//! overlay-addr generate --count 5
//!
//! # Configuration
//! overlay-addr config --show
//! ```

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod error;
mod output;

pub use config::Config;
pub use error::CliError;
pub use output::Output;

/// Overlay address tool
#[derive(Parser, Debug)]
#[command(name = "overlay-addr")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// Log filter (overrides config, overridden by RUST_LOG)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// CLI commands
#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a 10-digit hex address and show its forms
    Inspect {
        /// Address as 10 hex digits
        address: String,
    },
    /// Build an address from an integer (decimal or 0x hex)
    FromInt {
        /// Integer value; bits above 40 are discarded
        value: String,
    },
    /// Build an address from big-endian wire bytes given as hex
    FromBytes {
        /// Wire bytes as hex
        hex: String,
    },
    /// Generate random non-reserved addresses
    Generate {
        /// Number of addresses
        #[arg(short, long, default_value = "1")]
        count: usize,
    },
    /// Show or edit configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,
        /// Set default JSON output
        #[arg(long)]
        set_json: Option<bool>,
        /// Set default log level
        #[arg(long)]
        set_log_level: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    // Load config
    let mut config = Config::load();

    let log_level = cli.log_level.clone().unwrap_or_else(|| config.log_level.clone());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let json = cli.json || config.json;

    let result = match cli.command {
        Commands::Inspect { address } => commands::address::inspect(&address, json),
        Commands::FromInt { value } => commands::address::from_int(&value, json),
        Commands::FromBytes { hex } => commands::address::from_bytes(&hex, json),
        Commands::Generate { count } => commands::generate::generate(count, json),
        Commands::Config {
            show,
            set_json,
            set_log_level,
        } => handle_config(&mut config, show, set_json, set_log_level, json),
    };

    if let Err(e) = result {
        tracing::debug!(error = ?e, "command failed");
        if json {
            println!(
                "{}",
                serde_json::json!({
                    "error": e.to_string(),
                    "success": false
                })
            );
        } else {
            eprintln!("Error: {}", e);
        }
        std::process::exit(1);
    }
}

fn handle_config(
    config: &mut Config,
    show: bool,
    set_json: Option<bool>,
    set_log_level: Option<String>,
    json: bool,
) -> Result<(), CliError> {
    let mut modified = false;

    if let Some(value) = set_json {
        config.json = value;
        modified = true;
    }

    if let Some(level) = set_log_level {
        EnvFilter::try_new(&level).map_err(|e| CliError::InvalidInput(e.to_string()))?;
        config.log_level = level;
        modified = true;
    }

    if modified {
        let path = config.save()?;
        tracing::info!(path = %path.display(), "configuration saved");
        Output::new(json)
            .field("status", "saved")
            .field("path", &path.display().to_string())
            .message("Configuration saved")
            .print();
    } else if show {
        Output::new(json)
            .field_bool("json", config.json)
            .field("log_level", &config.log_level)
            .message(&format!(
                "JSON output: {}\nLog level: {}",
                config.json, config.log_level
            ))
            .print();
    } else {
        Output::new(json)
            .message("Use --show to display config, or --set-json/--set-log-level to modify")
            .print();
    }

    Ok(())
}
