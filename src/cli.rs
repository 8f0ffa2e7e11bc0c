//! Command-line interface for inspecting the clock configuration.
//!
//! The binary is a short-lived inspection tool: it loads the same
//! configuration document the overlay uses and reports what the renderer
//! would be given, without drawing anything.

use std::{error::Error, fs, path::PathBuf};

use chrono::Local;
use clap::{Parser, Subcommand};
use schemars::schema_for;
use serde_json::json;

use crate::{
    config::ClockConfiguration,
    config_store::ConfigStore,
    geometry::{DisplayState, FontWeight, TimeState, hand_length},
};

/// Top-level command-line arguments.
#[derive(Debug, Parser)]
#[command(
    name = "wallclock",
    about = "Inspect the desktop clock configuration and geometry"
)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute the geometry the renderer would draw right now.
    Inspect {
        /// Screen width in pixels.
        #[arg(long)]
        width: f64,

        /// Screen height in pixels.
        #[arg(long)]
        height: f64,

        /// Configuration file to load instead of the default location.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the factory default configuration as JSON.
    DefaultConfig,

    /// Check whether a configuration file decodes cleanly.
    Check {
        /// Configuration file to check instead of the default location.
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Print the JSON schema of the configuration document.
    Schema,
}

/// Executes a subcommand and returns its printable output.
///
/// # Errors
/// Returns error if the configuration location cannot be resolved, a file
/// named explicitly cannot be read, or output serialization fails.
pub fn execute(command: Command) -> Result<String, Box<dyn Error>> {
    match command {
        Command::Inspect {
            width,
            height,
            config,
        } => inspect(width, height, config),
        Command::DefaultConfig => {
            Ok(serde_json::to_string_pretty(&ClockConfiguration::default())?)
        }
        Command::Check { config } => check(config),
        Command::Schema => Ok(serde_json::to_string_pretty(&schema_for!(
            ClockConfiguration
        ))?),
    }
}

fn inspect(
    width: f64,
    height: f64,
    config_path: Option<PathBuf>,
) -> Result<String, Box<dyn Error>> {
    let store = match config_path {
        Some(path) => ConfigStore::load_from(&path),
        None => ConfigStore::load()?,
    };
    let config = store.get_current();

    let display = DisplayState::new(width, height, config.size_percent, config.position);
    let time = TimeState::new(&Local::now());

    let report = json!({
        "display": display,
        "time": time,
        "hands": {
            "second": hand_length(display.clock_size, config.second_hand.length_percent),
            "minute": hand_length(display.clock_size, config.minute_hand.length_percent),
            "hour": hand_length(display.clock_size, config.hour_hand.length_percent),
        },
        "dateCenter": {
            "enabled": config.date_center.enabled,
            "fontWeight": FontWeight::from_numeric(config.date_center.font_weight),
        },
    });

    Ok(serde_json::to_string_pretty(&report)?)
}

fn check(config_path: Option<PathBuf>) -> Result<String, Box<dyn Error>> {
    let path = match config_path {
        Some(path) => path,
        None => crate::paths::ConfigPaths::main_config()?,
    };

    let bytes = fs::read(&path)?;
    let output = match ClockConfiguration::from_slice(&bytes) {
        Ok(_) => format!("{}: configuration decodes cleanly", path.display()),
        Err(e) => format!(
            "{}: {e}; the overlay would fall back to factory defaults",
            path.display()
        ),
    };

    Ok(output)
}
