//! wallclock - Analogue clock overlay for the desktop background.
//!
//! This crate owns the configuration-driven geometry and time model behind
//! the overlay:
//!
//! - JSON configuration schema with per-field default fallback
//! - Dual-format colour values (hex strings and RGBA objects)
//! - Pure computations from instant + screen size to renderable geometry
//! - Atomic-snapshot configuration store for lock-free render-path reads
//!
//! Window management, pixel rendering, and file watching are platform glue
//! owned by the surrounding application; this crate exposes the contracts
//! they consume.
//!
//! # Quick Start
//!
//! ```rust
//! use wallclock::{ClockConfiguration, DisplayState, TimeState};
//! use chrono::Utc;
//!
//! let config = ClockConfiguration::from_slice(br#"{ "sizePercent": 30.0 }"#)?;
//! let display = DisplayState::new(1920.0, 1080.0, config.size_percent, config.position);
//! let time = TimeState::new(&Utc::now());
//! println!("clock {}px, second hand at {} degrees", display.clock_size, time.second_angle);
//! # Ok::<(), wallclock::ConfigError>(())
//! ```

/// Command-line interface for configuration inspection.
pub mod cli;

/// Four-channel colour values with dual-format decoding.
pub mod color;

/// Configuration schema definitions and decoding.
pub mod config;

/// Snapshot store for the active configuration.
pub mod config_store;

/// Pure geometry computations for the clock face.
pub mod geometry;

/// Configuration file locations.
pub mod paths;

/// Structured logging setup.
pub mod tracing_config;

pub use color::{ColorParseError, ColorValue};
pub use config::{ClockConfiguration, ConfigError};
pub use config_store::ConfigStore;
pub use geometry::{DisplayState, TimeState};
