//! Snapshot store for the active clock configuration.
//!
//! The configuration is the only shared mutable state in the application.
//! The store keeps it behind an `Arc<RwLock>` and replaces it wholesale on
//! every reload, so readers always observe a complete configuration and
//! never a partially-updated one. Reads clone the snapshot out; no lock is
//! held while geometry is computed from it.

use std::{
    fs,
    path::Path,
    sync::{
        Arc, RwLock,
        atomic::{AtomicU64, Ordering},
    },
};

use tracing::{info, warn};

use crate::{
    config::{ClockConfiguration, ConfigError},
    paths::ConfigPaths,
};

/// Thread-safe store holding the current [`ClockConfiguration`].
///
/// Cloning the store is cheap and shares the same underlying snapshot.
/// An external document-change notifier drives [`ConfigStore::reload_from_slice`]
/// whenever the backing file is written; render loops poll
/// [`ConfigStore::generation`] to detect replacements cheaply.
#[derive(Clone)]
pub struct ConfigStore {
    config: Arc<RwLock<ClockConfiguration>>,
    generation: Arc<AtomicU64>,
}

impl ConfigStore {
    /// Creates a store holding the factory default configuration.
    pub fn with_defaults() -> Self {
        Self {
            config: Arc::new(RwLock::new(ClockConfiguration::default())),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Loads a store from the main configuration file.
    ///
    /// A missing file, an unreadable file, or a document that fails to
    /// decode all fall back to the factory default configuration - decode
    /// problems are logged, never surfaced.
    ///
    /// # Errors
    /// Returns an error only if the configuration directory cannot be
    /// resolved (neither `XDG_CONFIG_HOME` nor `HOME` is set).
    pub fn load() -> Result<Self, ConfigError> {
        let path = ConfigPaths::main_config().map_err(|e| ConfigError::Io {
            path: "config.json".into(),
            details: e.to_string(),
        })?;

        Ok(Self::load_from(&path))
    }

    /// Loads a store from an explicit configuration file path.
    ///
    /// Same fallback behavior as [`ConfigStore::load`].
    pub fn load_from(path: &Path) -> Self {
        let config = match fs::read(path) {
            Ok(bytes) => decode_or_default(&bytes),
            Err(e) => {
                info!(
                    "No readable config at {}: {e}; using factory defaults",
                    path.display()
                );
                ClockConfiguration::default()
            }
        };

        Self {
            config: Arc::new(RwLock::new(config)),
            generation: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Replaces the snapshot with a configuration decoded from `bytes`.
    ///
    /// This is the reload entry point for the document-change notifier.
    /// A document that fails to decode installs the factory default, per
    /// the never-surface-decode-errors policy.
    pub fn reload_from_slice(&self, bytes: &[u8]) {
        self.replace(decode_or_default(bytes));
    }

    /// Returns a snapshot of the current configuration.
    ///
    /// Poisoned locks are recovered rather than propagated; the stored
    /// value is always a complete configuration.
    pub fn get_current(&self) -> ClockConfiguration {
        match self.config.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Monotonic counter incremented on every snapshot replacement.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    fn replace(&self, new_config: ClockConfiguration) {
        match self.config.write() {
            Ok(mut guard) => *guard = new_config,
            Err(poisoned) => *poisoned.into_inner() = new_config,
        }
        self.generation.fetch_add(1, Ordering::Release);
    }
}

/// Decodes configuration bytes, falling back to the factory default on any
/// decode failure.
fn decode_or_default(bytes: &[u8]) -> ClockConfiguration {
    match ClockConfiguration::from_slice(bytes) {
        Ok(config) => config,
        Err(e) => {
            warn!("Invalid configuration document: {e}; using factory defaults");
            ClockConfiguration::default()
        }
    }
}
