//! FieldMon Configuration Module
//!
//! Crop profiles, risk thresholds, and input defaults loaded from TOML,
//! replacing hardcoded tables with operator-tunable values.
//!
//! ## Loading Order
//!
//! 1. `FIELDMON_CONFIG` environment variable (path to TOML file)
//! 2. `fieldmon.toml` in the current working directory
//! 3. Built-in defaults (matching the historical constants)
//!
//! ## Usage
//!
//! Call `config::init()` once at startup, then `config::get()` anywhere:
//!
//! ```ignore
//! // In main():
//! config::init(AgroConfig::load());
//!
//! // Anywhere in the codebase:
//! let profile = config::get().profiles.profile("wheat");
//! ```

mod profiles;
mod thresholds;

pub use profiles::{CropProfile, CropTable, FALLBACK_CROP};
pub use thresholds::{InputDefaults, RiskThresholds};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use thiserror::Error;
use tracing::{info, warn};

/// Configuration loading / validation failures.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid crop profile '{crop}': {reason}")]
    InvalidProfile { crop: String, reason: String },
    #[error("crop table has no '{FALLBACK_CROP}' fallback profile")]
    MissingFallbackProfile,
}

/// On-disk TOML shape: profile overrides plus threshold sections.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    profiles: BTreeMap<String, CropProfile>,
    #[serde(default)]
    risk: RiskThresholds,
    #[serde(default)]
    input_defaults: InputDefaults,
}

/// Root configuration for a FieldMon deployment.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AgroConfig {
    /// Crop NDVI classification profiles (built-ins + user overrides)
    pub profiles: CropTable,
    /// Risk-rule thresholds
    pub risk: RiskThresholds,
    /// Defaults substituted for absent upstream fields
    pub input_defaults: InputDefaults,
}

impl Default for AgroConfig {
    fn default() -> Self {
        Self {
            profiles: CropTable::builtin(),
            risk: RiskThresholds::default(),
            input_defaults: InputDefaults::default(),
        }
    }
}

impl AgroConfig {
    /// Load configuration using the standard search order:
    /// 1. `FIELDMON_CONFIG` environment variable
    /// 2. `./fieldmon.toml` in the current working directory
    /// 3. Built-in defaults
    ///
    /// A file that fails to parse or validate is logged and skipped, never
    /// fatal: the assessment must stay available on a bad config push.
    pub fn load() -> Self {
        if let Ok(path) = std::env::var("FIELDMON_CONFIG") {
            let p = PathBuf::from(&path);
            if p.exists() {
                match Self::load_from_file(&p) {
                    Ok(config) => {
                        info!(path = %p.display(), "Loaded config from FIELDMON_CONFIG");
                        return config;
                    }
                    Err(e) => {
                        warn!(path = %p.display(), error = %e, "Failed to load config from FIELDMON_CONFIG, falling back");
                    }
                }
            } else {
                warn!(path = %path, "FIELDMON_CONFIG points to non-existent file, falling back");
            }
        }

        let local = PathBuf::from("fieldmon.toml");
        if local.exists() {
            match Self::load_from_file(&local) {
                Ok(config) => {
                    info!("Loaded config from ./fieldmon.toml");
                    return config;
                }
                Err(e) => {
                    warn!(error = %e, "Failed to load ./fieldmon.toml, using defaults");
                }
            }
        }

        info!("Using built-in configuration defaults");
        Self::default()
    }

    /// Load and validate a specific TOML file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let file: ConfigFile = toml::from_str(&text)?;
        let config = Self {
            profiles: CropTable::with_overrides(file.profiles),
            risk: file.risk,
            input_defaults: file.input_defaults,
        };
        config.profiles.validate()?;
        Ok(config)
    }
}

/// Global configuration, initialized once at startup.
static AGRO_CONFIG: OnceLock<AgroConfig> = OnceLock::new();

/// Initialize the global configuration. Repeated calls are ignored with a
/// warning.
pub fn init(config: AgroConfig) {
    if AGRO_CONFIG.set(config).is_err() {
        warn!("config::init() called more than once, ignoring");
    }
}

/// Get the global configuration, falling back to built-in defaults when
/// `init()` was never called (library embedders and tests).
pub fn get() -> &'static AgroConfig {
    AGRO_CONFIG.get_or_init(AgroConfig::default)
}
