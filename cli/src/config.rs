//! Application configuration loaded from `swasth.toml`.
//!
//! Every section and key is optional. Command-line flags override what the
//! file says.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use tracing::debug;

use swasth_contracts::{SwasthError, SwasthResult};
use swasth_triage::TriageConfig;

/// Dataset used when neither the config file nor `--dataset` names one.
pub const DEFAULT_DATASET: &str = "data/odisha_diseases.csv";

/// Config file read from the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "swasth.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetSection {
    pub path: PathBuf,
}

impl Default for DatasetSection {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATASET),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySection {
    /// Show every name match instead of only the first.
    pub show_all_matches: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub dataset: DatasetSection,
    pub triage: TriageConfig,
    pub display: DisplaySection,
}

impl AppConfig {
    pub fn from_toml_str(s: &str) -> SwasthResult<Self> {
        let config: AppConfig = toml::from_str(s).map_err(|e| SwasthError::ConfigError {
            reason: format!("failed to parse config TOML: {}", e),
        })?;
        config.triage.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> SwasthResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SwasthError::ConfigError {
            reason: format!("failed to read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Load `explicit` if given, otherwise `fallback` if it exists, otherwise
    /// the built-in defaults. An explicit path that cannot be read is an error.
    pub fn resolve(explicit: Option<&Path>, fallback: &Path) -> SwasthResult<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None if fallback.is_file() => {
                debug!(path = %fallback.display(), "using config file from working directory");
                Self::from_file(fallback)
            }
            None => Ok(Self::default()),
        }
    }
}
