//! TOML-driven triage settings.
//!
//! ```toml
//! medium_ratio = 0.5
//! max_results = 10
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use swasth_contracts::{SwasthError, SwasthResult};

/// Ratio above which a non-red-flag match is rated MEDIUM.
pub const DEFAULT_MEDIUM_RATIO: f64 = 0.5;

/// Knobs for the symptom scorer and ranked output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TriageConfig {
    /// A disease is MEDIUM when `score / distinct_symptoms` is strictly
    /// greater than this. Must lie in `0.0..=1.0`.
    pub medium_ratio: f64,

    /// Cap on ranked entries handed to the presentation layer. `0` means no
    /// cap. Scoring itself is never truncated.
    pub max_results: usize,
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            medium_ratio: DEFAULT_MEDIUM_RATIO,
            max_results: 0,
        }
    }
}

impl TriageConfig {
    /// Parse `s` as TOML and validate it.
    ///
    /// Returns `SwasthError::ConfigError` if the TOML is malformed or a value
    /// is out of range.
    pub fn from_toml_str(s: &str) -> SwasthResult<Self> {
        let config: TriageConfig = toml::from_str(s).map_err(|e| SwasthError::ConfigError {
            reason: format!("failed to parse triage TOML: {}", e),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Read the file at `path` and parse it as triage configuration.
    pub fn from_file(path: &Path) -> SwasthResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| SwasthError::ConfigError {
            reason: format!("failed to read triage config '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&contents)
    }

    /// Reject a `medium_ratio` outside `0.0..=1.0` (including NaN).
    pub fn validate(&self) -> SwasthResult<()> {
        if !(0.0..=1.0).contains(&self.medium_ratio) {
            return Err(SwasthError::ConfigError {
                reason: format!(
                    "medium_ratio must be between 0.0 and 1.0, got {}",
                    self.medium_ratio
                ),
            });
        }
        Ok(())
    }
}
