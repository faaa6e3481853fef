//! Workspace configuration, loadable from TOML.

pub mod compliance_config;
pub mod scoring_config;
pub mod trend_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, VeracityResult};

pub use compliance_config::{CategoryRule, ComplianceConfig};
pub use scoring_config::ScoringConfig;
pub use trend_config::TrendConfig;

/// Top-level configuration aggregating every subsystem.
///
/// Every field and sub-field has a default matching the documented scoring
/// and aggregation constants, so an empty TOML file is a valid config.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VeracityConfig {
    pub scoring: ScoringConfig,
    pub compliance: ComplianceConfig,
    pub trends: TrendConfig,
}

impl VeracityConfig {
    /// Parse a config from TOML text.
    pub fn from_toml_str(text: &str) -> VeracityResult<Self> {
        let config = toml::from_str(text).map_err(|e| ConfigError::ParseFailed {
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Load a config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> VeracityResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }
}
