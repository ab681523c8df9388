//! Engine configuration.
//!
//! Load with [`EngineConfig::from_toml_str`] or [`EngineConfig::from_file`].
//! Missing keys take their defaults:
//!
//! ```toml
//! max_recommendations = 5
//! max_same_class_alternatives = 3
//! default_availability = "Available at most pharmacies"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Tunables for recommendation generation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EngineConfig {
    /// Length cap on ranked output
    pub max_recommendations: usize,
    /// Cheapest same-class alternatives kept before ranking
    pub max_same_class_alternatives: usize,
    /// Availability note attached to prescription alternatives
    pub default_availability: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_recommendations: 5,
            max_same_class_alternatives: 3,
            default_availability: "Available at most pharmacies".to_string(),
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: EngineConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse, and validate a TOML file.
    pub fn from_file(path: &Path) -> ConfigResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.max_recommendations == 0 {
            return Err(ConfigError::Invalid {
                field: "max_recommendations",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.max_same_class_alternatives == 0 {
            return Err(ConfigError::Invalid {
                field: "max_same_class_alternatives",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
