use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::BoundConvention;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid bridge config: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Converter settings, read from TOML:
///
/// ```toml
/// bound_convention = "wrap"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BridgeConfig {
    /// Overrides the convention the live type model reports for itself. Leave unset unless the
    /// model misreports which compiler generation it wraps.
    #[serde(default)]
    pub bound_convention: Option<BoundConvention>,
}

impl BridgeConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Like [`BridgeConfig::load`], but a missing or invalid file yields the defaults.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(
                    target: crate::TRACE_TARGET,
                    path = %path.display(),
                    error = %err,
                    "falling back to default bridge config"
                );
                Self::default()
            }
        }
    }

    /// The convention to use for a model reporting `reported`.
    pub fn effective_convention(&self, reported: BoundConvention) -> BoundConvention {
        match self.bound_convention {
            Some(overridden) if overridden != reported => {
                tracing::debug!(
                    target: crate::TRACE_TARGET,
                    ?reported,
                    ?overridden,
                    "bound convention overridden by config"
                );
                overridden
            }
            Some(overridden) => overridden,
            None => reported,
        }
    }
}
