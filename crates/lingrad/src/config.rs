//! Conversion options.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::convert::DEFAULT_MIN_STOPS;

/// What a batch does with a gradient that fails to convert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BatchPolicy {
    /// Stop at the first failure and return it.
    #[default]
    Abort,
    /// Leave the failed gradient out of the output.
    Skip,
    /// Copy the failed gradient to the output unchanged.
    KeepSource,
}

/// Options for [`crate::convert_with`] and [`crate::convert_batch`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConvertOptions {
    /// Failure handling for batches.
    pub policy: BatchPolicy,
    /// Convert batch segments on the rayon thread pool.
    pub parallel: bool,
    /// Fewest color stops a gradient may have.
    pub min_stops: usize,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            policy: BatchPolicy::Abort,
            parallel: false,
            min_stops: DEFAULT_MIN_STOPS,
        }
    }
}

impl ConvertOptions {
    /// Parse options from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load options from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn with_policy(mut self, policy: BatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_min_stops(mut self, min_stops: usize) -> Self {
        self.min_stops = min_stops;
        self
    }
}

/// Errors while loading [`ConvertOptions`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Json(#[from] serde_json::Error),
}
