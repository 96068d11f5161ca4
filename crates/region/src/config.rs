//! Overlap settings, loaded from TOML.
use std::{fs, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{
    bounds::Frame,
    error::{Error, Result},
};

/// Configuration for computing overlaps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, default)]
pub struct OverlapConfig {
    /// Size of the image the regions are placed in.
    ///
    /// When set, only the parts of regions inside the image are scored.
    pub frame: Option<Frame>,
    /// Whether batches of region pairs may be scored on the rayon thread pool.
    pub parallel: bool,
    /// Smallest batch for which parallel scoring is used.
    ///
    /// Small batches are cheaper to score on the calling thread.
    pub min_parallel_batch: usize,
}

impl Default for OverlapConfig {
    fn default() -> Self {
        Self {
            frame: None,
            parallel: true,
            min_parallel_batch: 64,
        }
    }
}

impl OverlapConfig {
    pub const PATH: &'static str = "overlap.toml";

    /// Loads the configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config: Self = fs::read_to_string(path)?.parse()?;

        tracing::debug!(path = %path.display(), ?config, "Loaded overlap config");

        Ok(config)
    }

    /// Returns a copy of the configuration that scores regions inside `frame`.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<Frame>) -> Self {
        self.frame = Some(frame.into());
        self
    }
}

impl FromStr for OverlapConfig {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }
}
