//! Engine configuration.
//!
//! Settings come from a TOML file (`REMEDIX_CONFIG` or `./remedix.toml`),
//! with `REMEDIX_DATA_DIR` overriding the data directory afterwards. Every
//! field has a default, so running with no config file at all is fine.

use std::path::{Path, PathBuf};

use remedix_common::Result;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineSettings {
    /// Directory holding `symptoms.json` and `remedies.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// How many ranked candidates a diagnosis returns.
    #[serde(default = "default_top_n")]
    pub top_n: usize,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_top_n() -> usize {
    3
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            top_n: default_top_n(),
        }
    }
}

impl EngineSettings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&raw)?)
    }

    /// Resolve settings from the environment. A missing config file yields
    /// defaults; a malformed one is logged and ignored.
    pub fn load() -> Self {
        let path = std::env::var("REMEDIX_CONFIG")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("remedix.toml"));

        let mut settings = if path.exists() {
            match Self::from_file(&path) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("failed to parse {}: {e}; using defaults", path.display());
                    Self::default()
                }
            }
        } else {
            Self::default()
        };

        if let Ok(dir) = std::env::var("REMEDIX_DATA_DIR") {
            settings.data_dir = PathBuf::from(dir);
        }
        settings
    }
}
