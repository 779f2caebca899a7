//! # Configuration Management
//!
//! This module handles loading and parsing configuration from the
//! `element-feed.toml` file: where the raw export and canonical dataset live,
//! where snapshots are published, and the labels stamped into dataset
//! metadata.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::normalizer::{MetadataLabels, DATA_SOURCE, DESCRIPTION};

/// Default configuration file name, resolved against the working directory.
pub const CONFIG_FILE: &str = "element-feed.toml";

/// Application configuration loaded from element-feed.toml
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Input and output locations
    pub paths: PathsConfig,
    /// Dataset metadata labels
    pub dataset: DatasetConfig,
}

/// File-system locations
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Raw PubChem export (`Table.Columns` / `Table.Row`)
    pub source: PathBuf,
    /// Canonical flat dataset written by `convert`
    pub dataset: PathBuf,
    /// Root under which `api/` and `data.json` are written
    pub output_dir: PathBuf,
}

/// Labels written into `metadata`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatasetConfig {
    pub data_source: String,
    pub description: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            paths: PathsConfig {
                source: PathBuf::from("data/PubChemElements_all.json"),
                dataset: PathBuf::from("data-all.json"),
                output_dir: PathBuf::from("."),
            },
            dataset: DatasetConfig {
                data_source: DATA_SOURCE.to_string(),
                description: DESCRIPTION.to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from element-feed.toml
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load() -> Self {
        Self::load_from_path(CONFIG_FILE)
    }

    /// Load configuration from specified path
    /// Falls back to default configuration if file doesn't exist or is invalid
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(contents) => match toml::from_str::<Config>(&contents) {
                Ok(config) => {
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "invalid config file, using defaults");
                    Self::default()
                }
            },
            Err(_) => {
                info!(path = %path.display(), "no config file found, using defaults");
                Self::default()
            }
        }
    }

    /// Save current configuration to `path`
    pub fn save<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        let contents = toml::to_string_pretty(self)?;
        fs::write(path.as_ref(), contents)?;
        info!(path = %path.as_ref().display(), "configuration saved");
        Ok(())
    }

    pub fn metadata_labels(&self) -> MetadataLabels {
        MetadataLabels {
            data_source: self.dataset.data_source.clone(),
            description: self.dataset.description.clone(),
        }
    }
}
