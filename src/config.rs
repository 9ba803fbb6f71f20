//! Configuration for loading the NEO catalog

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Where the two input tables live and how to load them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Small-body CSV table
    #[serde(default = "default_neo_path")]
    pub neo_path: PathBuf,
    /// Close-approach JSON table
    #[serde(default = "default_cad_path")]
    pub cad_path: PathBuf,
    /// Run both loaders concurrently before linking (default: true)
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

fn default_neo_path() -> PathBuf {
    PathBuf::from("data/neos.csv")
}

fn default_cad_path() -> PathBuf {
    PathBuf::from("data/cad.json")
}

fn default_parallel() -> bool {
    true
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            neo_path: default_neo_path(),
            cad_path: default_cad_path(),
            parallel: default_parallel(),
        }
    }
}

impl ExtractConfig {
    pub fn with_paths(mut self, neo_path: impl Into<PathBuf>, cad_path: impl Into<PathBuf>) -> Self {
        self.neo_path = neo_path.into();
        self.cad_path = cad_path.into();
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Read a JSON config file; missing keys fall back to defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
