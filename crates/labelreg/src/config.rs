//! Session configuration.
//!
//! Loaded once per session from a TOML file. Path and mode-property
//! validation happens in [`crate::session::Session::prepare`], not here;
//! loading only reads and parses.

use std::fs;
use std::path::{Path, PathBuf};

use labelreg_model::{FixedFormatSpec, MatchingPolicy};
use serde::Deserialize;
use thiserror::Error;

/// Configuration faults: required resources or mode properties missing
/// or invalid. Fatal to the session until corrected; the message names
/// the offending resource for the operator.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("The summary ledger file is not configured correctly: {}", .0.display())]
    LedgerNotConfigured(PathBuf),

    #[error("The capture artifact folder is not configured correctly: {}", .0.display())]
    ArtifactDirNotConfigured(PathBuf),

    #[error("The mode is not configured: missing [fixed_format]")]
    MissingFixedFormat,

    #[error("The mode is not configured: missing [policy]")]
    MissingPolicy,

    #[error("Unknown text encoding label: {0}")]
    UnknownEncoding(String),
}

/// On-disk session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Summary ledger file; must already exist.
    pub ledger_path: PathBuf,
    /// Root folder for capture artifacts; must already exist.
    pub artifact_dir: PathBuf,
    /// Tab-separated condition table file.
    pub condition_table_path: PathBuf,
    /// Text encoding label for the ledger and condition table.
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// Session mode identifier recorded in every ledger row.
    pub mode_id: String,
    /// Operator display name recorded in every ledger row.
    #[serde(default)]
    pub operator: Option<String>,
    /// Primary-label fixed-format layout (mode property).
    #[serde(default)]
    pub fixed_format: Option<FixedFormatSpec>,
    /// Secondary-label matching policy (mode property).
    #[serde(default)]
    pub policy: Option<MatchingPolicy>,
}

fn default_encoding() -> String {
    "shift_jis".to_string()
}

impl SessionConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
