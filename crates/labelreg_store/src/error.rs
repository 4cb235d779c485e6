//! Error types for the storage layer.

use std::path::PathBuf;
use thiserror::Error;

/// Storage operation result type.
pub type Result<T> = std::result::Result<T, StoreError>;

/// Storage faults. Each variant names the resource involved so the
/// operator-facing message can point at it; rejected registrations never
/// surface here.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Summary ledger file missing or not a file.
    #[error("The summary ledger file does not exist: {}", .0.display())]
    LedgerMissing(PathBuf),

    /// Artifact root directory missing or not a directory.
    #[error("The capture artifact folder does not exist: {}", .0.display())]
    ArtifactRootMissing(PathBuf),

    /// Condition table file missing or not a file.
    #[error("The condition table file does not exist: {}", .0.display())]
    ConditionTableMissing(PathBuf),

    /// Unrecognized text-encoding label in the session configuration.
    #[error("Unknown text encoding label: {0}")]
    UnknownEncoding(String),

    /// IO failure during a write or load.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed condition table content.
    #[error("Condition table parse error: {0}")]
    Table(#[from] csv::Error),
}
