//! Capture-artifact directory tree.

use std::fs;
use std::path::{Path, PathBuf};

use labelreg_model::RegistrationRecord;
use tracing::info;

use crate::error::{Result, StoreError};

const DIR_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H-%M-%S%.3f";

/// Stores one registration's captures under a timestamp-named directory:
///
/// ```text
/// <root>/<yyyy-MM-dd HH-mm-ss.fff>/
///     tags.txt                  (when tags present)
///     capture#1/
///         original.jpg
///         adorned.jpeg          (when present)
///         symbols.txt           (when the capture had label sources)
///     capture#2/ ...
/// ```
pub struct ArtifactStore {
    root: PathBuf,
}

impl ArtifactStore {
    /// Open a store over an existing root directory.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        if !root.is_dir() {
            return Err(StoreError::ArtifactRootMissing(root));
        }
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Re-check that the root directory still exists. The root can be
    /// deleted mid-session; callers pairing this store with other sinks
    /// use this before touching any of them.
    pub fn verify_root(&self) -> Result<()> {
        if !self.root.is_dir() {
            return Err(StoreError::ArtifactRootMissing(self.root.clone()));
        }
        Ok(())
    }

    /// Write the record's captures and tags. Returns the registration
    /// directory that was created.
    pub fn store(&self, record: &RegistrationRecord) -> Result<PathBuf> {
        self.verify_root()?;

        let registration_dir = self
            .root
            .join(record.timestamp.format(DIR_TIMESTAMP_FORMAT).to_string());
        fs::create_dir_all(&registration_dir)?;

        for (index, capture) in record.captures.iter().enumerate() {
            let capture_dir = registration_dir.join(format!("capture#{}", index + 1));
            fs::create_dir_all(&capture_dir)?;

            fs::write(capture_dir.join("original.jpg"), &capture.original_image)?;
            if let Some(adorned) = &capture.adorned_image {
                fs::write(capture_dir.join("adorned.jpeg"), adorned)?;
            }
            if !capture.sources.is_empty() {
                fs::write(
                    capture_dir.join("symbols.txt"),
                    lines(capture.symbol_values()),
                )?;
            }
        }

        if !record.tags.is_empty() {
            fs::write(
                registration_dir.join("tags.txt"),
                lines(record.tags.iter().map(String::as_str)),
            )?;
        }

        info!(
            path = %registration_dir.display(),
            captures = record.captures.len(),
            "capture artifacts stored"
        );
        Ok(registration_dir)
    }
}

fn lines<'a>(values: impl IntoIterator<Item = &'a str>) -> String {
    let mut out = String::new();
    for value in values {
        out.push_str(value);
        out.push('\n');
    }
    out
}
