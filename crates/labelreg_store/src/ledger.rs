//! Append-only registration ledger.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use encoding_rs::Encoding;
use labelreg_model::RegistrationRecord;
use tracing::info;

use crate::error::{Result, StoreError};

/// Column order of the header line and every data row.
pub const LEDGER_COLUMNS: [&str; 7] = [
    "PrimaryPartNumber",
    "PrimarySerialNumber",
    "SecondaryPartNumber",
    "SecondarySerialNumber",
    "ModeId",
    "UserName",
    "Timestamp",
];

const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S%.3f";

/// Appends registration rows to the summary ledger.
///
/// The ledger is append-only: never truncated, never rewritten. The
/// header line is emitted iff the file is empty at open time, which makes
/// the append a single-writer critical section; concurrent registration
/// attempts must serialize their `append` calls, and the `&mut` receiver
/// enforces that for a shared writer instance.
pub struct LedgerWriter {
    path: PathBuf,
    encoding: &'static Encoding,
}

impl LedgerWriter {
    /// Open a writer over an existing ledger file.
    pub fn open(path: impl Into<PathBuf>, encoding: &'static Encoding) -> Result<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(StoreError::LedgerMissing(path));
        }
        Ok(Self { path, encoding })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one record, writing the header first when the file is still
    /// empty. The file handle is opened and flushed per call; the ledger
    /// path may disappear between calls and is re-checked here.
    pub fn append(&mut self, record: &RegistrationRecord) -> Result<()> {
        if !self.path.is_file() {
            return Err(StoreError::LedgerMissing(self.path.clone()));
        }

        let mut file = OpenOptions::new().append(true).open(&self.path)?;
        if file.metadata()?.len() == 0 {
            self.write_line(&mut file, &LEDGER_COLUMNS.join("\t"))?;
        }
        self.write_line(&mut file, &format_row(record))?;
        file.flush()?;

        info!(
            path = %self.path.display(),
            primary = %record.primary.item_number,
            "registration appended to ledger"
        );
        Ok(())
    }

    fn write_line(&self, file: &mut File, line: &str) -> Result<()> {
        let (encoded, _, _) = self.encoding.encode(line);
        file.write_all(&encoded)?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

/// Format the record's timestamp the way the ledger stores it.
pub(crate) fn format_timestamp(timestamp: chrono::NaiveDateTime) -> String {
    timestamp.format(TIMESTAMP_FORMAT).to_string()
}

fn format_row(record: &RegistrationRecord) -> String {
    let secondary_item = record
        .secondary
        .as_ref()
        .map(|l| l.item_number.as_str())
        .unwrap_or("");
    let secondary_serial = record
        .secondary
        .as_ref()
        .and_then(|l| l.serial_number.as_deref())
        .unwrap_or("");

    [
        record.primary.item_number.as_str(),
        record.primary.serial_number.as_deref().unwrap_or(""),
        secondary_item,
        secondary_serial,
        record.mode_id.as_str(),
        record.operator.as_deref().unwrap_or(""),
        &format_timestamp(record.timestamp),
    ]
    .join("\t")
}
