//! Condition-table file loading.
//!
//! The mapping file is tab-separated: primary item number in the first
//! column, equivalent item numbers in the remaining columns. Rows sharing
//! a primary merge; blank fields and rows without at least one secondary
//! are skipped. The file is decoded with the session's configured text
//! encoding before parsing.

use std::fs;
use std::path::Path;

use encoding_rs::Encoding;
use labelreg_model::ConditionTable;
use tracing::debug;

use crate::error::{Result, StoreError};

/// Load the condition table once at session start.
pub fn load_condition_table(path: &Path, encoding: &'static Encoding) -> Result<ConditionTable> {
    if !path.is_file() {
        return Err(StoreError::ConditionTableMissing(path.to_path_buf()));
    }

    let raw = fs::read(path)?;
    let (text, _, _) = encoding.decode(&raw);

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut entries: Vec<(String, Vec<String>)> = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let mut fields = row.iter().map(str::trim).filter(|f| !f.is_empty());
        let Some(primary) = fields.next() else {
            continue;
        };
        let values: Vec<String> = fields.map(str::to_string).collect();
        if values.is_empty() {
            debug!(line = index + 1, "condition table row has no equivalents, skipped");
            continue;
        }
        entries.push((primary.to_string(), values));
    }

    let table = ConditionTable::from_entries(entries);
    debug!(
        path = %path.display(),
        primaries = table.len(),
        "condition table loaded"
    );
    Ok(table)
}
