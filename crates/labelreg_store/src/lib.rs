//! Durable storage for approved registrations.
//!
//! Three concerns live here:
//! - [`LedgerWriter`]: the append-only tab-separated summary ledger.
//! - [`ArtifactStore`]: the timestamped capture-artifact directory tree.
//! - [`load_condition_table`]: the session-start condition-table load.
//!
//! The ledger append and the artifact writes are independent effects. A
//! failure between them leaves the ledger row in place with no rollback;
//! callers treat the whole attempt as abandoned.

mod artifacts;
mod error;
mod ledger;
mod table;

pub use artifacts::ArtifactStore;
pub use error::{Result, StoreError};
pub use ledger::{LedgerWriter, LEDGER_COLUMNS};
pub use table::load_condition_table;

use encoding_rs::Encoding;

/// Resolve a WHATWG encoding label (e.g. `shift_jis`, `utf-8`) to an
/// encoding for ledger text.
pub fn resolve_encoding(label: &str) -> Result<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
        .ok_or_else(|| StoreError::UnknownEncoding(label.to_string()))
}
