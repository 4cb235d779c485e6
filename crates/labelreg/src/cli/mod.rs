//! CLI commands for the labelreg launcher.
//!
//! Standalone utilities over the session facade: configuration checks,
//! condition-table inspection and dry-run simulation. None of them write
//! to the ledger or artifact tree.

pub mod check;
pub mod simulate;
pub mod table;
