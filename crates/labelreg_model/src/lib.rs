//! Shared domain types for the label registration engine.
//!
//! Everything in here is plain data: capture sources, labels, the
//! fixed-format parsing spec, the matching policy, the condition table
//! and the registration record. The decision logic lives in
//! `labelreg_engine`; storage lives in `labelreg_store`.
//!
//! Item-number comparisons are case-insensitive everywhere. That rule is
//! centralized in [`eq_ignore_case`] and [`ConditionTable`] so the engine
//! crates cannot drift apart on it.

pub mod label;
pub mod policy;
pub mod record;
pub mod spec;
pub mod table;

pub use label::{Label, LabelSource, StructuredLabel, Symbol};
pub use policy::{MatchingPolicy, NoSecondaryBehavior, SecondaryBehavior, SourceKinds};
pub use record::{CaptureArtifact, RegistrationRecord};
pub use spec::{FieldSpan, FixedFormatSpec};
pub use table::ConditionTable;

/// Case-insensitive ordinal comparison used for all item-number checks.
pub fn eq_ignore_case(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eq_ignore_case() {
        assert!(eq_ignore_case("p100", "P100"));
        assert!(eq_ignore_case("ABC-1", "abc-1"));
        assert!(!eq_ignore_case("P100", "P200"));
        assert!(!eq_ignore_case("P100", "P1000"));
    }
}
