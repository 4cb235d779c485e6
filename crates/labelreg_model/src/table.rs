//! Condition table: primary item number to equivalent item numbers.
//!
//! The table is supplied by an external cross-reference (e.g. a
//! bill-of-materials export), loaded once per session and read-only after
//! that. All key and value comparisons are case-insensitive.

use std::collections::HashMap;

/// Immutable mapping from a primary item number to the item numbers an
/// external authority considers equivalent.
#[derive(Debug, Clone, Default)]
pub struct ConditionTable {
    // Keyed by the ASCII-uppercased item number; values keep their
    // original spelling for display.
    entries: HashMap<String, Vec<String>>,
}

impl ConditionTable {
    /// Build a table from `(primary, equivalents)` pairs. Pairs sharing a
    /// primary (case-insensitively) merge; duplicate equivalents within
    /// one primary are dropped.
    pub fn from_entries<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<V>)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: HashMap<String, Vec<String>> = HashMap::new();
        for (primary, values) in pairs {
            let key = primary.into().to_ascii_uppercase();
            let slot = entries.entry(key).or_default();
            for value in values {
                let value = value.into();
                if !slot.iter().any(|v| v.eq_ignore_ascii_case(&value)) {
                    slot.push(value);
                }
            }
        }
        Self { entries }
    }

    /// Equivalent item numbers for `primary`, or `None` when the table
    /// has no entry for it.
    pub fn lookup(&self, primary: &str) -> Option<&[String]> {
        self.entries
            .get(&primary.to_ascii_uppercase())
            .map(Vec::as_slice)
    }

    /// Whether `candidate` is listed as equivalent to `primary`.
    pub fn contains(&self, primary: &str, candidate: &str) -> bool {
        self.lookup(primary)
            .map(|values| values.iter().any(|v| v.eq_ignore_ascii_case(candidate)))
            .unwrap_or(false)
    }

    /// Primary item numbers with at least one equivalent, in their
    /// normalized (uppercased) spelling.
    pub fn primaries(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
