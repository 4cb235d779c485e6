//! Capture sources and identified labels.

use serde::{Deserialize, Serialize};

use crate::eq_ignore_case;

/// One raw symbol reading from a capture (a barcode or OCR value).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub value: String,
}

impl Symbol {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

/// A capture source that already carries a decoded label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredLabel {
    pub item_number: String,
    #[serde(default)]
    pub serial_number: Option<String>,
    /// Raw symbol values the label was decoded from. Only used for the
    /// `symbols.txt` artifact listing; may be empty.
    #[serde(default)]
    pub symbols: Vec<String>,
}

impl StructuredLabel {
    pub fn new(item_number: impl Into<String>) -> Self {
        Self {
            item_number: item_number.into(),
            serial_number: None,
            symbols: Vec::new(),
        }
    }

    pub fn with_serial(item_number: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Self {
            item_number: item_number.into(),
            serial_number: Some(serial_number.into()),
            symbols: Vec::new(),
        }
    }
}

/// A polymorphic capture artifact: either a raw symbol reading or a
/// pre-structured label. Identity is content only; sources carry no
/// persistent id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LabelSource {
    Symbol(Symbol),
    Structured(StructuredLabel),
}

impl LabelSource {
    pub fn symbol(value: impl Into<String>) -> Self {
        LabelSource::Symbol(Symbol::new(value))
    }

    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            LabelSource::Symbol(symbol) => Some(symbol),
            LabelSource::Structured(_) => None,
        }
    }

    pub fn as_structured(&self) -> Option<&StructuredLabel> {
        match self {
            LabelSource::Symbol(_) => None,
            LabelSource::Structured(label) => Some(label),
        }
    }

    /// Raw symbol values carried by this source.
    pub fn symbol_values(&self) -> Vec<&str> {
        match self {
            LabelSource::Symbol(symbol) => vec![symbol.value.as_str()],
            LabelSource::Structured(label) => {
                label.symbols.iter().map(String::as_str).collect()
            }
        }
    }
}

impl From<Symbol> for LabelSource {
    fn from(symbol: Symbol) -> Self {
        LabelSource::Symbol(symbol)
    }
}

impl From<StructuredLabel> for LabelSource {
    fn from(label: StructuredLabel) -> Self {
        LabelSource::Structured(label)
    }
}

/// An identified label: item number plus optional serial number. Used for
/// both primary and secondary labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Label {
    pub item_number: String,
    #[serde(default)]
    pub serial_number: Option<String>,
}

impl Label {
    pub fn new(item_number: impl Into<String>) -> Self {
        Self {
            item_number: item_number.into(),
            serial_number: None,
        }
    }

    pub fn with_serial(item_number: impl Into<String>, serial_number: impl Into<String>) -> Self {
        Self {
            item_number: item_number.into(),
            serial_number: Some(serial_number.into()),
        }
    }

    /// Case-insensitive item-number comparison.
    pub fn item_matches(&self, other: &str) -> bool {
        eq_ignore_case(&self.item_number, other)
    }
}

impl From<&StructuredLabel> for Label {
    fn from(source: &StructuredLabel) -> Self {
        Self {
            item_number: source.item_number.clone(),
            serial_number: source.serial_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_kind_accessors() {
        let symbol = LabelSource::symbol("RAW-1");
        assert!(symbol.as_symbol().is_some());
        assert!(symbol.as_structured().is_none());

        let structured = LabelSource::from(StructuredLabel::new("P100"));
        assert!(structured.as_symbol().is_none());
        assert_eq!(structured.as_structured().unwrap().item_number, "P100");
    }

    #[test]
    fn test_symbol_values() {
        let symbol = LabelSource::symbol("RAW-1");
        assert_eq!(symbol.symbol_values(), vec!["RAW-1"]);

        let mut structured = StructuredLabel::new("P100");
        structured.symbols = vec!["A".to_string(), "B".to_string()];
        assert_eq!(LabelSource::from(structured).symbol_values(), vec!["A", "B"]);

        let empty = LabelSource::from(StructuredLabel::new("P200"));
        assert!(empty.symbol_values().is_empty());
    }

    #[test]
    fn test_item_matches_ignores_case() {
        let label = Label::new("P100");
        assert!(label.item_matches("p100"));
        assert!(!label.item_matches("p200"));
    }

    #[test]
    fn test_label_from_structured_keeps_serial() {
        let source = StructuredLabel::with_serial("P100", "S-001");
        let label = Label::from(&source);
        assert_eq!(label.item_number, "P100");
        assert_eq!(label.serial_number.as_deref(), Some("S-001"));
    }

    #[test]
    fn test_source_serde_tagging() {
        let json = serde_json::to_string(&LabelSource::symbol("X")).unwrap();
        assert!(json.contains("\"kind\":\"symbol\""));
        let back: LabelSource = serde_json::from_str(&json).unwrap();
        assert_eq!(back, LabelSource::symbol("X"));
    }
}
