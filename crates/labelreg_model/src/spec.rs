//! Fixed-format primary-label parsing.

use serde::{Deserialize, Serialize};

use crate::label::{Label, Symbol};

/// A character span within a fixed-format symbol value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpan {
    pub offset: usize,
    pub length: usize,
}

impl FieldSpan {
    pub fn new(offset: usize, length: usize) -> Self {
        Self { offset, length }
    }

    fn slice<'a>(&self, value: &'a str) -> Option<&'a str> {
        let end = self.offset.checked_add(self.length)?;
        value.get(self.offset..end)
    }
}

/// Positional layout used to derive the primary label from a raw symbol
/// value. Immutable once loaded for a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedFormatSpec {
    /// Exact value length required, when the format prescribes one.
    #[serde(default)]
    pub total_length: Option<usize>,
    /// Where the item number sits in the value.
    pub item_number: FieldSpan,
    /// Where the serial number sits, for formats that carry one.
    #[serde(default)]
    pub serial_number: Option<FieldSpan>,
}

impl FixedFormatSpec {
    /// Apply the layout to one symbol reading.
    ///
    /// `None` means the value does not fit the layout. That is a normal
    /// outcome the caller counts, not an error: zero or several fitting
    /// symbols both mean "no primary label".
    pub fn try_generate_label(&self, symbol: &Symbol) -> Option<Label> {
        let value = symbol.value.as_str();

        if let Some(expected) = self.total_length {
            if value.len() != expected {
                return None;
            }
        }

        let item_number = self.item_number.slice(value)?.trim();
        if item_number.is_empty() {
            return None;
        }

        let serial_number = match &self.serial_number {
            Some(span) => {
                let serial = span.slice(value)?.trim();
                if serial.is_empty() {
                    None
                } else {
                    Some(serial.to_string())
                }
            }
            None => None,
        };

        Some(Label {
            item_number: item_number.to_string(),
            serial_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec() -> FixedFormatSpec {
        // 16-character format: item number in 0..8, serial in 8..16.
        FixedFormatSpec {
            total_length: Some(16),
            item_number: FieldSpan::new(0, 8),
            serial_number: Some(FieldSpan::new(8, 8)),
        }
    }

    #[test]
    fn test_parses_fitting_value() {
        let label = spec()
            .try_generate_label(&Symbol::new("P100-001SER00042"))
            .unwrap();
        assert_eq!(label.item_number, "P100-001");
        assert_eq!(label.serial_number.as_deref(), Some("SER00042"));
    }

    #[test]
    fn test_trims_padded_fields() {
        let label = spec()
            .try_generate_label(&Symbol::new("P100    SER     "))
            .unwrap();
        assert_eq!(label.item_number, "P100");
        assert_eq!(label.serial_number.as_deref(), Some("SER"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(spec().try_generate_label(&Symbol::new("P100")).is_none());
        assert!(spec()
            .try_generate_label(&Symbol::new("P100-001SER00042X"))
            .is_none());
    }

    #[test]
    fn test_rejects_blank_item_number() {
        assert!(spec()
            .try_generate_label(&Symbol::new("        SER00042"))
            .is_none());
    }

    #[test]
    fn test_blank_serial_becomes_none() {
        let label = spec()
            .try_generate_label(&Symbol::new("P100-001        "))
            .unwrap();
        assert!(label.serial_number.is_none());
    }

    #[test]
    fn test_no_total_length_requires_span_coverage() {
        let spec = FixedFormatSpec {
            total_length: None,
            item_number: FieldSpan::new(4, 6),
            serial_number: None,
        };
        assert!(spec.try_generate_label(&Symbol::new("XX")).is_none());
        let label = spec.try_generate_label(&Symbol::new("LOT-P200-9")).unwrap();
        assert_eq!(label.item_number, "P200-9");
    }
}
