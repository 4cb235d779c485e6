//! Registration records and capture artifacts.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::label::{Label, LabelSource};

/// One capture's stored artifacts: the original image, an optional
/// annotated image, and the label sources recognized in it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptureArtifact {
    pub original_image: Vec<u8>,
    #[serde(default)]
    pub adorned_image: Option<Vec<u8>>,
    #[serde(default)]
    pub sources: Vec<LabelSource>,
}

impl CaptureArtifact {
    pub fn new(original_image: Vec<u8>) -> Self {
        Self {
            original_image,
            adorned_image: None,
            sources: Vec::new(),
        }
    }

    /// All recognized symbol values across this capture's sources, in
    /// source order.
    pub fn symbol_values(&self) -> Vec<&str> {
        self.sources
            .iter()
            .flat_map(LabelSource::symbol_values)
            .collect()
    }
}

/// An approved registration. Constructed only after the gate returned
/// approve; written exactly once to the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRecord {
    pub primary: Label,
    pub secondary: Option<Label>,
    pub mode_id: String,
    pub operator: Option<String>,
    pub timestamp: NaiveDateTime,
    pub captures: Vec<CaptureArtifact>,
    pub tags: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::StructuredLabel;

    #[test]
    fn test_symbol_values_span_all_sources() {
        let mut structured = StructuredLabel::new("P100");
        structured.symbols = vec!["C3:P100".to_string()];
        let capture = CaptureArtifact {
            original_image: vec![0xFF],
            adorned_image: None,
            sources: vec![LabelSource::symbol("RAW-1"), structured.into()],
        };
        assert_eq!(capture.symbol_values(), vec!["RAW-1", "C3:P100"]);
    }

    #[test]
    fn test_symbol_values_empty_without_sources() {
        let capture = CaptureArtifact::new(vec![0xFF]);
        assert!(capture.symbol_values().is_empty());
    }
}
