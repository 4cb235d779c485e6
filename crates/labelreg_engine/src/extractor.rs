//! Primary-label extraction from raw symbol readings.

use labelreg_model::{FixedFormatSpec, Label, LabelSource};
use tracing::debug;

/// Derive the primary label from the capture sources.
///
/// Only raw symbol readings are considered; structured sources belong to
/// the secondary matcher. Exactly one successful fixed-format parse
/// yields the label. Zero successes and two-or-more successes both
/// return `None`: an ambiguous read is treated the same as no read, and
/// the caller rejects the attempt upstream.
pub fn extract_primary(spec: &FixedFormatSpec, sources: &[LabelSource]) -> Option<Label> {
    let mut candidates = sources
        .iter()
        .filter_map(LabelSource::as_symbol)
        .filter_map(|symbol| spec.try_generate_label(symbol));

    let first = candidates.next()?;
    if candidates.next().is_some() {
        debug!("multiple symbols fit the primary format, treating as no match");
        return None;
    }
    Some(first)
}
