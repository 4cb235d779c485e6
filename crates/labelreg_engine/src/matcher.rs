//! Secondary-label candidate matching.

use labelreg_model::{
    eq_ignore_case, ConditionTable, FixedFormatSpec, Label, LabelSource, MatchingPolicy,
    SecondaryBehavior, SourceKinds,
};
use tracing::debug;

/// Collect candidate secondary labels for `primary` from the capture
/// sources.
///
/// Two passes over the sources, concatenated in input order: structured
/// labels first, then raw symbols the fixed-format spec fails on (the
/// complement of the extractor's input). Duplicates across passes are
/// preserved; the criteria form a union of independent checks, not a set.
///
/// The fallback ("neither equal nor in the table") criterion applies to
/// structured candidates only. A raw symbol that matches nothing is never
/// a candidate, whatever the fallback behavior says.
pub fn match_secondary(
    primary: &Label,
    sources: &[LabelSource],
    spec: &FixedFormatSpec,
    policy: &MatchingPolicy,
    table: &ConditionTable,
) -> Vec<Label> {
    let mut labels = Vec::new();

    // The lookup result is empty both when the table has no entry and
    // when the table criterion is denied outright.
    let table_values: &[String] = if policy.condition_table != SecondaryBehavior::Deny {
        table.lookup(&primary.item_number).unwrap_or(&[])
    } else {
        &[]
    };

    let allow_equal = policy.equality != SecondaryBehavior::Deny;
    let allow_table = policy.condition_table != SecondaryBehavior::Deny;
    let allow_fallback = policy.fallback != SecondaryBehavior::Deny;

    if policy.accepts(SourceKinds::STRUCTURED) {
        for candidate in sources.iter().filter_map(LabelSource::as_structured) {
            let equals_primary = eq_ignore_case(&candidate.item_number, &primary.item_number);
            let in_table = table_values
                .iter()
                .any(|v| eq_ignore_case(v, &candidate.item_number));

            let included = (allow_equal && equals_primary)
                || (allow_table && in_table)
                || (allow_fallback && !equals_primary && !in_table);
            if included {
                labels.push(Label::from(candidate));
            }
        }
    }

    if policy.accepts(SourceKinds::SINGLE_SYMBOL) {
        for symbol in sources.iter().filter_map(LabelSource::as_symbol) {
            if spec.try_generate_label(symbol).is_some() {
                // Fit the primary format, so it belongs to extraction.
                continue;
            }
            let value = symbol.value.as_str();
            let equals_primary = eq_ignore_case(value, &primary.item_number);
            let in_table = table_values.iter().any(|v| eq_ignore_case(v, value));

            if (allow_equal && equals_primary) || (allow_table && in_table) {
                labels.push(Label::new(value));
            }
        }
    }

    debug!(
        primary = %primary.item_number,
        candidates = labels.len(),
        "secondary matching complete"
    );
    labels
}
