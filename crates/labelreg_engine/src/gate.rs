//! Registration approval gate.
//!
//! The gate is a fixed-order decision tree over the matching policy. The
//! first decisive outcome wins, so at most one confirmation prompt is
//! shown per attempt, and the order below determines which one. Keep the
//! branch order in lockstep with the policy documentation; several
//! conditions can hold at once and reordering changes operator-visible
//! behavior.

use labelreg_model::{
    eq_ignore_case, ConditionTable, Label, MatchingPolicy, NoSecondaryBehavior, SecondaryBehavior,
};
use std::fmt;
use tracing::{debug, warn};

/// Operator-facing confirmation prompts the gate can raise.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prompt {
    SecondaryMissing,
    SecondaryOrTagMissing,
    TagEqualsPrimary,
    TagInConditionTable,
    SecondaryEqualsPrimary,
    SecondaryInConditionTable,
    SecondaryUnrelated,
}

impl Prompt {
    pub fn message(&self) -> &'static str {
        match self {
            Prompt::SecondaryMissing => {
                "A secondary label is required. Register without one?"
            }
            Prompt::SecondaryOrTagMissing => {
                "A secondary label or a matching tag is required. Register anyway?"
            }
            Prompt::TagEqualsPrimary => {
                "A tag carries the same item number as the primary label. Register?"
            }
            Prompt::TagInConditionTable => {
                "A tag carries an item number the condition table lists for the primary label. Register?"
            }
            Prompt::SecondaryEqualsPrimary => {
                "The chosen secondary label carries the same item number as the primary label. Continue?"
            }
            Prompt::SecondaryInConditionTable => {
                "The chosen secondary label carries an item number the condition table lists for the primary label. Continue?"
            }
            Prompt::SecondaryUnrelated => {
                "The chosen secondary label matches neither the primary label nor the condition table. Register?"
            }
        }
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Why an attempt was rejected. Denials never reach the operator; a
/// decline means the operator answered "no" to the named prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// Policy denies registering without a secondary label.
    SecondaryRequired,
    /// Policy denies registering without a secondary label or a tag
    /// matching the primary item or its condition-table entries.
    SecondaryOrTagRequired,
    /// The operator declined the given prompt.
    Declined(Prompt),
}

impl Rejection {
    /// Operator-facing explanation, suitable for the host UI.
    pub fn message(&self) -> &'static str {
        match self {
            Rejection::SecondaryRequired => "A secondary label is required.",
            Rejection::SecondaryOrTagRequired => {
                "A secondary label or a matching tag is required."
            }
            Rejection::Declined(prompt) => prompt.message(),
        }
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Gate outcome. `Reject` is normal control flow, never a fault; storage
/// is only reached on `Approve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Approve,
    Reject(Rejection),
}

impl Verdict {
    pub fn is_approved(&self) -> bool {
        matches!(self, Verdict::Approve)
    }
}

/// Evaluate the approval gate for one registration attempt.
///
/// `confirm` is the blocking user-confirmation collaborator; it receives
/// the prompt text and returns the operator's answer. It is called at
/// most once per evaluation.
pub fn evaluate(
    primary: &Label,
    secondary: Option<&Label>,
    tags: &[String],
    policy: &MatchingPolicy,
    table: &ConditionTable,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Verdict {
    let verdict = match secondary {
        None => evaluate_without_secondary(primary, tags, policy, table, confirm),
        Some(secondary) => evaluate_with_secondary(primary, secondary, policy, table, confirm),
    };
    match &verdict {
        Verdict::Approve => debug!(primary = %primary.item_number, "gate approved"),
        Verdict::Reject(rejection) => {
            warn!(primary = %primary.item_number, rejection = %rejection, "gate rejected")
        }
    }
    verdict
}

/// Case A: no secondary label chosen. Branches on the no-secondary
/// behavior; only the tag-dependent variants look at the attempt's tags.
fn evaluate_without_secondary(
    primary: &Label,
    tags: &[String],
    policy: &MatchingPolicy,
    table: &ConditionTable,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Verdict {
    match policy.no_secondary {
        NoSecondaryBehavior::Default => Verdict::Approve,
        NoSecondaryBehavior::Warn => ask(Prompt::SecondaryMissing, confirm),
        NoSecondaryBehavior::Deny => Verdict::Reject(Rejection::SecondaryRequired),
        NoSecondaryBehavior::WarnWhenTagUnmatched | NoSecondaryBehavior::DenyWhenTagUnmatched => {
            let tag_equals_primary = tags.iter().any(|t| primary.item_matches(t));
            let tag_in_table = tags
                .iter()
                .any(|t| table.contains(&primary.item_number, t));
            let unmatched = !tag_equals_primary && !tag_in_table;

            if policy.no_secondary == NoSecondaryBehavior::WarnWhenTagUnmatched && unmatched {
                ask(Prompt::SecondaryOrTagMissing, confirm)
            } else if policy.no_secondary == NoSecondaryBehavior::DenyWhenTagUnmatched && unmatched
            {
                Verdict::Reject(Rejection::SecondaryOrTagRequired)
            } else if policy.equality == SecondaryBehavior::Warn && tag_equals_primary {
                ask(Prompt::TagEqualsPrimary, confirm)
            } else if policy.condition_table == SecondaryBehavior::Warn && tag_in_table {
                ask(Prompt::TagInConditionTable, confirm)
            } else {
                Verdict::Approve
            }
        }
    }
}

/// Case B: a secondary label was chosen. An independent warn chain over
/// the three criteria, equality first, then table, then fallback.
fn evaluate_with_secondary(
    primary: &Label,
    secondary: &Label,
    policy: &MatchingPolicy,
    table: &ConditionTable,
    confirm: &mut dyn FnMut(&str) -> bool,
) -> Verdict {
    let equals_primary = eq_ignore_case(&secondary.item_number, &primary.item_number);
    let in_table = table.contains(&primary.item_number, &secondary.item_number);

    if policy.equality == SecondaryBehavior::Warn && equals_primary {
        ask(Prompt::SecondaryEqualsPrimary, confirm)
    } else if policy.condition_table == SecondaryBehavior::Warn && in_table {
        ask(Prompt::SecondaryInConditionTable, confirm)
    } else if policy.fallback == SecondaryBehavior::Warn && !equals_primary && !in_table {
        ask(Prompt::SecondaryUnrelated, confirm)
    } else {
        // No warn criterion applies: approve. This includes the
        // "no criterion matched at all" case, kept permissive on purpose.
        Verdict::Approve
    }
}

fn ask(prompt: Prompt, confirm: &mut dyn FnMut(&str) -> bool) -> Verdict {
    if confirm(prompt.message()) {
        Verdict::Approve
    } else {
        Verdict::Reject(Rejection::Declined(prompt))
    }
}
