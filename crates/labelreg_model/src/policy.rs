//! Secondary-label matching policy.
//!
//! The policy is a flag set of acceptable source kinds plus one behavior
//! per matching criterion. The no-secondary case has its own, richer
//! behavior enum; keeping the two enums distinct makes the tag-dependent
//! variants unrepresentable where only Default/Warn/Deny is valid.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

bitflags! {
    /// Which source kinds may contribute secondary-label candidates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct SourceKinds: u8 {
        /// Pre-structured labels carried by the capture.
        const STRUCTURED = 0b01;
        /// Raw symbol readings the primary-label spec fails on.
        const SINGLE_SYMBOL = 0b10;
    }
}

impl Default for SourceKinds {
    fn default() -> Self {
        SourceKinds::all()
    }
}

/// Behavior of one matching criterion (equality, condition table or the
/// fallback bucket).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryBehavior {
    /// Allow without interaction.
    #[default]
    Default,
    /// Ask the operator to confirm.
    Warn,
    /// Exclude the candidate / reject the attempt.
    Deny,
}

impl SecondaryBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            SecondaryBehavior::Default => "default",
            SecondaryBehavior::Warn => "warn",
            SecondaryBehavior::Deny => "deny",
        }
    }
}

impl fmt::Display for SecondaryBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SecondaryBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(SecondaryBehavior::Default),
            "warn" => Ok(SecondaryBehavior::Warn),
            "deny" => Ok(SecondaryBehavior::Deny),
            _ => Err(format!(
                "Invalid secondary behavior: '{}'. Expected: default, warn, or deny",
                s
            )),
        }
    }
}

/// Behavior when no secondary label was chosen for the attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NoSecondaryBehavior {
    /// Proceed without interaction.
    #[default]
    Default,
    /// Ask the operator to confirm registering without one.
    Warn,
    /// Reject the attempt outright.
    Deny,
    /// Ask only when no tag matches the primary item or its condition
    /// table entries.
    WarnWhenTagUnmatched,
    /// Reject only when no tag matches.
    DenyWhenTagUnmatched,
}

impl NoSecondaryBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            NoSecondaryBehavior::Default => "default",
            NoSecondaryBehavior::Warn => "warn",
            NoSecondaryBehavior::Deny => "deny",
            NoSecondaryBehavior::WarnWhenTagUnmatched => "warn_when_tag_unmatched",
            NoSecondaryBehavior::DenyWhenTagUnmatched => "deny_when_tag_unmatched",
        }
    }

    /// True for the variants whose outcome depends on the attempt's tags.
    pub fn is_tag_dependent(&self) -> bool {
        matches!(
            self,
            NoSecondaryBehavior::WarnWhenTagUnmatched | NoSecondaryBehavior::DenyWhenTagUnmatched
        )
    }
}

impl fmt::Display for NoSecondaryBehavior {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NoSecondaryBehavior {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "default" => Ok(NoSecondaryBehavior::Default),
            "warn" => Ok(NoSecondaryBehavior::Warn),
            "deny" => Ok(NoSecondaryBehavior::Deny),
            "warn_when_tag_unmatched" => Ok(NoSecondaryBehavior::WarnWhenTagUnmatched),
            "deny_when_tag_unmatched" => Ok(NoSecondaryBehavior::DenyWhenTagUnmatched),
            _ => Err(format!("Invalid no-secondary behavior: '{}'", s)),
        }
    }
}

/// Full matching policy for one session mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchingPolicy {
    /// Source kinds allowed to produce secondary candidates.
    pub acceptable_kinds: SourceKinds,
    /// "Secondary item number equals the primary item number."
    pub equality: SecondaryBehavior,
    /// "Secondary item number appears in the condition table under the
    /// primary item number."
    pub condition_table: SecondaryBehavior,
    /// "Neither of the above" (structured candidates only).
    pub fallback: SecondaryBehavior,
    /// No secondary label chosen at all.
    pub no_secondary: NoSecondaryBehavior,
}

impl MatchingPolicy {
    pub fn accepts(&self, kind: SourceKinds) -> bool {
        self.acceptable_kinds.contains(kind)
    }
}
