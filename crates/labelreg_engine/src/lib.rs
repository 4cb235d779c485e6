//! Pure decision logic for label registration.
//!
//! Three stages, strictly sequential per registration attempt:
//!
//! 1. [`extract_primary`] derives at most one primary label from the raw
//!    symbol readings.
//! 2. [`match_secondary`] collects candidate secondary labels under the
//!    session's matching policy.
//! 3. [`evaluate`] decides whether the registration may proceed, asking
//!    the operator to confirm warn-level outcomes.
//!
//! Nothing in this crate performs I/O. Rejection is a first-class value
//! ([`Verdict::Reject`]), never an error; the host UI must be able to
//! re-prompt after a rejection without treating it as a fault.

pub mod extractor;
pub mod gate;
pub mod matcher;

pub use extractor::extract_primary;
pub use gate::{evaluate, Prompt, Rejection, Verdict};
pub use matcher::match_secondary;
