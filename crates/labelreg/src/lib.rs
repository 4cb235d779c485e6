//! Label registration session and CLI.
//!
//! Ties the engine and storage crates together behind the module
//! lifecycle a capture host drives: prepare a session from configuration,
//! find the primary label, find secondary candidates, then register. The
//! `labelreg` binary exposes the same flow as standalone utilities.

pub mod cli;
pub mod config;
pub mod session;

pub use config::{ConfigError, SessionConfig};
pub use session::{RegisterOutcome, Session, SessionError};
