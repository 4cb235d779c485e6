//! Session facade: prepare, find labels, register.

use std::path::PathBuf;

use chrono::Local;
use labelreg_engine::{evaluate, extract_primary, match_secondary, Rejection, Verdict};
use labelreg_model::{
    CaptureArtifact, ConditionTable, FixedFormatSpec, Label, LabelSource, MatchingPolicy,
    RegistrationRecord,
};
use labelreg_store::{
    load_condition_table, resolve_encoding, ArtifactStore, LedgerWriter, StoreError,
};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, SessionConfig};

/// Faults a session can surface. Rejected registrations are not here;
/// they come back as [`RegisterOutcome::Rejected`] so the host UI can
/// re-prompt without alarming the operator.
#[derive(Error, Debug)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Outcome of one registration attempt.
#[derive(Debug)]
pub enum RegisterOutcome {
    Registered {
        timestamp: chrono::NaiveDateTime,
        artifact_dir: PathBuf,
    },
    Rejected(Rejection),
}

/// One prepared registration session: validated paths, resolved mode
/// properties and the condition table loaded once. The capture host
/// drives it strictly sequentially per attempt: find primary, find
/// secondaries, register.
pub struct Session {
    spec: FixedFormatSpec,
    policy: MatchingPolicy,
    table: ConditionTable,
    ledger: LedgerWriter,
    artifacts: ArtifactStore,
    mode_id: String,
    operator: Option<String>,
}

impl Session {
    /// Validate the configuration up front and load the condition table.
    ///
    /// Every missing resource or mode property is a configuration fault
    /// here, before any attempt begins. The writer re-checks the same
    /// paths per write since they can disappear mid-session.
    pub fn prepare(config: &SessionConfig) -> Result<Self, SessionError> {
        if !config.ledger_path.is_file() {
            return Err(ConfigError::LedgerNotConfigured(config.ledger_path.clone()).into());
        }
        if !config.artifact_dir.is_dir() {
            return Err(ConfigError::ArtifactDirNotConfigured(config.artifact_dir.clone()).into());
        }
        let spec = config
            .fixed_format
            .clone()
            .ok_or(ConfigError::MissingFixedFormat)?;
        let policy = config.policy.clone().ok_or(ConfigError::MissingPolicy)?;
        let encoding = resolve_encoding(&config.encoding)
            .map_err(|_| ConfigError::UnknownEncoding(config.encoding.clone()))?;

        let table = load_condition_table(&config.condition_table_path, encoding)?;
        let ledger = LedgerWriter::open(&config.ledger_path, encoding)?;
        let artifacts = ArtifactStore::open(&config.artifact_dir)?;

        info!(
            mode = %config.mode_id,
            condition_entries = table.len(),
            "session prepared"
        );
        Ok(Self {
            spec,
            policy,
            table,
            ledger,
            artifacts,
            mode_id: config.mode_id.clone(),
            operator: config.operator.clone(),
        })
    }

    pub fn fixed_format(&self) -> &FixedFormatSpec {
        &self.spec
    }

    pub fn policy(&self) -> &MatchingPolicy {
        &self.policy
    }

    pub fn condition_table(&self) -> &ConditionTable {
        &self.table
    }

    /// Derive the primary label from the capture sources, if exactly one
    /// symbol fits the fixed format.
    pub fn find_primary(&self, sources: &[LabelSource]) -> Option<Label> {
        extract_primary(&self.spec, sources)
    }

    /// Candidate secondary labels for a found primary.
    pub fn find_secondaries(&self, primary: &Label, sources: &[LabelSource]) -> Vec<Label> {
        match_secondary(primary, sources, &self.spec, &self.policy, &self.table)
    }

    /// Run the approval gate and, on approval, persist the record: one
    /// ledger row, then the artifact tree. These are independent effects;
    /// a failure between them is not rolled back.
    ///
    /// The `&mut` receiver serializes ledger appends across concurrent
    /// attempts sharing one session.
    pub fn register(
        &mut self,
        primary: &Label,
        secondary: Option<&Label>,
        captures: Vec<CaptureArtifact>,
        tags: Vec<String>,
        confirm: &mut dyn FnMut(&str) -> bool,
    ) -> Result<RegisterOutcome, SessionError> {
        match evaluate(primary, secondary, &tags, &self.policy, &self.table, confirm) {
            Verdict::Reject(rejection) => return Ok(RegisterOutcome::Rejected(rejection)),
            Verdict::Approve => {}
        }

        let timestamp = Local::now().naive_local();
        let record = RegistrationRecord {
            primary: primary.clone(),
            secondary: secondary.cloned(),
            mode_id: self.mode_id.clone(),
            operator: self.operator.clone(),
            timestamp,
            captures,
            tags,
        };

        // Both destinations are re-checked before either is touched, so a
        // root deleted mid-session cannot leave an orphaned ledger row.
        self.artifacts.verify_root()?;
        self.ledger.append(&record)?;
        let artifact_dir = self.artifacts.store(&record)?;

        info!(
            primary = %record.primary.item_number,
            secondary = record.secondary.as_ref().map(|l| l.item_number.as_str()),
            "registration complete"
        );
        Ok(RegisterOutcome::Registered {
            timestamp,
            artifact_dir,
        })
    }
}
