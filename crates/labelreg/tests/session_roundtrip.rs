//! End-to-end session tests: prepare, match, gate, write.

use std::fs;
use std::path::PathBuf;

use labelreg::{ConfigError, RegisterOutcome, Session, SessionConfig, SessionError};
use labelreg_model::{
    CaptureArtifact, FieldSpan, FixedFormatSpec, LabelSource, MatchingPolicy, NoSecondaryBehavior,
};

fn setup() -> (tempfile::TempDir, SessionConfig) {
    let dir = tempfile::tempdir().unwrap();

    let ledger_path = dir.path().join("ledger.tsv");
    fs::write(&ledger_path, b"").unwrap();
    let artifact_dir = dir.path().join("artifacts");
    fs::create_dir(&artifact_dir).unwrap();
    let condition_table_path = dir.path().join("conditions.tsv");
    fs::write(&condition_table_path, "P100\tS200\n").unwrap();

    let config = SessionConfig {
        ledger_path,
        artifact_dir,
        condition_table_path,
        encoding: "utf-8".to_string(),
        mode_id: "mode-1".to_string(),
        operator: Some("inspector".to_string()),
        fixed_format: Some(FixedFormatSpec {
            total_length: Some(12),
            item_number: FieldSpan::new(0, 8),
            serial_number: Some(FieldSpan::new(8, 4)),
        }),
        policy: Some(MatchingPolicy::default()),
    };
    (dir, config)
}

fn sources() -> Vec<LabelSource> {
    vec![
        LabelSource::symbol("P100    0042"),
        labelreg_model::StructuredLabel::with_serial("S200", "77").into(),
    ]
}

#[test]
fn prepare_rejects_missing_ledger() {
    let (_dir, mut config) = setup();
    config.ledger_path = PathBuf::from("/nonexistent/ledger.tsv");
    let err = Session::prepare(&config).err().unwrap();
    assert!(matches!(
        err,
        SessionError::Config(ConfigError::LedgerNotConfigured(_))
    ));
    // The operator-facing message names the resource.
    assert!(err.to_string().contains("ledger"));
}

#[test]
fn prepare_rejects_missing_mode_properties() {
    let (_dir, mut config) = setup();
    config.policy = None;
    assert!(matches!(
        Session::prepare(&config).err().unwrap(),
        SessionError::Config(ConfigError::MissingPolicy)
    ));

    let (_dir, mut config) = setup();
    config.fixed_format = None;
    assert!(matches!(
        Session::prepare(&config).err().unwrap(),
        SessionError::Config(ConfigError::MissingFixedFormat)
    ));
}

#[test]
fn prepare_rejects_unknown_encoding() {
    let (_dir, mut config) = setup();
    config.encoding = "klingon".to_string();
    assert!(matches!(
        Session::prepare(&config).err().unwrap(),
        SessionError::Config(ConfigError::UnknownEncoding(_))
    ));
}

#[test]
fn full_registration_round_trip() {
    let (_dir, config) = setup();
    let mut session = Session::prepare(&config).unwrap();

    let sources = sources();
    let primary = session.find_primary(&sources).expect("primary label");
    assert_eq!(primary.item_number, "P100");

    let candidates = session.find_secondaries(&primary, &sources);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].item_number, "S200");

    let captures = vec![CaptureArtifact {
        original_image: vec![1, 2, 3],
        adorned_image: None,
        sources: sources.clone(),
    }];
    let outcome = session
        .register(
            &primary,
            Some(&candidates[0]),
            captures,
            vec!["lot-42".to_string()],
            &mut |_| panic!("no prompt expected under the default policy"),
        )
        .unwrap();

    let artifact_dir = match outcome {
        RegisterOutcome::Registered { artifact_dir, .. } => artifact_dir,
        RegisterOutcome::Rejected(rejection) => panic!("rejected: {rejection}"),
    };

    // One header line, one data line.
    let ledger = fs::read_to_string(&config.ledger_path).unwrap();
    let lines: Vec<&str> = ledger.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].starts_with("PrimaryPartNumber\t"));
    assert!(lines[1].starts_with("P100\t0042\tS200\t77\tmode-1\tinspector\t"));

    // Artifact tree: capture#1 with image and symbol listing, tags file.
    assert!(artifact_dir.join("capture#1").join("original.jpg").exists());
    assert!(artifact_dir.join("capture#1").join("symbols.txt").exists());
    assert_eq!(
        fs::read_to_string(artifact_dir.join("tags.txt")).unwrap(),
        "lot-42\n"
    );
}

#[test]
fn second_registration_appends_without_new_header() {
    let (_dir, config) = setup();
    let mut session = Session::prepare(&config).unwrap();

    let sources = sources();
    let primary = session.find_primary(&sources).unwrap();
    for _ in 0..2 {
        session
            .register(&primary, None, Vec::new(), Vec::new(), &mut |_| true)
            .unwrap();
    }

    let ledger = fs::read_to_string(&config.ledger_path).unwrap();
    let lines: Vec<&str> = ledger.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("PrimaryPartNumber\t"));
    assert!(lines[1].starts_with("P100\t"));
    assert!(lines[2].starts_with("P100\t"));
}

#[test]
fn deleted_artifact_root_leaves_ledger_untouched() {
    let (_dir, config) = setup();
    let mut session = Session::prepare(&config).unwrap();
    let sources = sources();
    let primary = session.find_primary(&sources).unwrap();

    // The root vanishes between prepare and register: the attempt fails
    // as a storage fault without appending a ledger row.
    fs::remove_dir(&config.artifact_dir).unwrap();
    let result = session.register(&primary, None, Vec::new(), Vec::new(), &mut |_| true);
    assert!(matches!(result, Err(SessionError::Store(_))));

    assert_eq!(fs::read(&config.ledger_path).unwrap().len(), 0);
}

#[test]
fn rejected_attempt_writes_nothing() {
    let (_dir, mut config) = setup();
    let mut policy = MatchingPolicy::default();
    policy.no_secondary = NoSecondaryBehavior::Deny;
    config.policy = Some(policy);

    let mut session = Session::prepare(&config).unwrap();
    let sources = sources();
    let primary = session.find_primary(&sources).unwrap();

    let outcome = session
        .register(&primary, None, Vec::new(), Vec::new(), &mut |_| true)
        .unwrap();
    assert!(matches!(outcome, RegisterOutcome::Rejected(_)));

    assert_eq!(fs::read(&config.ledger_path).unwrap().len(), 0);
    assert_eq!(fs::read_dir(&config.artifact_dir).unwrap().count(), 0);
}
