//! Check command - validate the session configuration.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::SessionConfig;
use crate::session::Session;

/// Arguments for the check command
#[derive(Debug)]
pub struct CheckArgs {
    pub config: PathBuf,
}

pub fn run(args: CheckArgs) -> Result<()> {
    let config = SessionConfig::load(&args.config)?;

    println!("Ledger file:      {}", config.ledger_path.display());
    println!("Artifact folder:  {}", config.artifact_dir.display());
    println!("Condition table:  {}", config.condition_table_path.display());
    println!("Encoding:         {}", config.encoding);
    println!("Mode:             {}", config.mode_id);

    let session = Session::prepare(&config)?;
    println!(
        "Configuration OK ({} condition table entries)",
        session.condition_table().len()
    );
    Ok(())
}
