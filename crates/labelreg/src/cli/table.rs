//! Table command - inspect the loaded condition table.

use std::path::PathBuf;

use anyhow::Result;

use crate::config::SessionConfig;
use labelreg_store::{load_condition_table, resolve_encoding};

/// Arguments for the table command
#[derive(Debug)]
pub struct TableArgs {
    pub config: PathBuf,
    pub primary: Option<String>,
}

pub fn run(args: TableArgs) -> Result<()> {
    let config = SessionConfig::load(&args.config)?;
    let encoding = resolve_encoding(&config.encoding)?;
    let table = load_condition_table(&config.condition_table_path, encoding)?;

    match args.primary {
        Some(primary) => match table.lookup(&primary) {
            Some(values) => {
                for value in values {
                    println!("{value}");
                }
            }
            None => println!("(no condition table entry for {primary})"),
        },
        None => {
            let mut primaries: Vec<&str> = table.primaries().collect();
            primaries.sort_unstable();
            for primary in primaries {
                let values = table.lookup(primary).unwrap_or(&[]);
                println!("{primary}\t{}", values.join("\t"));
            }
        }
    }
    Ok(())
}
