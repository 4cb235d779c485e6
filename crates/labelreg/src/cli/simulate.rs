//! Simulate command - run one attempt through the engine without writing.
//!
//! Builds synthetic capture sources from the command line, then walks the
//! real extractor, matcher and gate, printing the decision path. Prompts
//! are answered by --assume-yes / --assume-no instead of an operator.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use labelreg_engine::{evaluate, Verdict};
use labelreg_model::{Label, LabelSource, StructuredLabel};

use crate::config::SessionConfig;
use crate::session::Session;

/// Arguments for the simulate command
#[derive(Debug)]
pub struct SimulateArgs {
    pub config: PathBuf,
    pub symbols: Vec<String>,
    pub structured: Vec<String>,
    pub tags: Vec<String>,
    /// 1-based index into the secondary candidates; none means register
    /// without a secondary label.
    pub choose: Option<usize>,
    pub assume_yes: bool,
}

pub fn run(args: SimulateArgs) -> Result<()> {
    let config = SessionConfig::load(&args.config)?;
    let session = Session::prepare(&config)?;

    let mut sources: Vec<LabelSource> = args
        .symbols
        .iter()
        .map(|value| LabelSource::symbol(value.clone()))
        .collect();
    for input in &args.structured {
        sources.push(parse_structured(input)?.into());
    }

    let Some(primary) = session.find_primary(&sources) else {
        println!("No primary label (zero or ambiguous fixed-format reads)");
        return Ok(());
    };
    println!("Primary: {}", describe(&primary));

    let candidates = session.find_secondaries(&primary, &sources);
    if candidates.is_empty() {
        println!("Secondary candidates: none");
    }
    for (index, candidate) in candidates.iter().enumerate() {
        println!("Secondary candidate #{}: {}", index + 1, describe(candidate));
    }

    let secondary = match args.choose {
        Some(n) => {
            let index = n.checked_sub(1).context("candidate index is 1-based")?;
            Some(
                candidates
                    .get(index)
                    .with_context(|| format!("no secondary candidate #{n}"))?,
            )
        }
        None => None,
    };

    let answer = args.assume_yes;
    let verdict = evaluate(
        &primary,
        secondary,
        &args.tags,
        session.policy(),
        session.condition_table(),
        &mut |prompt| {
            println!("CONFIRM: {prompt} -> {}", if answer { "yes" } else { "no" });
            answer
        },
    );

    match verdict {
        Verdict::Approve => println!("Verdict: approve"),
        Verdict::Reject(rejection) => println!("Verdict: reject ({rejection})"),
    }
    Ok(())
}

/// Parse `ITEM` or `ITEM:SERIAL`.
fn parse_structured(input: &str) -> Result<StructuredLabel> {
    if input.is_empty() {
        bail!("structured label must not be empty");
    }
    match input.split_once(':') {
        Some((item, serial)) if !item.is_empty() && !serial.is_empty() => {
            Ok(StructuredLabel::with_serial(item, serial))
        }
        Some((item, "")) if !item.is_empty() => Ok(StructuredLabel::new(item)),
        Some(_) => bail!("structured label must be ITEM or ITEM:SERIAL, got '{input}'"),
        None => Ok(StructuredLabel::new(input)),
    }
}

fn describe(label: &Label) -> String {
    match &label.serial_number {
        Some(serial) => format!("{} (serial {serial})", label.item_number),
        None => label.item_number.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_structured() {
        assert_eq!(parse_structured("P100").unwrap().item_number, "P100");

        let with_serial = parse_structured("P100:S1").unwrap();
        assert_eq!(with_serial.item_number, "P100");
        assert_eq!(with_serial.serial_number.as_deref(), Some("S1"));

        assert!(parse_structured("P100:").unwrap().serial_number.is_none());
        assert!(parse_structured("").is_err());
        assert!(parse_structured(":S1").is_err());
    }
}
