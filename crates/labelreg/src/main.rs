//! labelreg command-line launcher.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use labelreg::cli;
use labelreg_logging::{init_logging, LogConfig};

#[derive(Parser)]
#[command(name = "labelreg", version, about = "Label registration engine utilities")]
struct Cli {
    /// Verbose console logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate the session configuration and report each resource
    Check {
        /// Session config file (TOML)
        #[arg(long, env = "LABELREG_CONFIG")]
        config: PathBuf,
    },
    /// Print the loaded condition table
    Table {
        /// Session config file (TOML)
        #[arg(long, env = "LABELREG_CONFIG")]
        config: PathBuf,
        /// Restrict output to one primary item number
        primary: Option<String>,
    },
    /// Run extraction, matching and the gate on synthetic sources
    Simulate {
        /// Session config file (TOML)
        #[arg(long, env = "LABELREG_CONFIG")]
        config: PathBuf,
        /// Raw symbol reading (repeatable)
        #[arg(long = "symbol")]
        symbols: Vec<String>,
        /// Structured label as ITEM or ITEM:SERIAL (repeatable)
        #[arg(long = "structured")]
        structured: Vec<String>,
        /// Free-form tag (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,
        /// Choose the n-th secondary candidate (1-based)
        #[arg(long)]
        choose: Option<usize>,
        /// Answer every confirmation prompt with yes
        #[arg(long, conflicts_with = "assume_no")]
        assume_yes: bool,
        /// Answer every confirmation prompt with no (the default)
        #[arg(long)]
        assume_no: bool,
    },
}

fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(LogConfig {
        app_name: "labelreg",
        verbose: args.verbose,
    })?;

    match args.command {
        Command::Check { config } => cli::check::run(cli::check::CheckArgs { config }),
        Command::Table { config, primary } => {
            cli::table::run(cli::table::TableArgs { config, primary })
        }
        Command::Simulate {
            config,
            symbols,
            structured,
            tags,
            choose,
            assume_yes,
            assume_no: _,
        } => cli::simulate::run(cli::simulate::SimulateArgs {
            config,
            symbols,
            structured,
            tags,
            choose,
            assume_yes,
        }),
    }
}
