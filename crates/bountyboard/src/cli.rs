//! CLI argument parsing with clap derive

use std::path::PathBuf;

use clap::{Parser, Subcommand};

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Bountyboard - catalog bug bounty programs and their testable assets
#[derive(Parser)]
#[command(name = "bountyboard")]
#[command(version = VERSION)]
#[command(about = "Catalog bug bounty programs and their testable assets")]
#[command(
    long_about = "Bountyboard keeps an in-memory catalog of bug bounty programs, each owning a list of testable assets, and shows them as a flattened table next to a subscription-usage summary.\n\nProgram data lives for the process lifetime only; a session starts from the configured demo data. Use `board` for an interactive session, `list` for a one-shot table, and `create` to run the program-creation workflow."
)]
pub struct Cli {
    /// Increase output verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to the config file (default: ~/.config/bountyboard/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive board session
    ///
    /// Shows the subscription summary and programs table, then loops on
    /// a menu to create, delete, or rename programs.
    #[command(
        long_about = "Interactive board session.\n\nShows:\n  - Subscription summary (name, end date, available/consumed/total)\n  - Programs table, one row per (program, asset) pair\n\nMenu actions: create a program (multi-step form with asset staging and a calendar date picker), delete a program, rename a program, quit.\n\nRequires an interactive terminal."
    )]
    Board,

    /// List programs as a flattened table
    ///
    /// One row per (program, asset) pair, most recently created first.
    #[command(
        long_about = "List programs as a flattened table.\n\nDisplays one row per (program, asset) pair:\n  - Program name and start date\n  - Asset identifier and description\n  - Bounty eligibility badge\n\nPrograms come from the configured demo data; use --json for the machine-readable envelope."
    )]
    List {
        /// Filter by bounty eligibility (eligible, ineligible)
        #[arg(long)]
        eligibility: Option<String>,
    },

    /// Run the program-creation workflow
    ///
    /// Interactive multi-step form, or scripted via flags.
    #[command(
        long_about = "Run the program-creation workflow.\n\nWithout flags this opens the interactive form: program name, start date via a calendar popover, optional website and Twitter / X handle, and an asset staging loop with duplicate-identifier detection.\n\nWith --name the workflow runs non-interactively:\n  bountyboard create --name \"Acme Pentest\" \\\n    --start-date 2024-01-15 \\\n    --asset web:acme.com:login:eligible\n\nAsset spec format: TYPE:IDENTIFIER[:DESCRIPTION[:ELIGIBILITY]]\n  TYPE         web or mobile\n  ELIGIBILITY  eligible (default) or ineligible"
    )]
    Create {
        /// Program name (enables non-interactive mode)
        #[arg(long)]
        name: Option<String>,

        /// Start date as YYYY-MM-DD (default: configured default date)
        #[arg(long, value_name = "DATE")]
        start_date: Option<String>,

        /// Program website
        #[arg(long)]
        website: Option<String>,

        /// Twitter / X handle
        #[arg(long)]
        twitter: Option<String>,

        /// Asset to stage, as TYPE:IDENTIFIER[:DESCRIPTION[:ELIGIBILITY]] (repeatable)
        #[arg(long = "asset", value_name = "SPEC")]
        assets: Vec<String>,
    },
}

/// Get the command args for use in the application
pub fn parse() -> Cli {
    Cli::parse()
}
