//! Command-line surface

pub mod commands;

use clap::{Parser, Subcommand};

use commands::{LoadCommands, VerifyCommands};

#[derive(Parser, Debug)]
#[command(name = "part-numbers-cli")]
#[command(about = "Bulk-load part numbers into the OQC API and spot-check the result")]
#[command(version)]
pub struct Cli {
    /// Base URL of the part-numbers service (falls back to PART_NUMBERS_API_URL)
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Upload every row of the part-number spreadsheet in one bulk request
    Load(LoadCommands),
    /// Fetch the stored part numbers and check a known one is present
    Verify(VerifyCommands),
}
