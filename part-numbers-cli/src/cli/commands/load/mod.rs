mod handler;

pub use handler::{execute_load, handle_load_command};

use clap::Args;
use std::path::PathBuf;

use crate::config::{DEFAULT_SPREADSHEET, DEFAULT_TIMEOUT_SECS};

#[derive(Args, Debug)]
pub struct LoadCommands {
    /// Spreadsheet to upload (first sheet, header in row 1)
    #[arg(short, long, default_value = DEFAULT_SPREADSHEET)]
    pub file: PathBuf,

    /// Timeout for the bulk request, in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout_secs: u64,

    /// Do not wait for the service health check before uploading
    #[arg(long)]
    pub skip_readiness: bool,

    /// Health checks to try before giving up
    #[arg(long, default_value_t = 10)]
    pub readiness_attempts: u32,
}
