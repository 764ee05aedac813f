mod handler;

pub use handler::handle_verify_command;

use clap::Args;

use crate::config::{DEFAULT_SAMPLE_SIZE, DEFAULT_TARGET_PART};

#[derive(Args, Debug)]
pub struct VerifyCommands {
    /// How many part numbers to list
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE)]
    pub sample: usize,

    /// Part number that must exist
    #[arg(long, default_value = DEFAULT_TARGET_PART)]
    pub part_number: String,
}
