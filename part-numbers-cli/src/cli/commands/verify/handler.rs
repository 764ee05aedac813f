//! Verify command handler

use anyhow::{Context, Result};

use super::VerifyCommands;
use crate::config::ApiConfig;
use crate::verify::{VerifyOptions, run_verify};

/// Fetch the listing and print the spot-check; any failure is returned
pub async fn handle_verify_command(args: VerifyCommands, base_url: Option<String>) -> Result<()> {
    let options = VerifyOptions {
        api: ApiConfig::resolve(base_url),
        sample_size: args.sample,
        target: args.part_number,
    };

    let report = run_verify(&options)
        .await
        .context("Verification failed")?;

    print!("{}", report);
    Ok(())
}
