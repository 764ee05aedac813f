//! Load command handler

use anyhow::Result;
use colored::*;
use std::io::Write;
use std::time::Duration;

use super::LoadCommands;
use crate::config::{ApiConfig, ReadinessConfig};
use crate::loader::{LoadOptions, Loader};

/// Run the bulk load and report to the operator on stdout
pub async fn handle_load_command(args: LoadCommands, base_url: Option<String>) -> Result<()> {
    let mut stdout = std::io::stdout();
    execute_load(args, base_url, &mut stdout).await
}

/// Run the bulk load, writing the operator report to `out`
///
/// Load failures are written, not returned: once started the command always
/// finishes normally. Only a failure to write the report is an error.
pub async fn execute_load<W: Write + Send>(
    args: LoadCommands,
    base_url: Option<String>,
    out: &mut W,
) -> Result<()> {
    let outcome = match Loader::new(load_options(args, base_url)) {
        Ok(loader) => loader.run_reporting(out).await,
        Err(e) => Err(e),
    };

    match outcome {
        Ok(report) => {
            let status = report.response.status.to_string();
            let status = if report.response.is_success() {
                status.bright_green()
            } else {
                status.bright_red()
            };
            writeln!(out, "Status: {}", status)?;
            writeln!(out, "Response: {}", report.response.body)?;
        }
        Err(e) => {
            log::debug!("Load failed ({}): {:?}", e.kind(), e);
            writeln!(out, "{} {}", "Error:".red().bold(), e)?;
        }
    }

    Ok(())
}

fn load_options(args: LoadCommands, base_url: Option<String>) -> LoadOptions {
    LoadOptions {
        spreadsheet: args.file,
        api: ApiConfig::resolve(base_url).with_timeout(Duration::from_secs(args.timeout_secs)),
        readiness: if args.skip_readiness {
            None
        } else {
            Some(
                ReadinessConfig::builder()
                    .max_attempts(args.readiness_attempts)
                    .build(),
            )
        },
    }
}
