//! Spot-check of the data held by the part-numbers service
//!
//! Fetches the full listing once, samples the first entries and looks for one
//! known part number. Failures are not handled here; they propagate to the
//! caller.

mod report;

pub use report::{
    MISSING, MODEL_DISPLAY_LIMIT, SampleLine, VerificationReport, find_part_number, format_model,
};

use anyhow::Result;

use crate::api::PartNumbersClient;
use crate::config::{ApiConfig, DEFAULT_SAMPLE_SIZE, DEFAULT_TARGET_PART};

/// Inputs of one verification run
#[derive(Debug, Clone)]
pub struct VerifyOptions {
    pub api: ApiConfig,
    pub sample_size: usize,
    pub target: String,
}

impl Default for VerifyOptions {
    fn default() -> Self {
        Self {
            api: ApiConfig::default(),
            sample_size: DEFAULT_SAMPLE_SIZE,
            target: DEFAULT_TARGET_PART.to_string(),
        }
    }
}

/// Fetch the listing and build the report
pub async fn run_verify(options: &VerifyOptions) -> Result<VerificationReport> {
    let client = PartNumbersClient::new(options.api.clone())?;
    let listing = client.list().await?;

    log::info!("Fetched {} part numbers", listing.data.len());

    Ok(VerificationReport::build(
        &listing.data,
        options.sample_size,
        &options.target,
    ))
}
