//! Bulk upload of a part-number spreadsheet
//!
//! A run waits for the service, reads and cleans every row of the sheet, and
//! submits them all in a single `POST`. There is no retry and no partial
//! success: the service either answers the one request or the run fails with
//! a [`LoadError`] naming what went wrong.

mod error;

pub use error::LoadError;

use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use colored::*;

use crate::api::{BulkLoadRequest, BulkLoadResponse, PartNumbersClient, wait_until_ready};
use crate::config::{ApiConfig, DEFAULT_SPREADSHEET, DEFAULT_TIMEOUT_SECS, ReadinessConfig};
use crate::records::PartNumberRecord;
use crate::spreadsheet::read_part_number_records;

/// Inputs of one load run
#[derive(Debug, Clone)]
pub struct LoadOptions {
    pub spreadsheet: PathBuf,
    pub api: ApiConfig,
    /// `None` skips the readiness probe
    pub readiness: Option<ReadinessConfig>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            spreadsheet: PathBuf::from(DEFAULT_SPREADSHEET),
            api: ApiConfig::default().with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
            readiness: Some(ReadinessConfig::default()),
        }
    }
}

/// Outcome of a run that reached the service
#[derive(Debug, Clone)]
pub struct LoadReport {
    pub records_sent: usize,
    pub response: BulkLoadResponse,
}

/// A configured load run, usable step by step
#[derive(Debug)]
pub struct Loader {
    client: PartNumbersClient,
    options: LoadOptions,
}

impl Loader {
    pub fn new(options: LoadOptions) -> Result<Self, LoadError> {
        let client = PartNumbersClient::new(options.api.clone())?;
        Ok(Self { client, options })
    }

    pub fn options(&self) -> &LoadOptions {
        &self.options
    }

    /// Block until the service is healthy; returns the attempts used
    pub async fn wait_for_service(&self) -> Result<Option<u32>, LoadError> {
        match &self.options.readiness {
            Some(readiness) => wait_until_ready(&self.client, readiness).await.map(Some),
            None => {
                log::debug!("Readiness probe skipped");
                Ok(None)
            }
        }
    }

    /// Read the sheet and normalize every record
    pub fn read_records(&self) -> Result<Vec<PartNumberRecord>, LoadError> {
        let records = read_part_number_records(&self.options.spreadsheet)?;
        Ok(records.into_iter().map(PartNumberRecord::cleaned).collect())
    }

    /// Send all records in one bulk request
    pub async fn submit(&self, records: Vec<PartNumberRecord>) -> Result<LoadReport, LoadError> {
        let request = BulkLoadRequest::new(records);
        let records_sent = request.len();
        let response = self.client.bulk_load(&request).await?;

        if !response.is_success() {
            log::warn!("Bulk load rejected with status {}", response.status);
        }

        Ok(LoadReport {
            records_sent,
            response,
        })
    }

    /// All steps in order, without operator output
    pub async fn run(&self) -> Result<LoadReport, LoadError> {
        self.run_reporting(&mut std::io::sink()).await
    }

    /// All steps in order, writing progress lines to `out`
    pub async fn run_reporting<W: Write + Send>(
        &self,
        out: &mut W,
    ) -> Result<LoadReport, LoadError> {
        if self.options.readiness.is_some() {
            writeln!(
                out,
                "Waiting for the server at {} ...",
                self.options.api.base_url.cyan()
            )?;
        }
        self.wait_for_service().await?;

        let records = self.read_records()?;
        log::info!(
            "Loaded {} records from {}",
            records.len(),
            self.options.spreadsheet.display()
        );
        writeln!(out, "Total records to load: {}", records.len().to_string().bold())?;

        self.submit(records).await
    }
}

/// Run a complete load with the given options
pub async fn run_load(options: &LoadOptions) -> Result<LoadReport, LoadError> {
    Loader::new(options.clone())?.run().await
}
