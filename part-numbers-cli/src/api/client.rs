//! HTTP client for the part-numbers service

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;

use super::models::{BulkLoadRequest, BulkLoadResponse, HealthStatus, PartNumberListResponse};
use crate::config::{ApiConfig, BULK_PATH, HEALTH_PATH, LIST_PATH};
use crate::loader::LoadError;

/// Thin wrapper over `reqwest::Client` bound to one service
#[derive(Debug, Clone)]
pub struct PartNumbersClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl PartNumbersClient {
    /// Build a client; the configured timeout applies to every request
    pub fn new(config: ApiConfig) -> Result<Self, LoadError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().map_err(LoadError::Client)?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Submit every record in one request
    ///
    /// Any HTTP status counts as an answer; only transport failures are errors.
    pub async fn bulk_load(
        &self,
        request: &BulkLoadRequest,
    ) -> Result<BulkLoadResponse, LoadError> {
        let url = self.config.url(BULK_PATH);
        let body = serde_json::to_vec(request)?;

        log::info!(
            "POST {} ({} records, {} bytes)",
            url,
            request.len(),
            body.len()
        );

        let response = self
            .http
            .post(&url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| LoadError::from_request(&url, self.config.timeout, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| LoadError::from_request(&url, self.config.timeout, e))?;

        log::debug!("Bulk load answered {} ({} bytes)", status, body.len());

        Ok(BulkLoadResponse { status, body })
    }

    /// Fetch the full part-number listing
    pub async fn list(&self) -> Result<PartNumberListResponse> {
        let url = self.config.url(LIST_PATH);
        log::info!("GET {}", url);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch part numbers from {}", url))?;

        let status = response.status();
        log::debug!("Listing answered {}", status);

        response
            .json::<PartNumberListResponse>()
            .await
            .with_context(|| {
                format!(
                    "Failed to decode part-number listing from {} ({})",
                    url, status
                )
            })
    }

    /// Ask the service whether it is up; non-2xx answers are errors
    pub async fn health(&self) -> Result<HealthStatus, reqwest::Error> {
        self.http
            .get(self.config.url(HEALTH_PATH))
            .send()
            .await?
            .error_for_status()?
            .json::<HealthStatus>()
            .await
    }
}
