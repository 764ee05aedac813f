//! Failure kinds for a bulk load run

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Everything that can stop a bulk load, by kind
#[derive(Debug, Error)]
pub enum LoadError {
    /// The workbook could not be opened or parsed
    #[error("failed to read spreadsheet {}: {source}", path.display())]
    Spreadsheet {
        path: PathBuf,
        #[source]
        source: calamine::XlsxError,
    },

    /// The payload could not be encoded as JSON
    #[error("failed to serialize bulk load payload: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// No response arrived within the configured timeout
    #[error("request to {url} timed out after {}s", timeout.as_secs())]
    Timeout {
        url: String,
        timeout: Duration,
        #[source]
        source: reqwest::Error,
    },

    /// Progress output could not be written
    #[error("failed to write load progress: {0}")]
    Output(#[from] std::io::Error),

    /// The service never reported healthy
    #[error("service not ready after {attempts} attempts: {last_error}")]
    NotReady { attempts: u32, last_error: String },
}

impl LoadError {
    /// Short label for the failure kind
    pub fn kind(&self) -> &'static str {
        match self {
            LoadError::Spreadsheet { .. } => "spreadsheet",
            LoadError::Serialization(_) => "serialization",
            LoadError::Client(_) => "client",
            LoadError::Network { .. } => "network",
            LoadError::Timeout { .. } => "timeout",
            LoadError::Output(_) => "output",
            LoadError::NotReady { .. } => "not-ready",
        }
    }

    /// Classify a transport error from a request to `url`
    pub(crate) fn from_request(
        url: &str,
        timeout: Option<Duration>,
        source: reqwest::Error,
    ) -> Self {
        match timeout {
            Some(timeout) if source.is_timeout() => LoadError::Timeout {
                url: url.to_string(),
                timeout,
                source,
            },
            _ => LoadError::Network {
                url: url.to_string(),
                source,
            },
        }
    }
}
