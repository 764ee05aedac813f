//! Wire types for the part-numbers endpoints

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::records::PartNumberRecord;

/// Body of `POST /api/part-numbers/bulk`
#[derive(Debug, Clone, Default, Serialize)]
pub struct BulkLoadRequest {
    pub records: Vec<PartNumberRecord>,
}

impl BulkLoadRequest {
    pub fn new(records: Vec<PartNumberRecord>) -> Self {
        Self { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// What the bulk endpoint answered, kept opaque
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkLoadResponse {
    pub status: u16,
    pub body: String,
}

impl BulkLoadResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Body of `GET /api/part-numbers`
#[derive(Debug, Clone, Deserialize)]
pub struct PartNumberListResponse {
    #[serde(default)]
    pub success: Option<bool>,
    pub data: Vec<PartNumberEntry>,
}

/// One part number as listed by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartNumberEntry {
    pub part_number: String,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Any other columns the service returns (id, standard_pack, customer, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PartNumberEntry {
    pub fn new(part_number: impl Into<String>) -> Self {
        Self {
            part_number: part_number.into(),
            model: None,
            description: None,
            extra: Map::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Body of `GET /api/health`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub database: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}
