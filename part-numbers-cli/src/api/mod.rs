//! Client for the part-numbers HTTP service
//!
//! The service exposes a bulk-insert endpoint, a listing endpoint and a
//! health check. This module only consumes them.

pub mod client;
pub mod models;
pub mod readiness;

pub use client::PartNumbersClient;
pub use models::{
    BulkLoadRequest, BulkLoadResponse, HealthStatus, PartNumberEntry, PartNumberListResponse,
};
pub use readiness::wait_until_ready;
