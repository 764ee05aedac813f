//! Part-number bulk loading and verification against the OQC API
//!
//! The [`loader`] reads a part-number spreadsheet, normalizes missing values
//! and uploads every row in one request; [`verify`] fetches the stored list
//! and checks a known part number is present.

pub mod api;
pub mod cli;
pub mod config;
pub mod loader;
pub mod records;
pub mod spreadsheet;
pub mod verify;

pub use api::{BulkLoadRequest, PartNumberEntry, PartNumbersClient};
pub use loader::{LoadError, LoadOptions, LoadReport, run_load};
pub use records::{CellValue, PartNumberRecord};
pub use verify::{VerificationReport, VerifyOptions, run_verify};
