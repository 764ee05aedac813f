//! Spreadsheet import for part-number sheets
//!
//! The first worksheet is read, its first row naming the columns. Every later
//! row becomes one [`PartNumberRecord`](crate::records::PartNumberRecord).

mod reader;

pub use reader::{DEFAULT_NA_MARKERS, read_part_number_records};
