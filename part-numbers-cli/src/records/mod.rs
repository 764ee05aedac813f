//! Part-number records as read from the source spreadsheet

mod record;
mod value;

pub use record::PartNumberRecord;
pub use value::CellValue;
