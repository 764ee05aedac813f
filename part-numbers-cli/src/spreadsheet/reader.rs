//! Read part-number records from an Excel workbook

use std::collections::{HashMap, HashSet};
use std::path::Path;

use calamine::{Data, Reader, Xlsx, open_workbook};

use crate::loader::LoadError;
use crate::records::{CellValue, PartNumberRecord};

/// Text cells that count as a missing value
pub const DEFAULT_NA_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Read every data row of the first worksheet
pub fn read_part_number_records<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<PartNumberRecord>, LoadError> {
    let path = path.as_ref();
    let spreadsheet_error = |source: calamine::XlsxError| LoadError::Spreadsheet {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook: Xlsx<_> = open_workbook(path).map_err(spreadsheet_error)?;

    let sheet_name = match workbook.sheet_names().first() {
        Some(name) => name.clone(),
        None => {
            log::warn!("{} has no worksheets", path.display());
            return Ok(Vec::new());
        }
    };

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(spreadsheet_error)?;

    let mut rows = range.rows();
    let headers = match rows.next() {
        Some(header_row) => column_names(header_row),
        None => {
            log::warn!("Sheet '{}' is empty", sheet_name);
            return Ok(Vec::new());
        }
    };

    let records: Vec<PartNumberRecord> = rows
        .map(|row| {
            headers
                .iter()
                .enumerate()
                .map(|(col_idx, header)| {
                    let value = row.get(col_idx).map(cell_to_value).unwrap_or_default();
                    (header.as_str(), value)
                })
                .collect::<PartNumberRecord>()
        })
        .collect();

    log::debug!(
        "Read {} rows x {} columns from sheet '{}'",
        records.len(),
        headers.len(),
        sheet_name
    );

    Ok(records)
}

/// Name the columns from the header row
///
/// Blank headers become `Unnamed: {index}`, repeated headers get a `.1`,
/// `.2`, ... suffix.
fn column_names(header_row: &[Data]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut counts: HashMap<String, usize> = HashMap::new();
    let mut names = Vec::with_capacity(header_row.len());

    for (idx, cell) in header_row.iter().enumerate() {
        let base = header_text(cell).unwrap_or_else(|| format!("Unnamed: {}", idx));

        let mut name = base.clone();
        while seen.contains(&name) {
            let count = counts.entry(base.clone()).or_insert(0);
            *count += 1;
            name = format!("{}.{}", base, count);
        }

        seen.insert(name.clone());
        names.push(name);
    }

    names
}

fn header_text(cell: &Data) -> Option<String> {
    match cell {
        Data::Empty | Data::Error(_) => None,
        Data::String(s) if s.is_empty() => None,
        Data::String(s) => Some(s.clone()),
        Data::Int(i) => Some(i.to_string()),
        Data::Float(f) => Some(float_text(*f)),
        Data::Bool(b) => Some(b.to_string()),
        Data::DateTime(dt) => Some(format!("{}", dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Some(s.clone()),
    }
}

fn float_text(f: f64) -> String {
    if fits_i64(f) {
        format!("{}", f as i64)
    } else {
        f.to_string()
    }
}

/// Whole number that survives a round trip through `i64`
///
/// `i64::MAX as f64` is 2^63, one past the largest `i64`, so the upper bound
/// is exclusive.
fn fits_i64(f: f64) -> bool {
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64
}

/// Convert an Excel cell to a record value
fn cell_to_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Null,
        Data::Error(_) => CellValue::Null,
        Data::String(s) if DEFAULT_NA_MARKERS.contains(&s.as_str()) => CellValue::Null,
        Data::String(s) => CellValue::String(s.clone()),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => {
            // Whole numbers go out as integers
            if fits_i64(*f) {
                CellValue::Int(*f as i64)
            } else {
                CellValue::Float(*f)
            }
        }
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) => CellValue::DateTime(format!("{}", dt)),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::DateTime(s.clone()),
    }
}
