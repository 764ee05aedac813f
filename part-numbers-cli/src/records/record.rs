//! A single spreadsheet row as a flat column -> value mapping

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::CellValue;

/// One row of the part-number sheet
///
/// Columns keep the order they had in the sheet. The record is open-ended:
/// whatever columns the sheet carries end up in the record, and only NaN
/// normalization is applied before it goes on the wire.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PartNumberRecord {
    fields: Vec<(String, CellValue)>,
}

impl PartNumberRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column value, replacing an existing column of the same name
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<CellValue>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Column names in sheet order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CellValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Replace every NaN with an explicit null
    pub fn cleaned(self) -> Self {
        Self {
            fields: self
                .fields
                .into_iter()
                .map(|(name, value)| (name, value.clean()))
                .collect(),
        }
    }

    /// Render as a JSON object
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .fields
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl Serialize for PartNumberRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<CellValue>> FromIterator<(K, V)> for PartNumberRecord {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = PartNumberRecord::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}
