use std::fs;
use std::path::Path;

use super::plant::{PlantRecord, SearchField};
use crate::error::RecordError;

/// Filter label that selects every classification
pub const ALL_CLASSIFICATIONS: &str = "all";

/// Read-only view over records exported from the registry
#[derive(Debug, Clone, Default)]
pub struct RecordCollection {
    records: Vec<PlantRecord>,
}

impl RecordCollection {
    pub fn new(records: Vec<PlantRecord>) -> Self {
        Self { records }
    }

    /// Parse a JSON array of records
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let records = serde_json::from_str(json)?;
        Ok(Self { records })
    }

    pub fn from_path(path: &Path) -> Result<Self, RecordError> {
        let json = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn list(&self) -> &[PlantRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&PlantRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Records filed under `label`, or all of them for [`ALL_CLASSIFICATIONS`]
    pub fn with_classification(&self, label: &str) -> Vec<PlantRecord> {
        if label == ALL_CLASSIFICATIONS {
            return self.records.clone();
        }
        self.records
            .iter()
            .filter(|record| record.classification == label)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search on one field.
    ///
    /// A blank query matches everything.
    pub fn search(&self, query: &str, field: SearchField) -> Vec<&PlantRecord> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return self.records.iter().collect();
        }
        self.records
            .iter()
            .filter(|record| record.field(field).to_lowercase().contains(&needle))
            .collect()
    }
}
