use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::RecordError;

/// A named, colored tag that records are filed under
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "descricao", default)]
    pub description: String,
    #[serde(rename = "cor", default)]
    pub color: String,
    #[serde(rename = "dataCriacao", default)]
    pub created_at: String,
}

/// Classification tags loaded from an exported store
#[derive(Debug, Clone, Default)]
pub struct ClassificationSet {
    items: Vec<Classification>,
}

impl ClassificationSet {
    pub fn from_json(json: &str) -> Result<Self, RecordError> {
        let items = serde_json::from_str(json)?;
        Ok(Self { items })
    }

    pub fn from_path(path: &Path) -> Result<Self, RecordError> {
        let json = fs::read_to_string(path).map_err(|source| RecordError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Classification> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Find a tag by name, ignoring case
    pub fn find(&self, name: &str) -> Option<&Classification> {
        let wanted = name.trim().to_lowercase();
        self.items
            .iter()
            .find(|item| item.name.trim().to_lowercase() == wanted)
    }
}
