use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::image_source::ImageSource;
use crate::error::RecordError;

/// One plant's catalog entry.
///
/// Field names on the wire are the registry's own (Portuguese, camelCase),
/// so exported store data deserializes unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "nomePopular")]
    pub common_name: String,
    #[serde(rename = "familia")]
    pub family: String,
    #[serde(rename = "especie")]
    pub species: String,
    #[serde(rename = "nomeCientifico")]
    pub scientific_name: String,
    #[serde(rename = "numeroCanteiro")]
    pub bed_number: String,
    #[serde(rename = "classificacao")]
    pub classification: String,
    #[serde(rename = "principioAtivo")]
    pub active_principle: String,
    #[serde(rename = "utilizacao")]
    pub usage: String,
    #[serde(rename = "formaCultivo")]
    pub cultivation: String,
    #[serde(rename = "formasUtilizacao")]
    pub usage_forms: String,
    #[serde(rename = "observacao", default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(rename = "imagens", default)]
    pub images: Vec<ImageSource>,
    #[serde(rename = "dataCadastro", default)]
    pub registered_at: String,
}

/// Record fields that free-text search can target
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum, Default, Serialize, Deserialize)]
pub enum SearchField {
    #[default]
    #[serde(rename = "nomePopular")]
    NomePopular,
    #[serde(rename = "especie")]
    Especie,
    #[serde(rename = "nomeCientifico")]
    NomeCientifico,
    #[serde(rename = "familia")]
    Familia,
}

impl PlantRecord {
    /// Notes, if present and not blank
    pub fn notes(&self) -> Option<&str> {
        self.notes
            .as_deref()
            .map(str::trim)
            .filter(|notes| !notes.is_empty())
    }

    pub fn field(&self, field: SearchField) -> &str {
        match field {
            SearchField::NomePopular => &self.common_name,
            SearchField::Especie => &self.species,
            SearchField::NomeCientifico => &self.scientific_name,
            SearchField::Familia => &self.family,
        }
    }

    /// Check that every required text field is filled in.
    ///
    /// The layout engine trusts its input; this is for callers at the
    /// boundary (the CLI) that load records from outside.
    pub fn validate(&self) -> Result<(), RecordError> {
        let required: [(&'static str, &str); 10] = [
            ("nomePopular", &self.common_name),
            ("familia", &self.family),
            ("especie", &self.species),
            ("nomeCientifico", &self.scientific_name),
            ("numeroCanteiro", &self.bed_number),
            ("classificacao", &self.classification),
            ("principioAtivo", &self.active_principle),
            ("utilizacao", &self.usage),
            ("formaCultivo", &self.cultivation),
            ("formasUtilizacao", &self.usage_forms),
        ];

        match required.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(RecordError::MissingField {
                id: self.id.clone(),
                field,
            }),
            None => Ok(()),
        }
    }
}
