/// serialization support for chronologies handed to the PDF and UI layers
use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::events::Diagnostic;

use super::{Chronology, ChronologyItem, ChronologySummary};

/// serializable view of a reconstructed chronology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronologyView {
    pub items: Vec<ChronologyItem>,
    pub summary: ChronologySummary,
    pub diagnostics: Vec<Diagnostic>,
}

impl ChronologyView {
    pub fn from_chronology(chronology: &Chronology) -> Self {
        ChronologyView {
            items: chronology.items().to_vec(),
            summary: chronology.summary().clone(),
            diagnostics: chronology.diagnostics().entries().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
