use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::errors::{ChronologyError, Result};

/// default row date rendering, day first as printed on statements
pub const DEFAULT_DATE_FORMAT: &str = "%d/%m/%Y";

/// per-call chronology options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronologyConfig {
    /// merge runs of missed weeks into one row carrying a week count
    pub collapse_misses: bool,
    /// strftime pattern used for `date_formatted`
    pub date_format: String,
}

impl Default for ChronologyConfig {
    fn default() -> Self {
        Self::detailed()
    }
}

impl ChronologyConfig {
    /// one row per week or payment, used by the PDF export and detail modal
    pub fn detailed() -> Self {
        Self {
            collapse_misses: false,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    /// compact summary view with missed-week runs merged
    pub fn compact() -> Self {
        Self {
            collapse_misses: true,
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }

    pub fn with_collapse_misses(mut self, collapse: bool) -> Self {
        self.collapse_misses = collapse;
        self
    }

    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    /// reject strftime patterns chrono cannot render
    pub fn validate(&self) -> Result<()> {
        let broken = self.date_format.is_empty()
            || StrftimeItems::new(&self.date_format).any(|item| matches!(item, Item::Error));
        if broken {
            return Err(ChronologyError::InvalidDateFormat {
                format: self.date_format.clone(),
            });
        }
        Ok(())
    }

    /// the configured pattern, or the default when it would not render
    pub fn effective_date_format(&self) -> &str {
        match self.validate() {
            Ok(()) => &self.date_format,
            Err(_) => DEFAULT_DATE_FORMAT,
        }
    }
}
