pub mod assembler;
pub mod collapse;
pub mod description;
pub mod summary;
pub mod view;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;
use crate::events::DiagnosticLog;
use crate::reliability::ReliabilityScore;
use crate::types::{CoverageType, EntryType, PaymentId, PaymentMethod};

pub use assembler::assemble;
pub use collapse::collapse_misses;
pub use summary::ChronologySummary;
pub use view::ChronologyView;

/// one row of a loan's reconstructed payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronologyItem {
    pub id: String,
    pub week_index: u32,
    /// received time for payments, week start otherwise
    pub date: DateTime<Utc>,
    pub date_formatted: String,
    #[serde(rename = "type")]
    pub entry_type: EntryType,
    /// classification of the whole week, repeated on each of its rows
    pub coverage_type: CoverageType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Money>,
    pub weekly_expected: Money,
    pub weekly_paid: Money,
    pub surplus_before: Money,
    pub surplus_after: Money,
    pub deficit_before: Money,
    pub deficit_after: Money,
    pub balance_before: Money,
    pub balance_after: Money,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<PaymentId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_method: Option<PaymentMethod>,
    /// set on merged missed-week rows only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub week_count: Option<u32>,
}

impl ChronologyItem {
    pub fn is_payment(&self) -> bool {
        self.entry_type == EntryType::Payment
    }

    /// weeks this row stands for
    pub fn weeks_covered(&self) -> u32 {
        self.week_count.unwrap_or(1)
    }
}

/// reconstructed chronology of a single loan
///
/// Built fresh by every engine call and never mutated afterwards; `iter()`
/// can be called any number of times and always yields the same rows.
#[derive(Debug, Clone, PartialEq)]
pub struct Chronology {
    items: Vec<ChronologyItem>,
    summary: ChronologySummary,
    diagnostics: DiagnosticLog,
}

impl Chronology {
    pub fn new(items: Vec<ChronologyItem>, summary: ChronologySummary, diagnostics: DiagnosticLog) -> Self {
        Self {
            items,
            summary,
            diagnostics,
        }
    }

    /// no rows, zero summary; used when the terms cannot be worked with
    pub fn empty(diagnostics: DiagnosticLog) -> Self {
        Self::new(Vec::new(), ChronologySummary::default(), diagnostics)
    }

    pub fn items(&self) -> &[ChronologyItem] {
        &self.items
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ChronologyItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn summary(&self) -> &ChronologySummary {
        &self.summary
    }

    pub fn diagnostics(&self) -> &DiagnosticLog {
        &self.diagnostics
    }

    /// reliability computed from the rows themselves
    pub fn reliability(&self) -> ReliabilityScore {
        ReliabilityScore::from_items(&self.items)
    }

    /// sum of payment amounts across all rows
    pub fn total_paid(&self) -> Money {
        self.items.iter().filter_map(|i| i.amount).sum()
    }

    /// rows belonging to one week
    pub fn week(&self, week_index: u32) -> impl Iterator<Item = &ChronologyItem> + '_ {
        self.items.iter().filter(move |i| {
            week_index >= i.week_index && week_index < i.week_index + i.weeks_covered()
        })
    }

    /// same chronology with missed-week runs merged for compact display
    pub fn collapsed(&self) -> Chronology {
        Chronology {
            items: collapse_misses(self.items.clone()),
            summary: self.summary.clone(),
            diagnostics: self.diagnostics.clone(),
        }
    }

    pub fn into_items(self) -> Vec<ChronologyItem> {
        self.items
    }

    pub fn to_view(&self) -> ChronologyView {
        ChronologyView::from_chronology(self)
    }

    pub fn to_json(&self) -> Result<String> {
        self.to_view().to_json()
    }
}

impl IntoIterator for Chronology {
    type Item = ChronologyItem;
    type IntoIter = std::vec::IntoIter<ChronologyItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Chronology {
    type Item = &'a ChronologyItem;
    type IntoIter = std::slice::Iter<'a, ChronologyItem>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
