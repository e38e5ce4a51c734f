use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::PaymentId;

/// side of the week grid a payment fell off
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ClampDirection {
    BeforeFirstWeek,
    AfterLastWeek,
}

/// data-quality findings recorded while reconstructing a chronology
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Diagnostic {
    /// terms unusable, chronology left empty
    TermsRejected {
        reason: String,
    },
    /// payment log unusable, chronology left empty
    PaymentLogRejected {
        reason: String,
    },
    /// payment timestamp outside the grid, moved to the nearest week
    PaymentClamped {
        payment_id: PaymentId,
        received_at: DateTime<Utc>,
        week_index: u32,
        direction: ClampDirection,
    },
    /// zero or negative amount on the payment log
    NonPositivePayment {
        payment_id: PaymentId,
        amount: Money,
    },
    /// more money received than the loan ever owed
    OverpaidBeyondTotal {
        excess: Money,
    },
}

/// diagnostics collected during a single reconstruction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DiagnosticLog {
    entries: Vec<Diagnostic>,
}

impl DiagnosticLog {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, diagnostic: Diagnostic) {
        self.entries.push(diagnostic);
    }

    pub fn extend(&mut self, other: DiagnosticLog) {
        self.entries.extend(other.entries);
    }

    pub fn entries(&self) -> &[Diagnostic] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clamped_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|d| matches!(d, Diagnostic::PaymentClamped { .. }))
            .count()
    }
}
