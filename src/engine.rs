use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use hourglass_rs::SafeTimeProvider;
use tracing::{debug, warn};

use crate::chronology::{assemble, collapse_misses, Chronology, ChronologySummary};
use crate::config::ChronologyConfig;
use crate::events::{Diagnostic, DiagnosticLog};
use crate::ledger::{payment_totals, run_ledger};
use crate::schedule::{bucketize, sort_payments, NormalizedTerms, WeekGrid};
use crate::types::{LoanSnapshot, LoanTerms, Payment};

/// reconstruct a loan's chronology, reading "now" from the time provider
///
/// Never fails: unusable terms give an empty chronology with a
/// `TermsRejected` diagnostic, and a payment log whose totals overflow gives
/// one with `PaymentLogRejected`.
pub fn reconstruct(
    terms: &LoanTerms,
    payments: &[Payment],
    config: &ChronologyConfig,
    time_provider: &SafeTimeProvider,
) -> Chronology {
    reconstruct_as_of(terms, payments, config, time_provider.now())
}

/// reconstruct against an explicit reference instant
pub fn reconstruct_as_of(
    terms: &LoanTerms,
    payments: &[Payment],
    config: &ChronologyConfig,
    as_of: DateTime<Utc>,
) -> Chronology {
    let loan_id = terms.loan_id.as_deref().unwrap_or("-");

    let normalized = match NormalizedTerms::from_terms(terms, as_of) {
        Ok(normalized) => normalized,
        Err(err) => {
            warn!(loan_id, error = %err, "loan terms rejected, returning empty chronology");
            let mut diagnostics = DiagnosticLog::new();
            diagnostics.record(Diagnostic::TermsRejected {
                reason: err.to_string(),
            });
            return Chronology::empty(diagnostics);
        }
    };

    let totals = match payment_totals(payments) {
        Ok(totals) => totals,
        Err(err) => {
            warn!(loan_id, error = %err, "payment log rejected, returning empty chronology");
            let mut diagnostics = DiagnosticLog::new();
            diagnostics.record(Diagnostic::PaymentLogRejected {
                reason: err.to_string(),
            });
            return Chronology::empty(diagnostics);
        }
    };

    let grid = WeekGrid::build(normalized.sign_date, normalized.effective_weeks);
    let bucketing = bucketize(&grid, payments);
    let mut diagnostics = bucketing.diagnostics;
    let ledger = run_ledger(&normalized, bucketing.buckets);

    if totals.credited > normalized.total_amount_due {
        diagnostics.record(Diagnostic::OverpaidBeyondTotal {
            excess: totals.credited - normalized.total_amount_due,
        });
    }

    let items = assemble(&ledger, config);
    let summary = ChronologySummary::from_ledger(&normalized, &ledger, &items);
    let items = if config.collapse_misses {
        collapse_misses(items)
    } else {
        items
    };

    debug!(
        loan_id,
        weeks = normalized.effective_weeks,
        rows = items.len(),
        reliability = summary.reliability.percentage,
        diagnostics = diagnostics.entries().len(),
        "chronology reconstructed"
    );

    Chronology::new(items, summary, diagnostics)
}

/// order-independent hash of the engine inputs, for in-process memoization
pub fn input_fingerprint(terms: &LoanTerms, payments: &[Payment]) -> u64 {
    let mut hasher = DefaultHasher::new();
    terms.hash(&mut hasher);
    for payment in sort_payments(payments) {
        payment.hash(&mut hasher);
    }
    hasher.finish()
}

/// engine bound to one configuration, shared by the PDF and UI call sites
#[derive(Debug, Clone, Default)]
pub struct ChronologyEngine {
    config: ChronologyConfig,
}

impl ChronologyEngine {
    pub fn new(config: ChronologyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ChronologyConfig {
        &self.config
    }

    pub fn reconstruct(
        &self,
        terms: &LoanTerms,
        payments: &[Payment],
        time_provider: &SafeTimeProvider,
    ) -> Chronology {
        reconstruct(terms, payments, &self.config, time_provider)
    }

    pub fn reconstruct_snapshot(
        &self,
        snapshot: &LoanSnapshot,
        time_provider: &SafeTimeProvider,
    ) -> Chronology {
        reconstruct(&snapshot.terms, &snapshot.payments, &self.config, time_provider)
    }
}
