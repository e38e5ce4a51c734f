use tracing::debug;

use crate::decimal::Money;
use crate::events::{Diagnostic, DiagnosticLog};
use crate::types::Payment;

use super::grid::{Week, WeekGrid};

/// payment with its 1-based position in the loan's canonical order
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberedPayment<'a> {
    pub number: u32,
    pub payment: &'a Payment,
}

/// payments received during one grid week
#[derive(Debug, Clone, PartialEq)]
pub struct WeekBucket<'a> {
    pub week: Week,
    pub payments: Vec<NumberedPayment<'a>>,
}

impl WeekBucket<'_> {
    /// raw sum of the amounts in this bucket
    pub fn total(&self) -> Money {
        self.payments.iter().map(|p| p.payment.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.payments.is_empty()
    }
}

/// buckets for every grid week plus findings about the input
#[derive(Debug, Clone)]
pub struct Bucketing<'a> {
    pub buckets: Vec<WeekBucket<'a>>,
    pub diagnostics: DiagnosticLog,
}

/// canonical payment order: received time, then sequence, then id; amount
/// and method break any remaining tie so the order is total
pub fn sort_payments(payments: &[Payment]) -> Vec<&Payment> {
    let mut sorted: Vec<&Payment> = payments.iter().collect();
    sorted.sort_by(|a, b| {
        a.received_at
            .cmp(&b.received_at)
            .then(a.sequence.cmp(&b.sequence))
            .then_with(|| a.id.cmp(&b.id))
            .then_with(|| a.amount.cmp(&b.amount))
            .then_with(|| a.payment_method.cmp(&b.payment_method))
    });
    sorted
}

/// assign every payment to exactly one week of the grid
pub fn bucketize<'a>(grid: &WeekGrid, payments: &'a [Payment]) -> Bucketing<'a> {
    let mut buckets: Vec<WeekBucket<'a>> = grid
        .iter()
        .map(|week| WeekBucket {
            week,
            payments: Vec::new(),
        })
        .collect();
    let mut diagnostics = DiagnosticLog::new();

    for (position, payment) in sort_payments(payments).into_iter().enumerate() {
        if !payment.amount.is_positive() {
            debug!(payment_id = %payment.id, amount = %payment.amount, "non-positive payment amount");
            diagnostics.record(Diagnostic::NonPositivePayment {
                payment_id: payment.id.clone(),
                amount: payment.amount,
            });
        }

        let Some(placement) = grid.locate(payment.received_at) else {
            continue;
        };

        if let Some(direction) = placement.clamped {
            debug!(
                payment_id = %payment.id,
                received_at = %payment.received_at,
                week = placement.week_index,
                ?direction,
                "payment outside week grid, clamped"
            );
            diagnostics.record(Diagnostic::PaymentClamped {
                payment_id: payment.id.clone(),
                received_at: payment.received_at,
                week_index: placement.week_index,
                direction,
            });
        }

        let number = u32::try_from(position + 1).unwrap_or(u32::MAX);
        if let Some(bucket) = buckets.get_mut((placement.week_index - 1) as usize) {
            bucket.payments.push(NumberedPayment { number, payment });
        }
    }

    Bucketing {
        buckets,
        diagnostics,
    }
}
