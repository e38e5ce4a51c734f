pub mod coverage;
pub mod state;

use tracing::trace;

use crate::decimal::Money;
use crate::errors::{ChronologyError, Result};
use crate::schedule::{NormalizedTerms, WeekBucket};
use crate::types::Payment;

pub use coverage::classify;
pub use state::{LedgerState, WeekOutcome};

/// a grid week with its payments and the ledger transition it produced
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerWeek<'a> {
    pub bucket: WeekBucket<'a>,
    pub outcome: WeekOutcome,
}

/// every week walked in order, plus the state after the last one
#[derive(Debug, Clone)]
pub struct Ledger<'a> {
    pub weeks: Vec<LedgerWeek<'a>>,
    pub closing: LedgerState,
}

/// positive and non-positive sides of a payment log, summed separately
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaymentTotals {
    pub credited: Money,
    pub debited: Money,
}

/// sum the payment log with overflow checks; every running total the ledger
/// and the rows compute stays between `debited` and `credited`
pub fn payment_totals(payments: &[Payment]) -> Result<PaymentTotals> {
    let overflow = || ChronologyError::AmountOverflow {
        payments: payments.len(),
    };
    let (positive, non_positive): (Vec<Money>, Vec<Money>) = payments
        .iter()
        .map(|p| p.amount)
        .partition(Money::is_positive);

    Ok(PaymentTotals {
        credited: Money::checked_sum(positive).ok_or_else(overflow)?,
        debited: Money::checked_sum(non_positive).ok_or_else(overflow)?,
    })
}

/// money from a bucket that counts toward the obligation; non-positive
/// entries are reported upstream and ignored here
pub fn creditable_amount(bucket: &WeekBucket<'_>) -> Money {
    bucket
        .payments
        .iter()
        .map(|p| p.payment.amount)
        .filter(Money::is_positive)
        .sum()
}

/// walk the buckets left to right, threading the ledger state through
pub fn run_ledger<'a>(terms: &NormalizedTerms, buckets: Vec<WeekBucket<'a>>) -> Ledger<'a> {
    let opening = LedgerState::opening(terms.total_amount_due);
    let capacity = buckets.len();

    let (weeks, closing) = buckets.into_iter().fold(
        (Vec::with_capacity(capacity), opening),
        |(mut weeks, state), bucket| {
            let outcome = state.apply_week(terms.weekly_expected, creditable_amount(&bucket));
            trace!(
                week = bucket.week.index,
                paid = %outcome.paid,
                required = %outcome.required,
                coverage = ?outcome.coverage,
                balance = %outcome.after.running_balance,
                "week classified"
            );
            let next = outcome.after;
            weeks.push(LedgerWeek { bucket, outcome });
            (weeks, next)
        },
    );

    Ledger { weeks, closing }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::{bucketize, WeekGrid};
    use crate::types::{CoverageType, Payment, PaymentMethod};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use rust_decimal::Decimal;

    fn sign() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn normalized(weeks: u32, total: i64) -> NormalizedTerms {
        NormalizedTerms {
            sign_date: sign(),
            total_amount_due: Money::from_major(total),
            weekly_expected: Money::from_major(total) / Decimal::from(weeks),
            nominal_weeks: weeks,
            effective_weeks: weeks,
        }
    }

    fn paid_in_week(week: i64, amount: i64) -> Payment {
        Payment {
            id: format!("w{week}-{amount}"),
            received_at: sign() + Duration::weeks(week - 1) + Duration::days(2),
            amount: Money::from_major(amount),
            payment_method: PaymentMethod::Cash,
            sequence: 0,
        }
    }

    fn coverages(ledger: &Ledger<'_>) -> Vec<CoverageType> {
        ledger.weeks.iter().map(|w| w.outcome.coverage).collect()
    }

    #[test]
    fn test_fold_threads_state() {
        let terms = normalized(4, 400);
        let payments = vec![paid_in_week(1, 100), paid_in_week(3, 200), paid_in_week(4, 100)];
        let grid = WeekGrid::build(sign(), 4);

        let ledger = run_ledger(&terms, bucketize(&grid, &payments).buckets);
        assert_eq!(
            coverages(&ledger),
            vec![CoverageType::Full, CoverageType::Miss, CoverageType::Full, CoverageType::Full]
        );
        for pair in ledger.weeks.windows(2) {
            assert_eq!(pair[0].outcome.after, pair[1].outcome.before);
        }
        assert_eq!(ledger.closing.running_balance, Money::ZERO);
        assert_eq!(ledger.closing.deficit_carry, Money::ZERO);
    }

    #[test]
    fn test_negative_entries_do_not_reduce_obligation() {
        let terms = normalized(2, 200);
        let payments = vec![paid_in_week(1, 100), paid_in_week(1, -40)];
        let grid = WeekGrid::build(sign(), 2);

        let bucketing = bucketize(&grid, &payments);
        assert_eq!(creditable_amount(&bucketing.buckets[0]), Money::from_major(100));

        let ledger = run_ledger(&terms, bucketing.buckets);
        assert_eq!(ledger.weeks[0].outcome.coverage, CoverageType::Full);
        assert_eq!(ledger.weeks[0].outcome.after.running_balance, Money::from_major(100));
    }

    #[test]
    fn test_payment_totals_split_and_overflow() {
        let payments = vec![paid_in_week(1, 100), paid_in_week(1, -40), paid_in_week(2, 0), paid_in_week(2, 60)];
        let totals = payment_totals(&payments).unwrap();
        assert_eq!(totals.credited, Money::from_major(160));
        assert_eq!(totals.debited, Money::from_major(-40));

        let mut huge = vec![paid_in_week(1, 1), paid_in_week(1, 2)];
        for payment in &mut huge {
            payment.amount = Money::from_str_exact("50000000000000000000000000000").unwrap();
        }
        assert!(matches!(
            payment_totals(&huge),
            Err(ChronologyError::AmountOverflow { payments: 2 })
        ));
    }

    #[test]
    fn test_empty_buckets_yield_opening_state() {
        let terms = normalized(3, 300);
        let ledger = run_ledger(&terms, Vec::new());
        assert!(ledger.weeks.is_empty());
        assert_eq!(ledger.closing, LedgerState::opening(Money::from_major(300)));
    }
}
