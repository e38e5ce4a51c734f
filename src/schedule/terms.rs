use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::decimal::Money;
use crate::errors::{ChronologyError, Result};
use crate::types::LoanTerms;

/// longest contractual term accepted, about a century of weekly payments
pub const MAX_WEEK_DURATION: i32 = 5_200;

/// loan terms reduced to what the weekly ledger needs
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTerms {
    pub sign_date: DateTime<Utc>,
    pub total_amount_due: Money,
    /// total due spread evenly over the nominal term, unrounded
    pub weekly_expected: Money,
    /// contractual number of weeks
    pub nominal_weeks: u32,
    /// weeks actually on the grid: up to the finish date or `as_of`
    pub effective_weeks: u32,
}

impl NormalizedTerms {
    /// normalize terms against a reference instant used for still-running loans
    pub fn from_terms(terms: &LoanTerms, as_of: DateTime<Utc>) -> Result<Self> {
        validate_terms(terms)?;

        let nominal_weeks = terms.week_duration as u32;
        let weekly_expected = terms.total_amount_due / Decimal::from(nominal_weeks);

        let spanned = match terms.finished_date {
            Some(finished) => weeks_spanned(terms.sign_date, finished),
            None if terms.status.is_closed() => nominal_weeks,
            None => weeks_spanned(terms.sign_date, as_of),
        };

        // at least one week so that no payment is left without a bucket
        let effective_weeks = spanned.clamp(1, nominal_weeks);

        if terms
            .sign_date
            .checked_add_signed(Duration::weeks(i64::from(effective_weeks)))
            .is_none()
        {
            return Err(ChronologyError::GridOutOfRange {
                sign_date: terms.sign_date,
                weeks: effective_weeks,
            });
        }

        Ok(Self {
            sign_date: terms.sign_date,
            total_amount_due: terms.total_amount_due,
            weekly_expected,
            nominal_weeks,
            effective_weeks,
        })
    }

    /// true when the grid stops before the contractual term
    pub fn is_truncated(&self) -> bool {
        self.effective_weeks < self.nominal_weeks
    }
}

/// reject terms no ledger can be built from
pub fn validate_terms(terms: &LoanTerms) -> Result<()> {
    if terms.week_duration <= 0 {
        return Err(ChronologyError::InvalidWeekDuration {
            weeks: terms.week_duration,
        });
    }

    if terms.week_duration > MAX_WEEK_DURATION {
        return Err(ChronologyError::WeekDurationTooLong {
            weeks: terms.week_duration,
            max: MAX_WEEK_DURATION,
        });
    }

    if terms.total_amount_due.is_negative() {
        return Err(ChronologyError::NegativeAmountDue {
            amount: terms.total_amount_due,
        });
    }

    Ok(())
}

/// number of weeks touched by `[start, end]`, rounded up; 0 for empty spans
pub fn weeks_spanned(start: DateTime<Utc>, end: DateTime<Utc>) -> u32 {
    let span = end - start;
    if span <= Duration::zero() {
        return 0;
    }

    let whole = span.num_weeks();
    let remainder = span - Duration::weeks(whole);
    let weeks = if remainder > Duration::zero() { whole + 1 } else { whole };

    u32::try_from(weeks).unwrap_or(u32::MAX)
}
