use chrono::{DateTime, Utc};

use crate::config::ChronologyConfig;
use crate::ledger::{Ledger, LedgerWeek, WeekOutcome};
use crate::types::EntryType;

use super::description::{no_payment_description, payment_description};
use super::ChronologyItem;

/// flatten ledger weeks into chronology rows, one per payment or one per
/// empty week, in grid order
pub fn assemble(ledger: &Ledger<'_>, config: &ChronologyConfig) -> Vec<ChronologyItem> {
    let date_format = config.effective_date_format();
    let mut items = Vec::with_capacity(ledger.weeks.len());

    for week in &ledger.weeks {
        if week.bucket.is_empty() {
            items.push(no_payment_item(week, date_format));
        } else {
            items.extend(payment_items(week, date_format));
        }
    }

    items
}

fn no_payment_item(week: &LedgerWeek<'_>, date_format: &str) -> ChronologyItem {
    let index = week.bucket.week.index;
    let outcome = &week.outcome;
    let date = week.bucket.week.start;

    ChronologyItem {
        id: format!("week-{index}"),
        week_index: index,
        date,
        date_formatted: format_date(date, date_format),
        entry_type: EntryType::NoPayment,
        coverage_type: outcome.coverage,
        amount: None,
        weekly_expected: outcome.weekly_expected,
        weekly_paid: outcome.paid,
        surplus_before: outcome.before.surplus_carry,
        surplus_after: outcome.after.surplus_carry,
        deficit_before: outcome.before.deficit_carry,
        deficit_after: outcome.after.deficit_carry,
        balance_before: outcome.before.running_balance,
        balance_after: outcome.after.running_balance,
        description: no_payment_description(index, outcome),
        payment_number: None,
        payment_id: None,
        payment_method: None,
        week_count: None,
    }
}

/// one row per payment; the balance steps down payment by payment and
/// lands on the ledger's end-of-week balance
fn payment_items(week: &LedgerWeek<'_>, date_format: &str) -> Vec<ChronologyItem> {
    let index = week.bucket.week.index;
    let outcome: &WeekOutcome = &week.outcome;
    let mut balance = outcome.before.running_balance;

    week.bucket
        .payments
        .iter()
        .map(|numbered| {
            let payment = numbered.payment;
            let credited = payment.amount.non_negative().min(balance);
            let balance_before = balance;
            balance -= credited;

            ChronologyItem {
                id: format!("payment-{}", numbered.number),
                week_index: index,
                date: payment.received_at,
                date_formatted: format_date(payment.received_at, date_format),
                entry_type: EntryType::Payment,
                coverage_type: outcome.coverage,
                amount: Some(payment.amount),
                weekly_expected: outcome.weekly_expected,
                weekly_paid: outcome.paid,
                surplus_before: outcome.before.surplus_carry,
                surplus_after: outcome.after.surplus_carry,
                deficit_before: outcome.before.deficit_carry,
                deficit_after: outcome.after.deficit_carry,
                balance_before,
                balance_after: balance,
                description: payment_description(
                    numbered.number,
                    payment.amount,
                    payment.payment_method,
                    index,
                    outcome,
                ),
                payment_number: Some(numbered.number),
                payment_id: Some(payment.id.clone()),
                payment_method: Some(payment.payment_method),
                week_count: None,
            }
        })
        .collect()
}

fn format_date(date: DateTime<Utc>, format: &str) -> String {
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decimal::Money;
    use crate::ledger::run_ledger;
    use crate::schedule::{bucketize, NormalizedTerms, WeekGrid};
    use crate::types::{CoverageType, Payment, PaymentMethod};
    use chrono::{Duration, TimeZone};
    use rust_decimal::Decimal;

    fn sign() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()
    }

    fn terms(weeks: u32, total: i64) -> NormalizedTerms {
        NormalizedTerms {
            sign_date: sign(),
            total_amount_due: Money::from_major(total),
            weekly_expected: Money::from_major(total) / Decimal::from(weeks),
            nominal_weeks: weeks,
            effective_weeks: weeks,
        }
    }

    fn payment(id: &str, days: i64, amount: i64) -> Payment {
        Payment {
            id: id.to_string(),
            received_at: sign() + Duration::days(days),
            amount: Money::from_major(amount),
            payment_method: PaymentMethod::Cash,
            sequence: 0,
        }
    }

    fn build(terms: &NormalizedTerms, payments: &[Payment], config: &ChronologyConfig) -> Vec<ChronologyItem> {
        let grid = WeekGrid::build(terms.sign_date, terms.effective_weeks);
        let ledger = run_ledger(terms, bucketize(&grid, payments).buckets);
        assemble(&ledger, config)
    }

    #[test]
    fn test_two_payments_in_one_week_stay_separate() {
        let t = terms(4, 400);
        let payments = vec![payment("a", 1, 100), payment("b", 3, 100)];
        let items = build(&t, &payments, &ChronologyConfig::detailed());

        // two payment rows for week 1, then weeks 2..4 without payments
        assert_eq!(items.len(), 5);
        assert_eq!(items[0].entry_type, EntryType::Payment);
        assert_eq!(items[1].entry_type, EntryType::Payment);
        assert_eq!(items[0].week_index, 1);
        assert_eq!(items[1].week_index, 1);
        assert_eq!(items[0].coverage_type, CoverageType::Full);
        assert_eq!(items[1].coverage_type, CoverageType::Full);
        assert_eq!(items[0].weekly_paid, Money::from_major(200));

        assert_eq!(items[0].balance_before, Money::from_major(400));
        assert_eq!(items[0].balance_after, Money::from_major(300));
        assert_eq!(items[1].balance_before, Money::from_major(300));
        assert_eq!(items[1].balance_after, Money::from_major(200));

        assert_eq!(items[2].coverage_type, CoverageType::CoveredBySurplus);
        assert_eq!(items[2].surplus_before, Money::from_major(100));
        assert_eq!(items[2].surplus_after, Money::ZERO);
    }

    #[test]
    fn test_item_ids_and_numbers() {
        let t = terms(2, 200);
        let payments = vec![payment("x", 8, 100), payment("y", 2, 100)];
        let items = build(&t, &payments, &ChronologyConfig::detailed());

        assert_eq!(items[0].id, "payment-1");
        assert_eq!(items[0].payment_id.as_deref(), Some("y"));
        assert_eq!(items[0].payment_number, Some(1));
        assert_eq!(items[1].id, "payment-2");
        assert_eq!(items[1].payment_method, Some(PaymentMethod::Cash));
    }

    #[test]
    fn test_no_payment_row_uses_week_start() {
        let t = terms(2, 200);
        let items = build(&t, &[], &ChronologyConfig::detailed());

        assert_eq!(items.len(), 2);
        assert_eq!(items[1].id, "week-2");
        assert_eq!(items[1].date, sign() + Duration::days(7));
        assert_eq!(items[1].date_formatted, "08/01/2024");
        assert_eq!(items[1].amount, None);
        assert_eq!(items[1].coverage_type, CoverageType::Miss);
        assert_eq!(items[1].deficit_after, Money::from_major(200));
    }

    #[test]
    fn test_custom_date_format() {
        let t = terms(1, 100);
        let config = ChronologyConfig::detailed().with_date_format("%Y-%m-%d");
        let items = build(&t, &[payment("a", 0, 100)], &config);
        assert_eq!(items[0].date_formatted, "2024-01-01");
    }

    #[test]
    fn test_overpayment_balance_stops_at_zero() {
        let t = terms(2, 200);
        let payments = vec![payment("a", 1, 150), payment("b", 2, 150)];
        let items = build(&t, &payments, &ChronologyConfig::detailed());

        assert_eq!(items[1].balance_before, Money::from_major(50));
        assert_eq!(items[1].balance_after, Money::ZERO);
        assert_eq!(items[2].balance_after, Money::ZERO);
    }
}
