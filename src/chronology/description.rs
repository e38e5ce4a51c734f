use crate::decimal::Money;
use crate::ledger::WeekOutcome;
use crate::types::{CoverageType, PaymentMethod};

/// text for a payment row
pub fn payment_description(
    number: u32,
    amount: Money,
    method: PaymentMethod,
    week_index: u32,
    outcome: &WeekOutcome,
) -> String {
    let head = format!(
        "Payment #{} of {} ({}) in week {}",
        number,
        amount.display_amount(),
        method.label(),
        week_index
    );

    if !amount.is_positive() {
        return format!("{head}, not credited");
    }

    format!("{head}, week {}{}", outcome.coverage.label(), carry_note(outcome))
}

/// text for a week with nothing received
pub fn no_payment_description(week_index: u32, outcome: &WeekOutcome) -> String {
    let head = format!("No payment in week {week_index}");
    match outcome.coverage {
        CoverageType::Full => format!("{head}, nothing due"),
        CoverageType::CoveredBySurplus => format!(
            "{head}, covered by surplus of {}{}",
            outcome.before.surplus_carry.display_amount(),
            carry_note(outcome)
        ),
        CoverageType::Partial => format!(
            "{head}, surplus of {} partially covered the week{}",
            outcome.before.surplus_carry.display_amount(),
            carry_note(outcome)
        ),
        CoverageType::Miss => format!(
            "{head}, {} overdue",
            outcome.after.deficit_carry.display_amount()
        ),
    }
}

/// text for a merged run of missed weeks
pub fn missed_run_description(first_week: u32, last_week: u32, overdue: Money) -> String {
    let weeks = last_week - first_week + 1;
    format!(
        "No payments for {weeks} weeks (weeks {first_week}-{last_week}), {} overdue",
        overdue.display_amount()
    )
}

fn carry_note(outcome: &WeekOutcome) -> String {
    if outcome.after.surplus_carry.is_positive() {
        format!(", {} carried forward", outcome.after.surplus_carry.display_amount())
    } else if outcome.after.deficit_carry.is_positive() {
        format!(", {} overdue", outcome.after.deficit_carry.display_amount())
    } else {
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::LedgerState;

    fn m(v: i64) -> Money {
        Money::from_major(v)
    }

    #[test]
    fn test_payment_text() {
        let outcome = LedgerState::opening(m(400)).apply_week(m(100), m(150));
        let text = payment_description(1, m(150), PaymentMethod::Cash, 1, &outcome);
        assert_eq!(text, "Payment #1 of 150.00 (cash) in week 1, week fully paid, 50.00 carried forward");
    }

    #[test]
    fn test_partial_payment_text() {
        let outcome = LedgerState::opening(m(400)).apply_week(m(100), m(60));
        let text = payment_description(3, m(60), PaymentMethod::MoneyTransfer, 2, &outcome);
        assert_eq!(text, "Payment #3 of 60.00 (transfer) in week 2, week partially paid, 40.00 overdue");
    }

    #[test]
    fn test_non_positive_payment_text() {
        let outcome = LedgerState::opening(m(400)).apply_week(m(100), Money::ZERO);
        let text = payment_description(2, m(-5), PaymentMethod::Cash, 1, &outcome);
        assert!(text.ends_with("not credited"));
    }

    #[test]
    fn test_no_payment_texts() {
        let missed = LedgerState::opening(m(400)).apply_week(m(100), Money::ZERO);
        assert_eq!(no_payment_description(1, &missed), "No payment in week 1, 100.00 overdue");

        let ahead = LedgerState::opening(m(400)).apply_week(m(100), m(200)).after;
        let covered = ahead.apply_week(m(100), Money::ZERO);
        assert_eq!(
            no_payment_description(2, &covered),
            "No payment in week 2, covered by surplus of 100.00"
        );
    }

    #[test]
    fn test_missed_run_text() {
        assert_eq!(
            missed_run_description(4, 6, m(300)),
            "No payments for 3 weeks (weeks 4-6), 300.00 overdue"
        );
    }
}
