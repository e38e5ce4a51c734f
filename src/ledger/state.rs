use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::types::CoverageType;

use super::coverage::classify;

/// carry and balance between two weeks
///
/// Never mutated in place: [`LedgerState::apply_week`] returns the next
/// state. At most one of the two carries is positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerState {
    /// over-payment available to later weeks
    pub surplus_carry: Money,
    /// under-payment added to the next week's requirement
    pub deficit_carry: Money,
    /// amount still owed on the loan
    pub running_balance: Money,
}

/// result of one week's transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekOutcome {
    pub coverage: CoverageType,
    pub weekly_expected: Money,
    /// money received this week
    pub paid: Money,
    /// `weekly_expected` plus the deficit brought in
    pub required: Money,
    /// `paid` plus the surplus brought in
    pub available: Money,
    pub before: LedgerState,
    pub after: LedgerState,
}

impl LedgerState {
    /// state before the first week: nothing carried, everything owed
    pub fn opening(total_amount_due: Money) -> Self {
        Self {
            surplus_carry: Money::ZERO,
            deficit_carry: Money::ZERO,
            running_balance: total_amount_due.non_negative(),
        }
    }

    /// transition for a week in which `paid` was received
    pub fn apply_week(&self, weekly_expected: Money, paid: Money) -> WeekOutcome {
        let weekly_expected = weekly_expected.non_negative();
        let paid = paid.non_negative();

        let required = weekly_expected + self.deficit_carry;
        let available = paid + self.surplus_carry;
        let coverage = classify(weekly_expected, paid, available, required);

        let after = LedgerState {
            surplus_carry: available.saturating_sub(required),
            deficit_carry: required.saturating_sub(available),
            running_balance: self.running_balance - paid.min(self.running_balance),
        };

        WeekOutcome {
            coverage,
            weekly_expected,
            paid,
            required,
            available,
            before: *self,
            after,
        }
    }

    /// net carry: positive for surplus, negative for deficit
    pub fn net_carry(&self) -> Money {
        self.surplus_carry - self.deficit_carry
    }
}
