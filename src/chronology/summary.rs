use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::ledger::{Ledger, LedgerState};
use crate::reliability::ReliabilityScore;
use crate::schedule::NormalizedTerms;
use crate::types::CoverageType;

use super::ChronologyItem;

/// figures for the executive summary block of a loan statement
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChronologySummary {
    pub weekly_expected: Money,
    pub total_amount_due: Money,
    /// sum of every payment amount on the log
    pub total_paid: Money,
    pub final_balance: Money,
    pub final_surplus: Money,
    pub final_deficit: Money,
    pub nominal_weeks: u32,
    pub effective_weeks: u32,
    pub weeks_full: u32,
    pub weeks_covered_by_surplus: u32,
    pub weeks_partial: u32,
    pub weeks_missed: u32,
    pub reliability: ReliabilityScore,
}

impl ChronologySummary {
    pub fn from_ledger(terms: &NormalizedTerms, ledger: &Ledger<'_>, items: &[ChronologyItem]) -> Self {
        let count = |coverage: CoverageType| {
            ledger
                .weeks
                .iter()
                .filter(|w| w.outcome.coverage == coverage)
                .count() as u32
        };
        let closing: LedgerState = ledger.closing;

        Self {
            weekly_expected: terms.weekly_expected,
            total_amount_due: terms.total_amount_due,
            total_paid: items.iter().filter_map(|i| i.amount).sum(),
            final_balance: closing.running_balance,
            final_surplus: closing.surplus_carry,
            final_deficit: closing.deficit_carry,
            nominal_weeks: terms.nominal_weeks,
            effective_weeks: terms.effective_weeks,
            weeks_full: count(CoverageType::Full),
            weeks_covered_by_surplus: count(CoverageType::CoveredBySurplus),
            weeks_partial: count(CoverageType::Partial),
            weeks_missed: count(CoverageType::Miss),
            reliability: ReliabilityScore::from_items(items),
        }
    }

    /// loan fully repaid according to the ledger; never true without a grid
    pub fn is_settled(&self) -> bool {
        self.effective_weeks > 0 && self.final_balance.is_zero()
    }
}
