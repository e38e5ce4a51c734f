use std::collections::BTreeSet;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::chronology::ChronologyItem;
use crate::types::CoverageType;

/// share of expected weeks that were not missed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReliabilityScore {
    pub total_expected_weeks: u32,
    pub total_missed_weeks: u32,
    /// 0..=100
    pub percentage: u8,
}

impl ReliabilityScore {
    /// score a chronology, collapsed or not
    ///
    /// Collapsed rows stand for `week_count` consecutive weeks starting at
    /// their `week_index`, so both forms of the same chronology score alike.
    pub fn from_items(items: &[ChronologyItem]) -> Self {
        let mut expected = BTreeSet::new();
        let mut missed = BTreeSet::new();

        for item in items {
            let span = item.week_count.unwrap_or(1).max(1);
            let weeks = item.week_index..item.week_index.saturating_add(span);
            if item.coverage_type == CoverageType::Miss {
                missed.extend(weeks.clone());
            }
            expected.extend(weeks);
        }

        Self::from_counts(expected.len() as u32, missed.len() as u32)
    }

    /// score from raw week counts
    pub fn from_counts(total_expected_weeks: u32, total_missed_weeks: u32) -> Self {
        Self {
            total_expected_weeks,
            total_missed_weeks,
            percentage: percentage(total_expected_weeks, total_missed_weeks),
        }
    }

    pub fn met_weeks(&self) -> u32 {
        self.total_expected_weeks.saturating_sub(self.total_missed_weeks)
    }
}

/// `round(max(0, (expected - missed) / expected) * 100)`, 0 with no weeks
fn percentage(expected: u32, missed: u32) -> u8 {
    if expected == 0 {
        return 0;
    }

    let met = Decimal::from(expected) - Decimal::from(missed);
    let ratio = (met / Decimal::from(expected)).max(Decimal::ZERO);
    (ratio * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_u8()
        .unwrap_or(0)
        .min(100)
}
