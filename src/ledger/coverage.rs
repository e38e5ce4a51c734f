use crate::decimal::Money;
use crate::types::CoverageType;

/// classify one week from what was owed and what could be put against it
///
/// `required` already includes any carried deficit and `available` any
/// carried surplus; `paid` is only the money received during the week.
pub fn classify(
    weekly_expected: Money,
    paid: Money,
    available: Money,
    required: Money,
) -> CoverageType {
    if weekly_expected.is_zero() {
        return CoverageType::Full;
    }

    if available >= required {
        if paid.is_positive() {
            CoverageType::Full
        } else {
            CoverageType::CoveredBySurplus
        }
    } else if available.is_positive() {
        CoverageType::Partial
    } else {
        CoverageType::Miss
    }
}

impl CoverageType {
    /// the week's obligation was met one way or another
    pub fn is_satisfied(&self) -> bool {
        matches!(self, CoverageType::Full | CoverageType::CoveredBySurplus)
    }

    pub fn label(&self) -> &'static str {
        match self {
            CoverageType::Full => "fully paid",
            CoverageType::CoveredBySurplus => "covered by surplus",
            CoverageType::Partial => "partially paid",
            CoverageType::Miss => "missed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m(v: i64) -> Money {
        Money::from_major(v)
    }

    #[test]
    fn test_paid_in_full() {
        assert_eq!(classify(m(100), m(100), m(100), m(100)), CoverageType::Full);
        // overpayment is still full, the excess carries forward
        assert_eq!(classify(m(100), m(250), m(250), m(100)), CoverageType::Full);
    }

    #[test]
    fn test_small_payment_topped_up_by_surplus_is_full() {
        assert_eq!(classify(m(100), m(30), m(100), m(100)), CoverageType::Full);
    }

    #[test]
    fn test_surplus_only() {
        assert_eq!(classify(m(100), m(0), m(120), m(100)), CoverageType::CoveredBySurplus);
        assert!(CoverageType::CoveredBySurplus.is_satisfied());
    }

    #[test]
    fn test_partial() {
        assert_eq!(classify(m(100), m(50), m(50), m(100)), CoverageType::Partial);
        // leftover surplus that cannot cover the whole week
        assert_eq!(classify(m(100), m(0), m(40), m(100)), CoverageType::Partial);
        assert!(!CoverageType::Partial.is_satisfied());
    }

    #[test]
    fn test_miss() {
        assert_eq!(classify(m(100), m(0), m(0), m(200)), CoverageType::Miss);
    }

    #[test]
    fn test_zero_expected_is_full() {
        assert_eq!(classify(m(0), m(0), m(0), m(0)), CoverageType::Full);
    }
}
