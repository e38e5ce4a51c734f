/// quick start - reconstruct a loan's weekly payment history
use chrono::{Duration, TimeZone, Utc};
use payment_chronology::{
    reconstruct, ChronologyConfig, LoanStatus, LoanTerms, Money, Payment, PaymentMethod,
    SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let signed = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();

    // 4-week loan, 400 due in total
    let terms = LoanTerms {
        loan_id: Some("loan-001".to_string()),
        sign_date: signed,
        finished_date: None,
        status: LoanStatus::Active,
        week_duration: 4,
        total_amount_due: Money::from_major(400),
        amount_requested: Money::from_major(300),
    };

    // week 2 skipped, caught up in week 3
    let payments = vec![
        Payment {
            id: "pay-1".to_string(),
            received_at: signed + Duration::days(2),
            amount: Money::from_major(100),
            payment_method: PaymentMethod::Cash,
            sequence: 1,
        },
        Payment {
            id: "pay-2".to_string(),
            received_at: signed + Duration::days(16),
            amount: Money::from_major(200),
            payment_method: PaymentMethod::MoneyTransfer,
            sequence: 2,
        },
        Payment {
            id: "pay-3".to_string(),
            received_at: signed + Duration::days(23),
            amount: Money::from_major(100),
            payment_method: PaymentMethod::Cash,
            sequence: 3,
        },
    ];

    let time = SafeTimeProvider::new(TimeSource::Test(signed + Duration::weeks(5)));
    let chronology = reconstruct(&terms, &payments, &ChronologyConfig::detailed(), &time);

    for item in &chronology {
        println!(
            "[{}] week {:>2} {:<18} balance {} -> {}  {}",
            item.date_formatted,
            item.week_index,
            item.coverage_type.label(),
            item.balance_before.display_amount(),
            item.balance_after.display_amount(),
            item.description
        );
    }

    let score = chronology.reliability();
    println!(
        "\nreliability: {}% ({} of {} weeks missed)",
        score.percentage, score.total_missed_weeks, score.total_expected_weeks
    );

    Ok(())
}
