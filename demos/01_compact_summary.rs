/// compact summary - merged missed weeks and the statement summary block
use chrono::{Duration, TimeZone, Utc};
use payment_chronology::{
    ChronologyConfig, ChronologyEngine, LoanStatus, LoanTerms, Money, Payment, PaymentMethod,
    SafeTimeProvider, TimeSource,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let signed = Utc.with_ymd_and_hms(2024, 2, 5, 0, 0, 0).unwrap();
    let time = SafeTimeProvider::new(TimeSource::Test(signed));
    let controller = time.test_control().unwrap();

    let terms = LoanTerms {
        loan_id: Some("loan-002".to_string()),
        sign_date: signed,
        finished_date: None,
        status: LoanStatus::Active,
        week_duration: 14,
        total_amount_due: Money::from_major(4_200),
        amount_requested: Money::from_major(3_000),
    };

    // paid for two weeks, then went quiet
    let payments: Vec<Payment> = (0..2)
        .map(|week| Payment {
            id: format!("pay-{}", week + 1),
            received_at: signed + Duration::weeks(week) + Duration::days(1),
            amount: Money::from_major(300),
            payment_method: PaymentMethod::Cash,
            sequence: week as u32 + 1,
        })
        .collect();

    let engine = ChronologyEngine::new(ChronologyConfig::compact());

    for _ in 0..3 {
        controller.advance(Duration::weeks(3));
        let chronology = engine.reconstruct(&terms, &payments, &time);
        let summary = chronology.summary();

        println!("as of {}:", time.now().format("%Y-%m-%d"));
        for item in &chronology {
            println!("  {}", item.description);
        }
        println!(
            "  weeks {}/{}  full {}  missed {}  balance {}  reliability {}%\n",
            summary.effective_weeks,
            summary.nominal_weeks,
            summary.weeks_full,
            summary.weeks_missed,
            summary.final_balance.display_amount(),
            summary.reliability.percentage
        );
    }

    Ok(())
}
