/// json snapshot - read persisted terms and payments, emit the chronology as json
use payment_chronology::{ChronologyConfig, ChronologyEngine, LoanSnapshot, SafeTimeProvider, TimeSource};
use chrono::{TimeZone, Utc};

const SNAPSHOT: &str = r#"{
    "terms": {
        "loanId": "loan-003",
        "signDate": "2024-03-04T10:00:00Z",
        "finishedDate": "2024-03-26T18:00:00Z",
        "status": "RENEWED",
        "weekDuration": 10,
        "totalAmountDue": "1500",
        "amountRequested": "1000"
    },
    "payments": [
        { "id": "a1", "receivedAt": "2024-03-01T12:00:00Z", "amount": "150", "paymentMethod": "CASH", "sequence": 1 },
        { "id": "a2", "receivedAt": "2024-03-12T12:00:00Z", "amount": "150", "paymentMethod": "CASH", "sequence": 2 },
        { "id": "a3", "receivedAt": "2024-03-26T17:00:00Z", "amount": "1200", "paymentMethod": "MONEY_TRANSFER", "sequence": 3 }
    ]
}"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let snapshot = LoanSnapshot::from_json(SNAPSHOT)?;
    let time = SafeTimeProvider::new(TimeSource::Test(
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    ));

    let engine = ChronologyEngine::new(ChronologyConfig::detailed());
    let chronology = engine.reconstruct_snapshot(&snapshot, &time);

    println!("{}", chronology.to_json()?);
    Ok(())
}
