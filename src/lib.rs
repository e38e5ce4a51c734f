pub mod chronology;
pub mod config;
pub mod decimal;
pub mod engine;
pub mod errors;
pub mod events;
pub mod ledger;
pub mod reliability;
pub mod schedule;
pub mod types;

// re-export key types
pub use chronology::{Chronology, ChronologyItem, ChronologySummary, ChronologyView};
pub use config::ChronologyConfig;
pub use decimal::Money;
pub use engine::{input_fingerprint, reconstruct, reconstruct_as_of, ChronologyEngine};
pub use errors::{ChronologyError, Result};
pub use events::{ClampDirection, Diagnostic, DiagnosticLog};
pub use ledger::{LedgerState, WeekOutcome};
pub use reliability::ReliabilityScore;
pub use schedule::{NormalizedTerms, Week, WeekGrid};
pub use types::{
    CoverageType, EntryType, LoanSnapshot, LoanStatus, LoanTerms, Payment, PaymentId,
    PaymentMethod,
};

// re-export external dependencies that users will need
pub use chrono;
pub use hourglass_rs::{SafeTimeProvider, TimeSource};
pub use rust_decimal::Decimal;
