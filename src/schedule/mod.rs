pub mod bucket;
pub mod grid;
pub mod terms;

pub use bucket::{bucketize, sort_payments, Bucketing, NumberedPayment, WeekBucket};
pub use grid::{Placement, Week, WeekGrid};
pub use terms::{validate_terms, weeks_spanned, NormalizedTerms};
