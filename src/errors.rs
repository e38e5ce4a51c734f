use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::decimal::Money;

#[derive(Error, Debug)]
pub enum ChronologyError {
    #[error("invalid week duration: {weeks}")]
    InvalidWeekDuration {
        weeks: i32,
    },

    #[error("week duration {weeks} exceeds the maximum of {max} weeks")]
    WeekDurationTooLong {
        weeks: i32,
        max: i32,
    },

    #[error("a grid of {weeks} weeks from {sign_date} runs past the supported calendar")]
    GridOutOfRange {
        sign_date: DateTime<Utc>,
        weeks: u32,
    },

    #[error("payment amounts overflow when summed over {payments} payments")]
    AmountOverflow {
        payments: usize,
    },

    #[error("negative total amount due: {amount}")]
    NegativeAmountDue {
        amount: Money,
    },

    #[error("invalid amount: {value}")]
    InvalidAmount {
        value: String,
    },

    #[error("invalid date format: {format}")]
    InvalidDateFormat {
        format: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ChronologyError>;
