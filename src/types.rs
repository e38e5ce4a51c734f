use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::decimal::Money;
use crate::errors::Result;

/// opaque payment identifier as stored upstream
pub type PaymentId = String;

/// loan status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    /// disbursed and collecting
    Active,
    /// fully paid off
    Finished,
    /// closed by a new loan that absorbed the pending balance
    Renewed,
    /// written off as uncollectable
    BadDebt,
    /// approved, not yet disbursed
    Pending,
}

impl LoanStatus {
    /// closed loans stop accruing weeks even without a finish date on record
    pub fn is_closed(&self) -> bool {
        matches!(
            self,
            LoanStatus::Finished | LoanStatus::Renewed | LoanStatus::BadDebt
        )
    }
}

/// how a payment was collected
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash,
    MoneyTransfer,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Cash => "cash",
            PaymentMethod::MoneyTransfer => "transfer",
        }
    }
}

/// how a week's obligation was satisfied
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverageType {
    /// payments this week met the requirement
    Full,
    /// no payment this week, carried surplus met the requirement
    CoveredBySurplus,
    /// something arrived but less than required
    Partial,
    /// nothing paid and nothing carried
    Miss,
}

/// chronology row kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryType {
    Payment,
    NoPayment,
}

/// loan terms snapshot
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTerms {
    #[serde(default)]
    pub loan_id: Option<String>,
    pub sign_date: DateTime<Utc>,
    #[serde(default)]
    pub finished_date: Option<DateTime<Utc>>,
    pub status: LoanStatus,
    /// number of expected weekly payments; signed so bad upstream rows still load
    pub week_duration: i32,
    /// principal plus profit
    pub total_amount_due: Money,
    pub amount_requested: Money,
}

/// one real-world payment on a loan
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub received_at: DateTime<Utc>,
    pub amount: Money,
    pub payment_method: PaymentMethod,
    /// position among this loan's payments, used only to break timestamp ties
    #[serde(default)]
    pub sequence: u32,
}

/// terms plus payment log as handed over by persistence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanSnapshot {
    pub terms: LoanTerms,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

impl LoanSnapshot {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
