//! Transaction model
//!
//! A single recorded money movement. The amount is always a positive
//! magnitude; whether it adds to or subtracts from the balance is carried by
//! the transaction type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;
use crate::catalog::Category;
use crate::error::TrackerError;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    Income,
    Expense,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Sign prefix used when rendering an amount of this type
    pub fn sign(&self) -> char {
        match self {
            Self::Income => '+',
            Self::Expense => '-',
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(TrackerError::Validation(format!(
                "Unknown transaction type '{}'. Expected 'income' or 'expense'",
                other
            ))),
        }
    }
}

/// Largest amount a single transaction may carry (one billion units)
///
/// Keeps the report sums of any realistic ledger inside `i64` cents.
pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: TransactionId,

    /// What the money was for
    pub description: String,

    /// Positive magnitude
    pub amount: Money,

    pub category: Category,

    #[serde(rename = "type")]
    pub kind: TransactionType,

    /// When the transaction was recorded
    pub date: DateTime<Utc>,
}

impl Transaction {
    /// Create a transaction dated now
    pub fn new(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        kind: TransactionType,
    ) -> Self {
        Self::with_date(description, amount, category, kind, Utc::now())
    }

    /// Create a transaction with an explicit date
    pub fn with_date(
        description: impl Into<String>,
        amount: Money,
        category: Category,
        kind: TransactionType,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            description: description.into(),
            amount,
            category,
            kind,
            date,
        }
    }

    pub fn is_income(&self) -> bool {
        self.kind == TransactionType::Income
    }

    pub fn is_expense(&self) -> bool {
        self.kind == TransactionType::Expense
    }

    /// Amount with the sign implied by the type (expenses are negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionType::Income => self.amount,
            TransactionType::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.description.trim().is_empty() {
            return Err(TransactionValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(TransactionValidationError::NonPositiveAmount(self.amount));
        }

        if self.amount > MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}{}",
            self.id,
            self.description,
            self.kind.sign(),
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    EmptyDescription,
    NonPositiveAmount(Money),
    AmountTooLarge(Money),
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(amount) => {
                write!(f, "Amount must be greater than zero (got {})", amount)
            }
            Self::AmountTooLarge(amount) => {
                write!(f, "Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT)
            }
        }
    }
}

impl std::error::Error for TransactionValidationError {}
