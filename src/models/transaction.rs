//! Transaction model
//!
//! Represents ledger transactions: income, expenses, and transfers between
//! accounts. Amounts are always positive; the kind determines how a
//! transaction moves account balances (see [`Transaction::balance_effects`]).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AccountId, TransactionId};
use super::money::Money;

/// Category label given to transfers regardless of user input
pub const TRANSFER_CATEGORY: &str = "Transfer";

/// Category label for synthetic transactions explaining manual balance edits
pub const BALANCE_ADJUSTMENT_CATEGORY: &str = "Balance Adjustment";

/// Kind of transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money entering the source account
    Income,
    /// Money leaving the source account
    Expense,
    /// Money moving from the source account to a destination account
    Transfer,
}

impl TransactionKind {
    /// Parse a kind from user input
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            "transfer" | "xfer" => Some(Self::Transfer),
            _ => None,
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expense => write!(f, "Expense"),
            Self::Transfer => write!(f, "Transfer"),
        }
    }
}

/// A ledger transaction
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// The source account
    pub account_id: AccountId,

    /// Destination account, present exactly for transfers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to_account_id: Option<AccountId>,

    /// Transaction kind
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Amount, always positive; direction comes from the kind
    pub amount: Money,

    /// Category label ("Groceries", "Salary", ...)
    pub category: String,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-text notes
    #[serde(default)]
    pub notes: String,

    /// When the transaction was created
    pub created_at: DateTime<Utc>,

    /// When the transaction was last modified
    pub updated_at: DateTime<Utc>,
}

impl Transaction {
    /// Create a new income or expense transaction
    pub fn new(
        account_id: AccountId,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        date: NaiveDate,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: TransactionId::new(),
            account_id,
            to_account_id: None,
            kind,
            amount,
            category: category.into().trim().to_string(),
            date,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Create a transfer between two accounts
    ///
    /// The category is always [`TRANSFER_CATEGORY`].
    pub fn transfer(
        from: AccountId,
        to: AccountId,
        amount: Money,
        date: NaiveDate,
    ) -> Self {
        let mut txn = Self::new(from, TransactionKind::Transfer, amount, TRANSFER_CATEGORY, date);
        txn.to_account_id = Some(to);
        txn
    }

    /// Create the synthetic transaction that explains a manual balance edit
    ///
    /// A positive difference becomes an Income record, a negative one an
    /// Expense, each of the absolute amount and categorized
    /// [`BALANCE_ADJUSTMENT_CATEGORY`].
    pub fn balance_adjustment(account_id: AccountId, difference: Money, date: NaiveDate) -> Self {
        let kind = if difference.is_negative() {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        };
        Self::new(
            account_id,
            kind,
            difference.abs(),
            BALANCE_ADJUSTMENT_CATEGORY,
            date,
        )
    }

    /// Attach notes
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Check if this is a transfer
    pub fn is_transfer(&self) -> bool {
        self.kind == TransactionKind::Transfer
    }

    /// Check if this is a synthetic balance adjustment
    pub fn is_balance_adjustment(&self) -> bool {
        !self.is_transfer() && self.category == BALANCE_ADJUSTMENT_CATEGORY
    }

    /// The signed balance deltas this transaction applies when posted
    ///
    /// Income credits the source, Expense debits it, Transfer debits the
    /// source and credits the destination. Reversal (on deletion) negates
    /// each delta.
    pub fn balance_effects(&self) -> Vec<(AccountId, Money)> {
        match self.kind {
            TransactionKind::Income => vec![(self.account_id, self.amount)],
            TransactionKind::Expense => vec![(self.account_id, -self.amount)],
            TransactionKind::Transfer => {
                let mut effects = vec![(self.account_id, -self.amount)];
                if let Some(to) = self.to_account_id {
                    effects.push((to, self.amount));
                }
                effects
            }
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if !self.amount.is_positive() {
            return Err(TransactionValidationError::AmountNotPositive(self.amount));
        }

        match self.kind {
            TransactionKind::Transfer => match self.to_account_id {
                None => return Err(TransactionValidationError::MissingDestination),
                Some(to) if to == self.account_id => {
                    return Err(TransactionValidationError::SelfTransfer)
                }
                Some(_) => {}
            },
            TransactionKind::Income | TransactionKind::Expense => {
                if self.to_account_id.is_some() {
                    return Err(TransactionValidationError::DestinationOnNonTransfer);
                }
                if self.category.trim().is_empty() {
                    return Err(TransactionValidationError::EmptyCategory);
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    AmountNotPositive(Money),
    MissingDestination,
    SelfTransfer,
    DestinationOnNonTransfer,
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AmountNotPositive(amount) => {
                write!(f, "Amount must be positive, got {}", amount)
            }
            Self::MissingDestination => {
                write!(f, "Transfer requires a destination account")
            }
            Self::SelfTransfer => {
                write!(f, "Transfer source and destination must differ")
            }
            Self::DestinationOnNonTransfer => {
                write!(f, "Only transfers may name a destination account")
            }
            Self::EmptyCategory => write!(f, "Category cannot be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}
