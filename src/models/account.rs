//! Account model
//!
//! Represents financial accounts (bank accounts, wallets, cash reserves).
//! The account kind is a free-text label rather than a fixed enum; users
//! tag accounts however they like ("Bank", "Cash", "Brokerage").

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::AccountId;
use super::money::Money;

/// A financial account
///
/// `balance` is a running cache kept in sync with transaction history by the
/// ledger service; `initial_balance` is the balance the account was opened
/// with and never changes, so the two together anchor integrity checks:
/// `balance == initial_balance + sum(signed transaction amounts)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier
    pub id: AccountId,

    /// Account name (e.g., "Chase Checking")
    pub name: String,

    /// Free-text kind label (e.g., "Bank", "Cash"); may be empty
    #[serde(rename = "type", default)]
    pub kind: String,

    /// Currency code (uppercase, e.g. "USD"); fixed at creation
    pub currency: String,

    /// Balance the account was opened with
    pub initial_balance: Money,

    /// Running balance, updated by the ledger on every posting
    pub balance: Money,

    /// When the account was created
    pub created_at: DateTime<Utc>,

    /// When the account was last modified
    pub updated_at: DateTime<Utc>,
}

impl Account {
    /// Create a new account with an opening balance
    ///
    /// The currency code is trimmed and uppercased; the running balance
    /// starts equal to the opening balance.
    pub fn new(
        name: impl Into<String>,
        kind: impl Into<String>,
        currency: impl Into<String>,
        opening_balance: Money,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: AccountId::new(),
            name: name.into(),
            kind: kind.into().trim().to_string(),
            currency: currency.into().trim().to_uppercase(),
            initial_balance: opening_balance,
            balance: opening_balance,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a signed balance adjustment
    pub fn apply_delta(&mut self, delta: Money) {
        self.balance += delta;
        self.updated_at = Utc::now();
    }

    /// Rename the account
    pub fn rename(&mut self, name: impl Into<String>) {
        self.name = name.into();
        self.updated_at = Utc::now();
    }

    /// Change the kind label
    pub fn set_kind(&mut self, kind: impl Into<String>) {
        self.kind = kind.into().trim().to_string();
        self.updated_at = Utc::now();
    }

    /// Validate the account
    pub fn validate(&self) -> Result<(), AccountValidationError> {
        if self.name.trim().is_empty() {
            return Err(AccountValidationError::EmptyName);
        }

        if self.name.len() > 100 {
            return Err(AccountValidationError::NameTooLong(self.name.len()));
        }

        if self.currency.trim().is_empty() {
            return Err(AccountValidationError::EmptyCurrency);
        }

        if self.currency.len() > 8 {
            return Err(AccountValidationError::CurrencyTooLong(self.currency.len()));
        }

        Ok(())
    }
}

impl fmt::Display for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} ({})", self.name, self.kind)
        }
    }
}

/// Validation errors for accounts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountValidationError {
    EmptyName,
    NameTooLong(usize),
    EmptyCurrency,
    CurrencyTooLong(usize),
}

impl fmt::Display for AccountValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Account name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Account name too long ({} chars, max 100)", len)
            }
            Self::EmptyCurrency => write!(f, "Currency code cannot be empty"),
            Self::CurrencyTooLong(len) => {
                write!(f, "Currency code too long ({} chars, max 8)", len)
            }
        }
    }
}

impl std::error::Error for AccountValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_account() {
        let account = Account::new("Checking", "Bank", "usd", Money::from_cents(50000));
        assert_eq!(account.name, "Checking");
        assert_eq!(account.kind, "Bank");
        assert_eq!(account.currency, "USD");
        assert_eq!(account.initial_balance.cents(), 50000);
        assert_eq!(account.balance.cents(), 50000);
    }

    #[test]
    fn test_apply_delta() {
        let mut account = Account::new("Wallet", "Cash", "USD", Money::from_cents(1000));
        account.apply_delta(Money::from_cents(250));
        assert_eq!(account.balance.cents(), 1250);

        account.apply_delta(Money::from_cents(-500));
        assert_eq!(account.balance.cents(), 750);

        // Opening balance never moves
        assert_eq!(account.initial_balance.cents(), 1000);
    }

    #[test]
    fn test_rename_and_kind() {
        let mut account = Account::new("Old", "Bank", "USD", Money::zero());
        account.rename("New");
        assert_eq!(account.name, "New");

        account.set_kind("  Savings  ");
        assert_eq!(account.kind, "Savings");
    }

    #[test]
    fn test_validation() {
        let mut account = Account::new("Valid Name", "Bank", "USD", Money::zero());
        assert!(account.validate().is_ok());

        account.name = String::new();
        assert_eq!(account.validate(), Err(AccountValidationError::EmptyName));

        account.name = "a".repeat(101);
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::NameTooLong(_))
        ));

        account.name = "Fine".into();
        account.currency = "  ".into();
        assert_eq!(
            account.validate(),
            Err(AccountValidationError::EmptyCurrency)
        );

        account.currency = "TOOLONGCODE".into();
        assert!(matches!(
            account.validate(),
            Err(AccountValidationError::CurrencyTooLong(_))
        ));
    }

    #[test]
    fn test_empty_kind_allowed() {
        let account = Account::new("Misc", "", "USD", Money::zero());
        assert!(account.validate().is_ok());
        assert_eq!(format!("{}", account), "Misc");
    }

    #[test]
    fn test_serialization() {
        let account = Account::new("Test", "Bank", "USD", Money::from_cents(100));
        let json = serde_json::to_string(&account).unwrap();
        // the kind label serializes under the "type" key
        assert!(json.contains("\"type\":\"Bank\""));

        let deserialized: Account = serde_json::from_str(&json).unwrap();
        assert_eq!(account.id, deserialized.id);
        assert_eq!(account.name, deserialized.name);
        assert_eq!(account.balance, deserialized.balance);
    }

    #[test]
    fn test_display() {
        let account = Account::new("My Checking", "Bank", "USD", Money::zero());
        assert_eq!(format!("{}", account), "My Checking (Bank)");
    }
}
