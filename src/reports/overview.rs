//! Overview report
//!
//! The landing view: balances grouped by currency, the account list, and
//! the most recent transactions. Accounts holding different currencies are
//! never summed together.

use crate::error::FintrackResult;
use crate::models::{Account, Money, Transaction, TransactionKind};
use crate::storage::Storage;

/// Total balance held in one currency
#[derive(Debug, Clone)]
pub struct CurrencyTotal {
    pub currency: String,
    pub total_balance: Money,
    pub account_count: usize,
}

/// Snapshot of the whole ledger for the overview screen
#[derive(Debug, Clone)]
pub struct Overview {
    /// Profile display name, when one is set
    pub profile_name: Option<String>,
    /// Accounts in name order
    pub accounts: Vec<Account>,
    /// Per-currency balance totals, in currency code order
    pub currency_totals: Vec<CurrencyTotal>,
    /// Most recent transactions, newest first
    pub recent_transactions: Vec<Transaction>,
    pub transaction_count: usize,
}

impl Overview {
    /// Generate the overview, showing at most `recent_limit` transactions
    pub fn generate(storage: &Storage, recent_limit: usize) -> FintrackResult<Self> {
        let accounts = storage.accounts.get_all()?;
        let profile_name = storage.profile.get()?.map(|p| p.name);

        let mut currency_totals: Vec<CurrencyTotal> = Vec::new();
        for account in &accounts {
            match currency_totals
                .iter_mut()
                .find(|t| t.currency == account.currency)
            {
                Some(total) => {
                    total.total_balance += account.balance;
                    total.account_count += 1;
                }
                None => currency_totals.push(CurrencyTotal {
                    currency: account.currency.clone(),
                    total_balance: account.balance,
                    account_count: 1,
                }),
            }
        }
        currency_totals.sort_by(|a, b| a.currency.cmp(&b.currency));

        let mut recent_transactions = storage.transactions.get_all()?;
        let transaction_count = recent_transactions.len();
        recent_transactions.truncate(recent_limit);

        Ok(Self {
            profile_name,
            accounts,
            currency_totals,
            recent_transactions,
            transaction_count,
        })
    }

    /// Format the overview for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        match &self.profile_name {
            Some(name) => output.push_str(&format!("Overview for {}\n", name)),
            None => output.push_str("Overview\n"),
        }
        output.push_str(&"=".repeat(52));
        output.push('\n');

        if self.accounts.is_empty() {
            output.push_str("\nNo accounts yet. Add one with `fintrack account add`.\n");
            return output;
        }

        output.push_str("\nBalances\n");
        for total in &self.currency_totals {
            let label = if total.account_count == 1 {
                "account"
            } else {
                "accounts"
            };
            output.push_str(&format!(
                "  {}: {} across {} {}\n",
                total.currency,
                total.total_balance.grouped(),
                total.account_count,
                label
            ));
        }

        let name_width = self
            .accounts
            .iter()
            .map(|a| a.name.len())
            .max()
            .unwrap_or(4)
            .max(4);
        output.push_str("\nAccounts\n");
        for account in &self.accounts {
            output.push_str(&format!(
                "  {:<name_width$}  {:>14} {}\n",
                account.name,
                account.balance.grouped(),
                account.currency,
                name_width = name_width,
            ));
        }

        output.push_str(&format!(
            "\nRecent transactions ({} of {})\n",
            self.recent_transactions.len(),
            self.transaction_count
        ));
        if self.recent_transactions.is_empty() {
            output.push_str("  (none yet)\n");
        }
        for txn in &self.recent_transactions {
            let sign = match txn.kind {
                TransactionKind::Income => "+",
                TransactionKind::Expense => "-",
                TransactionKind::Transfer => " ",
            };
            output.push_str(&format!(
                "  {}  {:<8}  {:<16}  {}{}\n",
                txn.date.format("%Y-%m-%d"),
                txn.kind.to_string(),
                txn.category,
                sign,
                txn.amount.grouped()
            ));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use crate::models::{TransactionKind, UserProfile};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn temp_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn date(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn test_overview_groups_by_currency() {
        let (_dir, storage) = temp_storage();

        for (name, currency, cents) in [
            ("Checking", "USD", 150_000),
            ("Savings", "USD", 500_000),
            ("Trip Fund", "EUR", 80_000),
        ] {
            storage
                .accounts
                .upsert(Account::new(name, "checking", currency, Money::from_cents(cents)))
                .unwrap();
        }

        let overview = Overview::generate(&storage, 10).unwrap();

        assert_eq!(overview.accounts.len(), 3);
        assert_eq!(overview.currency_totals.len(), 2);

        let eur = &overview.currency_totals[0];
        assert_eq!(eur.currency, "EUR");
        assert_eq!(eur.total_balance, Money::from_cents(80_000));
        assert_eq!(eur.account_count, 1);

        let usd = &overview.currency_totals[1];
        assert_eq!(usd.currency, "USD");
        assert_eq!(usd.total_balance, Money::from_cents(650_000));
        assert_eq!(usd.account_count, 2);
    }

    #[test]
    fn test_overview_limits_recent_transactions() {
        let (_dir, storage) = temp_storage();
        let account = Account::new("Checking", "checking", "USD", Money::zero());
        let id = account.id;
        storage.accounts.upsert(account).unwrap();

        for day in 1..=5 {
            storage
                .transactions
                .upsert(Transaction::new(
                    id,
                    TransactionKind::Expense,
                    Money::from_cents(100),
                    "Coffee",
                    date(day),
                ))
                .unwrap();
        }

        let overview = Overview::generate(&storage, 3).unwrap();
        assert_eq!(overview.recent_transactions.len(), 3);
        assert_eq!(overview.transaction_count, 5);
        // newest first
        assert_eq!(overview.recent_transactions[0].date, date(5));
    }

    #[test]
    fn test_overview_carries_profile_name() {
        let (_dir, storage) = temp_storage();

        let empty = Overview::generate(&storage, 10).unwrap();
        assert!(empty.profile_name.is_none());

        storage.profile.set(UserProfile::new("Dana")).unwrap();
        let named = Overview::generate(&storage, 10).unwrap();
        assert_eq!(named.profile_name.as_deref(), Some("Dana"));
    }

    #[test]
    fn test_terminal_format() {
        let (_dir, storage) = temp_storage();
        storage.profile.set(UserProfile::new("Dana")).unwrap();

        let account = Account::new("Checking", "checking", "USD", Money::from_cents(150_000));
        let id = account.id;
        storage.accounts.upsert(account).unwrap();
        storage
            .transactions
            .upsert(Transaction::new(
                id,
                TransactionKind::Expense,
                Money::from_cents(4_500),
                "Groceries",
                date(12),
            ))
            .unwrap();

        let text = Overview::generate(&storage, 10).unwrap().format_terminal();
        assert!(text.contains("Overview for Dana"));
        assert!(text.contains("USD: 1,500.00 across 1 account"));
        assert!(text.contains("Checking"));
        assert!(text.contains("Recent transactions (1 of 1)"));
        assert!(text.contains("-45.00"));
    }

    #[test]
    fn test_terminal_format_empty_ledger() {
        let (_dir, storage) = temp_storage();
        let text = Overview::generate(&storage, 10).unwrap().format_terminal();
        assert!(text.contains("No accounts yet"));
    }
}
