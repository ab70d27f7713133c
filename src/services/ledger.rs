//! Ledger service
//!
//! Posting and reversing transactions is the only way account balances
//! change. Every posting applies its balance deltas in memory, then saves
//! transactions and accounts together; if either save fails the in-memory
//! state is reloaded from disk so the two files never drift apart.

use chrono::NaiveDate;

use crate::audit::EntityType;
use crate::error::{FintrackError, FintrackResult};
use crate::models::{
    Account, AccountId, Money, ReportPeriod, Transaction, TransactionId, TransactionKind,
};
use crate::storage::{ChangeEvent, Storage};

/// Service for posting, reversing, and querying transactions
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

/// Input for recording a new transaction
#[derive(Debug, Clone)]
pub struct RecordTransactionInput {
    pub account_id: AccountId,
    pub kind: TransactionKind,
    pub amount: Money,
    /// Ignored for transfers, which are always categorized as transfers
    pub category: String,
    pub date: NaiveDate,
    pub notes: Option<String>,
    /// Destination account, required for transfers
    pub to_account_id: Option<AccountId>,
}

/// Options for filtering transaction listings
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub account_id: Option<AccountId>,
    pub kind: Option<TransactionKind>,
    pub category: Option<String>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    /// Create a new empty filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only transactions touching this account
    pub fn account(mut self, account_id: AccountId) -> Self {
        self.account_id = Some(account_id);
        self
    }

    /// Keep only transactions of this kind
    pub fn kind(mut self, kind: TransactionKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Keep only transactions in this category (case-insensitive)
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep only transactions dated within the period
    pub fn period(self, period: &ReportPeriod) -> Self {
        self.date_range(period.start_date(), period.end_date())
    }

    /// Keep only transactions dated within `start..=end`
    pub fn date_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    /// Return at most `limit` transactions
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// An account whose stored balance disagrees with its transactions
#[derive(Debug, Clone)]
pub struct AccountDrift {
    pub account: Account,
    /// Balance recomputed from the opening balance and every posting
    pub computed_balance: Money,
    /// Stored balance minus computed balance
    pub drift: Money,
}

/// A transaction referencing an account that no longer exists
#[derive(Debug, Clone)]
pub struct DanglingReference {
    pub transaction: Transaction,
    pub missing_account: AccountId,
}

/// Result of a full ledger consistency check
#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub accounts_checked: usize,
    pub transactions_checked: usize,
    pub drifts: Vec<AccountDrift>,
    pub dangling: Vec<DanglingReference>,
}

impl IntegrityReport {
    pub fn is_clean(&self) -> bool {
        self.drifts.is_empty() && self.dangling.is_empty()
    }
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record a new transaction and apply it to account balances
    pub fn record(&self, input: RecordTransactionInput) -> FintrackResult<Transaction> {
        let source = self
            .storage
            .accounts
            .get(input.account_id)?
            .ok_or_else(|| FintrackError::account_not_found(input.account_id.to_string()))?;

        let txn = match input.kind {
            TransactionKind::Transfer => {
                let to_id = input.to_account_id.ok_or_else(|| {
                    FintrackError::Ledger("Transfer requires a destination account".into())
                })?;
                let destination = self
                    .storage
                    .accounts
                    .get(to_id)?
                    .ok_or_else(|| FintrackError::account_not_found(to_id.to_string()))?;

                if destination.currency != source.currency {
                    return Err(FintrackError::CurrencyMismatch {
                        source: source.name.clone(),
                        source_currency: source.currency.clone(),
                        destination: destination.name.clone(),
                        destination_currency: destination.currency.clone(),
                    });
                }

                Transaction::transfer(source.id, to_id, input.amount, input.date)
            }
            TransactionKind::Income | TransactionKind::Expense => {
                if input.to_account_id.is_some() {
                    return Err(FintrackError::Ledger(
                        "Only transfers may name a destination account".into(),
                    ));
                }
                Transaction::new(source.id, input.kind, input.amount, input.category, input.date)
            }
        };

        let txn = match input.notes {
            Some(notes) => txn.with_notes(notes),
            None => txn,
        };

        self.post(txn)
    }

    /// Set an account's balance directly
    ///
    /// The edit is expressed as a synthetic income or expense covering the
    /// difference, so the transaction history still explains the balance.
    /// Returns `None` when the balance already matches.
    pub fn set_balance(
        &self,
        account_id: AccountId,
        new_balance: Money,
        date: NaiveDate,
    ) -> FintrackResult<Option<Transaction>> {
        let account = self
            .storage
            .accounts
            .get(account_id)?
            .ok_or_else(|| FintrackError::account_not_found(account_id.to_string()))?;

        let difference = new_balance - account.balance;
        if difference.is_zero() {
            return Ok(None);
        }

        let txn = Transaction::balance_adjustment(account.id, difference, date).with_notes(
            format!(
                "Balance set to {}",
                new_balance.format_with_currency(&account.currency)
            ),
        );

        self.post(txn).map(Some)
    }

    /// Validate, apply, and persist a transaction
    fn post(&self, txn: Transaction) -> FintrackResult<Transaction> {
        txn.validate()
            .map_err(|e| FintrackError::Validation(e.to_string()))?;

        let effects = txn.balance_effects();

        // Fetch every touched account up front so a missing one fails the
        // posting before any balance moves.
        let mut touched = Vec::with_capacity(effects.len());
        for (account_id, delta) in &effects {
            let account = self
                .storage
                .accounts
                .get(*account_id)?
                .ok_or_else(|| FintrackError::account_not_found(account_id.to_string()))?;
            touched.push((account, *delta));
        }

        for (account, delta) in &mut touched {
            account.apply_delta(*delta);
            self.storage.accounts.upsert(account.clone())?;
        }
        self.storage.transactions.upsert(txn.clone())?;

        self.persist_ledger()?;

        self.storage.log_create(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {} {}", txn.date, txn.kind, txn.category)),
            &txn,
        )?;
        self.storage.notify(ChangeEvent::Transactions);
        self.storage.notify(ChangeEvent::Accounts);

        log::debug!(
            "Posted {} {} touching {} account(s)",
            txn.kind,
            txn.id,
            effects.len()
        );

        Ok(txn)
    }

    /// Delete a transaction, reversing its balance effects
    ///
    /// Effects on accounts that no longer exist are skipped with a warning;
    /// the rest of the reversal still goes through.
    pub fn delete(&self, id: TransactionId) -> FintrackResult<Transaction> {
        let txn = self
            .storage
            .transactions
            .get(id)?
            .ok_or_else(|| FintrackError::transaction_not_found(id.to_string()))?;

        for (account_id, delta) in txn.balance_effects() {
            match self.storage.accounts.get(account_id)? {
                Some(mut account) => {
                    account.apply_delta(-delta);
                    self.storage.accounts.upsert(account)?;
                }
                None => {
                    log::warn!(
                        "Transaction {} references missing account {}; skipping balance reversal",
                        txn.id,
                        account_id
                    );
                }
            }
        }
        self.storage.transactions.delete(id)?;

        self.persist_ledger()?;

        self.storage.log_delete(
            EntityType::Transaction,
            txn.id.to_string(),
            Some(format!("{} {} {}", txn.date, txn.kind, txn.category)),
            &txn,
        )?;
        self.storage.notify(ChangeEvent::Transactions);
        self.storage.notify(ChangeEvent::Accounts);

        Ok(txn)
    }

    /// Save transactions and accounts, reloading both from disk on failure
    fn persist_ledger(&self) -> FintrackResult<()> {
        let saved = self
            .storage
            .transactions
            .save()
            .and_then(|_| self.storage.accounts.save());

        if let Err(err) = saved {
            log::error!("Ledger save failed, reloading from disk: {}", err);
            self.storage.reload_ledger()?;
            return Err(err);
        }

        Ok(())
    }

    /// Get a transaction by ID
    pub fn get(&self, id: TransactionId) -> FintrackResult<Option<Transaction>> {
        self.storage.transactions.get(id)
    }

    /// Find a transaction by full ID or ID fragment
    pub fn find(&self, identifier: &str) -> FintrackResult<Option<Transaction>> {
        if let Ok(id) = identifier.parse::<TransactionId>() {
            if let Some(txn) = self.storage.transactions.get(id)? {
                return Ok(Some(txn));
            }
        }

        let matches: Vec<Transaction> = self
            .storage
            .transactions
            .get_all()?
            .into_iter()
            .filter(|t| t.id.matches(identifier))
            .collect();

        match matches.len() {
            0 => Ok(None),
            1 => Ok(matches.into_iter().next()),
            n => Err(FintrackError::Validation(format!(
                "'{}' matches {} transactions; use more characters of the ID",
                identifier, n
            ))),
        }
    }

    /// Like [`find`](Self::find), but an unknown identifier is an error
    pub fn resolve(&self, identifier: &str) -> FintrackResult<Transaction> {
        self.find(identifier)?
            .ok_or_else(|| FintrackError::transaction_not_found(identifier))
    }

    /// List transactions, newest first, with optional filtering
    pub fn list(&self, filter: TransactionFilter) -> FintrackResult<Vec<Transaction>> {
        let mut transactions = if let Some(account_id) = filter.account_id {
            self.storage.transactions.get_by_account(account_id)?
        } else if let (Some(start), Some(end)) = (filter.start_date, filter.end_date) {
            self.storage.transactions.get_by_date_range(start, end)?
        } else {
            self.storage.transactions.get_all()?
        };

        if let Some(start) = filter.start_date {
            transactions.retain(|t| t.date >= start);
        }
        if let Some(end) = filter.end_date {
            transactions.retain(|t| t.date <= end);
        }
        if let Some(kind) = filter.kind {
            transactions.retain(|t| t.kind == kind);
        }
        if let Some(category) = &filter.category {
            transactions.retain(|t| t.category.eq_ignore_ascii_case(category));
        }
        if let Some(limit) = filter.limit {
            transactions.truncate(limit);
        }

        Ok(transactions)
    }

    /// Check every account balance against its transactions and find
    /// transactions referencing missing accounts
    pub fn check_integrity(&self) -> FintrackResult<IntegrityReport> {
        let accounts = self.storage.accounts.get_all()?;
        let transactions = self.storage.transactions.get_all()?;

        let mut computed: std::collections::HashMap<AccountId, Money> = accounts
            .iter()
            .map(|a| (a.id, a.initial_balance))
            .collect();
        let mut dangling = Vec::new();

        for txn in &transactions {
            for (account_id, delta) in txn.balance_effects() {
                match computed.get_mut(&account_id) {
                    Some(balance) => *balance += delta,
                    None => dangling.push(DanglingReference {
                        transaction: txn.clone(),
                        missing_account: account_id,
                    }),
                }
            }
        }

        let drifts = accounts
            .iter()
            .filter_map(|account| {
                let computed_balance = computed[&account.id];
                let drift = account.balance - computed_balance;
                if drift.is_zero() {
                    None
                } else {
                    Some(AccountDrift {
                        account: account.clone(),
                        computed_balance,
                        drift,
                    })
                }
            })
            .collect();

        Ok(IntegrityReport {
            accounts_checked: accounts.len(),
            transactions_checked: transactions.len(),
            drifts,
            dangling,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FintrackPaths;
    use tempfile::TempDir;

    fn temp_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FintrackPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        (temp_dir, storage)
    }

    fn add_account(storage: &Storage, name: &str, currency: &str, cents: i64) -> Account {
        let account = Account::new(name, "checking", currency, Money::from_cents(cents));
        storage.accounts.upsert(account.clone()).unwrap();
        storage.accounts.save().unwrap();
        account
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn expense(account_id: AccountId, cents: i64, day: u32) -> RecordTransactionInput {
        RecordTransactionInput {
            account_id,
            kind: TransactionKind::Expense,
            amount: Money::from_cents(cents),
            category: "Groceries".to_string(),
            date: date(2025, 6, day),
            notes: None,
            to_account_id: None,
        }
    }

    #[test]
    fn test_record_income_and_expense_moves_balance() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Checking", "USD", 10_000);

        ledger
            .record(RecordTransactionInput {
                account_id: account.id,
                kind: TransactionKind::Income,
                amount: Money::from_cents(50_000),
                category: "Salary".to_string(),
                date: date(2025, 6, 1),
                notes: None,
                to_account_id: None,
            })
            .unwrap();
        ledger.record(expense(account.id, 12_500, 2)).unwrap();

        let balance = storage.accounts.get(account.id).unwrap().unwrap().balance;
        assert_eq!(balance, Money::from_cents(10_000 + 50_000 - 12_500));
    }

    #[test]
    fn test_transfer_moves_both_balances() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let from = add_account(&storage, "Checking", "USD", 100_000);
        let to = add_account(&storage, "Savings", "USD", 0);

        let txn = ledger
            .record(RecordTransactionInput {
                account_id: from.id,
                kind: TransactionKind::Transfer,
                amount: Money::from_cents(30_000),
                category: String::new(),
                date: date(2025, 6, 5),
                notes: None,
                to_account_id: Some(to.id),
            })
            .unwrap();

        assert!(txn.is_transfer());
        assert_eq!(txn.category, crate::models::TRANSFER_CATEGORY);

        let from_balance = storage.accounts.get(from.id).unwrap().unwrap().balance;
        let to_balance = storage.accounts.get(to.id).unwrap().unwrap().balance;
        assert_eq!(from_balance, Money::from_cents(70_000));
        assert_eq!(to_balance, Money::from_cents(30_000));
    }

    #[test]
    fn test_transfer_currency_mismatch_rejected() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let from = add_account(&storage, "Checking", "USD", 100_000);
        let to = add_account(&storage, "Euro Fund", "EUR", 0);

        let err = ledger
            .record(RecordTransactionInput {
                account_id: from.id,
                kind: TransactionKind::Transfer,
                amount: Money::from_cents(5_000),
                category: String::new(),
                date: date(2025, 6, 5),
                notes: None,
                to_account_id: Some(to.id),
            })
            .unwrap_err();

        assert!(matches!(err, FintrackError::CurrencyMismatch { .. }));
        // neither balance moved
        assert_eq!(
            storage.accounts.get(from.id).unwrap().unwrap().balance,
            Money::from_cents(100_000)
        );
    }

    #[test]
    fn test_transfer_to_missing_account_rejected() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let from = add_account(&storage, "Checking", "USD", 100_000);

        let err = ledger
            .record(RecordTransactionInput {
                account_id: from.id,
                kind: TransactionKind::Transfer,
                amount: Money::from_cents(5_000),
                category: String::new(),
                date: date(2025, 6, 5),
                notes: None,
                to_account_id: Some(AccountId::new()),
            })
            .unwrap_err();

        assert!(err.is_not_found());
    }

    #[test]
    fn test_delete_reverses_effects() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Checking", "USD", 10_000);

        let txn = ledger.record(expense(account.id, 2_500, 10)).unwrap();
        assert_eq!(
            storage.accounts.get(account.id).unwrap().unwrap().balance,
            Money::from_cents(7_500)
        );

        ledger.delete(txn.id).unwrap();
        assert_eq!(
            storage.accounts.get(account.id).unwrap().unwrap().balance,
            Money::from_cents(10_000)
        );
        assert!(storage.transactions.get(txn.id).unwrap().is_none());
    }

    #[test]
    fn test_delete_with_missing_account_skips_reversal() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let from = add_account(&storage, "Checking", "USD", 100_000);
        let to = add_account(&storage, "Savings", "USD", 0);

        let txn = ledger
            .record(RecordTransactionInput {
                account_id: from.id,
                kind: TransactionKind::Transfer,
                amount: Money::from_cents(10_000),
                category: String::new(),
                date: date(2025, 6, 5),
                notes: None,
                to_account_id: Some(to.id),
            })
            .unwrap();

        storage.accounts.delete(to.id).unwrap();
        storage.accounts.save().unwrap();

        // reversal restores the surviving side and skips the missing one
        ledger.delete(txn.id).unwrap();
        assert_eq!(
            storage.accounts.get(from.id).unwrap().unwrap().balance,
            Money::from_cents(100_000)
        );
    }

    #[test]
    fn test_transfer_conserves_total_balance() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let from = add_account(&storage, "Checking", "USD", 84_200);
        let to = add_account(&storage, "Savings", "USD", 15_800);

        ledger
            .record(RecordTransactionInput {
                account_id: from.id,
                kind: TransactionKind::Transfer,
                amount: Money::from_cents(27_300),
                category: String::new(),
                date: date(2025, 6, 7),
                notes: None,
                to_account_id: Some(to.id),
            })
            .unwrap();

        let total: Money = storage
            .accounts
            .get_all()
            .unwrap()
            .iter()
            .map(|account| account.balance)
            .sum();
        assert_eq!(total, Money::from_cents(100_000));
    }

    #[test]
    fn test_delete_restores_balance_for_income_and_transfer() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let checking = add_account(&storage, "Checking", "USD", 50_000);
        let savings = add_account(&storage, "Savings", "USD", 20_000);

        let income = ledger
            .record(RecordTransactionInput {
                account_id: checking.id,
                kind: TransactionKind::Income,
                amount: Money::from_cents(9_900),
                category: "Salary".to_string(),
                date: date(2025, 6, 3),
                notes: None,
                to_account_id: None,
            })
            .unwrap();
        ledger.delete(income.id).unwrap();
        assert_eq!(
            storage.accounts.get(checking.id).unwrap().unwrap().balance,
            Money::from_cents(50_000)
        );

        let transfer = ledger
            .record(RecordTransactionInput {
                account_id: checking.id,
                kind: TransactionKind::Transfer,
                amount: Money::from_cents(12_345),
                category: String::new(),
                date: date(2025, 6, 4),
                notes: None,
                to_account_id: Some(savings.id),
            })
            .unwrap();
        ledger.delete(transfer.id).unwrap();
        assert_eq!(
            storage.accounts.get(checking.id).unwrap().unwrap().balance,
            Money::from_cents(50_000)
        );
        assert_eq!(
            storage.accounts.get(savings.id).unwrap().unwrap().balance,
            Money::from_cents(20_000)
        );
    }

    #[test]
    fn test_record_and_delete_emit_change_events() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Checking", "USD", 10_000);

        let rx = storage.subscribe();
        let txn = ledger.record(expense(account.id, 1_000, 12)).unwrap();
        assert_eq!(rx.try_recv().unwrap(), ChangeEvent::Transactions);
        assert_eq!(rx.try_recv().unwrap(), ChangeEvent::Accounts);
        assert!(rx.try_recv().is_err());

        ledger.delete(txn.id).unwrap();
        assert_eq!(rx.try_recv().unwrap(), ChangeEvent::Transactions);
        assert_eq!(rx.try_recv().unwrap(), ChangeEvent::Accounts);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_set_balance_creates_adjustment() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Wallet", "USD", 10_000);

        let txn = ledger
            .set_balance(account.id, Money::from_cents(2_500), date(2025, 6, 1))
            .unwrap()
            .unwrap();

        assert!(txn.is_balance_adjustment());
        assert_eq!(txn.kind, TransactionKind::Expense);
        assert_eq!(txn.amount, Money::from_cents(7_500));
        assert_eq!(
            storage.accounts.get(account.id).unwrap().unwrap().balance,
            Money::from_cents(2_500)
        );
    }

    #[test]
    fn test_set_balance_noop_when_equal() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Wallet", "USD", 10_000);

        let result = ledger
            .set_balance(account.id, Money::from_cents(10_000), date(2025, 6, 1))
            .unwrap();

        assert!(result.is_none());
        assert_eq!(storage.transactions.count().unwrap(), 0);
    }

    #[test]
    fn test_list_filters() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Checking", "USD", 100_000);
        let other = add_account(&storage, "Savings", "USD", 0);

        ledger.record(expense(account.id, 1_000, 1)).unwrap();
        ledger.record(expense(account.id, 2_000, 15)).unwrap();
        ledger.record(expense(other.id, 3_000, 20)).unwrap();
        ledger
            .record(RecordTransactionInput {
                account_id: account.id,
                kind: TransactionKind::Income,
                amount: Money::from_cents(9_000),
                category: "Salary".to_string(),
                date: date(2025, 7, 1),
                notes: None,
                to_account_id: None,
            })
            .unwrap();

        let for_account = ledger
            .list(TransactionFilter::new().account(account.id))
            .unwrap();
        assert_eq!(for_account.len(), 3);

        let june = ReportPeriod::month(2025, 6);
        let june_expenses = ledger
            .list(
                TransactionFilter::new()
                    .period(&june)
                    .kind(TransactionKind::Expense),
            )
            .unwrap();
        assert_eq!(june_expenses.len(), 3);

        let groceries = ledger
            .list(TransactionFilter::new().category("groceries").limit(2))
            .unwrap();
        assert_eq!(groceries.len(), 2);
    }

    #[test]
    fn test_list_newest_first() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Checking", "USD", 100_000);

        ledger.record(expense(account.id, 1_000, 1)).unwrap();
        ledger.record(expense(account.id, 2_000, 20)).unwrap();
        ledger.record(expense(account.id, 3_000, 10)).unwrap();

        let listed = ledger.list(TransactionFilter::new()).unwrap();
        let days: Vec<u32> = listed
            .iter()
            .map(|t| chrono::Datelike::day(&t.date))
            .collect();
        assert_eq!(days, vec![20, 10, 1]);
    }

    #[test]
    fn test_check_integrity_reports_drift_and_dangling() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Checking", "USD", 10_000);
        let doomed = add_account(&storage, "Old", "USD", 0);

        ledger.record(expense(account.id, 2_500, 1)).unwrap();
        ledger.record(expense(doomed.id, 100, 2)).unwrap();

        let clean = ledger.check_integrity().unwrap();
        assert!(clean.is_clean());

        // corrupt the stored balance and orphan a transaction
        let mut tampered = storage.accounts.get(account.id).unwrap().unwrap();
        tampered.apply_delta(Money::from_cents(999));
        storage.accounts.upsert(tampered).unwrap();
        storage.accounts.delete(doomed.id).unwrap();

        let report = ledger.check_integrity().unwrap();
        assert!(!report.is_clean());
        assert_eq!(report.drifts.len(), 1);
        assert_eq!(report.drifts[0].drift, Money::from_cents(999));
        assert_eq!(report.dangling.len(), 1);
        assert_eq!(report.dangling[0].missing_account, doomed.id);
    }

    #[test]
    fn test_find_by_fragment() {
        let (_dir, storage) = temp_storage();
        let ledger = LedgerService::new(&storage);
        let account = add_account(&storage, "Checking", "USD", 10_000);

        let txn = ledger.record(expense(account.id, 500, 1)).unwrap();
        let fragment = txn.id.as_uuid().to_string()[..8].to_string();

        let found = ledger.find(&fragment).unwrap().unwrap();
        assert_eq!(found.id, txn.id);

        assert!(ledger.find("ffffffff").unwrap().is_none());
    }
}
