//! End-to-end tests driving the `fintrack` binary
//!
//! Each test runs against a fresh temporary directory pointed at via
//! `FINTRACK_DATA_DIR`, so tests never touch the real ledger and can run
//! in parallel.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Build a `fintrack` command wired to an isolated data directory
fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.env("FINTRACK_DATA_DIR", dir.path());
    cmd
}

fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Run a command that is expected to succeed and return its stdout
fn run(dir: &TempDir, args: &[&str]) -> String {
    let assert = fintrack(dir).args(args).assert().success();
    String::from_utf8_lossy(&assert.get_output().stdout).into_owned()
}

#[test]
fn init_creates_data_files() {
    let dir = temp_dir();

    fintrack(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialization complete."));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data").join("accounts.json").exists());
    assert!(dir.path().join("data").join("transactions.json").exists());
}

#[test]
fn init_is_idempotent() {
    let dir = temp_dir();

    run(&dir, &["init"]);
    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);

    // A second init must not wipe existing data
    fintrack(&dir).arg("init").assert().success();
    fintrack(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking"));
}

#[test]
fn account_add_and_list() {
    let dir = temp_dir();

    fintrack(&dir)
        .args(["account", "add", "Checking", "--balance", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created account: Checking"))
        .stdout(predicate::str::contains("Opening Balance: 1,000.00"));

    fintrack(&dir)
        .args(["account", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checking"))
        .stdout(predicate::str::contains("1,000.00"));
}

#[test]
fn account_add_rejects_duplicate_name() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking"]);

    fintrack(&dir)
        .args(["account", "add", "checking"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account already exists"));
}

#[test]
fn expense_moves_the_balance() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);

    fintrack(&dir)
        .args(["txn", "add", "Checking", "45.00", "--category", "Groceries"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Expense:"))
        .stdout(predicate::str::contains("Balance:  Checking now 955.00 USD"));

    fintrack(&dir)
        .args(["account", "show", "Checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance:  955.00"));
}

#[test]
fn income_and_expense_need_a_category() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking"]);

    fintrack(&dir)
        .args(["txn", "add", "Checking", "5.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("need a category"));
}

#[test]
fn unknown_account_is_rejected() {
    let dir = temp_dir();

    fintrack(&dir)
        .args(["txn", "add", "Nope", "5.00", "--category", "Misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Account not found: Nope"));
}

#[test]
fn invalid_amount_is_rejected() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking"]);

    fintrack(&dir)
        .args(["txn", "add", "Checking", "twelve", "--category", "Misc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid amount format"));
}

#[test]
fn invalid_date_is_rejected() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking"]);

    fintrack(&dir)
        .args([
            "txn",
            "add",
            "Checking",
            "5.00",
            "--category",
            "Misc",
            "--date",
            "2025-13-40",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date format"));
}

#[test]
fn transfer_moves_both_balances() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(&dir, &["account", "add", "Savings", "--balance", "50"]);

    fintrack(&dir)
        .args([
            "txn", "add", "Checking", "200", "--type", "transfer", "--to", "Savings",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Recorded Transfer:"));

    let list = run(&dir, &["account", "list"]);
    assert!(list.contains("800.00"), "source not debited:\n{}", list);
    assert!(list.contains("250.00"), "destination not credited:\n{}", list);
}

#[test]
fn transfer_requires_a_destination() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "100"]);

    fintrack(&dir)
        .args(["txn", "add", "Checking", "10", "--type", "transfer"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("destination"));
}

#[test]
fn transfer_across_currencies_is_rejected() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(&dir, &["account", "add", "Travel", "--currency", "EUR"]);

    fintrack(&dir)
        .args([
            "txn", "add", "Checking", "100", "--type", "transfer", "--to", "Travel",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Currency mismatch"));

    // Neither balance moved
    let list = run(&dir, &["account", "list"]);
    assert!(list.contains("1,000.00"), "balance changed:\n{}", list);
}

#[test]
fn deleting_a_transaction_restores_the_balance() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    let out = run(
        &dir,
        &["txn", "add", "Checking", "45.00", "--category", "Groceries"],
    );

    // "Recorded Expense: txn-xxxxxxxx"
    let id = out
        .split_whitespace()
        .find(|token| token.starts_with("txn-"))
        .expect("no transaction id in output")
        .to_string();

    fintrack(&dir)
        .args(["txn", "delete", &id, "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted transaction:"));

    fintrack(&dir)
        .args(["account", "show", "Checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance:  1,000.00"));
}

#[test]
fn delete_without_force_only_previews() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    let out = run(
        &dir,
        &["txn", "add", "Checking", "45.00", "--category", "Groceries"],
    );
    let id = out
        .split_whitespace()
        .find(|token| token.starts_with("txn-"))
        .unwrap()
        .to_string();

    fintrack(&dir)
        .args(["txn", "delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Use --force to confirm deletion"));

    // Transaction and balance are untouched
    fintrack(&dir)
        .args(["account", "show", "Checking"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Current Balance:  955.00"));
}

#[test]
fn set_balance_records_an_adjustment() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);

    fintrack(&dir)
        .args(["account", "set-balance", "Checking", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Set balance of 'Checking' to 1200.00 USD"))
        .stdout(predicate::str::contains("Recorded adjustment: Income 200.00"));

    // The adjustment keeps the ledger reconciled
    fintrack(&dir)
        .args(["verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "OK: every balance matches its transaction history.",
        ));
}

#[test]
fn set_balance_to_current_value_records_nothing() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);

    fintrack(&dir)
        .args(["account", "set-balance", "Checking", "1000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing recorded"));
}

#[test]
fn verify_reports_a_clean_ledger() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(
        &dir,
        &["txn", "add", "Checking", "45.00", "--category", "Groceries"],
    );
    run(
        &dir,
        &[
            "txn", "add", "Checking", "2000", "--type", "income", "--category", "Salary",
        ],
    );

    fintrack(&dir)
        .args(["verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Checked 1 account(s) and 2 transaction(s)"))
        .stdout(predicate::str::contains(
            "OK: every balance matches its transaction history.",
        ));
}

#[test]
fn verify_detects_a_tampered_balance() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);

    // Nudge the stored balance behind the application's back
    let accounts_file = dir.path().join("data").join("accounts.json");
    let raw = std::fs::read_to_string(&accounts_file).unwrap();
    let mut data: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let balance = data["accounts"][0]["balance"].as_i64().unwrap();
    data["accounts"][0]["balance"] = serde_json::json!(balance + 1234);
    std::fs::write(&accounts_file, serde_json::to_string_pretty(&data).unwrap()).unwrap();

    fintrack(&dir)
        .args(["verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Balance drift on 'Checking'"))
        .stdout(predicate::str::contains("Found 1 problem(s)"));
}

#[test]
fn deleting_an_account_leaves_a_dangling_reference() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(
        &dir,
        &["txn", "add", "Checking", "45.00", "--category", "Groceries"],
    );

    fintrack(&dir)
        .args(["account", "delete", "Checking", "--force"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted account: Checking"));

    fintrack(&dir)
        .args(["verify"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dangling reference:"));
}

#[test]
fn summary_report_excludes_transfers() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(&dir, &["account", "add", "Savings"]);
    run(
        &dir,
        &[
            "txn", "add", "Checking", "2000", "--type", "income", "--category", "Salary",
            "--date", "2025-06-01",
        ],
    );
    run(
        &dir,
        &[
            "txn", "add", "Checking", "450.25", "--category", "Rent", "--date", "2025-06-10",
        ],
    );
    run(
        &dir,
        &[
            "txn", "add", "Checking", "300", "--type", "transfer", "--to", "Savings",
            "--date", "2025-06-15",
        ],
    );

    fintrack(&dir)
        .args(["report", "summary", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summary for 2025-06"))
        .stdout(predicate::str::contains("2,000.00"))
        .stdout(predicate::str::contains("450.25"))
        .stdout(predicate::str::contains("1,549.75"));
}

#[test]
fn categories_report_breaks_down_spending() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(
        &dir,
        &[
            "txn", "add", "Checking", "300", "--category", "Rent", "--date", "2025-06-01",
        ],
    );
    run(
        &dir,
        &[
            "txn", "add", "Checking", "100", "--category", "Groceries", "--date", "2025-06-05",
        ],
    );

    fintrack(&dir)
        .args(["report", "categories", "--period", "2025-06"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rent"))
        .stdout(predicate::str::contains("300.00"))
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn csv_export_writes_to_stdout() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(
        &dir,
        &[
            "txn", "add", "Checking", "45.00", "--category", "Groceries", "--date", "2025-06-10",
        ],
    );

    fintrack(&dir)
        .args(["export", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Date,Type,Category,Amount,Currency,Account,Notes",
        ))
        .stdout(predicate::str::contains(
            "2025-06-10,Expense,Groceries,45.00,USD,Checking,",
        ));
}

#[test]
fn csv_export_writes_to_a_file() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(
        &dir,
        &["txn", "add", "Checking", "45.00", "--category", "Groceries"],
    );

    let out_path = dir.path().join("export.csv");
    fintrack(&dir)
        .args(["export", "csv", "--output", out_path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions to:"));

    let contents = std::fs::read_to_string(&out_path).unwrap();
    assert!(contents.starts_with("Date,Type,Category,Amount,Currency,Account,Notes"));
    assert!(contents.contains("Groceries"));
}

#[test]
fn statement_export_paginates() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);
    run(
        &dir,
        &["txn", "add", "Checking", "45.00", "--category", "Groceries"],
    );

    fintrack(&dir)
        .args(["export", "statement"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1 of 1"));
}

#[test]
fn profile_name_shows_in_overview() {
    let dir = temp_dir();

    fintrack(&dir)
        .args(["profile", "set-name", "Dana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile name set to: Dana"));

    run(&dir, &["account", "add", "Checking", "--balance", "1000"]);

    fintrack(&dir)
        .args(["overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Overview for Dana"));
}

#[test]
fn overview_on_empty_ledger_points_at_account_add() {
    let dir = temp_dir();

    fintrack(&dir)
        .args(["overview"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No accounts yet"));
}

#[test]
fn history_lists_audit_entries() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking"]);
    run(&dir, &["account", "rename", "Checking", "Everyday"]);

    fintrack(&dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CREATE Account"))
        .stdout(predicate::str::contains("UPDATE Account"))
        .stdout(predicate::str::contains("Everyday"));
}

#[test]
fn rename_and_set_kind_update_the_account() {
    let dir = temp_dir();

    run(&dir, &["account", "add", "Checking"]);

    fintrack(&dir)
        .args(["account", "rename", "Checking", "Everyday"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Renamed account: Checking -> Everyday"));

    fintrack(&dir)
        .args(["account", "set-kind", "Everyday", "savings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is now type 'savings'"));
}
