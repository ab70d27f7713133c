use anyhow::Result;
use clap::{Parser, Subcommand};

use fintrack::cli::{
    handle_account_command, handle_export_command, handle_profile_command, handle_report_command,
    handle_transaction_command,
};
use fintrack::config::{paths::FintrackPaths, settings::Settings};
use fintrack::reports::Overview;
use fintrack::services::LedgerService;
use fintrack::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fintrack",
    version,
    about = "Terminal-based personal finance tracker",
    long_about = "fintrack is a terminal-based personal finance tracker. It keeps \
                  accounts and the transactions that move money between them; \
                  balances only change by posting or reversing transactions, so \
                  the history always explains every balance."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Account management commands
    #[command(subcommand)]
    Account(fintrack::cli::AccountCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(fintrack::cli::TransactionCommands),

    /// Show balances per currency and recent transactions
    Overview,

    /// Reporting commands
    #[command(subcommand)]
    Report(fintrack::cli::ReportCommands),

    /// Export commands
    #[command(subcommand)]
    Export(fintrack::cli::ExportCommands),

    /// Profile commands
    #[command(subcommand)]
    Profile(fintrack::cli::ProfileCommands),

    /// Check every account balance against its transaction history
    Verify,

    /// Show recent audit log entries
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "10")]
        limit: usize,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let _logger = init_logging();

    let cli = Cli::parse();

    let paths = FintrackPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing fintrack at: {}", paths.base_dir().display());
            fintrack::storage::initialize_storage(&paths)?;
            settings.save(&paths)?;
            println!("Initialization complete.");
            println!();
            println!("Next steps:");
            println!("  fintrack account add \"Checking\" --balance 1000");
            println!("  fintrack txn add Checking 12.50 --category Groceries");
            println!("  fintrack overview");
        }
        Some(Commands::Account(cmd)) => {
            handle_account_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            handle_transaction_command(&storage, cmd)?;
        }
        Some(Commands::Overview) => {
            let overview = Overview::generate(&storage, settings.recent_limit)?;
            print!("{}", overview.format_terminal());
        }
        Some(Commands::Report(cmd)) => {
            handle_report_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Profile(cmd)) => {
            handle_profile_command(&storage, cmd)?;
        }
        Some(Commands::Verify) => {
            run_verify(&storage)?;
        }
        Some(Commands::History { limit }) => {
            run_history(&storage, limit)?;
        }
        Some(Commands::Config) => {
            println!("fintrack Configuration");
            println!("======================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!(
                "Initialized:    {}",
                if storage.is_initialized() { "yes" } else { "no" }
            );
            println!();
            println!("Settings:");
            println!("  Default currency: {}", settings.default_currency);
            println!("  Recent limit:     {}", settings.recent_limit);
            println!("  Schema version:   {}", settings.schema_version);
        }
        None => {
            println!("fintrack - Terminal-based personal finance tracker");
            println!();
            println!("Run 'fintrack --help' for usage information.");
            if fintrack::storage::needs_initialization(&paths) {
                println!("Run 'fintrack init' to set up a new ledger.");
            } else {
                println!("Run 'fintrack overview' to see your accounts.");
            }
        }
    }

    Ok(())
}

/// Best-effort logger setup from `FINTRACK_LOG`; an invalid log level
/// disables logging rather than aborting the run
fn init_logging() -> Option<flexi_logger::LoggerHandle> {
    let level = std::env::var("FINTRACK_LOG").unwrap_or_else(|_| "warn".to_string());
    match flexi_logger::Logger::try_with_str(&level).and_then(|logger| logger.start()) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("Warning: logging disabled: {}", e);
            None
        }
    }
}

fn run_verify(storage: &Storage) -> Result<()> {
    let report = LedgerService::new(storage).check_integrity()?;

    println!(
        "Checked {} account(s) and {} transaction(s)",
        report.accounts_checked, report.transactions_checked
    );
    println!();

    if report.is_clean() {
        println!("OK: every balance matches its transaction history.");
        return Ok(());
    }

    for drift in &report.drifts {
        println!(
            "Balance drift on '{}': stored {}, computed {} (off by {})",
            drift.account.name,
            drift.account.balance.grouped(),
            drift.computed_balance.grouped(),
            drift.drift.grouped()
        );
    }
    for dangling in &report.dangling {
        println!(
            "Dangling reference: {} ({}) -> missing account {}",
            dangling.transaction.id, dangling.transaction, dangling.missing_account
        );
    }

    println!();
    println!(
        "Found {} problem(s). `fintrack account set-balance` records an adjustment for a drifted balance.",
        report.drifts.len() + report.dangling.len()
    );

    Ok(())
}

fn run_history(storage: &Storage, limit: usize) -> Result<()> {
    let entries = storage.audit().read_recent(limit)?;

    if entries.is_empty() {
        println!("No audit entries recorded yet.");
        return Ok(());
    }

    // newest first
    for entry in entries.iter().rev() {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
