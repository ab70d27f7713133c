//! Export CLI commands
//!
//! Directs the CSV and statement writers at a file or stdout.

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

use clap::Subcommand;

use crate::error::{FintrackError, FintrackResult};
use crate::export::{export_statement, export_transactions_csv};
use crate::models::ReportPeriod;
use crate::storage::Storage;

use super::parse_period_or_current;

/// Export subcommands
#[derive(Subcommand, Debug)]
pub enum ExportCommands {
    /// Export transactions to CSV
    Csv {
        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Restrict to a period (YYYY-MM, YYYY, or START..END)
        #[arg(short, long)]
        period: Option<String>,
    },
    /// Export a paginated plain-text statement
    Statement {
        /// Output file path; prints to stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Restrict to a period (YYYY-MM, YYYY, or START..END)
        #[arg(short, long)]
        period: Option<String>,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FintrackResult<()> {
    match cmd {
        ExportCommands::Csv { output, period } => {
            let period = parse_optional_period(period.as_deref())?;
            match output {
                Some(path) => {
                    let mut writer = create_output_file(&path)?;
                    let count = export_transactions_csv(storage, &mut writer, period.as_ref())?;
                    println!("Exported {} transactions to: {}", count, path.display());
                }
                None => {
                    export_transactions_csv(storage, io::stdout().lock(), period.as_ref())?;
                }
            }
        }

        ExportCommands::Statement { output, period } => {
            let period = parse_optional_period(period.as_deref())?;
            match output {
                Some(path) => {
                    let mut writer = create_output_file(&path)?;
                    export_statement(storage, &mut writer, period.as_ref())?;
                    println!("Statement written to: {}", path.display());
                }
                None => {
                    export_statement(storage, io::stdout().lock(), period.as_ref())?;
                }
            }
        }
    }

    Ok(())
}

/// An omitted period means the whole ledger, not the current month
fn parse_optional_period(period: Option<&str>) -> FintrackResult<Option<ReportPeriod>> {
    match period {
        Some(s) => parse_period_or_current(Some(s)).map(Some),
        None => Ok(None),
    }
}

fn create_output_file(path: &PathBuf) -> FintrackResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        FintrackError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
