//! Category breakdown report
//!
//! Groups one kind of transaction (expenses by default) by category label
//! for a reporting period. Transfers never appear here; their forced
//! "Transfer" category is bookkeeping, not spending.

use std::collections::HashMap;

use crate::error::FintrackResult;
use crate::models::{Money, ReportPeriod, TransactionKind};
use crate::storage::Storage;

/// One category's share of the period
#[derive(Debug, Clone)]
pub struct CategoryRow {
    pub category: String,
    pub total: Money,
    pub transaction_count: usize,
    /// Share of the period total, 0-100
    pub percentage: f64,
}

/// Per-category totals for one kind of transaction
#[derive(Debug, Clone)]
pub struct CategoryBreakdown {
    pub period: ReportPeriod,
    pub kind: TransactionKind,
    /// Rows sorted by descending total
    pub rows: Vec<CategoryRow>,
    pub total: Money,
}

impl CategoryBreakdown {
    /// Generate a breakdown of the given kind for the period
    pub fn generate(
        storage: &Storage,
        period: &ReportPeriod,
        kind: TransactionKind,
    ) -> FintrackResult<Self> {
        let transactions = storage
            .transactions
            .get_by_date_range(period.start_date(), period.end_date())?;

        let mut by_category: HashMap<String, (Money, usize)> = HashMap::new();
        let mut total = Money::zero();

        for txn in &transactions {
            if txn.kind != kind || txn.is_transfer() {
                continue;
            }
            let entry = by_category
                .entry(txn.category.clone())
                .or_insert((Money::zero(), 0));
            entry.0 += txn.amount;
            entry.1 += 1;
            total += txn.amount;
        }

        let mut rows: Vec<CategoryRow> = by_category
            .into_iter()
            .map(|(category, (category_total, count))| {
                let percentage = if total.is_zero() {
                    0.0
                } else {
                    (category_total.cents() as f64 / total.cents() as f64) * 100.0
                };
                CategoryRow {
                    category,
                    total: category_total,
                    transaction_count: count,
                    percentage,
                }
            })
            .collect();

        rows.sort_by(|a, b| b.total.cmp(&a.total).then_with(|| a.category.cmp(&b.category)));

        Ok(Self {
            period: period.clone(),
            kind,
            rows,
            total,
        })
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self) -> String {
        let mut output = String::new();

        output.push_str(&format!("{} by category for {}\n", self.kind, self.period));
        output.push_str(&"=".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>14} {:>8} {:>8}\n",
            "Category", "Amount", "Count", "%"
        ));
        output.push_str(&"-".repeat(64));
        output.push('\n');

        for row in &self.rows {
            output.push_str(&format!(
                "{:<28} {:>14} {:>8} {:>7.1}%\n",
                row.category,
                row.total.grouped(),
                row.transaction_count,
                row.percentage
            ));
        }

        output.push_str(&"-".repeat(64));
        output.push('\n');
        output.push_str(&format!(
            "{:<28} {:>14}\n",
            "Total",
            self.total.grouped()
        ));

        output
    }
}
