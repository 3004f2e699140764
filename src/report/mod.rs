//! Human-readable summaries of a [`BudgetRecord`].

use crate::currency::format_currency;
use crate::ledger::BudgetRecord;

/// Builds the fixed-order financial summary for a record.
pub struct FinanceReport<'a> {
    record: &'a BudgetRecord,
}

impl<'a> FinanceReport<'a> {
    pub fn new(record: &'a BudgetRecord) -> Self {
        Self { record }
    }

    /// Summary lines without terminators, one expense line per stored entry.
    pub fn lines(&self) -> Vec<String> {
        let record = self.record;
        let mut lines = Vec::with_capacity(7 + record.expenses().len());
        lines.push(format!("Name: {}", record.name()));
        lines.push(format!("Budget Period: {}", record.period()));
        lines.push(format!("Income: {}", format_currency(record.income())));
        lines.push("Expenses:".to_string());
        for (name, amount) in record.expenses() {
            lines.push(format!("  {}: {}", name, format_currency(*amount)));
        }
        lines.push(format!(
            "Total Expenses: {}",
            format_currency(record.total_expenses())
        ));
        lines.push(format!(
            "Remaining Budget: {}",
            format_currency(record.remaining_budget())
        ));
        lines.push(format!(
            "Savings Goal: {}",
            format_currency(record.savings_goal())
        ));
        lines
    }

    pub fn generate_summary(&self) -> String {
        self.lines().join("\n")
    }
}

pub fn generate_summary(record: &BudgetRecord) -> String {
    FinanceReport::new(record).generate_summary()
}
