use std::collections::BTreeMap;

use serde::Serialize;

use super::budget::BudgetPeriod;

/// In-memory financial state for the single operator of a session.
///
/// Mutators apply values as given; callers validate operator input with
/// [`crate::utils::ensure_positive`] before reaching here.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetRecord {
    name: String,
    period: BudgetPeriod,
    income: f64,
    expenses: BTreeMap<String, f64>,
    savings_goal: f64,
}

impl BudgetRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            period: BudgetPeriod::Unset,
            income: 0.0,
            expenses: BTreeMap::new(),
            savings_goal: 0.0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn period(&self) -> BudgetPeriod {
        self.period
    }

    pub fn set_period(&mut self, period: BudgetPeriod) {
        self.period = period;
    }

    pub fn income(&self) -> f64 {
        self.income
    }

    /// Replaces the income; previous values are not accumulated.
    pub fn set_income(&mut self, amount: f64) {
        self.income = amount;
    }

    pub fn savings_goal(&self) -> f64 {
        self.savings_goal
    }

    pub fn set_savings_goal(&mut self, amount: f64) {
        self.savings_goal = amount;
    }

    pub fn expenses(&self) -> &BTreeMap<String, f64> {
        &self.expenses
    }

    pub fn expense(&self, name: &str) -> Option<f64> {
        self.expenses.get(name).copied()
    }

    pub fn expense_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.expenses.keys().map(String::as_str)
    }

    pub fn has_expenses(&self) -> bool {
        !self.expenses.is_empty()
    }

    /// Inserts the expense, overwriting any existing amount under `name`.
    pub fn add_or_update_expense(&mut self, name: impl Into<String>, amount: f64) {
        self.expenses.insert(name.into(), amount);
    }

    pub fn update_expense(&mut self, name: impl Into<String>, amount: f64) {
        self.add_or_update_expense(name, amount);
    }

    /// Returns `false` when no expense is stored under `name`.
    pub fn delete_expense(&mut self, name: &str) -> bool {
        self.expenses.remove(name).is_some()
    }

    pub fn total_expenses(&self) -> f64 {
        self.expenses.values().sum()
    }

    /// Income minus total expenses; negative when over budget.
    pub fn remaining_budget(&self) -> f64 {
        self.income - self.total_expenses()
    }

    pub fn is_over_budget(&self) -> bool {
        self.remaining_budget() < 0.0
    }
}
