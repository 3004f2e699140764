#![allow(dead_code)]

use finance_tracker::ledger::{BudgetPeriod, BudgetRecord};

/// Record used by the report and persistence suites.
pub fn alice_record() -> BudgetRecord {
    let mut record = BudgetRecord::new("Alice");
    record.set_period(BudgetPeriod::Monthly);
    record.set_income(1500.0);
    record.add_or_update_expense("groceries", 200.0);
    record.set_savings_goal(300.0);
    record
}

pub const ALICE_SUMMARY: &str = "Name: Alice
Budget Period: monthly
Income: $1500.00
Expenses:
  groceries: $200.00
Total Expenses: $200.00
Remaining Budget: $1300.00
Savings Goal: $300.00";
