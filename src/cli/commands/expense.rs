use crate::currency::format_currency;

use super::{output, prompt_amount, CommandResult, ShellContext};

pub fn set_expense(context: &mut ShellContext) -> CommandResult {
    let name = context.read_line("Enter expense name")?;
    let amount = prompt_amount(
        context,
        "Enter expense amount",
        "Invalid expense amount. Please enter a positive number.",
    )?;
    let replaced = context.record.expense(&name).is_some();
    context.record.add_or_update_expense(name.clone(), amount);
    tracing::debug!(expense = %name, amount, replaced, "expense recorded");
    let verb = if replaced { "updated" } else { "added" };
    output::success(format!(
        "Expense '{}' {} at {}.",
        name,
        verb,
        format_currency(amount)
    ));
    Ok(())
}

pub fn delete_expense(context: &mut ShellContext) -> CommandResult {
    if !context.record.has_expenses() {
        output::info("No expenses to delete.");
        return Ok(());
    }

    output::blank_line();
    output::info("Current Expenses:");
    for name in context.record.expense_names() {
        output::info(format!("- {}", name));
    }

    let name = context.read_line("Enter the name of the expense to delete")?;
    if context.record.delete_expense(&name) {
        output::success(format!("Expense '{}' deleted successfully.", name));
    } else {
        output::warning("Expense not found.");
    }
    Ok(())
}
