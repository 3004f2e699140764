use crate::currency::format_currency;
use crate::utils::parse_period;

use super::{output, prompt_amount, CommandResult, ShellContext};

pub fn set_budget(context: &mut ShellContext) -> CommandResult {
    let period = loop {
        let raw = context.read_line("Enter budget period (weekly/monthly)")?;
        match parse_period(&raw) {
            Ok(period) => break period,
            Err(err) => {
                tracing::debug!(error = %err, "rejected period");
                output::warning("Invalid period. Please enter 'weekly' or 'monthly'.");
            }
        }
    };
    context.record.set_period(period);

    let goal = prompt_amount(
        context,
        "Enter savings goal",
        "Invalid savings goal. Please enter a positive number.",
    )?;
    context.record.set_savings_goal(goal);
    output::success(format!(
        "Budget period set to {} with a savings goal of {}.",
        period,
        format_currency(goal)
    ));
    Ok(())
}

pub fn set_income(context: &mut ShellContext) -> CommandResult {
    let income = prompt_amount(
        context,
        "Enter income amount",
        "Invalid income amount. Please enter a positive number.",
    )?;
    context.record.set_income(income);
    output::success(format!("Income set to {}.", format_currency(income)));
    Ok(())
}
