//! Handlers behind each main menu entry.

pub mod budget;
pub mod expense;
pub mod persist;
pub mod report;

use thiserror::Error;

use crate::errors::CliError;
use crate::utils::parse_amount;

use super::menus::MenuChoice;
use super::output;
use super::shell_context::ShellContext;

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("exit requested")]
    ExitRequested,
    #[error(transparent)]
    Cli(#[from] CliError),
}

pub type CommandResult = Result<(), CommandError>;

pub fn dispatch(context: &mut ShellContext, choice: MenuChoice) -> CommandResult {
    tracing::debug!(?choice, "dispatching menu choice");
    match choice {
        MenuChoice::SetBudget => budget::set_budget(context),
        MenuChoice::SetIncome => budget::set_income(context),
        MenuChoice::SetExpense => expense::set_expense(context),
        MenuChoice::ViewReport => report::view_summary(context),
        MenuChoice::DeleteExpense => expense::delete_expense(context),
        MenuChoice::Save => persist::save_to_file(context),
        MenuChoice::Exit => Err(CommandError::ExitRequested),
    }
}

/// Prompts until the operator enters a strictly positive amount.
pub(crate) fn prompt_amount(
    context: &mut ShellContext,
    prompt: &str,
    invalid_message: &str,
) -> Result<f64, CommandError> {
    loop {
        let raw = context.read_line(prompt)?;
        match parse_amount(&raw) {
            Ok(amount) => return Ok(amount),
            Err(err) => {
                tracing::debug!(error = %err, "rejected amount");
                output::warning(invalid_message);
            }
        }
    }
}
