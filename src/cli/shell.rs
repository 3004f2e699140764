use std::{io, path::PathBuf};

use crate::{
    config::ConfigManager,
    errors::CliError,
    ledger::BudgetRecord,
    storage::SnapshotFormat,
};

use super::commands::{self, CommandError};
use super::io::{DialoguerPrompter, Prompter, ScriptPrompter};
use super::menus::MenuChoice;
use super::output::{self, OutputPreferences};
use super::shell_context::{CliMode, ShellContext};

pub fn run_cli() -> Result<(), CliError> {
    let mode = CliMode::from_env();
    let manager = ConfigManager::new()?;
    let config = manager.load_or_default();

    output::set_preferences(OutputPreferences {
        plain_mode: config.plain_mode || mode == CliMode::Script,
    });

    let snapshot_path = manager.snapshot_path(&config);
    tracing::info!(?mode, path = %snapshot_path.display(), "starting shell");

    let prompter: Box<dyn Prompter> = match mode {
        CliMode::Interactive => Box::new(DialoguerPrompter::new()),
        CliMode::Script => Box::new(ScriptPrompter::new(io::stdin().lock())),
    };

    run_session(mode, prompter, snapshot_path, config.snapshot_format)
}

/// Asks for the operator's name, then runs the menu loop for that record.
pub fn run_session(
    mode: CliMode,
    mut prompter: Box<dyn Prompter>,
    snapshot_path: PathBuf,
    snapshot_format: SnapshotFormat,
) -> Result<(), CliError> {
    let Some(name) = prompter.text("Enter your name")? else {
        output::info("No name entered. Exiting.");
        return Ok(());
    };

    let record = BudgetRecord::new(name);
    let mut context = ShellContext::new(mode, record, snapshot_path, snapshot_format, prompter);
    run_loop(&mut context)
}

pub fn run_loop(context: &mut ShellContext) -> Result<(), CliError> {
    while context.running {
        let raw = match context.read_menu_choice() {
            Ok(Some(raw)) => raw,
            Ok(None) | Err(CommandError::ExitRequested) => break,
            Err(CommandError::Cli(err)) => return Err(err),
        };

        let Some(choice) = MenuChoice::parse(&raw) else {
            output::warning("Invalid menu choice.");
            continue;
        };

        match commands::dispatch(context, choice) {
            Ok(()) => {}
            Err(CommandError::ExitRequested) => context.running = false,
            Err(CommandError::Cli(err)) => return Err(err),
        }
        tracing::trace!(status = %context.status(), "command finished");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::BudgetPeriod;
    use std::fs;
    use std::io::Cursor;
    use tempfile::tempdir;

    fn scripted_context(input: &str, snapshot_path: PathBuf) -> ShellContext {
        ShellContext::new(
            CliMode::Script,
            BudgetRecord::new("Alice"),
            snapshot_path,
            SnapshotFormat::Text,
            Box::new(ScriptPrompter::new(Cursor::new(input.to_string()))),
        )
    }

    #[test]
    fn menu_flow_updates_record() {
        let dir = tempdir().unwrap();
        let mut context = scripted_context(
            "1\nmonthly\n300\n2\n1500\n3\ngroceries\n200\n3\nrent\n900\n5\nrent\n7\n",
            dir.path().join("data.txt"),
        );
        run_loop(&mut context).unwrap();

        assert!(!context.running);
        assert_eq!(context.record.period(), BudgetPeriod::Monthly);
        assert_eq!(context.record.savings_goal(), 300.0);
        assert_eq!(context.record.income(), 1500.0);
        assert_eq!(context.record.expense("groceries"), Some(200.0));
        assert_eq!(context.record.expense("rent"), None);
    }

    #[test]
    fn invalid_entries_are_reprompted() {
        let dir = tempdir().unwrap();
        let mut context = scripted_context(
            "9\nabc\n1\nyearly\nWEEKLY\n0\n-10\nlots\n75\n2\n\n2500\n7\n",
            dir.path().join("data.txt"),
        );
        run_loop(&mut context).unwrap();

        assert_eq!(context.record.period(), BudgetPeriod::Weekly);
        assert_eq!(context.record.savings_goal(), 75.0);
        assert_eq!(context.record.income(), 2500.0);
    }

    #[test]
    fn end_of_input_mid_prompt_exits_cleanly() {
        let dir = tempdir().unwrap();
        let mut context = scripted_context("2\n-5\n", dir.path().join("data.txt"));
        run_loop(&mut context).unwrap();
        assert!(!context.running);
        assert_eq!(context.record.income(), 0.0);
    }

    #[test]
    fn save_appends_each_time() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        let mut context = scripted_context("2\n100\n6\n6\n7\n", path.clone());
        run_loop(&mut context).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.matches("Name: Alice\n").count(), 2);
        assert_eq!(contents.matches("Income: $100.00\n").count(), 2);
    }

    #[test]
    fn failed_save_keeps_shell_running() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("no-such-dir").join("data.txt");
        let mut context = scripted_context("2\n100\n6\n3\nfood\n20\n7\n", path.clone());
        run_loop(&mut context).unwrap();

        assert!(!path.exists());
        assert_eq!(context.record.income(), 100.0);
        assert_eq!(context.record.expense("food"), Some(20.0));
    }

    #[test]
    fn session_without_name_does_nothing() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data.txt");
        run_session(
            CliMode::Script,
            Box::new(ScriptPrompter::new(Cursor::new(String::new()))),
            path.clone(),
            SnapshotFormat::Text,
        )
        .unwrap();
        assert!(!path.exists());
    }
}
