use std::{env, path::PathBuf};

use crate::{ledger::BudgetRecord, storage::SnapshotFormat};

use super::commands::CommandError;
use super::io::Prompter;
use super::menus::{MenuChoice, MENU_TITLE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

impl CliMode {
    pub fn from_env() -> Self {
        if env::var_os("FINANCE_TRACKER_CLI_SCRIPT").is_some() {
            CliMode::Script
        } else {
            CliMode::Interactive
        }
    }
}

/// State shared by the menu loop and its command handlers.
pub struct ShellContext {
    pub mode: CliMode,
    pub record: BudgetRecord,
    pub snapshot_path: PathBuf,
    pub snapshot_format: SnapshotFormat,
    pub running: bool,
    prompter: Box<dyn Prompter>,
}

impl ShellContext {
    pub fn new(
        mode: CliMode,
        record: BudgetRecord,
        snapshot_path: PathBuf,
        snapshot_format: SnapshotFormat,
        prompter: Box<dyn Prompter>,
    ) -> Self {
        Self {
            mode,
            record,
            snapshot_path,
            snapshot_format,
            running: true,
            prompter,
        }
    }

    /// Reads one answer; running out of input requests exit.
    pub fn read_line(&mut self, prompt: &str) -> Result<String, CommandError> {
        self.prompter
            .text(prompt)?
            .ok_or(CommandError::ExitRequested)
    }

    pub fn read_menu_choice(&mut self) -> Result<Option<String>, CommandError> {
        let labels = MenuChoice::labels();
        Ok(self.prompter.select(MENU_TITLE, &labels)?)
    }

    pub fn status(&self) -> String {
        format!(
            "ShellContext {{ running: {}, name: {:?}, expenses: {} }}",
            self.running,
            self.record.name(),
            self.record.expenses().len()
        )
    }
}
