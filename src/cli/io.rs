//! Prompt sources for the shell: dialoguer on a terminal, plain lines in
//! script mode.

use std::io::{self, BufRead, Write};

use dialoguer::{theme::ColorfulTheme, Input, Select};

use crate::errors::CliError;

/// Source of operator answers. `None` means input is exhausted.
pub trait Prompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    /// Shows numbered `items` and returns the operator's raw choice
    /// (a 1-based index for well-formed answers).
    fn select(&mut self, title: &str, items: &[&str]) -> Result<Option<String>, CliError>;
}

pub struct DialoguerPrompter {
    theme: ColorfulTheme,
}

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for DialoguerPrompter {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let answer = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();
        match answer {
            Ok(value) => Ok(Some(value)),
            Err(err) => end_of_input(err.into()),
        }
    }

    fn select(&mut self, title: &str, items: &[&str]) -> Result<Option<String>, CliError> {
        let selection = Select::with_theme(&self.theme)
            .with_prompt(title)
            .items(items)
            .default(0)
            .interact_opt();
        match selection {
            Ok(index) => Ok(index.map(|index| (index + 1).to_string())),
            Err(err) => end_of_input(err.into()),
        }
    }
}

fn end_of_input(err: CliError) -> Result<Option<String>, CliError> {
    match &err {
        CliError::Io(io_err)
            if matches!(
                io_err.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::UnexpectedEof
            ) =>
        {
            Ok(None)
        }
        _ => Err(err),
    }
}

/// Reads one answer per input line, echoing prompts to stdout.
pub struct ScriptPrompter<R> {
    reader: R,
}

impl<R: BufRead> ScriptPrompter<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn next_line(&mut self) -> Result<Option<String>, CliError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(trimmed))
    }
}

impl<R: BufRead> Prompter for ScriptPrompter<R> {
    fn text(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        print!("{prompt}: ");
        io::stdout().flush()?;
        let line = self.next_line()?;
        println!();
        Ok(line)
    }

    fn select(&mut self, title: &str, items: &[&str]) -> Result<Option<String>, CliError> {
        println!("\n{title}");
        for (index, item) in items.iter().enumerate() {
            println!("{}. {}", index + 1, item);
        }
        self.text("Select an option")
    }
}
