use std::io;

use thiserror::Error;

/// Error type that captures failures of the budget core.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FinanceError>;

/// Failures while reading or writing the settings file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Serialization error: {0}")]
    Serde(String),
}

/// User-facing shell error wrapper.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Core(#[from] FinanceError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl From<dialoguer::Error> for CliError {
    fn from(err: dialoguer::Error) -> Self {
        match err {
            dialoguer::Error::IO(io_err) => CliError::Io(io_err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_amount_message_names_the_rule() {
        let err = FinanceError::InvalidAmount("value must be greater than zero".into());
        assert_eq!(
            err.to_string(),
            "Invalid amount: value must be greater than zero"
        );
    }

    #[test]
    fn core_errors_pass_through_cli_wrapper() {
        let err = CliError::from(FinanceError::InvalidPeriod("yearly".into()));
        assert_eq!(err.to_string(), "Invalid period: yearly");
    }
}
