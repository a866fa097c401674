//! Command-level errors and their exit codes.

use thiserror::Error;

use common::{classify, AppError, ConfigError, Failure};
use domain::AdapterError;

#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{}: {}", .0.code(), .0.user_message())]
    App(#[from] AppError),

    #[error("CONFIG_ERROR: {0}")]
    Config(#[from] ConfigError),

    #[error("OUTPUT_ERROR: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<AdapterError> for CommandError {
    fn from(e: AdapterError) -> Self {
        CommandError::App(classify(Failure::from(e)))
    }
}

impl CommandError {
    /// Process exit code, derived from the HTTP status class of the failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            CommandError::App(AppError::BadRequest(_)) => 2,
            CommandError::App(AppError::Unauthorized(_)) => 3,
            CommandError::App(AppError::NotFound(_)) => 4,
            CommandError::App(AppError::InternalServerError)
            | CommandError::Config(_)
            | CommandError::Output(_) => 1,
        }
    }
}

pub type CommandResult<T> = Result<T, CommandError>;
