use thiserror::Error;

use crate::domain::LedgerError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// True for errors caused by bad user input, which are reported and then
    /// ignored rather than ending a session.
    pub fn is_user_error(&self) -> bool {
        matches!(self, AppError::Ledger(_) | AppError::UnknownCommand(_))
    }
}
