use std::io::BufRead;

use crate::application::{AppError, WalletService};
use crate::domain::{Clock, TransactionKind};

/// Result of replaying a script of operations
#[derive(Debug, Clone, Default)]
pub struct ReplayResult {
    pub applied: usize,
    pub skipped: usize,
    pub errors: Vec<ReplayError>,
}

/// A script line that could not be applied
#[derive(Debug, Clone)]
pub struct ReplayError {
    pub line: usize,
    pub error: String,
}

/// Applies `deposit <amount>` / `withdraw <amount>` lines to a wallet.
///
/// Blank lines and lines starting with `#` are skipped. A rejected line is
/// recorded and the replay moves on; only I/O failures abort it.
pub struct Replayer<'a, C: Clock> {
    service: &'a mut WalletService<C>,
}

impl<'a, C: Clock> Replayer<'a, C> {
    pub fn new(service: &'a mut WalletService<C>) -> Self {
        Self { service }
    }

    pub fn replay<R: BufRead>(&mut self, reader: R) -> Result<ReplayResult, AppError> {
        let mut result = ReplayResult::default();

        for (index, line) in reader.lines().enumerate() {
            let line_num = index + 1;
            let line = line?;
            let line = line.trim();

            if line.is_empty() || line.starts_with('#') {
                result.skipped += 1;
                continue;
            }

            match self.apply_line(line) {
                Ok(()) => result.applied += 1,
                Err(e) if e.is_user_error() => result.errors.push(ReplayError {
                    line: line_num,
                    error: e.to_string(),
                }),
                Err(e) => return Err(e),
            }
        }

        tracing::debug!(
            applied = result.applied,
            skipped = result.skipped,
            errors = result.errors.len(),
            "replay finished"
        );
        Ok(result)
    }

    fn apply_line(&mut self, line: &str) -> Result<(), AppError> {
        let (command, amount) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let kind = parse_kind(command)?;
        self.service.submit(kind, amount)?;
        Ok(())
    }
}

fn parse_kind(command: &str) -> Result<TransactionKind, AppError> {
    if let Some(kind) = TransactionKind::from_str(command) {
        return Ok(kind);
    }
    match command.to_lowercase().as_str() {
        "add" => Ok(TransactionKind::Deposit),
        "withdraw" => Ok(TransactionKind::Withdrawal),
        _ => Err(AppError::UnknownCommand(command.to_string())),
    }
}
