use crate::domain::{
    format_cents, parse_amount, Cents, Clock, Ledger, LedgerError, SystemClock, Transaction,
    TransactionKind,
};

use super::{AppError, WalletView};

/// Application service wrapping a single wallet's ledger.
/// This is the primary interface for any front end (interactive session, replay, tests).
pub struct WalletService<C: Clock = SystemClock> {
    ledger: Ledger<C>,
}

impl WalletService<SystemClock> {
    /// Start a session with the given opening balance.
    pub fn new(opening_balance: Cents) -> Result<Self, AppError> {
        Self::with_clock(opening_balance, SystemClock)
    }
}

impl<C: Clock> WalletService<C> {
    pub fn with_clock(opening_balance: Cents, clock: C) -> Result<Self, AppError> {
        let ledger = Ledger::with_clock(opening_balance, clock)?;
        tracing::debug!(
            opening_balance = %format_cents(opening_balance),
            "wallet session started"
        );
        Ok(Self { ledger })
    }

    pub fn ledger(&self) -> &Ledger<C> {
        &self.ledger
    }

    pub fn balance(&self) -> Cents {
        self.ledger.balance()
    }

    /// Snapshot of the wallet for rendering.
    pub fn view(&self) -> WalletView {
        WalletView::from_ledger(&self.ledger)
    }

    // ========================
    // Raw input
    // ========================

    /// Parse `input` and deposit it.
    pub fn deposit(&mut self, input: &str) -> Result<Transaction, AppError> {
        self.submit(TransactionKind::Deposit, input)
    }

    /// Parse `input` and withdraw it.
    pub fn withdraw(&mut self, input: &str) -> Result<Transaction, AppError> {
        self.submit(TransactionKind::Withdrawal, input)
    }

    /// Parse `input` and apply it as a transaction of the given kind.
    pub fn submit(&mut self, kind: TransactionKind, input: &str) -> Result<Transaction, AppError> {
        let amount_cents = parse_amount(input).inspect_err(|e| {
            tracing::warn!(%kind, input, error = %e, "rejected amount input");
        })?;
        self.apply(kind, amount_cents)
    }

    // ========================
    // Parsed amounts
    // ========================

    pub fn deposit_cents(&mut self, amount_cents: Cents) -> Result<Transaction, AppError> {
        self.apply(TransactionKind::Deposit, amount_cents)
    }

    pub fn withdraw_cents(&mut self, amount_cents: Cents) -> Result<Transaction, AppError> {
        self.apply(TransactionKind::Withdrawal, amount_cents)
    }

    fn apply(
        &mut self,
        kind: TransactionKind,
        amount_cents: Cents,
    ) -> Result<Transaction, AppError> {
        let result = match kind {
            TransactionKind::Deposit => self.ledger.deposit(amount_cents),
            TransactionKind::Withdrawal => self.ledger.withdraw(amount_cents),
        };

        match result {
            Ok(transaction) => {
                tracing::info!(
                    id = %transaction.id,
                    %kind,
                    amount = %format_cents(amount_cents),
                    balance = %format_cents(self.ledger.balance()),
                    "transaction recorded"
                );
                Ok(transaction)
            }
            Err(e) => {
                log_rejection(kind, amount_cents, &e);
                Err(e.into())
            }
        }
    }
}

fn log_rejection(kind: TransactionKind, amount_cents: Cents, error: &LedgerError) {
    tracing::warn!(
        %kind,
        amount = %format_cents(amount_cents),
        error = %error,
        "transaction rejected"
    );
}
