use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use super::Cents;

pub type TransactionId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money added to the wallet
    Deposit,
    /// Money taken out of the wallet
    Withdrawal,
}

impl TransactionKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "deposit",
            TransactionKind::Withdrawal => "withdrawal",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(TransactionKind::Deposit),
            "withdrawal" => Some(TransactionKind::Withdrawal),
            _ => None,
        }
    }

    /// Human-readable label shown next to each history row.
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "Deposit",
            TransactionKind::Withdrawal => "Withdrawal",
        }
    }

    /// Direction of the money flow from the wallet owner's point of view.
    pub fn direction(&self) -> &'static str {
        match self {
            TransactionKind::Deposit => "received",
            TransactionKind::Withdrawal => "sent",
        }
    }

    /// Signed effect of `amount` on the balance.
    pub fn signed(&self, amount: Cents) -> Cents {
        match self {
            TransactionKind::Deposit => amount,
            TransactionKind::Withdrawal => -amount,
        }
    }
}

impl std::fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single accepted deposit or withdrawal.
/// Transactions are immutable once created; there is no editing or deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    pub id: TransactionId,
    pub kind: TransactionKind,
    /// Amount in cents (always positive)
    pub amount_cents: Cents,
    /// When the transaction was accepted, in the wallet owner's local offset
    pub created_at: DateTime<FixedOffset>,
}

impl Transaction {
    /// Create a new transaction with a fresh id.
    /// Callers must validate the amount first.
    pub fn new(
        kind: TransactionKind,
        amount_cents: Cents,
        created_at: DateTime<FixedOffset>,
    ) -> Self {
        assert!(amount_cents > 0, "Transaction amount must be positive");
        Self {
            id: Uuid::new_v4(),
            kind,
            amount_cents,
            created_at,
        }
    }

    /// Calendar day this transaction belongs to, in its local offset.
    pub fn day(&self) -> NaiveDate {
        self.created_at.date_naive()
    }
}
