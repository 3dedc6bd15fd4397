use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{
    format_cents, Cents, Clock, DayGroup, Ledger, Transaction, TransactionId, TransactionKind,
};

/// Currency symbol used for every displayed amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Read-only snapshot of a wallet, ready for rendering.
#[derive(Debug, Clone, Serialize)]
pub struct WalletView {
    pub balance: Cents,
    pub balance_display: String,
    pub days: Vec<DayView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DayView {
    pub date: NaiveDate,
    /// e.g. "Oct 18, 2026"
    pub label: String,
    pub items: Vec<TransactionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransactionView {
    /// Stable key for rendering
    pub id: TransactionId,
    pub kind: TransactionKind,
    pub name: &'static str,
    pub direction: &'static str,
    /// e.g. "03:04 PM"
    pub time: String,
    pub amount: Cents,
    /// e.g. "+$100.00" or "-$40.56"
    pub amount_display: String,
}

impl WalletView {
    pub fn from_ledger<C: Clock>(ledger: &Ledger<C>) -> Self {
        Self {
            balance: ledger.balance(),
            balance_display: display_money(ledger.balance()),
            days: ledger.history().groups().iter().map(DayView::from_group).collect(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl DayView {
    fn from_group(group: &DayGroup) -> Self {
        Self {
            date: group.date(),
            label: group.date().format("%b %-d, %Y").to_string(),
            items: group.items().iter().map(TransactionView::from_transaction).collect(),
        }
    }
}

impl TransactionView {
    fn from_transaction(tx: &Transaction) -> Self {
        let sign = match tx.kind {
            TransactionKind::Deposit => "+",
            TransactionKind::Withdrawal => "-",
        };
        Self {
            id: tx.id,
            kind: tx.kind,
            name: tx.kind.label(),
            direction: tx.kind.direction(),
            time: tx.created_at.format("%I:%M %p").to_string(),
            amount: tx.amount_cents,
            amount_display: format!("{}{}", sign, display_money(tx.amount_cents)),
        }
    }
}

/// Format an amount with the currency symbol, e.g. "$1340.56".
pub fn display_money(cents: Cents) -> String {
    if cents < 0 {
        format!("-{}{}", CURRENCY_SYMBOL, format_cents(-cents))
    } else {
        format!("{}{}", CURRENCY_SYMBOL, format_cents(cents))
    }
}
