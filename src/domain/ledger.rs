use super::{
    format_cents, parse_cents, Cents, Clock, History, ParseCentsError, SystemClock, Transaction,
    TransactionKind,
};

/// Balance and history of one wallet for the lifetime of a session.
///
/// The only ways to change state are [`Ledger::deposit`] and
/// [`Ledger::withdraw`]. Both validate before mutating, so every call either
/// applies completely or leaves the ledger untouched.
#[derive(Debug)]
pub struct Ledger<C: Clock = SystemClock> {
    opening_balance: Cents,
    balance: Cents,
    history: History,
    clock: C,
}

impl Ledger<SystemClock> {
    pub fn new(opening_balance: Cents) -> Result<Self, LedgerError> {
        Self::with_clock(opening_balance, SystemClock)
    }
}

impl<C: Clock> Ledger<C> {
    pub fn with_clock(opening_balance: Cents, clock: C) -> Result<Self, LedgerError> {
        if opening_balance < 0 {
            return Err(LedgerError::NegativeOpeningBalance(opening_balance));
        }
        Ok(Self {
            opening_balance,
            balance: opening_balance,
            history: History::new(),
            clock,
        })
    }

    pub fn balance(&self) -> Cents {
        self.balance
    }

    pub fn opening_balance(&self) -> Cents {
        self.opening_balance
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn transaction_count(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Add money to the wallet.
    pub fn deposit(&mut self, amount_cents: Cents) -> Result<Transaction, LedgerError> {
        validate_amount(amount_cents)?;
        self.apply(TransactionKind::Deposit, amount_cents)
    }

    /// Take money out of the wallet. The balance never goes below zero.
    pub fn withdraw(&mut self, amount_cents: Cents) -> Result<Transaction, LedgerError> {
        validate_amount(amount_cents)?;
        if amount_cents > self.balance {
            return Err(LedgerError::InsufficientFunds {
                balance: self.balance,
                requested: amount_cents,
            });
        }

        self.apply(TransactionKind::Withdrawal, amount_cents)
    }

    fn apply(
        &mut self,
        kind: TransactionKind,
        amount_cents: Cents,
    ) -> Result<Transaction, LedgerError> {
        let balance = self
            .balance
            .checked_add(kind.signed(amount_cents))
            .ok_or(LedgerError::InvalidAmount(AmountIssue::TooLarge))?;

        let transaction = Transaction::new(kind, amount_cents, self.clock.now());
        self.balance = balance;
        self.history.insert(transaction.clone());
        Ok(transaction)
    }
}

fn validate_amount(amount_cents: Cents) -> Result<(), LedgerError> {
    if amount_cents <= 0 {
        return Err(LedgerError::InvalidAmount(AmountIssue::NotPositive));
    }
    Ok(())
}

/// Parse user input into an amount, reporting failures as ledger errors.
pub fn parse_amount(input: &str) -> Result<Cents, LedgerError> {
    parse_cents(input).map_err(|e| match e {
        ParseCentsError::InvalidFormat => LedgerError::InvalidAmount(AmountIssue::NotANumber),
        ParseCentsError::Overflow => LedgerError::InvalidAmount(AmountIssue::TooLarge),
        ParseCentsError::SubCentPrecision => {
            LedgerError::InvalidAmount(AmountIssue::TooPrecise)
        }
    })
}

/// Why an amount was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountIssue {
    NotANumber,
    NotPositive,
    TooLarge,
    TooPrecise,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    InvalidAmount(AmountIssue),
    InsufficientFunds { balance: Cents, requested: Cents },
    NegativeOpeningBalance(Cents),
}

impl std::fmt::Display for LedgerError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LedgerError::InvalidAmount(AmountIssue::NotANumber) => {
                write!(f, "Please enter a valid number")
            }
            LedgerError::InvalidAmount(AmountIssue::NotPositive) => {
                write!(f, "Amount must be greater than 0")
            }
            LedgerError::InvalidAmount(AmountIssue::TooLarge) => write!(f, "Amount is too large"),
            LedgerError::InvalidAmount(AmountIssue::TooPrecise) => {
                write!(f, "Amount cannot have more than 2 decimal places")
            }
            LedgerError::InsufficientFunds { balance, .. } => write!(
                f,
                "Insufficient funds. Your balance is ${}",
                format_cents(*balance)
            ),
            LedgerError::NegativeOpeningBalance(balance) => write!(
                f,
                "Opening balance cannot be negative (got {})",
                format_cents(*balance)
            ),
        }
    }
}

impl std::error::Error for LedgerError {}

#[cfg(test)]
mod tests {
    use chrono::{Duration, FixedOffset, TimeZone};

    use super::*;
    use crate::domain::ManualClock;

    fn clock() -> ManualClock {
        ManualClock::new(
            FixedOffset::east_opt(2 * 3600)
                .unwrap()
                .with_ymd_and_hms(2026, 10, 18, 9, 15, 0)
                .unwrap(),
        )
    }

    #[test]
    fn test_new_ledger_is_empty() {
        let ledger = Ledger::with_clock(134056, clock()).unwrap();
        assert_eq!(ledger.balance(), 134056);
        assert_eq!(ledger.opening_balance(), 134056);
        assert!(ledger.is_empty());
        assert_eq!(ledger.transaction_count(), 0);
    }

    #[test]
    fn test_negative_opening_balance_rejected() {
        let result = Ledger::with_clock(-1, clock());
        assert!(matches!(result, Err(LedgerError::NegativeOpeningBalance(-1))));
    }

    #[test]
    fn test_deposit_updates_balance_and_history() {
        let mut ledger = Ledger::with_clock(134056, clock()).unwrap();
        let tx = ledger.deposit(10000).unwrap();

        assert_eq!(ledger.balance(), 144056);
        assert_eq!(tx.kind, TransactionKind::Deposit);
        assert_eq!(tx.amount_cents, 10000);
        assert_eq!(ledger.history().groups().len(), 1);
        assert_eq!(ledger.history().groups()[0].items()[0], tx);
    }

    #[test]
    fn test_withdraw_insufficient_funds_leaves_state() {
        let mut ledger = Ledger::with_clock(134056, clock()).unwrap();
        ledger.deposit(10000).unwrap();

        let err = ledger.withdraw(200000).unwrap_err();
        assert_eq!(
            err,
            LedgerError::InsufficientFunds {
                balance: 144056,
                requested: 200000
            }
        );
        assert_eq!(err.to_string(), "Insufficient funds. Your balance is $1440.56");
        assert_eq!(ledger.balance(), 144056);
        assert_eq!(ledger.transaction_count(), 1);
    }

    #[test]
    fn test_withdraw_entire_balance() {
        let mut ledger = Ledger::with_clock(5000, clock()).unwrap();
        ledger.withdraw(5000).unwrap();
        assert_eq!(ledger.balance(), 0);
        assert!(matches!(
            ledger.withdraw(1),
            Err(LedgerError::InsufficientFunds { balance: 0, .. })
        ));
    }

    #[test]
    fn test_non_positive_amounts_rejected() {
        let mut ledger = Ledger::with_clock(134056, clock()).unwrap();
        for amount in [0, -500] {
            assert_eq!(
                ledger.deposit(amount),
                Err(LedgerError::InvalidAmount(AmountIssue::NotPositive))
            );
            assert_eq!(
                ledger.withdraw(amount),
                Err(LedgerError::InvalidAmount(AmountIssue::NotPositive))
            );
        }
        assert_eq!(ledger.balance(), 134056);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_invalid_amount_checked_before_funds() {
        let mut ledger = Ledger::with_clock(0, clock()).unwrap();
        assert_eq!(
            ledger.withdraw(-1),
            Err(LedgerError::InvalidAmount(AmountIssue::NotPositive))
        );
    }

    #[test]
    fn test_deposit_overflow_rejected() {
        let mut ledger = Ledger::with_clock(i64::MAX - 10, clock()).unwrap();
        assert_eq!(
            ledger.deposit(11),
            Err(LedgerError::InvalidAmount(AmountIssue::TooLarge))
        );
        assert_eq!(ledger.balance(), i64::MAX - 10);
        assert!(ledger.deposit(10).is_ok());
    }

    #[test]
    fn test_transactions_grouped_across_midnight() {
        let clock = clock();
        let mut ledger = Ledger::with_clock(0, &clock).unwrap();

        ledger.deposit(100).unwrap();
        clock.advance(Duration::hours(15)); // 00:15 next day
        let late = ledger.deposit(200).unwrap();

        let groups = ledger.history().groups();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].date().to_string(), "2026-10-19");
        assert_eq!(groups[0].items()[0].id, late.id);
        assert_eq!(groups[1].date().to_string(), "2026-10-18");
    }

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("40.56"), Ok(4056));
        assert_eq!(parse_amount("-5"), Ok(-500));
        assert_eq!(parse_amount("1.500"), Ok(150));
        assert_eq!(
            parse_amount("0.001"),
            Err(LedgerError::InvalidAmount(AmountIssue::TooPrecise))
        );
        assert_eq!(
            parse_amount("NaN"),
            Err(LedgerError::InvalidAmount(AmountIssue::NotANumber))
        );
        assert_eq!(
            parse_amount("99999999999999999999"),
            Err(LedgerError::InvalidAmount(AmountIssue::TooLarge))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            LedgerError::InvalidAmount(AmountIssue::NotANumber).to_string(),
            "Please enter a valid number"
        );
        assert_eq!(
            LedgerError::InvalidAmount(AmountIssue::NotPositive).to_string(),
            "Amount must be greater than 0"
        );
    }
}
