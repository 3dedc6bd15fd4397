use chrono::NaiveDate;

use super::{Transaction, TransactionId};

/// All transactions accepted on one calendar day, newest first.
#[derive(Debug, Clone)]
pub struct DayGroup {
    date: NaiveDate,
    items: Vec<Transaction>,
}

impl DayGroup {
    fn new(first: Transaction) -> Self {
        Self {
            date: first.day(),
            items: vec![first],
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Transactions of this day, newest first. Never empty.
    pub fn items(&self) -> &[Transaction] {
        &self.items
    }

    pub fn contains(&self, id: TransactionId) -> bool {
        self.items.iter().any(|t| t.id == id)
    }
}

/// Date-grouped transaction history, newest day first.
///
/// Holds at most one group per calendar date. Groups are created lazily on
/// the first transaction of a day and are never removed.
#[derive(Debug, Clone, Default)]
pub struct History {
    groups: Vec<DayGroup>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn groups(&self) -> &[DayGroup] {
        &self.groups
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn len(&self) -> usize {
        self.transactions().count()
    }

    /// Iterate over every transaction, newest first.
    pub fn transactions(&self) -> impl Iterator<Item = &Transaction> {
        self.groups.iter().flat_map(|g| g.items.iter())
    }

    /// Insert a transaction at the front of its day's group, creating the
    /// group at the front of the history if the day has none yet.
    ///
    /// Returns false if a transaction with the same id is already present in
    /// that day's group, in which case nothing changes.
    pub fn insert(&mut self, transaction: Transaction) -> bool {
        let day = transaction.day();

        // A session's history is small, a linear scan is enough
        match self.groups.iter_mut().find(|g| g.date == day) {
            Some(group) => {
                if group.contains(transaction.id) {
                    return false;
                }
                group.items.insert(0, transaction);
            }
            None => self.groups.insert(0, DayGroup::new(transaction)),
        }
        true
    }
}
