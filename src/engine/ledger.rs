use crate::engine::{Transaction, TransactionStatus};
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum LedgerError {
    #[error("Transaction with id {0} cannot be found in the ledger")]
    UnknownId(u32),

    #[error("Transactions with status {0} are not present")]
    NoMatchingStatus(TransactionStatus),

    #[error("Sender {0} cannot be found in the ledger")]
    UnknownSender(String),

    #[error("Receiver {0} cannot be found in the ledger")]
    UnknownReceiver(String),
}

/// In-memory transaction store.
/// Keeps insertion order, enforces unique ids and answers the query surface
/// with linear scans; collections are expected to stay small.
#[derive(Debug, Default)]
pub struct Ledger {
    transactions: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger {
            transactions: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    pub fn add(&mut self, transaction: Transaction) {
        if self.contains_id(transaction.id) {
            return; // First insertion wins
        }
        self.transactions.push(transaction);
    }

    pub fn contains(&self, transaction: &Transaction) -> bool {
        self.transactions.contains(transaction)
    }

    pub fn contains_id(&self, id: u32) -> bool {
        self.transactions.iter().any(|t| t.id == id)
    }

    pub fn change_status(
        &mut self,
        id: u32,
        status: TransactionStatus,
    ) -> Result<(), LedgerError> {
        match self.transactions.iter_mut().find(|t| t.id == id) {
            Some(transaction) => {
                transaction.status = status;
                Ok(())
            }
            None => Err(LedgerError::UnknownId(id)),
        }
    }

    pub fn remove_by_id(&mut self, id: u32) -> Result<(), LedgerError> {
        match self.transactions.iter().position(|t| t.id == id) {
            Some(index) => {
                self.transactions.remove(index);
                Ok(())
            }
            None => Err(LedgerError::UnknownId(id)),
        }
    }

    pub fn get_by_id(&self, id: u32) -> Result<&Transaction, LedgerError> {
        self.transactions
            .iter()
            .find(|t| t.id == id)
            .ok_or(LedgerError::UnknownId(id))
    }

    /// Transactions with the given status, ordered by amount descending.
    pub fn get_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        let mut matches = self.filter_by_status(status);
        if matches.is_empty() {
            return Err(LedgerError::NoMatchingStatus(status));
        }
        matches.sort_by(|a, b| amount_descending(a, b));
        Ok(matches)
    }

    pub fn senders_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<&str>, LedgerError> {
        Ok(self
            .get_by_status(status)?
            .into_iter()
            .map(|t| t.from.as_str())
            .collect())
    }

    pub fn receivers_by_status(
        &self,
        status: TransactionStatus,
    ) -> Result<Vec<&str>, LedgerError> {
        Ok(self
            .get_by_status(status)?
            .into_iter()
            .map(|t| t.to.as_str())
            .collect())
    }

    /// Every transaction, ordered by amount descending with ties broken by id
    /// descending.
    pub fn all_ordered_by_amount(&self) -> Vec<&Transaction> {
        let mut all: Vec<&Transaction> = self.transactions.iter().collect();
        all.sort_by(|a, b| amount_descending(a, b).then_with(|| b.id.cmp(&a.id)));
        all
    }

    pub fn get_by_sender(&self, sender: &str) -> Result<Vec<&Transaction>, LedgerError> {
        if !self.has_sender(sender) {
            return Err(LedgerError::UnknownSender(sender.to_owned()));
        }
        let mut matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.from == sender)
            .collect();
        matches.sort_by(|a, b| amount_descending(a, b));
        Ok(matches)
    }

    /// Transactions towards the given receiver, ordered by amount descending
    /// with ties broken by id ascending.
    pub fn get_by_receiver(&self, receiver: &str) -> Result<Vec<&Transaction>, LedgerError> {
        // The existence precheck matches on the sender column for both directions.
        if !self.has_sender(receiver) {
            return Err(LedgerError::UnknownReceiver(receiver.to_owned()));
        }
        let mut matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.to == receiver)
            .collect();
        matches.sort_by(|a, b| amount_descending(a, b).then_with(|| a.id.cmp(&b.id)));
        Ok(matches)
    }

    /// Never fails: an empty result stays an empty Vec.
    pub fn get_by_status_and_max_amount(
        &self,
        status: TransactionStatus,
        max_amount: f64,
    ) -> Vec<&Transaction> {
        let mut matches: Vec<&Transaction> = self
            .filter_by_status(status)
            .into_iter()
            .filter(|t| t.amount <= max_amount)
            .collect();
        matches.sort_by(|a, b| amount_descending(a, b));
        matches
    }

    /// Sender's transactions strictly above the given amount, ordered by
    /// amount descending.
    pub fn get_by_sender_and_min_amount(
        &self,
        sender: &str,
        min_amount: f64,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        if !self.has_sender(sender) {
            return Err(LedgerError::UnknownSender(sender.to_owned()));
        }
        let mut matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.from == sender && t.amount > min_amount)
            .collect();
        matches.sort_by(|a, b| amount_descending(a, b));
        Ok(matches)
    }

    /// Receiver's transactions with lo <= amount < hi, ordered by amount
    /// descending with ties broken by id ascending.
    pub fn get_by_receiver_in_amount_range(
        &self,
        receiver: &str,
        lo: f64,
        hi: f64,
    ) -> Result<Vec<&Transaction>, LedgerError> {
        if !self.has_sender(receiver) {
            return Err(LedgerError::UnknownReceiver(receiver.to_owned()));
        }
        let mut matches: Vec<&Transaction> = self
            .transactions
            .iter()
            .filter(|t| t.to == receiver && t.amount >= lo && t.amount < hi)
            .collect();
        matches.sort_by(|a, b| amount_descending(a, b).then_with(|| a.id.cmp(&b.id)));
        Ok(matches)
    }

    /// Transactions with lo <= amount <= hi in insertion order, no sort.
    /// Never fails: an empty result stays an empty Vec.
    pub fn get_all_in_amount_range(&self, lo: f64, hi: f64) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.amount >= lo && t.amount <= hi)
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Transaction> {
        self.transactions.iter()
    }

    fn filter_by_status(&self, status: TransactionStatus) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|t| t.status == status)
            .collect()
    }

    fn has_sender(&self, name: &str) -> bool {
        self.transactions.iter().any(|t| t.from == name)
    }
}

fn amount_descending(a: &Transaction, b: &Transaction) -> Ordering {
    b.amount.total_cmp(&a.amount)
}

#[cfg(test)]
mod tests {
    use crate::engine::{Ledger, LedgerError, Transaction, TransactionStatus};

    fn transaction(id: u32, amount: f64) -> Transaction {
        Transaction::new(id, TransactionStatus::Successful, "Alex", "Michelle", amount)
    }

    #[test]
    fn test_that_added_transaction_is_contained() {
        let mut ledger = Ledger::new();
        let tx = transaction(101, 7.00);

        assert_eq!(ledger.len(), 0);
        assert!(!ledger.contains(&tx));
        assert!(!ledger.contains_id(tx.id));

        ledger.add(tx.clone());

        assert_eq!(ledger.len(), 1);
        assert!(ledger.contains(&tx));
        assert!(ledger.contains_id(tx.id));
    }

    #[test]
    fn test_that_duplicate_id_keeps_the_first_transaction() {
        let mut ledger = Ledger::new();
        ledger.add(transaction(101, 7.00));
        ledger.add(transaction(101, 99.00));

        assert_eq!(ledger.len(), 1);

        let stored = ledger.get_by_id(101);
        assert!(stored.is_ok());
        assert_eq!(stored.unwrap().amount, 7.00);
    }

    #[test]
    fn test_that_change_status_only_touches_the_status() {
        let mut ledger = Ledger::new();
        ledger.add(transaction(101, 7.00));

        let changed = ledger.change_status(101, TransactionStatus::Failed);
        assert!(changed.is_ok());

        let stored = ledger.get_by_id(101).unwrap();
        assert_eq!(stored.status, TransactionStatus::Failed);
        assert_eq!(stored.from, "Alex");
        assert_eq!(stored.to, "Michelle");
        assert_eq!(stored.amount, 7.00);
    }

    #[test]
    fn test_that_change_status_returns_error_for_missing_id() {
        let mut ledger = Ledger::new();

        let changed = ledger.change_status(101, TransactionStatus::Failed);
        assert!(changed.is_err());
        assert!(matches!(changed.err().unwrap(), LedgerError::UnknownId(101)));
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_that_remove_by_id_deletes_the_entry() {
        let mut ledger = Ledger::new();
        ledger.add(transaction(101, 7.00));
        ledger.add(transaction(102, 8.00));

        let removed = ledger.remove_by_id(101);
        assert!(removed.is_ok());

        assert_eq!(ledger.len(), 1);
        assert!(!ledger.contains_id(101));
        assert!(ledger.contains_id(102));
    }

    #[test]
    fn test_that_remove_by_id_returns_error_for_missing_id() {
        let mut ledger = Ledger::new();

        let removed = ledger.remove_by_id(101);
        assert!(removed.is_err());
        assert!(matches!(removed.err().unwrap(), LedgerError::UnknownId(101)));
    }

    #[test]
    fn test_that_iteration_follows_insertion_order() {
        let mut ledger = Ledger::new();
        ledger.add(transaction(3, 1.00));
        ledger.add(transaction(1, 2.00));
        ledger.add(transaction(2, 3.00));

        let ids: Vec<u32> = ledger.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);

        // Restartable
        let ids_again: Vec<u32> = ledger.iter().map(|t| t.id).collect();
        assert_eq!(ids_again, vec![3, 1, 2]);
    }
}
