use serde::{Deserialize, Serialize};

use crate::engine::Transaction;

/// Text-only view of a Transaction used for report output
/// It decouples serialisation from the domain type and keeps CSV comparisons exact
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct TransactionSnapshot {
    pub id: String,
    pub status: String,
    pub from: String,
    pub to: String,
    pub amount: String,
}

impl TransactionSnapshot {
    pub fn from_transaction(transaction: &Transaction) -> Self {
        TransactionSnapshot {
            id: transaction.id.to_string(),
            status: transaction.status.to_string(),
            from: transaction.from.clone(),
            to: transaction.to.clone(),
            amount: format!("{:.2}", transaction.amount),
        }
    }
}
