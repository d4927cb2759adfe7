use serde::Deserialize;

use crate::engine::{Transaction, TransactionStatus};

#[derive(Deserialize, Debug, Clone)]
pub struct InputRecord {
    pub id: u32,
    pub status: TransactionStatus,
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl InputRecord {
    pub fn to_transaction(&self) -> Transaction {
        Transaction {
            id: self.id,
            status: self.status,
            from: self.from.clone(),
            to: self.to.clone(),
            amount: self.amount,
        }
    }
}
