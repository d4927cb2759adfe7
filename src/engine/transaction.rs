use serde::Deserialize;
use std::fmt;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    Successful,
    Failed,
    Aborted,
    Unauthorized,
    None,
}

impl fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TransactionStatus::Successful => "successful",
            TransactionStatus::Failed => "failed",
            TransactionStatus::Aborted => "aborted",
            TransactionStatus::Unauthorized => "unauthorized",
            TransactionStatus::None => "none",
        };
        write!(f, "{name}")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub id: u32, // Unique
    pub status: TransactionStatus,
    pub from: String,
    pub to: String,
    pub amount: f64,
}

impl Transaction {
    pub fn new(id: u32, status: TransactionStatus, from: &str, to: &str, amount: f64) -> Self {
        Transaction {
            id,
            status,
            from: from.to_owned(),
            to: to.to_owned(),
            amount,
        }
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "id: {}, status: {}, from: {}, to: {}, amount: {:.2}",
            self.id, self.status, self.from, self.to, self.amount
        )
    }
}
