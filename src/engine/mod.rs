mod ledger;
mod record;
mod transaction;
mod transaction_snapshot;

pub use ledger::{Ledger, LedgerError};
pub use record::InputRecord;
pub use transaction::{Transaction, TransactionStatus};
pub use transaction_snapshot::TransactionSnapshot;
