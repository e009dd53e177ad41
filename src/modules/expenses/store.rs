// Port for the expense collection.
//
// Purpose
// - Keep handlers independent from how expenses are held, so a durable
//   backend could replace the in-memory one behind the same seam.

use thiserror::Error;

use crate::modules::expenses::core::expense::{Expense, NewExpense};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("expense store unavailable: {0}")]
    Unavailable(String),
}

#[async_trait::async_trait]
pub trait ExpenseStore {
    /// Assigns a fresh id and creation instant, appends the record to the end
    /// of the store and returns it. The store grows by exactly one entry.
    async fn create(&self, input: NewExpense) -> Result<Expense, StoreError>;

    /// Full contents in insertion order.
    async fn list(&self) -> Result<Vec<Expense>, StoreError>;

    /// Removes every entry with a matching id. Deleting an id that does not
    /// exist is not an error; the contract is idempotent.
    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError>;

    /// Sums the stored amounts parsed as f64. An amount that does not parse
    /// contributes NaN, which poisons the total.
    async fn sum_amount(&self) -> Result<f64, StoreError>;
}
