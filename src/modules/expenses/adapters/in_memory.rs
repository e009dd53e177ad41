// In memory implementation of the ExpenseStore port.
//
// Purpose
// - Hold the process's expenses for its lifetime; nothing is persisted.
//
// Responsibilities
// - Keep insertion order.
// - Do every read-modify-write under a single lock acquisition, so each
//   operation stays atomic with respect to concurrent requests.

use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::expenses::core::expense::{Expense, NewExpense};
use crate::modules::expenses::store::{ExpenseStore, StoreError};

#[derive(Default)]
pub struct InMemoryExpenseStore {
    rows: RwLock<Vec<Expense>>,
    is_offline: bool,
}

impl InMemoryExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Unavailable("store toggled offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl ExpenseStore for InMemoryExpenseStore {
    async fn create(&self, input: NewExpense) -> Result<Expense, StoreError> {
        self.check_online()?;
        let mut rows = self.rows.write().await;
        let mut id = Uuid::now_v7().to_string();
        // UUIDv7 collisions should not happen in practice; the insertion
        // check keeps the id-uniqueness invariant explicit anyway.
        while rows.iter().any(|row| row.id == id) {
            id = Uuid::now_v7().to_string();
        }
        let expense = Expense {
            id,
            name: input.name,
            amount: input.amount,
            category: input.category,
            date: input.date,
            created_at: Utc::now(),
        };
        rows.push(expense.clone());
        Ok(expense)
    }

    async fn list(&self) -> Result<Vec<Expense>, StoreError> {
        self.check_online()?;
        Ok(self.rows.read().await.clone())
    }

    async fn delete_by_id(&self, id: &str) -> Result<(), StoreError> {
        self.check_online()?;
        self.rows.write().await.retain(|row| row.id != id);
        Ok(())
    }

    async fn sum_amount(&self) -> Result<f64, StoreError> {
        self.check_online()?;
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .map(|row| match row.amount.as_deref() {
                Some(raw) => raw.parse::<f64>().unwrap_or(f64::NAN),
                None => f64::NAN,
            })
            .sum())
    }
}
