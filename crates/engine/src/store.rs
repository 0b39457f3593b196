//! In-memory expense store.
//!
//! The store is the only shared mutable state of the service. Inserts take
//! the write lock for the duration of id assignment and append, reads take
//! the read lock just long enough to clone the collection. Nothing else
//! (validation, logging) happens while the lock is held.

use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use tokio::sync::RwLock;

use crate::{Expense, ExpenseNew};

/// Source of `created_at` timestamps.
pub type Clock = Arc<dyn Fn() -> DateTime<Utc> + Send + Sync>;

pub(crate) struct ExpenseStore {
    expenses: RwLock<Vec<Expense>>,
    clock: Clock,
}

impl ExpenseStore {
    pub(crate) fn new(clock: Clock) -> Self {
        Self {
            expenses: RwLock::new(Vec::new()),
            clock,
        }
    }

    /// Append a candidate, assigning its id and creation time.
    ///
    /// The id is the 1-based position of the record, so ids are strictly
    /// increasing in insertion order.
    pub(crate) async fn insert(&self, candidate: ExpenseNew) -> Expense {
        let mut expenses = self.expenses.write().await;
        let expense = Expense {
            id: (expenses.len() + 1).to_string(),
            name: candidate.name,
            amount: candidate.amount,
            category: candidate.category,
            note: candidate.note,
            occurred_at: candidate.occurred_at,
            created_at: (self.clock)().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        expenses.push(expense.clone());
        expense
    }

    /// Point-in-time copy of every record, in insertion order.
    pub(crate) async fn snapshot(&self) -> Vec<Expense> {
        self.expenses.read().await.clone()
    }

    pub(crate) async fn len(&self) -> usize {
        self.expenses.read().await.len()
    }
}

impl Default for ExpenseStore {
    fn default() -> Self {
        Self::new(Arc::new(Utc::now))
    }
}
