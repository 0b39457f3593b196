use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::store::{Clock, ExpenseStore};

mod expenses;
mod summary;

/// The expense service.
///
/// Both transports call into this type and nothing else. It owns the store,
/// so every `Engine` is an independent dataset; share one behind an `Arc` to
/// serve concurrent requests.
pub struct Engine {
    store: ExpenseStore,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Number of stored expenses.
    pub async fn len(&self) -> usize {
        self.store.len().await
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    clock: Option<Clock>,
}

impl EngineBuilder {
    /// Override the source of `created_at` timestamps.
    pub fn clock<F>(mut self, clock: F) -> EngineBuilder
    where
        F: Fn() -> DateTime<Utc> + Send + Sync + 'static,
    {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        let store = match self.clock {
            Some(clock) => ExpenseStore::new(clock),
            None => ExpenseStore::default(),
        };
        Engine { store }
    }
}
