//! Expense ledger engine.
//!
//! Holds the in-memory expense collection, validates new expenses and
//! aggregates them per category. Transports live in the `server` crate.

pub use error::EngineError;
pub use expenses::{Expense, ExpenseCreated, ExpenseNew, STATUS_OK};
pub use ops::{Engine, EngineBuilder};
pub use store::Clock;
pub use summary::CategorySummary;

mod error;
mod expenses;
mod ops;
mod store;
mod summary;
mod validation;

type ResultEngine<T> = Result<T, EngineError>;
