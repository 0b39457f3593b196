use crate::{
    Expense, ExpenseCreated, ExpenseNew, ResultEngine, STATUS_OK,
    validation::validate_new_expense,
};

use super::Engine;

impl Engine {
    /// Validate and store a new expense.
    ///
    /// A rejected expense leaves the store untouched, so the caller can retry
    /// with corrected input.
    pub async fn add_expense(&self, expense: ExpenseNew) -> ResultEngine<ExpenseCreated> {
        if let Err(err) = validate_new_expense(&expense) {
            tracing::debug!("rejected expense: {err}");
            return Err(err);
        }

        let stored = self.store.insert(expense).await;
        tracing::debug!(id = %stored.id, category = %stored.category, "expense added");

        Ok(ExpenseCreated {
            id: stored.id,
            status: STATUS_OK.to_string(),
        })
    }

    /// Every stored expense, in insertion order.
    pub async fn list_expenses(&self) -> Vec<Expense> {
        self.store.snapshot().await
    }
}
