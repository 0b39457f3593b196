//! Checks applied to a new expense before it reaches the store.

use crate::{EngineError, ExpenseNew, ResultEngine};

/// Reject a candidate with an empty name, a non positive or non finite amount
/// or an empty category. `note` and `occurred_at` are accepted as they are.
pub(crate) fn validate_new_expense(expense: &ExpenseNew) -> ResultEngine<()> {
    if expense.name.is_empty() {
        return Err(EngineError::InvalidArgument("name is required".to_string()));
    }
    // Negated comparison so NaN is rejected too; JSON cannot carry infinities.
    if !(expense.amount > 0.0 && expense.amount.is_finite()) {
        return Err(EngineError::InvalidArgument(
            "amount must be greater than 0".to_string(),
        ));
    }
    if expense.category.is_empty() {
        return Err(EngineError::InvalidArgument(
            "category is required".to_string(),
        ));
    }
    Ok(())
}
