//! Expense records as kept by the store.

/// Status marker returned for every accepted expense.
pub const STATUS_OK: &str = "ok";

/// A recorded expense.
///
/// `id` and `created_at` are assigned by the store; everything else is what
/// the caller submitted. Records are never modified after insertion.
#[derive(Clone, Debug, PartialEq)]
pub struct Expense {
    pub id: String,
    pub name: String,
    pub amount: f64,
    pub category: String,
    /// Free text, may be empty.
    pub note: String,
    /// Caller supplied date of the expense. Opaque, may be empty.
    pub occurred_at: String,
    /// ISO-8601 UTC insertion time.
    pub created_at: String,
}

/// A candidate expense, before validation and insertion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ExpenseNew {
    pub name: String,
    pub amount: f64,
    pub category: String,
    pub note: String,
    pub occurred_at: String,
}

impl ExpenseNew {
    pub fn new(name: impl Into<String>, amount: f64, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount,
            category: category.into(),
            ..Default::default()
        }
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn occurred_at(mut self, occurred_at: impl Into<String>) -> Self {
        self.occurred_at = occurred_at.into();
        self
    }
}

/// Outcome of a successful add.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpenseCreated {
    pub id: String,
    pub status: String,
}
