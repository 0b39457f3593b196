//! Per-category aggregation of expenses.

use std::collections::HashMap;

use crate::Expense;

/// Count and total of the expenses sharing one category.
#[derive(Clone, Debug, PartialEq)]
pub struct CategorySummary {
    pub category: String,
    pub items: u32,
    pub total: f64,
}

/// Group expenses by exact category and compute count and sum for each.
///
/// Categories come out in the order they first appear in `expenses`. Callers
/// should not rely on it. A total that overflows `f64` saturates at
/// `f64::MAX`, so it stays representable in JSON.
pub(crate) fn summarize(expenses: &[Expense]) -> Vec<CategorySummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<CategorySummary> = Vec::new();

    for expense in expenses {
        let index = *positions
            .entry(expense.category.as_str())
            .or_insert_with(|| {
                summaries.push(CategorySummary {
                    category: expense.category.clone(),
                    items: 0,
                    total: 0.0,
                });
                summaries.len() - 1
            });
        let summary = &mut summaries[index];
        summary.items += 1;
        summary.total = (summary.total + expense.amount).min(f64::MAX);
    }

    summaries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(id: usize, amount: f64, category: &str) -> Expense {
        Expense {
            id: id.to_string(),
            name: format!("expense {id}"),
            amount,
            category: category.to_string(),
            note: String::new(),
            occurred_at: String::new(),
            created_at: "2025-10-16T12:00:00Z".to_string(),
        }
    }

    #[test]
    fn empty_input_has_no_categories() {
        assert!(summarize(&[]).is_empty());
    }

    #[test]
    fn groups_by_category() {
        let expenses = vec![
            expense(1, 4.5, "Food"),
            expense(2, 2.0, "Transport"),
            expense(3, 12.0, "Food"),
        ];

        let summaries = summarize(&expenses);

        assert_eq!(
            summaries,
            vec![
                CategorySummary {
                    category: "Food".to_string(),
                    items: 2,
                    total: 16.5,
                },
                CategorySummary {
                    category: "Transport".to_string(),
                    items: 1,
                    total: 2.0,
                },
            ]
        );
    }

    #[test]
    fn categories_match_exactly() {
        let expenses = vec![
            expense(1, 1.0, "food"),
            expense(2, 1.0, "Food"),
            expense(3, 1.0, "Food "),
        ];

        let summaries = summarize(&expenses);

        assert_eq!(summaries.len(), 3);
        assert!(summaries.iter().all(|s| s.items == 1));
    }

    #[test]
    fn overflowing_total_saturates() {
        let expenses = vec![expense(1, 1e308, "Big"), expense(2, 1e308, "Big")];

        let summaries = summarize(&expenses);

        assert_eq!(summaries[0].items, 2);
        assert_eq!(summaries[0].total, f64::MAX);
        assert!(summaries[0].total.is_finite());
    }

    #[test]
    fn totals_add_up_to_all_expenses() {
        let expenses: Vec<_> = (1..=20)
            .map(|i| expense(i, i as f64 * 0.25, ["A", "B", "C"][i % 3]))
            .collect();

        let summaries = summarize(&expenses);

        let items: u32 = summaries.iter().map(|s| s.items).sum();
        let total: f64 = summaries.iter().map(|s| s.total).sum();
        let expected: f64 = expenses.iter().map(|e| e.amount).sum();
        assert_eq!(items, 20);
        assert!((total - expected).abs() < 1e-9);
    }
}
