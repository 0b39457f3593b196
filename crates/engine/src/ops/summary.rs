use crate::{CategorySummary, summary::summarize};

use super::Engine;

impl Engine {
    /// Count and total per category, computed from the current contents.
    pub async fn get_summary(&self) -> Vec<CategorySummary> {
        let expenses = self.store.snapshot().await;
        summarize(&expenses)
    }
}
