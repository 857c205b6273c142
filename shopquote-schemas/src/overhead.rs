use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    pub name: String,
    pub monthly_amount: f64,
}

/// Shop-wide values used to amortize fixed costs and apply a markup.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct OverheadConfiguration {
    #[serde(default)]
    pub expense_items: Vec<ExpenseItem>,
    pub average_monthly_jobs: i64,
    pub profit_margin_percent: f64,
}

impl OverheadConfiguration {
    pub fn total_monthly_expenses(&self) -> f64 {
        self.expense_items.iter().map(|item| item.monthly_amount).sum()
    }
}
