use serde::{Deserialize, Serialize};

/// Revenue, expenses and profit for one month.
///
/// `profit` is supplied by the source rather than recomputed; see
/// [`MonthRecord::profit_matches`] for the consistency check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthRecord {
    pub month: String,
    pub revenue: f64,
    pub expenses: f64,
    pub profit: f64,
}

impl MonthRecord {
    /// Tolerance when comparing stored and recomputed profit
    pub const PROFIT_TOLERANCE: f64 = 0.5;

    pub fn new(month: impl Into<String>, revenue: f64, expenses: f64, profit: f64) -> Self {
        Self {
            month: month.into(),
            revenue,
            expenses,
            profit,
        }
    }

    /// Profit recomputed as revenue minus expenses
    #[must_use]
    pub fn recomputed_profit(&self) -> f64 {
        self.revenue - self.expenses
    }

    #[must_use]
    pub fn profit_matches(&self) -> bool {
        (self.recomputed_profit() - self.profit).abs() <= Self::PROFIT_TOLERANCE
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    #[serde(default)]
    pub monthly_revenue: Vec<MonthRecord>,
    pub total_revenue: f64,
    pub total_expenses: f64,
    pub net_profit: f64,
    /// Percentage in 0..=100
    pub profit_margin: f64,
}
