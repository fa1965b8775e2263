use serde::{Deserialize, Serialize};

/// Hours and revenue attributed to one partner. `name` is the natural key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartnerRecord {
    pub name: String,
    pub hours: f64,
    pub revenue: f64,
}

impl PartnerRecord {
    pub fn new(name: impl Into<String>, hours: f64, revenue: f64) -> Self {
        Self {
            name: name.into(),
            hours,
            revenue,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct TeamSnapshot {
    pub total_hours: f64,
    pub billable_hours: f64,
    /// Percentage in 0..=100
    pub utilization_rate: f64,
    #[serde(default)]
    pub partner_contribution: Vec<PartnerRecord>,
}
