use serde::{Deserialize, Serialize};

/// Client count for one service category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub name: String,
    pub value: u32,
}

impl CategoryCount {
    pub fn new(name: impl Into<String>, value: u32) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClientSnapshot {
    pub total_clients: u32,
    pub active_clients: u32,
    pub new_this_month: u32,
    /// Percentage in 0..=100
    pub retention_rate: f64,
    #[serde(default)]
    pub clients_by_type: Vec<CategoryCount>,
}
