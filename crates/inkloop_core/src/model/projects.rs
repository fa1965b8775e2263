use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMonth {
    pub month: String,
    pub completed: u32,
    pub started: u32,
}

impl ProjectMonth {
    pub fn new(month: impl Into<String>, completed: u32, started: u32) -> Self {
        Self {
            month: month.into(),
            completed,
            started,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSnapshot {
    pub total_projects: u32,
    pub completed: u32,
    pub in_progress: u32,
    pub avg_project_value: f64,
    /// Percentage in 0..=100
    pub completion_rate: f64,
    #[serde(default)]
    pub projects_by_month: Vec<ProjectMonth>,
}
