use jiff::civil::Date;
use serde::{Deserialize, Serialize};

use super::{ClientSnapshot, FinancialSnapshot, ProjectSnapshot, TeamSnapshot};

/// The unit of input to the dashboard: one immutable bundle of metrics.
///
/// Field names follow the camelCase keys used by the hosting application
/// (`financialData`, `clientData`, ...), so the same document can be fed in
/// as YAML or JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DashboardSnapshot {
    /// Date the snapshot describes, if the source provides one
    #[serde(default, rename = "asOf", skip_serializing_if = "Option::is_none")]
    pub as_of: Option<Date>,
    #[serde(rename = "financialData")]
    pub financial: FinancialSnapshot,
    #[serde(rename = "clientData")]
    pub clients: ClientSnapshot,
    #[serde(rename = "projectData")]
    pub projects: ProjectSnapshot,
    #[serde(rename = "teamData")]
    pub team: TeamSnapshot,
}

impl DashboardSnapshot {
    /// Built-in sample used when the host supplies no snapshot
    #[must_use]
    pub fn sample() -> Self {
        crate::sample::sample_snapshot()
    }

    /// Use `snapshot` if present, otherwise the built-in sample
    #[must_use]
    pub fn or_sample(snapshot: Option<Self>) -> Self {
        snapshot.unwrap_or_else(|| {
            tracing::debug!("no snapshot supplied, using built-in sample");
            Self::sample()
        })
    }

    pub fn month_count(&self) -> usize {
        self.financial.monthly_revenue.len()
    }
}
