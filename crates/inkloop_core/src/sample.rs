//! Built-in sample dataset, substituted when the host supplies no snapshot.

use crate::model::{
    CategoryCount, ClientSnapshot, DashboardSnapshot, FinancialSnapshot, MonthRecord,
    PartnerRecord, ProjectMonth, ProjectSnapshot, TeamSnapshot,
};

/// Default filename for exports when the caller gives none
pub const DEFAULT_EXPORT_FILENAME: &str = "inkloop_data.csv";

pub fn sample_snapshot() -> DashboardSnapshot {
    DashboardSnapshot {
        as_of: None,
        financial: FinancialSnapshot {
            monthly_revenue: vec![
                MonthRecord::new("Jan", 45_000.0, 28_000.0, 17_000.0),
                MonthRecord::new("Feb", 52_000.0, 30_000.0, 22_000.0),
                MonthRecord::new("Mar", 48_000.0, 29_000.0, 19_000.0),
                MonthRecord::new("Apr", 61_000.0, 32_000.0, 29_000.0),
                MonthRecord::new("May", 58_000.0, 31_000.0, 27_000.0),
                MonthRecord::new("Jun", 67_000.0, 33_000.0, 34_000.0),
            ],
            total_revenue: 331_000.0,
            total_expenses: 183_000.0,
            net_profit: 148_000.0,
            profit_margin: 44.7,
        },
        clients: ClientSnapshot {
            total_clients: 24,
            active_clients: 18,
            new_this_month: 4,
            retention_rate: 85.0,
            clients_by_type: vec![
                CategoryCount::new("Branding", 8),
                CategoryCount::new("Social Media", 6),
                CategoryCount::new("Full Service", 10),
            ],
        },
        projects: ProjectSnapshot {
            total_projects: 42,
            completed: 38,
            in_progress: 4,
            avg_project_value: 7_881.0,
            completion_rate: 90.5,
            projects_by_month: vec![
                ProjectMonth::new("Jan", 5, 6),
                ProjectMonth::new("Feb", 7, 5),
                ProjectMonth::new("Mar", 6, 7),
                ProjectMonth::new("Apr", 8, 6),
                ProjectMonth::new("May", 6, 8),
                ProjectMonth::new("Jun", 6, 10),
            ],
        },
        team: TeamSnapshot {
            total_hours: 856.0,
            billable_hours: 684.0,
            utilization_rate: 79.9,
            partner_contribution: vec![
                PartnerRecord::new("Shanil", 214.0, 89_000.0),
                PartnerRecord::new("Sharin", 228.0, 95_000.0),
                PartnerRecord::new("Sabah", 198.0, 78_000.0),
                PartnerRecord::new("Thasni", 216.0, 69_000.0),
            ],
        },
    }
}
