//! Data-quality checks over a snapshot.
//!
//! Findings are reported, never enforced: a bad snapshot still renders, with
//! the affected metrics degraded.

use std::collections::HashSet;
use std::fmt;

use crate::model::DashboardSnapshot;

#[derive(Debug, Clone, PartialEq)]
pub enum DataQualityIssue {
    /// Stored profit differs from revenue minus expenses
    ProfitMismatch {
        month: String,
        stored: f64,
        recomputed: f64,
    },
    ActiveExceedsTotal { active: u32, total: u32 },
    NewExceedsTotal { new: u32, total: u32 },
    ProjectCountsExceedTotal {
        completed: u32,
        in_progress: u32,
        total: u32,
    },
    BillableExceedsTotal { billable: f64, total: f64 },
    NonPositivePartnerHours { partner: String },
    DuplicatePartner { partner: String },
    DuplicateCategory { category: String },
    /// A numeric field holds NaN or infinity
    NonFiniteAmount { field: String },
}

impl fmt::Display for DataQualityIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataQualityIssue::ProfitMismatch {
                month,
                stored,
                recomputed,
            } => write!(
                f,
                "{month}: stored profit {stored} differs from revenue - expenses = {recomputed}"
            ),
            DataQualityIssue::ActiveExceedsTotal { active, total } => {
                write!(f, "active clients ({active}) exceed total clients ({total})")
            }
            DataQualityIssue::NewExceedsTotal { new, total } => {
                write!(f, "new clients ({new}) exceed total clients ({total})")
            }
            DataQualityIssue::ProjectCountsExceedTotal {
                completed,
                in_progress,
                total,
            } => write!(
                f,
                "completed ({completed}) + in progress ({in_progress}) exceed total projects ({total})"
            ),
            DataQualityIssue::BillableExceedsTotal { billable, total } => {
                write!(f, "billable hours ({billable}) exceed total hours ({total})")
            }
            DataQualityIssue::NonPositivePartnerHours { partner } => {
                write!(f, "partner '{partner}' has non-positive hours")
            }
            DataQualityIssue::DuplicatePartner { partner } => {
                write!(f, "partner '{partner}' appears more than once")
            }
            DataQualityIssue::DuplicateCategory { category } => {
                write!(f, "client category '{category}' appears more than once")
            }
            DataQualityIssue::NonFiniteAmount { field } => {
                write!(f, "{field} is not a finite number")
            }
        }
    }
}

/// Collect every data-quality issue in `snapshot`, in a stable order
pub fn validate(snapshot: &DashboardSnapshot) -> Vec<DataQualityIssue> {
    let mut issues = Vec::new();

    for month in &snapshot.financial.monthly_revenue {
        let finite = [month.revenue, month.expenses, month.profit]
            .iter()
            .all(|v| v.is_finite());
        if finite && !month.profit_matches() {
            issues.push(DataQualityIssue::ProfitMismatch {
                month: month.month.clone(),
                stored: month.profit,
                recomputed: month.recomputed_profit(),
            });
        }
    }

    let clients = &snapshot.clients;
    if clients.active_clients > clients.total_clients {
        issues.push(DataQualityIssue::ActiveExceedsTotal {
            active: clients.active_clients,
            total: clients.total_clients,
        });
    }
    if clients.new_this_month > clients.total_clients {
        issues.push(DataQualityIssue::NewExceedsTotal {
            new: clients.new_this_month,
            total: clients.total_clients,
        });
    }
    let mut categories = HashSet::new();
    for category in &clients.clients_by_type {
        if !categories.insert(category.name.as_str()) {
            issues.push(DataQualityIssue::DuplicateCategory {
                category: category.name.clone(),
            });
        }
    }

    let projects = &snapshot.projects;
    if u64::from(projects.completed) + u64::from(projects.in_progress)
        > u64::from(projects.total_projects)
    {
        issues.push(DataQualityIssue::ProjectCountsExceedTotal {
            completed: projects.completed,
            in_progress: projects.in_progress,
            total: projects.total_projects,
        });
    }

    let team = &snapshot.team;
    if team.billable_hours > team.total_hours {
        issues.push(DataQualityIssue::BillableExceedsTotal {
            billable: team.billable_hours,
            total: team.total_hours,
        });
    }
    let mut partners = HashSet::new();
    for partner in &team.partner_contribution {
        if partner.hours <= 0.0 {
            issues.push(DataQualityIssue::NonPositivePartnerHours {
                partner: partner.name.clone(),
            });
        }
        if !partners.insert(partner.name.as_str()) {
            issues.push(DataQualityIssue::DuplicatePartner {
                partner: partner.name.clone(),
            });
        }
    }

    issues.extend(
        non_finite_fields(snapshot)
            .into_iter()
            .map(|field| DataQualityIssue::NonFiniteAmount { field }),
    );

    for issue in &issues {
        tracing::warn!(%issue, "snapshot data-quality issue");
    }

    issues
}

/// Names of every numeric field holding NaN or infinity, in snapshot order
fn non_finite_fields(snapshot: &DashboardSnapshot) -> Vec<String> {
    let financial = &snapshot.financial;
    let clients = &snapshot.clients;
    let projects = &snapshot.projects;
    let team = &snapshot.team;

    let mut fields: Vec<(String, f64)> = Vec::new();
    for month in &financial.monthly_revenue {
        fields.push((format!("{} revenue", month.month), month.revenue));
        fields.push((format!("{} expenses", month.month), month.expenses));
        fields.push((format!("{} profit", month.month), month.profit));
    }
    fields.extend([
        ("total revenue".to_string(), financial.total_revenue),
        ("total expenses".to_string(), financial.total_expenses),
        ("net profit".to_string(), financial.net_profit),
        ("profit margin".to_string(), financial.profit_margin),
        ("retention rate".to_string(), clients.retention_rate),
        ("average project value".to_string(), projects.avg_project_value),
        ("completion rate".to_string(), projects.completion_rate),
        ("total hours".to_string(), team.total_hours),
        ("billable hours".to_string(), team.billable_hours),
        ("utilization rate".to_string(), team.utilization_rate),
    ]);
    for partner in &team.partner_contribution {
        fields.push((format!("partner '{}' hours", partner.name), partner.hours));
        fields.push((format!("partner '{}' revenue", partner.name), partner.revenue));
    }

    fields
        .into_iter()
        .filter(|(_, value)| !value.is_finite())
        .map(|(field, _)| field)
        .collect()
}
