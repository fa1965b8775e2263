//! Presentation-ready metric cards for each view.
//!
//! Cards carry already-formatted text so a renderer only has to lay them out.
//! Metrics that cannot be derived show [`NOT_AVAILABLE`] instead of failing
//! the whole view.

use crate::format::{
    NOT_AVAILABLE, currency_or_na, format_currency, format_percent, format_signed_percent,
};
use crate::metrics::{
    average_client_value, average_monthly_revenue, client_growth_rate, client_lifetime_value,
    revenue_trend, windowed_profit,
};
use crate::model::DashboardSnapshot;
use crate::view_state::{Range, View};

#[derive(Debug, Clone, PartialEq)]
pub struct MetricCard {
    pub title: &'static str,
    pub value: String,
    pub subtitle: Option<String>,
    /// Percentage change shown as a badge; positive is good
    pub trend: Option<f64>,
}

impl MetricCard {
    fn new(title: &'static str, value: impl Into<String>) -> Self {
        Self {
            title,
            value: value.into(),
            subtitle: None,
            trend: None,
        }
    }

    fn subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    fn trend(mut self, trend: Option<f64>) -> Self {
        self.trend = trend;
        self
    }

    /// Trend badge text such as `+12.3%`
    pub fn trend_label(&self) -> Option<String> {
        self.trend.map(format_signed_percent)
    }
}

/// Headline cards for `view`
pub fn view_cards(view: View, snapshot: &DashboardSnapshot, range: Range) -> Vec<MetricCard> {
    match view {
        View::Overview => overview_cards(snapshot, range),
        View::Financial => financial_cards(snapshot, range),
        View::Clients => client_cards(snapshot),
        View::Projects => project_cards(snapshot),
        View::Team => team_cards(snapshot),
    }
}

fn months_subtitle(snapshot: &DashboardSnapshot) -> String {
    format!("{}-month total", snapshot.month_count())
}

fn overview_cards(snapshot: &DashboardSnapshot, range: Range) -> Vec<MetricCard> {
    let financial = &snapshot.financial;
    let clients = &snapshot.clients;
    let projects = &snapshot.projects;

    vec![
        MetricCard::new("Total Revenue", format_currency(financial.total_revenue))
            .subtitle(months_subtitle(snapshot))
            .trend(revenue_trend(snapshot, range).ok()),
        MetricCard::new("Active Clients", clients.active_clients.to_string())
            .subtitle(format!("{} new this month", clients.new_this_month))
            .trend(client_growth_rate(snapshot).ok()),
        MetricCard::new("Projects In Progress", projects.in_progress.to_string())
            .subtitle(format!("{} completed", projects.completed)),
        MetricCard::new("Profit Margin", format_percent(financial.profit_margin))
            .subtitle(format!("{} net profit", format_currency(financial.net_profit))),
    ]
}

fn financial_cards(snapshot: &DashboardSnapshot, range: Range) -> Vec<MetricCard> {
    let financial = &snapshot.financial;

    vec![
        MetricCard::new("Total Revenue", format_currency(financial.total_revenue))
            .subtitle(months_subtitle(snapshot)),
        MetricCard::new("Net Profit", format_currency(financial.net_profit))
            .subtitle(format!("{} margin", format_percent(financial.profit_margin))),
        MetricCard::new(
            "Avg Monthly",
            currency_or_na(&average_monthly_revenue(snapshot)),
        )
        .subtitle("Revenue per month"),
        MetricCard::new(
            "Profit In Range",
            format_currency(windowed_profit(snapshot, range)),
        )
        .subtitle(range.label())
        .trend(revenue_trend(snapshot, range).ok()),
    ]
}

fn client_cards(snapshot: &DashboardSnapshot) -> Vec<MetricCard> {
    let clients = &snapshot.clients;

    vec![
        MetricCard::new("Total Clients", clients.total_clients.to_string()),
        MetricCard::new("Active Clients", clients.active_clients.to_string())
            .trend(client_growth_rate(snapshot).ok()),
        MetricCard::new("New This Month", clients.new_this_month.to_string()),
        MetricCard::new("Retention Rate", format_percent(clients.retention_rate)),
    ]
}

/// The "key client metrics" panel of the clients view
pub fn key_client_metrics(snapshot: &DashboardSnapshot) -> Vec<MetricCard> {
    let growth = match client_growth_rate(snapshot) {
        Ok(rate) => format_signed_percent(rate),
        Err(_) => NOT_AVAILABLE.to_string(),
    };

    vec![
        MetricCard::new(
            "Average Client Value",
            currency_or_na(&average_client_value(snapshot)),
        ),
        MetricCard::new(
            "Client Lifetime Value",
            currency_or_na(&client_lifetime_value(snapshot)),
        ),
        MetricCard::new("Growth Rate", growth),
    ]
}

fn project_cards(snapshot: &DashboardSnapshot) -> Vec<MetricCard> {
    let projects = &snapshot.projects;

    vec![
        MetricCard::new("Total Projects", projects.total_projects.to_string()),
        MetricCard::new("Completed", projects.completed.to_string())
            .subtitle(format!("{} rate", format_percent(projects.completion_rate))),
        MetricCard::new("In Progress", projects.in_progress.to_string()),
        MetricCard::new(
            "Avg Project Value",
            format_currency(projects.avg_project_value),
        ),
    ]
}

fn team_cards(snapshot: &DashboardSnapshot) -> Vec<MetricCard> {
    let team = &snapshot.team;

    vec![
        MetricCard::new("Total Hours", format!("{}", team.total_hours)).subtitle("Last month"),
        MetricCard::new("Billable Hours", format!("{}", team.billable_hours)).subtitle(format!(
            "{} utilization",
            format_percent(team.utilization_rate)
        )),
        MetricCard::new("Efficiency", format_percent(team.utilization_rate))
            .subtitle("Billable share of hours"),
    ]
}
