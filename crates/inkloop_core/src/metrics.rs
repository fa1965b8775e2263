//! Derived metrics computed from a [`DashboardSnapshot`].
//!
//! Everything here is recomputed on demand and never written back into the
//! snapshot. Every ratio reports [`MetricsError::DivisionUndefined`] at a zero
//! or non-finite denominator, or a non-finite result, instead of letting NaN
//! or infinity reach the display.

use serde::{Deserialize, Serialize};

use crate::error::{MetricResult, MetricsError};
use crate::model::{DashboardSnapshot, MonthRecord, PartnerRecord};
use crate::view_state::Range;

fn ratio(numerator: f64, denominator: f64, metric: &'static str) -> MetricResult {
    if denominator == 0.0 || !denominator.is_finite() {
        return Err(MetricsError::division(metric));
    }
    let value = numerator / denominator;
    if !value.is_finite() {
        return Err(MetricsError::division(metric));
    }
    Ok(value)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Total revenue spread over the months in the monthly series
pub fn average_monthly_revenue(snapshot: &DashboardSnapshot) -> MetricResult {
    ratio(
        snapshot.financial.total_revenue,
        snapshot.month_count() as f64,
        "average monthly revenue",
    )
}

pub fn average_client_value(snapshot: &DashboardSnapshot) -> MetricResult {
    ratio(
        snapshot.financial.total_revenue,
        f64::from(snapshot.clients.total_clients),
        "average client value",
    )
}

/// Average client value weighted by the retention rate
pub fn client_lifetime_value(snapshot: &DashboardSnapshot) -> MetricResult {
    let average = average_client_value(snapshot)?;
    ratio(
        average * snapshot.clients.retention_rate,
        100.0,
        "client lifetime value",
    )
}

/// New clients this month as a percentage of all clients, one decimal
pub fn client_growth_rate(snapshot: &DashboardSnapshot) -> MetricResult {
    let share = ratio(
        f64::from(snapshot.clients.new_this_month),
        f64::from(snapshot.clients.total_clients),
        "client growth rate",
    )?;
    Ok(round_one_decimal(share * 100.0))
}

/// Revenue per hour for one partner
pub fn partner_average_rate(partner: &PartnerRecord) -> MetricResult {
    ratio(partner.revenue, partner.hours, "partner average rate")
}

/// Equal split of the team across all partners, in percent
pub fn partner_share(snapshot: &DashboardSnapshot) -> MetricResult {
    ratio(
        100.0,
        snapshot.team.partner_contribution.len() as f64,
        "partner share",
    )
}

/// How a partner's share of the team is attributed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareBasis {
    /// `100 / partner count` for every partner
    #[default]
    Equal,
    /// Proportional to each partner's revenue
    Revenue,
    /// Proportional to each partner's hours
    Hours,
}

/// Each client category's share of all categorized clients, in percent
pub fn client_type_shares(snapshot: &DashboardSnapshot) -> Vec<MetricResult> {
    let categories = &snapshot.clients.clients_by_type;
    let total: f64 = categories.iter().map(|c| f64::from(c.value)).sum();
    categories
        .iter()
        .map(|c| ratio(f64::from(c.value) * 100.0, total, "client type share"))
        .collect()
}

/// Per-partner share in percent, in input order
pub fn partner_shares(snapshot: &DashboardSnapshot, basis: ShareBasis) -> Vec<MetricResult> {
    let partners = &snapshot.team.partner_contribution;
    match basis {
        ShareBasis::Equal => {
            let share = partner_share(snapshot);
            partners.iter().map(|_| share.clone()).collect()
        }
        ShareBasis::Revenue => proportional(partners, |p| p.revenue, "partner revenue share"),
        ShareBasis::Hours => proportional(partners, |p| p.hours, "partner hours share"),
    }
}

fn proportional(
    partners: &[PartnerRecord],
    weight: impl Fn(&PartnerRecord) -> f64,
    metric: &'static str,
) -> Vec<MetricResult> {
    let total: f64 = partners.iter().map(&weight).sum();
    partners
        .iter()
        .map(|p| ratio(weight(p) * 100.0, total, metric))
        .collect()
}

/// One row of the partner performance summary
#[derive(Debug, Clone, PartialEq)]
pub struct PartnerRow {
    pub partner: String,
    pub hours: f64,
    pub revenue: f64,
    pub average_rate: MetricResult,
    pub share: MetricResult,
}

/// Partner summary rows with equal shares, preserving input order
pub fn build_partner_table(snapshot: &DashboardSnapshot) -> Vec<PartnerRow> {
    build_partner_table_with(snapshot, ShareBasis::Equal)
}

pub fn build_partner_table_with(snapshot: &DashboardSnapshot, basis: ShareBasis) -> Vec<PartnerRow> {
    let shares = partner_shares(snapshot, basis);
    snapshot
        .team
        .partner_contribution
        .iter()
        .zip(shares)
        .map(|(partner, share)| PartnerRow {
            partner: partner.name.clone(),
            hours: partner.hours,
            revenue: partner.revenue,
            average_rate: partner_average_rate(partner),
            share,
        })
        .collect()
}

/// Monthly financial records inside the selected range
pub fn windowed_months(snapshot: &DashboardSnapshot, range: Range) -> &[MonthRecord] {
    range.window(&snapshot.financial.monthly_revenue)
}

/// Revenue growth from the first to the last month of the window, one decimal
pub fn revenue_trend(snapshot: &DashboardSnapshot, range: Range) -> MetricResult {
    let months = windowed_months(snapshot, range);
    let (Some(first), Some(last)) = (months.first(), months.last()) else {
        return Err(MetricsError::division("revenue trend"));
    };
    if months.len() < 2 {
        return Err(MetricsError::division("revenue trend"));
    }
    let growth = ratio(last.revenue - first.revenue, first.revenue, "revenue trend")?;
    Ok(round_one_decimal(growth * 100.0))
}

/// Sum of stored profit across the windowed months
pub fn windowed_profit(snapshot: &DashboardSnapshot, range: Range) -> f64 {
    windowed_months(snapshot, range).iter().map(|m| m.profit).sum()
}

/// Sum of revenue across the windowed months
pub fn windowed_revenue(snapshot: &DashboardSnapshot, range: Range) -> f64 {
    windowed_months(snapshot, range).iter().map(|m| m.revenue).sum()
}
