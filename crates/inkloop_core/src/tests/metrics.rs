//! Derived metric tests

use super::{assert_close, with_partners};
use crate::error::MetricsError;
use crate::metrics::*;
use crate::model::{DashboardSnapshot, PartnerRecord};
use crate::view_state::Range;

#[test]
fn test_average_monthly_revenue() {
    let snapshot = DashboardSnapshot::sample();
    assert_close(average_monthly_revenue(&snapshot).unwrap(), 331_000.0 / 6.0);
}

#[test]
fn test_average_monthly_revenue_without_months() {
    let mut snapshot = DashboardSnapshot::sample();
    snapshot.financial.monthly_revenue.clear();

    assert!(matches!(
        average_monthly_revenue(&snapshot),
        Err(MetricsError::DivisionUndefined { .. })
    ));
}

#[test]
fn test_average_client_value() {
    let snapshot = DashboardSnapshot::sample();
    assert_close(average_client_value(&snapshot).unwrap(), 331_000.0 / 24.0);

    let mut odd = DashboardSnapshot::sample();
    odd.financial.total_revenue = 1_000.0;
    odd.clients.total_clients = 3;
    assert_close(average_client_value(&odd).unwrap(), 1_000.0 / 3.0);
}

#[test]
fn test_zero_clients_is_not_computable() {
    let mut snapshot = DashboardSnapshot::sample();
    snapshot.clients.total_clients = 0;

    let err = average_client_value(&snapshot).unwrap_err();
    assert_eq!(
        err,
        MetricsError::DivisionUndefined {
            metric: "average client value"
        }
    );
    assert!(client_lifetime_value(&snapshot).is_err());
    assert!(client_growth_rate(&snapshot).is_err());
}

#[test]
fn test_client_lifetime_value() {
    let snapshot = DashboardSnapshot::sample();
    assert_close(
        client_lifetime_value(&snapshot).unwrap(),
        331_000.0 / 24.0 * 0.85,
    );
}

#[test]
fn test_client_growth_rate_rounds_to_one_decimal() {
    let snapshot = DashboardSnapshot::sample();
    // 4 / 24 = 16.666...%
    assert_close(client_growth_rate(&snapshot).unwrap(), 16.7);
}

#[test]
fn test_partner_average_rate() {
    let partner = PartnerRecord::new("Shanil", 214.0, 89_000.0);
    assert_close(partner_average_rate(&partner).unwrap(), 89_000.0 / 214.0);

    let idle = PartnerRecord::new("Idle", 0.0, 5_000.0);
    assert!(matches!(
        partner_average_rate(&idle),
        Err(MetricsError::DivisionUndefined { .. })
    ));
}

#[test]
fn test_partner_share_is_equal_split() {
    let snapshot = DashboardSnapshot::sample();
    assert_close(partner_share(&snapshot).unwrap(), 25.0);

    let three = with_partners(vec![
        PartnerRecord::new("A", 10.0, 100.0),
        PartnerRecord::new("B", 10.0, 100.0),
        PartnerRecord::new("C", 10.0, 100.0),
    ]);
    assert_close(partner_share(&three).unwrap(), 100.0 / 3.0);

    let none = with_partners(vec![]);
    assert!(partner_share(&none).is_err());
}

#[test]
fn test_partner_shares_sum_to_one_hundred() {
    for count in 1..=7 {
        let partners = (0..count)
            .map(|i| PartnerRecord::new(format!("P{i}"), 10.0 + i as f64, 1_000.0 * (i + 1) as f64))
            .collect();
        let snapshot = with_partners(partners);

        for basis in [ShareBasis::Equal, ShareBasis::Revenue, ShareBasis::Hours] {
            let total: f64 = partner_shares(&snapshot, basis)
                .into_iter()
                .map(|share| share.unwrap())
                .sum();
            assert!(
                (total - 100.0).abs() < 1e-6,
                "{basis:?} over {count} partners summed to {total}"
            );
        }
    }
}

#[test]
fn test_proportional_share_with_zero_total() {
    let snapshot = with_partners(vec![
        PartnerRecord::new("A", 0.0, 100.0),
        PartnerRecord::new("B", 0.0, 300.0),
    ]);

    let by_hours = partner_shares(&snapshot, ShareBasis::Hours);
    assert!(by_hours.iter().all(|share| share.is_err()));

    let by_revenue = partner_shares(&snapshot, ShareBasis::Revenue);
    assert_close(*by_revenue[0].as_ref().unwrap(), 25.0);
    assert_close(*by_revenue[1].as_ref().unwrap(), 75.0);
}

#[test]
fn test_build_partner_table_preserves_order() {
    let snapshot = DashboardSnapshot::sample();
    let rows = build_partner_table(&snapshot);

    let names: Vec<&str> = rows.iter().map(|row| row.partner.as_str()).collect();
    assert_eq!(names, vec!["Shanil", "Sharin", "Sabah", "Thasni"]);
    assert_eq!(rows.len(), snapshot.team.partner_contribution.len());

    assert_close(rows[1].hours, 228.0);
    assert_close(rows[1].revenue, 95_000.0);
    assert_close(*rows[1].average_rate.as_ref().unwrap(), 95_000.0 / 228.0);
    assert_close(*rows[1].share.as_ref().unwrap(), 25.0);
}

#[test]
fn test_build_partner_table_degrades_single_row() {
    let snapshot = with_partners(vec![
        PartnerRecord::new("Busy", 100.0, 10_000.0),
        PartnerRecord::new("Idle", 0.0, 0.0),
    ]);
    let rows = build_partner_table(&snapshot);

    assert!(rows[0].average_rate.is_ok());
    assert!(rows[1].average_rate.is_err());
    assert_close(*rows[1].share.as_ref().unwrap(), 50.0);
}

#[test]
fn test_build_partner_table_with_revenue_basis() {
    let snapshot = DashboardSnapshot::sample();
    let rows = build_partner_table_with(&snapshot, ShareBasis::Revenue);

    assert_close(*rows[0].share.as_ref().unwrap(), 89_000.0 / 331_000.0 * 100.0);
}

#[test]
fn test_revenue_trend_uses_range_window() {
    let snapshot = DashboardSnapshot::sample();

    // Jan 45k -> Jun 67k
    assert_close(revenue_trend(&snapshot, Range::SixMonths).unwrap(), 48.9);
    // Apr 61k -> Jun 67k
    assert_close(revenue_trend(&snapshot, Range::ThreeMonths).unwrap(), 9.8);
    // Fewer months than the range: whole series
    assert_close(revenue_trend(&snapshot, Range::TwelveMonths).unwrap(), 48.9);
}

#[test]
fn test_revenue_trend_needs_two_months() {
    let mut snapshot = DashboardSnapshot::sample();
    snapshot.financial.monthly_revenue.truncate(1);
    assert!(revenue_trend(&snapshot, Range::SixMonths).is_err());

    let mut zero_start = DashboardSnapshot::sample();
    zero_start.financial.monthly_revenue[3].revenue = 0.0;
    assert!(revenue_trend(&zero_start, Range::ThreeMonths).is_err());
}

#[test]
fn test_windowed_sums() {
    let snapshot = DashboardSnapshot::sample();

    assert_close(windowed_profit(&snapshot, Range::ThreeMonths), 90_000.0);
    assert_close(windowed_revenue(&snapshot, Range::ThreeMonths), 186_000.0);
    assert_close(windowed_profit(&snapshot, Range::TwelveMonths), 148_000.0);
    assert_eq!(windowed_months(&snapshot, Range::ThreeMonths)[0].month, "Apr");
}

#[test]
fn test_client_type_shares() {
    let snapshot = DashboardSnapshot::sample();
    let shares: Vec<f64> = client_type_shares(&snapshot)
        .into_iter()
        .map(|share| share.unwrap())
        .collect();

    // 8, 6 and 10 of 24 categorized clients
    assert_close(shares[0], 8.0 * 100.0 / 24.0);
    assert_close(shares[2], 10.0 * 100.0 / 24.0);
    assert!((shares.iter().sum::<f64>() - 100.0).abs() < 1e-9);

    let mut empty = DashboardSnapshot::sample();
    for category in &mut empty.clients.clients_by_type {
        category.value = 0;
    }
    assert!(client_type_shares(&empty).iter().all(|share| share.is_err()));
}

#[test]
fn test_non_finite_inputs_are_not_computable() {
    let nan_hours = PartnerRecord::new("Drift", f64::NAN, 70_000.0);
    assert_eq!(
        partner_average_rate(&nan_hours),
        Err(MetricsError::DivisionUndefined {
            metric: "partner average rate"
        })
    );

    let infinite_revenue = PartnerRecord::new("Spike", 10.0, f64::INFINITY);
    assert!(partner_average_rate(&infinite_revenue).is_err());

    let snapshot = with_partners(vec![nan_hours, PartnerRecord::new("Steady", 100.0, 1_000.0)]);
    assert!(
        partner_shares(&snapshot, ShareBasis::Hours)
            .iter()
            .all(|share| share.is_err())
    );

    let mut snapshot = DashboardSnapshot::sample();
    snapshot.clients.retention_rate = f64::NAN;
    assert!(client_lifetime_value(&snapshot).is_err());
}
