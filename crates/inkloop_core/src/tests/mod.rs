//! Tests for the dashboard core
//!
//! Tests are organized by topic:
//! - `metrics` - Derived metrics and their zero-denominator behavior
//! - `view_state` - View/range transitions
//! - `export` - Table building and delimited serialization
//! - `validate` - Data-quality findings
//! - `cards` - Per-view card models
//! - `snapshot` - Snapshot deserialization and the sample fallback

mod metrics;

use crate::model::{DashboardSnapshot, PartnerRecord};

/// Sample snapshot with the partner list replaced
fn with_partners(partners: Vec<PartnerRecord>) -> DashboardSnapshot {
    let mut snapshot = DashboardSnapshot::sample();
    snapshot.team.partner_contribution = partners;
    snapshot
}

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
