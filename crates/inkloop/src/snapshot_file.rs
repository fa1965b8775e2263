//! Reading a dashboard snapshot supplied by the hosting application.
//!
//! Files use the camelCase keys of [`DashboardSnapshot`]. YAML and JSON both
//! load, since JSON documents are valid YAML flow mappings.

use std::fs;
use std::path::Path;

use inkloop_core::DashboardSnapshot;

use crate::state::SnapshotError;

pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot, SnapshotError> {
    let content = fs::read_to_string(path).map_err(|e| {
        SnapshotError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let snapshot: DashboardSnapshot = serde_saphyr::from_str(&content).map_err(|e| {
        SnapshotError::Parse(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    tracing::info!(
        path = %path.display(),
        months = snapshot.month_count(),
        partners = snapshot.team.partner_contribution.len(),
        "loaded snapshot"
    );
    Ok(snapshot)
}

/// Load the snapshot at `path` if one is given, otherwise use the built-in sample
pub fn resolve_snapshot(path: Option<&Path>) -> Result<DashboardSnapshot, SnapshotError> {
    let supplied = path.map(load_snapshot).transpose()?;
    Ok(DashboardSnapshot::or_sample(supplied))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    const SNAPSHOT_YAML: &str = r#"
asOf: 2024-06-30
financialData:
  monthlyRevenue:
    - { month: May, revenue: 58000, expenses: 31000, profit: 27000 }
    - { month: Jun, revenue: 67000, expenses: 33000, profit: 34000 }
  totalRevenue: 125000
  totalExpenses: 64000
  netProfit: 61000
  profitMargin: 48.8
clientData:
  totalClients: 10
  activeClients: 8
  newThisMonth: 2
  retentionRate: 90
  clientsByType:
    - { name: Branding, value: 10 }
projectData:
  totalProjects: 12
  completed: 9
  inProgress: 3
  avgProjectValue: 10416
  completionRate: 75
  projectsByMonth:
    - { month: Jun, completed: 2, started: 3 }
teamData:
  totalHours: 320
  billableHours: 250
  utilizationRate: 78.1
  partnerContribution:
    - { name: Shanil, hours: 160, revenue: 70000 }
"#;

    #[test]
    fn test_load_yaml_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.yaml");
        fs::write(&path, SNAPSHOT_YAML).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.as_of, Some(jiff::civil::date(2024, 6, 30)));
        assert_eq!(snapshot.financial.total_revenue, 125_000.0);
        assert_eq!(snapshot.clients.total_clients, 10);
        assert_eq!(snapshot.team.partner_contribution[0].hours, 160.0);
    }

    #[test]
    fn test_load_json_snapshot() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        fs::write(
            &path,
            r#"{"financialData": {"monthlyRevenue": [], "totalRevenue": 0, "totalExpenses": 0,
                "netProfit": 0, "profitMargin": 0},
               "clientData": {"totalClients": 0, "activeClients": 0, "newThisMonth": 0,
                "retentionRate": 0},
               "projectData": {"totalProjects": 0, "completed": 0, "inProgress": 0,
                "avgProjectValue": 0, "completionRate": 0},
               "teamData": {"totalHours": 0, "billableHours": 0, "utilizationRate": 0}}"#,
        )
        .unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        assert_eq!(snapshot.month_count(), 0);
        assert!(snapshot.team.partner_contribution.is_empty());
    }

    #[test]
    fn test_nan_amounts_degrade_instead_of_leaking() {
        use inkloop_core::metrics::{build_partner_table, partner_average_rate};
        use inkloop_core::{DataQualityIssue, Quoting, Table, to_delimited, validate};

        let dir = tempdir().unwrap();
        let path = dir.path().join("nan.yaml");
        let yaml = SNAPSHOT_YAML.replace("hours: 160", "hours: .nan");
        fs::write(&path, yaml).unwrap();

        let snapshot = load_snapshot(&path).unwrap();
        let partner = &snapshot.team.partner_contribution[0];
        assert!(partner.hours.is_nan());
        assert!(partner_average_rate(partner).is_err());

        assert_eq!(
            validate(&snapshot),
            vec![DataQualityIssue::NonFiniteAmount {
                field: "partner 'Shanil' hours".to_string()
            }]
        );

        let table = Table::from_rows(&build_partner_table(&snapshot)).unwrap();
        let csv = to_delimited(&table, Quoting::Plain).unwrap();
        assert_eq!(
            csv,
            "Partner,Hours,Revenue,AvgRate,Share\nShanil,N/A,70000,N/A,100%"
        );
        assert!(!csv.contains("NaN"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_snapshot(&dir.path().join("absent.yaml"));
        assert!(matches!(result, Err(SnapshotError::Io(_))));
    }

    #[test]
    fn test_malformed_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.yaml");
        fs::write(&path, "financialData: [1, 2\n").unwrap();

        assert!(matches!(load_snapshot(&path), Err(SnapshotError::Parse(_))));
    }

    #[test]
    fn test_resolve_without_path_uses_sample() {
        let snapshot = resolve_snapshot(None).unwrap();
        assert_eq!(snapshot, DashboardSnapshot::sample());
    }
}
