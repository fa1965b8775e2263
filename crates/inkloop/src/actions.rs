//! User-triggered operations that reach outside the view state.

use inkloop_core::metrics::{build_partner_table_with, windowed_months};
use inkloop_core::{ExportError, ExportReceipt, SaveTarget, Table, View, export_csv};

use crate::state::AppState;

pub const PARTNERS_FILENAME: &str = "inkloop_partners.csv";
pub const FINANCIAL_FILENAME: &str = "inkloop_financial.csv";
pub const PROJECTS_FILENAME: &str = "inkloop_projects.csv";

/// File an export of `view` is saved under
pub fn export_filename(view: View) -> &'static str {
    match view {
        View::Financial => FINANCIAL_FILENAME,
        View::Projects => PROJECTS_FILENAME,
        View::Overview | View::Clients | View::Team => PARTNERS_FILENAME,
    }
}

/// The table exported from the active view; month tables follow the selected range
pub fn export_table(state: &AppState) -> Result<Table, ExportError> {
    let snapshot = &state.snapshot;
    match state.active_view() {
        View::Financial => Table::from_rows(windowed_months(snapshot, state.range())),
        View::Projects => {
            Table::from_rows(state.range().window(&snapshot.projects.projects_by_month))
        }
        View::Overview | View::Clients | View::Team => Table::from_rows(
            &build_partner_table_with(snapshot, state.settings.share_basis),
        ),
    }
}

/// Export the active view's table and report the outcome in the status bar
pub fn export_active_view(
    state: &mut AppState,
    target: &dyn SaveTarget,
) -> Result<ExportReceipt, ExportError> {
    let view = state.active_view();
    let result = export_table(state).and_then(|table| {
        export_csv(
            &table,
            Some(export_filename(view)),
            target,
            state.settings.csv_quoting,
        )
    });

    match &result {
        Ok(receipt) => state.set_info(format!(
            "Exported {} rows to {}",
            receipt.rows, receipt.filename
        )),
        Err(e) => state.set_error(format!("Export failed: {}", e)),
    }
    result
}
