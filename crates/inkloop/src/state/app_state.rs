use inkloop_core::{DashboardSnapshot, DataQualityIssue, Range, View, ViewController, validate};

use crate::settings::Settings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

/// One-line notice shown in the status bar until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: StatusKind,
    pub text: String,
}

/// Everything the dashboard session owns.
///
/// The snapshot is fixed for the session; only the view controller and the
/// status line change.
#[derive(Debug)]
pub struct AppState {
    pub snapshot: DashboardSnapshot,
    pub views: ViewController,
    pub settings: Settings,
    /// Findings from validating the snapshot at startup
    pub data_quality: Vec<DataQualityIssue>,
    pub status: Option<StatusMessage>,
    pub exit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardSnapshot::sample(), Settings::default())
    }
}

impl AppState {
    pub fn new(snapshot: DashboardSnapshot, settings: Settings) -> Self {
        let data_quality = validate(&snapshot);
        if !data_quality.is_empty() {
            tracing::warn!(
                issues = data_quality.len(),
                "snapshot has data-quality issues"
            );
        }

        Self {
            snapshot,
            views: ViewController::new(),
            settings,
            data_quality,
            status: None,
            exit: false,
        }
    }

    pub fn active_view(&self) -> View {
        self.views.current_view()
    }

    pub fn range(&self) -> Range {
        self.views.current_range()
    }

    pub fn switch_view(&mut self, view: View) {
        self.views.select_view(view);
    }

    pub fn set_error(&mut self, message: String) {
        tracing::error!("{message}");
        self.status = Some(StatusMessage {
            kind: StatusKind::Error,
            text: message,
        });
    }

    pub fn set_info(&mut self, message: String) {
        self.status = Some(StatusMessage {
            kind: StatusKind::Info,
            text: message,
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
