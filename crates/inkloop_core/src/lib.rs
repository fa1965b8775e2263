//! Metrics derivation and view-state core for the Inkloop agency dashboard.
//!
//! This crate turns an immutable [`DashboardSnapshot`] into the numbers,
//! cards and tables a dashboard shows, tracks which view and time range are
//! selected, and serializes tables for export. It does no rendering and no
//! I/O of its own; hosts plug in a [`SaveTarget`] for exports.
//!
//! ```ignore
//! use inkloop_core::{DashboardSnapshot, ViewController, metrics};
//!
//! let snapshot = DashboardSnapshot::or_sample(None);
//! let mut views = ViewController::new();
//! views.select_view_named("team")?;
//! let rows = metrics::build_partner_table(&snapshot);
//! ```

#![warn(clippy::all)]

pub mod cards;
pub mod error;
pub mod export;
pub mod format;
pub mod metrics;
pub mod model;
pub mod sample;
pub mod validate;
pub mod view_state;

#[cfg(test)]
mod tests;

pub use cards::{MetricCard, key_client_metrics, view_cards};
pub use error::{ExportError, InvalidArgument, MetricResult, MetricsError};
pub use export::{
    ExportReceipt, MemorySaveTarget, Quoting, Record, SaveTarget, Table, Tabular, export_csv,
    to_delimited,
};
pub use format::{NOT_AVAILABLE, format_currency};
pub use metrics::{PartnerRow, ShareBasis};
pub use model::{
    CategoryCount, ClientSnapshot, DashboardSnapshot, FinancialSnapshot, MonthRecord,
    PartnerRecord, ProjectMonth, ProjectSnapshot, TeamSnapshot,
};
pub use sample::DEFAULT_EXPORT_FILENAME;
pub use validate::{DataQualityIssue, validate};
pub use view_state::{Range, View, ViewController, ViewState};
