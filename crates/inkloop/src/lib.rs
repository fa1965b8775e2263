//! Terminal dashboard for the Inkloop agency metrics core.
//!
//! Loads a [`DashboardSnapshot`](inkloop_core::DashboardSnapshot) (or the
//! built-in sample), renders the five dashboard views with ratatui and writes
//! exports into a directory on disk.

pub mod actions;
pub mod app;
pub mod components;
pub mod logging;
pub mod platform;
pub mod screens;
pub mod settings;
pub mod snapshot_file;
pub mod state;
pub mod util;

pub use app::App;
pub use logging::init_logging;
pub use platform::DirectorySaveTarget;
pub use settings::Settings;
pub use snapshot_file::{load_snapshot, resolve_snapshot};
pub use state::AppState;
