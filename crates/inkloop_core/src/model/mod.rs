mod clients;
mod dashboard;
mod financial;
mod projects;
mod team;

pub use clients::{CategoryCount, ClientSnapshot};
pub use dashboard::DashboardSnapshot;
pub use financial::{FinancialSnapshot, MonthRecord};
pub use projects::{ProjectMonth, ProjectSnapshot};
pub use team::{PartnerRecord, TeamSnapshot};
