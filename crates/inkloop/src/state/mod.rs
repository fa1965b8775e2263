mod app_state;
mod errors;

pub use app_state::*;
pub use errors::*;
