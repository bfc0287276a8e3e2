//! Application state split into small submodules.
//!
//! Re-exports keep the public API flat under `crate::state::*`.

pub mod app_state;
pub mod modal;
pub mod types;

pub use app_state::AppState;
pub use modal::Modal;
pub use types::{Criteria, Focus, GameRecord, PlayerRange, SortKey};
