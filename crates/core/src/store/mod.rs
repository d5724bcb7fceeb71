//! Store module - the explicit application state container.

mod app_state;

pub use app_state::{reduce, Action, AppState};
