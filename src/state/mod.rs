//! UI state machine (pure).
//!
//! All state transitions are pure functions testable without a terminal.

pub mod app_state;
pub mod expansion;
pub mod nav;
pub mod nav_handler;

// Re-export for convenience
pub use app_state::{AppState, FocusPane, StatusLine};
pub use expansion::ExpansionState;
pub use nav::{resolve, resolve_exact, NavigationState};
pub use nav_handler::handle_nav_action;
