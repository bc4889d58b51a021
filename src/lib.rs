//! jxv — JSON/XML tree viewer.
//!
//! TUI application for exploring hierarchical data. Raw input (a file or
//! piped stdin) is parsed into a normalized [`model::TreeValue`]; the user
//! then navigates it through a breadcrumb trail, a collapsible tree
//! outline, and a current-level drill-down pane.
//!
//! Pure core / impure shell: `model`, `parser`, `format`, `state`, and
//! `project` are pure and fully testable without a terminal; `view`,
//! `source`, and `logging` are the shell.

pub mod config;
pub mod format;
pub mod logging;
pub mod model;
pub mod parser;
pub mod project;
pub mod source;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;
