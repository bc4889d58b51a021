//! Domain model types (pure).
//!
//! All types in this module are pure data; nothing here touches the
//! terminal, the filesystem, or global state.

pub mod error;
pub mod key_action;
pub mod path;
pub mod tree;

// Re-export for convenience
pub use error::{AppError, InputError, ParseError};
pub use key_action::KeyAction;
pub use path::Path;
pub use tree::TreeValue;
