//! Error types for the jxv application.
//!
//! Hierarchical taxonomy built with `thiserror`:
//!
//! - [`AppError`] — top-level error wrapping all domain-specific failures
//!   - [`InputError`] — document reading failures (file/stdin), fatal
//!   - [`ParseError`] — malformed JSON/XML input, non-fatal: the message is
//!     shown in the status line, the tree is cleared, and the session keeps
//!     running so the user can fix the input and reload
//!   - `std::io::Error` — terminal/TUI failures, fatal
//!
//! Navigation and expansion operations are total functions and have no error
//! type at all: a path that no longer resolves degrades to the deepest valid
//! ancestor instead of failing.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error.
///
/// All domain errors convert into this via `From`, so `?` composes cleanly
/// from the main loop down.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to read the input document. Fatal at startup.
    #[error("Failed to read input: {0}")]
    Input(#[from] InputError),

    /// The input document could not be parsed. Non-fatal: reported in the
    /// status line while the viewer stays up with an empty tree.
    #[error("Failed to parse document: {0}")]
    Parse(#[from] ParseError),

    /// Terminal or rendering error from the crossterm/ratatui layer. Fatal.
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}

/// Errors reading the document from a file or stdin.
#[derive(Debug, Error)]
pub enum InputError {
    /// The given document path does not exist.
    #[error("File not found: {path}")]
    FileNotFound {
        /// The filesystem path that was attempted.
        path: PathBuf,
    },

    /// No file argument and stdin is a TTY, so there is nothing to view.
    #[error("No input source: provide a file path or pipe data to stdin")]
    NoInput,

    /// The document is not valid UTF-8.
    #[error("Input is not valid UTF-8")]
    NotUtf8,

    /// Generic I/O failure (permissions, disk errors, broken pipe).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors parsing the raw document text into a tree.
///
/// Both variants carry a human-readable message for the status line. On any
/// parse error the session resets its tree and path wholesale, never leaving
/// them partially updated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input starting with `<` that is not well-formed XML, or that nests
    /// deeper than the configured depth limit.
    #[error("Invalid XML: {message}")]
    InvalidMarkup {
        /// Description of what is malformed, from the XML reader.
        message: String,
    },

    /// Input that is not valid JSON.
    #[error("Invalid JSON: {message}")]
    InvalidJson {
        /// Description from the JSON parser (position, expected token).
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn input_error_file_not_found_display() {
        let err = InputError::FileNotFound {
            path: PathBuf::from("/tmp/missing.json"),
        };
        let msg = err.to_string();
        assert!(msg.contains("File not found"));
        assert!(msg.contains("/tmp/missing.json"));
    }

    #[test]
    fn input_error_no_input_display() {
        let msg = InputError::NoInput.to_string();
        assert!(msg.contains("file path or pipe data to stdin"));
    }

    #[test]
    fn parse_error_messages_are_user_readable() {
        let markup = ParseError::InvalidMarkup {
            message: "unclosed tag `root`".to_string(),
        };
        assert!(markup.to_string().contains("Invalid XML"));
        assert!(markup.to_string().contains("unclosed tag"));

        let json = ParseError::InvalidJson {
            message: "expected value at line 1 column 2".to_string(),
        };
        assert!(json.to_string().contains("Invalid JSON"));
    }

    #[test]
    fn app_error_from_conversions() {
        let app: AppError = InputError::NoInput.into();
        assert!(app.to_string().contains("Failed to read input"));

        let app: AppError = ParseError::InvalidJson {
            message: "eof".to_string(),
        }
        .into();
        assert!(app.to_string().contains("Failed to parse document"));

        let app: AppError = io::Error::new(io::ErrorKind::BrokenPipe, "pipe broken").into();
        assert!(app.to_string().contains("Terminal error"));
    }
}
