//! Document input sources.
//!
//! The viewer reads one document from either a file path argument or piped
//! stdin. Files can be re-read for the reload action; stdin is read once.

use crate::model::InputError;
use std::io::{IsTerminal, Read};
use std::path::PathBuf;

/// Where the document text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// A file path; re-readable for reload.
    File(PathBuf),
    /// Piped stdin; read once at startup.
    Stdin,
}

impl InputSource {
    /// Pick the input source from CLI arguments.
    ///
    /// A provided path wins; otherwise piped stdin; otherwise there is
    /// nothing to view.
    ///
    /// # Errors
    ///
    /// [`InputError::FileNotFound`] for a missing path,
    /// [`InputError::NoInput`] when stdin is a TTY and no path was given.
    pub fn detect(file: Option<PathBuf>) -> Result<InputSource, InputError> {
        match file {
            Some(path) => {
                if !path.exists() {
                    return Err(InputError::FileNotFound { path });
                }
                Ok(InputSource::File(path))
            }
            None => {
                if std::io::stdin().is_terminal() {
                    Err(InputError::NoInput)
                } else {
                    Ok(InputSource::Stdin)
                }
            }
        }
    }

    /// Read the full document text.
    ///
    /// # Errors
    ///
    /// [`InputError::Io`] for read failures, [`InputError::NotUtf8`] for
    /// non-UTF-8 content.
    pub fn read(&self) -> Result<String, InputError> {
        match self {
            InputSource::File(path) => {
                let bytes = std::fs::read(path)?;
                String::from_utf8(bytes).map_err(|_| InputError::NotUtf8)
            }
            InputSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|err| match err.kind() {
                        std::io::ErrorKind::InvalidData => InputError::NotUtf8,
                        _ => InputError::Io(err),
                    })?;
                Ok(text)
            }
        }
    }

    /// Whether the reload action can re-read this source.
    pub fn supports_reload(&self) -> bool {
        matches!(self, InputSource::File(_))
    }

    /// Short name for the title bar.
    pub fn display_name(&self) -> String {
        match self {
            InputSource::File(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            InputSource::Stdin => "stdin".to_string(),
        }
    }
}
