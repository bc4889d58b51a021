//! TUI rendering and terminal management (impure shell).
//!
//! Owns the terminal, the event loop, and key dispatch. Everything with
//! tree semantics lives in the pure core (`state`, `project`); this module
//! only reads events, calls the handler, and redraws the full projection.

mod help;
mod layout;
mod styles;

pub use help::render_help_overlay;
pub use layout::render_layout;

use crate::config::{AppConfig, KeyBindings};
use crate::model::KeyAction;
use crate::project::project;
use crate::source::InputSource;
use crate::state::{handle_nav_action, AppState, StatusLine};
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use thiserror::Error;
use tracing::{debug, warn};

/// Errors that can occur during TUI operations.
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations.
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),

    /// Input source error.
    #[error("Input error: {0}")]
    Input(#[from] crate::model::InputError),
}

/// Main TUI application.
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    state: AppState,
    source: InputSource,
    config: AppConfig,
    key_bindings: KeyBindings,
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Create and initialize a new TUI application.
    ///
    /// Puts the terminal into raw mode on the alternate screen and loads
    /// the document from `source`.
    ///
    /// # Errors
    ///
    /// [`TuiError`] for terminal setup or input read failures.
    pub fn new(source: InputSource, config: AppConfig) -> Result<Self, TuiError> {
        let text = source.read()?;

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        stdout.execute(EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        let mut state = AppState::new(source.display_name());
        state.load_text(&text, config.max_depth);

        Ok(Self {
            terminal,
            state,
            source,
            config,
            key_bindings: KeyBindings::default(),
        })
    }

    /// Run the main event loop until the user quits.
    ///
    /// # Errors
    ///
    /// [`TuiError::Io`] for terminal failures mid-session.
    pub fn run(&mut self) -> Result<(), TuiError> {
        self.draw()?;
        loop {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(());
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => self.draw()?,
                _ => {}
            }
        }
    }

    /// Dispatch one key event. Returns `true` when the user quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        // Terminals emitting press+release would double-fire otherwise.
        if key.kind == KeyEventKind::Release {
            return false;
        }
        let Some(action) = self.key_bindings.get(key) else {
            return false;
        };
        debug!(?action, "key action");
        match action {
            KeyAction::Quit if !self.state.help_visible => return true,
            KeyAction::Reload => self.reload(),
            _ => {
                let state = std::mem::take(&mut self.state);
                self.state = handle_nav_action(state, action);
            }
        }
        false
    }

    /// Re-read and re-parse the input file; stdin cannot be re-read.
    fn reload(&mut self) {
        if !self.source.supports_reload() {
            self.state.status = Some(StatusLine::Notice(
                "Reload unavailable for stdin input".to_string(),
            ));
            return;
        }
        match self.source.read() {
            Ok(text) => {
                self.state.load_text(&text, self.config.max_depth);
                if self.state.status.is_none() {
                    self.state.status = Some(StatusLine::Notice("Reloaded".to_string()));
                }
            }
            Err(err) => {
                warn!(error = %err, "reload failed");
                self.state.status = Some(StatusLine::Error(format!("Error: {err}")));
            }
        }
    }

    fn draw(&mut self) -> Result<(), TuiError> {
        let projection = self
            .state
            .document()
            .map(|root| project(root, self.state.nav.current_path(), &self.state.expansion));
        let state = &self.state;
        let percent = self.config.tree_pane_percent;
        self.terminal.draw(|frame| {
            render_layout(frame, state, projection.as_ref(), percent);
            if state.help_visible {
                render_help_overlay(frame);
            }
        })?;
        Ok(())
    }
}

impl<B> Drop for TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    fn drop(&mut self) {
        // Best-effort restore; nothing useful to do on failure here.
        let _ = disable_raw_mode();
        let _ = io::stdout().execute(LeaveAlternateScreen);
    }
}
