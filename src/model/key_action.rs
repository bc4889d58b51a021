//! Domain-level keyboard actions independent of key bindings.

/// User intents that key bindings map onto.
///
/// These represent what the user wants done, not which key was pressed.
/// The mapping from `crossterm::event::KeyEvent` to `KeyAction` lives in
/// `config::keybindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Cursor movement in the focused pane
    /// Move the cursor up one row. Default: k/↑
    CursorUp,
    /// Move the cursor down one row. Default: j/↓
    CursorDown,
    /// Scroll up one page. Default: Ctrl+u/Page Up
    PageUp,
    /// Scroll down one page. Default: Ctrl+d/Page Down
    PageDown,
    /// Jump the cursor to the first row. Default: g/Home
    CursorToTop,
    /// Jump the cursor to the last row. Default: G/End
    CursorToBottom,

    // Navigation
    /// Navigate to the node under the cursor (outline pane) or drill into
    /// the entry under the cursor (current-level pane). Default: Enter
    Navigate,
    /// Jump one level up the breadcrumb. Default: Backspace/h/←
    JumpToParent,
    /// Jump back to the root. Default: Ctrl+g
    JumpToRoot,

    // Expansion
    /// Flip the expansion of the composite under the cursor without
    /// navigating to it. Default: Space
    ToggleExpand,
    /// Expand every node in the outline. Default: E
    ExpandAll,
    /// Collapse every node in the outline. Default: C
    CollapseAll,

    // Panes
    /// Cycle focus between the outline and current-level panes. Default: Tab
    CycleFocus,

    // Document
    /// Re-read and re-parse the input file. Default: r
    Reload,
    /// Log the current path and value as a copyable block. Default: y
    CopyNode,

    // Application
    /// Show or hide the help overlay. Default: ?
    Help,
    /// Exit the application. Default: q/Ctrl+c
    Quit,
}
