//! Shared styles and text helpers for the panes.

use ratatui::style::{Color, Modifier, Style};
use unicode_width::UnicodeWidthChar;

/// Style for the row under the cursor in the focused pane.
pub fn cursor_style(pane_focused: bool) -> Style {
    if pane_focused {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    }
}

/// Style for the outline row matching the current path.
pub fn current_path_style() -> Style {
    Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::BOLD)
}

/// Style for composite open/closed markers.
pub fn marker_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Style for entry keys in the current-level pane.
pub fn key_style() -> Style {
    Style::default().add_modifier(Modifier::BOLD)
}

/// Style for explore affordances.
pub fn explore_style() -> Style {
    Style::default().fg(Color::Cyan)
}

/// Style for error messages in the status bar.
pub fn error_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Style for notices in the status bar.
pub fn notice_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Style for the pane border when focused.
pub fn border_style(pane_focused: bool) -> Style {
    if pane_focused {
        Style::default().fg(Color::Blue)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Truncate `text` to at most `max_width` display columns, appending `…`
/// when anything was cut.
pub fn truncate_width(text: &str, max_width: usize) -> String {
    if max_width == 0 {
        return String::new();
    }
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if width + ch_width > max_width.saturating_sub(1) {
            // Check whether the rest would actually have fit.
            let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
            if total <= max_width {
                return text.to_string();
            }
            out.push('…');
            return out;
        }
        width += ch_width;
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_is_untouched() {
        assert_eq!(truncate_width("abc", 10), "abc");
        assert_eq!(truncate_width("abc", 3), "abc");
    }

    #[test]
    fn long_text_is_cut_with_ellipsis() {
        assert_eq!(truncate_width("abcdef", 4), "abc…");
    }

    #[test]
    fn zero_width_yields_empty() {
        assert_eq!(truncate_width("abc", 0), "");
    }

    #[test]
    fn wide_chars_count_their_columns() {
        // Each CJK char is two columns wide.
        let out = truncate_width("一二三四", 5);
        assert_eq!(out, "一二…");
    }
}
