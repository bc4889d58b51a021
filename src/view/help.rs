//! Help overlay.

use crate::view::styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const BINDINGS: &[(&str, &str)] = &[
    ("j / ↓, k / ↑", "move cursor"),
    ("Ctrl+d / Ctrl+u", "page down / up"),
    ("g / Home, G / End", "first / last row"),
    ("Enter", "navigate to node / explore entry"),
    ("Backspace / h / ←", "up one level"),
    ("Ctrl+g", "back to root"),
    ("Space", "toggle expand (outline)"),
    ("E / C", "expand all / collapse all"),
    ("Tab", "switch pane"),
    ("y", "copy path + value to log"),
    ("r", "reload file"),
    ("?", "toggle this help"),
    ("q / Esc / Ctrl+c", "quit"),
];

/// Draw the keyboard help overlay centered on the frame.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 44, (BINDINGS.len() + 2) as u16);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(keys, what)| {
            Line::from(vec![
                Span::styled(format!(" {keys:<20}"), styles::key_style()),
                Span::raw(*what),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().title(" Keys ").borders(Borders::ALL)),
        area,
    );
}

fn centered_rect(outer: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(outer.width);
    let height = height.min(outer.height);
    Rect {
        x: outer.x + (outer.width - width) / 2,
        y: outer.y + (outer.height - height) / 2,
        width,
        height,
    }
}
