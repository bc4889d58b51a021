//! Split pane layout rendering.
//!
//! Breadcrumb header on top, tree outline left, current-level pane right,
//! status bar at the bottom. Everything is redrawn from the projection on
//! every frame; no view state is kept between draws.

use crate::project::{CurrentLevel, LevelRowKind, OutlineRowKind, Projection};
use crate::state::{AppState, FocusPane, StatusLine};
use crate::view::styles;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render one frame from the state and its projection.
///
/// `projection` is `None` when there is no document (empty input or parse
/// failure); the panes render empty and the status bar carries the error.
pub fn render_layout(
    frame: &mut Frame,
    state: &AppState,
    projection: Option<&Projection>,
    tree_pane_percent: u16,
) {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Breadcrumb header
            Constraint::Min(0),    // Panes
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_breadcrumb(frame, vertical[0], state, projection);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(tree_pane_percent.clamp(10, 90)),
            Constraint::Min(0),
        ])
        .split(vertical[1]);

    render_outline(frame, panes[0], state, projection);
    render_current_level(frame, panes[1], state, projection);
    render_status(frame, vertical[2], state);
}

fn render_breadcrumb(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    projection: Option<&Projection>,
) {
    let mut spans = vec![Span::styled(
        format!(" jxv [{}] ", state.source_name),
        styles::key_style(),
    )];
    if let Some(projection) = projection {
        for (i, crumb) in projection.breadcrumb.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" > "));
            }
            let style = if i + 1 == projection.breadcrumb.len() {
                styles::current_path_style()
            } else {
                styles::marker_style()
            };
            spans.push(Span::styled(crumb.label.clone(), style));
        }
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_outline(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    projection: Option<&Projection>,
) {
    let focused = state.focus == FocusPane::Outline;
    let block = Block::default()
        .title(" Tree ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(projection) = projection else {
        return;
    };

    let height = inner.height as usize;
    let offset = scroll_offset(state.outline_cursor, height, projection.outline.len());
    let width = inner.width as usize;

    let lines: Vec<Line> = projection
        .outline
        .iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, row)| {
            let indent = "  ".repeat(row.depth);
            let (marker, body) = match &row.kind {
                OutlineRowKind::Composite { expanded } => {
                    (if *expanded { "▼ " } else { "▶ " }, row.segment.clone())
                }
                OutlineRowKind::Leaf { display } => {
                    ("  ", format!("{}: {}", row.segment, first_line(display)))
                }
            };
            let body_style = if i == state.outline_cursor {
                styles::cursor_style(focused).patch(if row.is_current {
                    styles::current_path_style()
                } else {
                    ratatui::style::Style::default()
                })
            } else if row.is_current {
                styles::current_path_style()
            } else {
                ratatui::style::Style::default()
            };
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(marker, styles::marker_style()),
                Span::styled(
                    styles::truncate_width(&body, width.saturating_sub(indent.len() + 2)),
                    body_style,
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_current_level(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    projection: Option<&Projection>,
) {
    let focused = state.focus == FocusPane::CurrentLevel;
    let block = Block::default()
        .title(" Current Level ")
        .borders(Borders::ALL)
        .border_style(styles::border_style(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(projection) = projection else {
        return;
    };

    // Entries on top, path/value panel below.
    let split = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(8)])
        .split(inner);

    render_level_rows(frame, split[0], state, projection, focused);
    render_path_panel(frame, split[1], projection);
}

fn render_level_rows(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    projection: &Projection,
    focused: bool,
) {
    let lines: Vec<Line> = match &projection.current_level {
        CurrentLevel::Scalar(display) => display.lines().map(|l| Line::from(l.to_string())).collect(),
        CurrentLevel::Entries(rows) => {
            let height = area.height as usize;
            let offset = scroll_offset(state.level_cursor, height, rows.len());
            rows.iter()
                .enumerate()
                .skip(offset)
                .take(height)
                .map(|(i, row)| {
                    let cursor = if i == state.level_cursor && focused {
                        styles::cursor_style(true)
                    } else {
                        ratatui::style::Style::default()
                    };
                    let mut spans = vec![Span::styled(
                        row.segment.clone(),
                        styles::key_style().patch(cursor),
                    )];
                    match &row.kind {
                        LevelRowKind::Scalar { display } => {
                            spans.push(Span::raw(": "));
                            spans.push(Span::styled(first_line(display), cursor));
                        }
                        LevelRowKind::Explore { label } => {
                            spans.push(Span::raw("  "));
                            spans.push(Span::styled(
                                format!("[{label}]"),
                                styles::explore_style().patch(cursor),
                            ));
                        }
                    }
                    Line::from(spans)
                })
                .collect()
        }
    };
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_path_panel(frame: &mut Frame, area: Rect, projection: &Projection) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Current Path: ", styles::key_style()),
        Span::styled(projection.path_display.clone(), styles::explore_style()),
    ])];
    lines.push(Line::from(Span::styled(
        "Current Value:",
        styles::key_style(),
    )));
    for line in projection
        .value_display
        .lines()
        .take(area.height.saturating_sub(2) as usize)
    {
        lines.push(Line::from(line.to_string()));
    }
    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::TOP)),
        area,
    );
}

fn render_status(frame: &mut Frame, area: Rect, state: &AppState) {
    let line = match &state.status {
        Some(StatusLine::Error(msg)) => Line::from(Span::styled(msg.clone(), styles::error_style())),
        Some(StatusLine::Notice(msg)) => {
            Line::from(Span::styled(msg.clone(), styles::notice_style()))
        }
        None => Line::from(Span::styled(
            " Enter navigate · Space toggle · Tab pane · E/C expand/collapse all · ? help · q quit",
            styles::marker_style(),
        )),
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// First window offset keeping `cursor` visible in `height` rows.
fn scroll_offset(cursor: usize, height: usize, total: usize) -> usize {
    if height == 0 || total <= height {
        return 0;
    }
    let max_offset = total - height;
    cursor.saturating_sub(height.saturating_sub(1)).min(max_offset)
}

fn first_line(text: &str) -> String {
    match text.lines().next() {
        Some(first) if text.lines().nth(1).is_some() => format!("{first} …"),
        Some(first) => first.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_offset_keeps_cursor_visible() {
        assert_eq!(scroll_offset(0, 10, 5), 0);
        assert_eq!(scroll_offset(4, 5, 20), 0);
        assert_eq!(scroll_offset(9, 5, 20), 5);
        assert_eq!(scroll_offset(19, 5, 20), 15);
    }

    #[test]
    fn first_line_flags_multiline_values() {
        assert_eq!(first_line("one"), "one");
        assert_eq!(first_line("a\nb"), "a …");
        assert_eq!(first_line(""), "");
    }
}
