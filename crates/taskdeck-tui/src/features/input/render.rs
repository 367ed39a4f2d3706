//! Input feature view: the new-task field and the add control.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use super::{ADD_LABEL, PLACEHOLDER};
use crate::common::text::{button_width, tail_fitting};
use crate::common::theme::ADD_COLOR;
use crate::hit::Control;
use crate::state::{AppState, Focus};

/// Height of the input row (bordered field).
pub const INPUT_HEIGHT: u16 = 3;

/// Renders the field and `[Agregar]`, placing the terminal cursor when focused.
pub fn render_input(state: &AppState, frame: &mut Frame, area: Rect) {
    let add_width = button_width(ADD_LABEL);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Length(add_width + 1)])
        .split(area);

    let focused = state.focus == Focus::Input;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    let value = state.input.value();
    let cursor = state.input.buffer.cursor();
    let (visible, cursor_x) = visible_window(value, cursor, inner.width as usize);
    let line = if value.is_empty() {
        Line::from(Span::styled(
            PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        Line::from(visible.to_string())
    };
    frame.render_widget(Paragraph::new(line), inner);

    if focused && inner.width > 0 && inner.height > 0 {
        frame.set_cursor_position(Position::new(inner.x + cursor_x, inner.y));
    }

    // Button sits on the field's text line, one column right of the border.
    let button_area = Rect::new(
        chunks[1].x + 1,
        inner.y,
        add_width.min(chunks[1].width.saturating_sub(1)),
        1,
    )
    .intersection(area);
    let button = Paragraph::new(Span::styled(
        format!("[{ADD_LABEL}]"),
        Style::default()
            .fg(Color::White)
            .bg(ADD_COLOR)
            .add_modifier(Modifier::BOLD),
    ));
    frame.render_widget(button, button_area);

    let mut hits = state.hits.borrow_mut();
    hits.push(chunks[0], Control::Input);
    hits.push(button_area, Control::Add);
}

/// Returns the slice of `value` to draw and the cursor column within it.
///
/// Scrolls horizontally so the cursor stays inside a field `width` columns
/// wide (one column is kept free for the cursor itself).
fn visible_window(value: &str, cursor: usize, width: usize) -> (&str, u16) {
    let cursor_byte = value
        .char_indices()
        .nth(cursor)
        .map_or(value.len(), |(i, _)| i);
    let before = &value[..cursor_byte];
    let (tail, skipped) = tail_fitting(before, width.saturating_sub(1));
    let start_byte = value
        .char_indices()
        .nth(skipped)
        .map_or(value.len(), |(i, _)| i);
    (&value[start_byte..], tail.width() as u16)
}
