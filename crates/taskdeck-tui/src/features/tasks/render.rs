//! Task list view.
//!
//! Each task takes two lines:
//!
//! ```text
//! ▌ Buy milk
//! ▌ [Pendiente] [En Curso] [Completado] [Eliminar]
//! ```
//!
//! The bar is drawn in the task's status colour.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use taskdeck_core::store::{Task, TaskStatus};

use super::state::REMOVE_LABEL;
use crate::common::text::{button_width, truncate_with_ellipsis};
use crate::common::theme::DELETE_COLOR;
use crate::common::Scrollbar;
use crate::hit::{Control, HitMap};
use crate::state::{AppState, Focus};

/// Lines per task row.
pub const ROW_HEIGHT: u16 = 2;

const BAR: &str = "▌ ";
const BAR_WIDTH: u16 = 2;

/// Index of the first visible row so that `selected` stays on screen.
pub fn first_visible_row(selected: Option<usize>, visible_rows: usize) -> usize {
    match selected {
        Some(selected) if visible_rows > 0 && selected >= visible_rows => {
            selected + 1 - visible_rows
        }
        _ => 0,
    }
}

/// Renders the task list and records row/control hit areas.
pub fn render_task_list(state: &AppState, frame: &mut Frame, area: Rect) {
    let focused = state.focus == Focus::List;
    let border_color = if focused { Color::Cyan } else { Color::DarkGray };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let tasks = state.tasks.list.list();
    if tasks.is_empty() || inner.height < ROW_HEIGHT || inner.width <= BAR_WIDTH {
        return;
    }

    // Keep the last column for the scrollbar.
    let rows_area = Rect {
        width: inner.width.saturating_sub(1),
        ..inner
    };
    let visible_rows = (rows_area.height / ROW_HEIGHT) as usize;
    let selected = state.tasks.selected_index();
    let first = first_visible_row(selected, visible_rows);

    let mut hits = state.hits.borrow_mut();
    let mut lines: Vec<Line<'static>> = Vec::with_capacity(visible_rows * ROW_HEIGHT as usize);
    for (offset, task) in tasks.iter().skip(first).take(visible_rows).enumerate() {
        let y = rows_area.y + offset as u16 * ROW_HEIGHT;
        let is_selected = selected == Some(first + offset);
        lines.push(task_text_line(state, task, is_selected && focused, rows_area.width));
        lines.push(task_controls_line(state, task, rows_area, y + 1, &mut hits));
        hits.push(
            Rect::new(rows_area.x, y, rows_area.width, 1),
            Control::Row(task.id()),
        );
    }
    drop(hits);

    frame.render_widget(Paragraph::new(lines), rows_area);
    frame.render_widget(Scrollbar::new(tasks.len(), visible_rows, first), inner);
}

fn task_text_line(state: &AppState, task: &Task, highlighted: bool, width: u16) -> Line<'static> {
    let accent = state.theme.accent(task.status());
    let text_width = width.saturating_sub(BAR_WIDTH) as usize;
    let mut text_style = Style::default();
    if highlighted {
        text_style = text_style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    if task.status() == TaskStatus::Completed {
        text_style = text_style.fg(Color::Gray);
    }
    Line::from(vec![
        Span::styled(BAR, Style::default().fg(accent)),
        Span::styled(truncate_with_ellipsis(task.text(), text_width), text_style),
    ])
}

fn task_controls_line(
    state: &AppState,
    task: &Task,
    clip: Rect,
    y: u16,
    hits: &mut HitMap,
) -> Line<'static> {
    let accent = state.theme.accent(task.status());
    let mut spans = vec![Span::styled(BAR, Style::default().fg(accent))];
    let mut x = clip.x + BAR_WIDTH;

    for status in TaskStatus::ALL {
        let mut style = Style::default()
            .fg(Color::White)
            .bg(state.theme.accent(status));
        if status == task.status() {
            style = style.add_modifier(Modifier::BOLD | Modifier::UNDERLINED);
        }
        push_button(
            &mut spans,
            hits,
            &mut x,
            (y, clip),
            status.label(),
            style,
            Control::SetStatus(task.id(), status),
        );
    }
    push_button(
        &mut spans,
        hits,
        &mut x,
        (y, clip),
        REMOVE_LABEL,
        Style::default().fg(Color::White).bg(DELETE_COLOR),
        Control::Remove(task.id()),
    );

    Line::from(spans)
}

/// Appends `[label]` plus a separating space and records its clipped hit area.
fn push_button(
    spans: &mut Vec<Span<'static>>,
    hits: &mut HitMap,
    x: &mut u16,
    (y, clip): (u16, Rect),
    label: &'static str,
    style: Style,
    control: Control,
) {
    let width = button_width(label);
    let area = Rect::new(*x, y, width, 1).intersection(clip);
    hits.push(area, control);
    spans.push(Span::styled(format!("[{label}]"), style));
    spans.push(Span::raw(" "));
    *x = x.saturating_add(width + 1);
}
