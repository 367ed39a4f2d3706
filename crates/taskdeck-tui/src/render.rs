//! Pure view/render functions for the TUI.
//!
//! Functions here take `&AppState`, draw to a ratatui Frame, and never return
//! effects. The only thing they write is the hit map used for mouse routing.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use taskdeck_core::store::TaskStatus;
use unicode_width::UnicodeWidthStr;

use crate::common::text::button_width;
use crate::common::theme::LOGOUT_COLOR;
use crate::hit::Control;
use crate::input::{self, INPUT_HEIGHT};
use crate::state::{AppState, Focus};
use crate::tasks;

/// Screen title.
pub const TITLE: &str = "Lista de Tareas";

/// Label of the logout control.
pub const LOGOUT_LABEL: &str = "Cerrar Sesión";

const HEADER_HEIGHT: u16 = 1;
const LOGOUT_HEIGHT: u16 = 1;
const STATUS_HEIGHT: u16 = 1;

/// Renders the entire screen to the frame.
pub fn render(app: &AppState, frame: &mut Frame) {
    app.hits.borrow_mut().clear();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT), // Title + counts
            Constraint::Length(INPUT_HEIGHT),  // New-task field
            Constraint::Min(tasks::ROW_HEIGHT), // Task list
            Constraint::Length(LOGOUT_HEIGHT), // Logout control
            Constraint::Length(STATUS_HEIGHT), // Key hints
        ])
        .split(frame.area());

    render_header(app, frame, chunks[0]);
    input::render_input(app, frame, chunks[1]);
    tasks::render_task_list(app, frame, chunks[2]);
    render_logout(app, frame, chunks[3]);
    render_status_line(app, frame, chunks[4]);
}

/// Title on the left, per-status counts, session name on the right.
fn render_header(app: &AppState, frame: &mut Frame, area: Rect) {
    let counts = app.tasks.list.counts();
    let mut spans = vec![Span::styled(
        TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )];
    for status in TaskStatus::ALL {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("{} {}", status.label(), counts.get(status)),
            Style::default().fg(app.theme.accent(status)),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    let user = format!("{} ", app.user);
    let user_width = (user.width() as u16).min(area.width);
    let user_area = Rect {
        x: area.x + area.width - user_width,
        width: user_width,
        ..area
    };
    frame.render_widget(
        Paragraph::new(Span::styled(user, Style::default().fg(Color::DarkGray)))
            .alignment(Alignment::Right),
        user_area,
    );
}

/// Centered `[Cerrar Sesión]` control.
fn render_logout(app: &AppState, frame: &mut Frame, area: Rect) {
    let width = button_width(LOGOUT_LABEL).min(area.width);
    let button_area = Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    };

    let mut style = Style::default()
        .fg(Color::White)
        .bg(LOGOUT_COLOR)
        .add_modifier(Modifier::BOLD);
    if app.focus == Focus::Logout {
        style = style.add_modifier(Modifier::REVERSED);
    }
    frame.render_widget(
        Paragraph::new(Span::styled(format!("[{LOGOUT_LABEL}]"), style)),
        button_area,
    );
    app.hits.borrow_mut().push(button_area, Control::Logout);
}

/// Key hints for the focused control.
fn render_status_line(app: &AppState, frame: &mut Frame, area: Rect) {
    let hints: &[(&str, &str)] = match app.focus {
        Focus::Input => &[("Enter", " add  "), ("Tab", " list  "), ("Esc", " quit")],
        Focus::List => &[
            ("↑↓", " select  "),
            ("p/i/c", " status  "),
            ("d", " delete  "),
            ("Tab", " logout  "),
            ("Esc", " quit"),
        ],
        Focus::Logout => &[("Enter", " log out  "), ("Tab", " input  "), ("Esc", " quit")],
    };

    let key_style = Style::default().fg(Color::DarkGray);
    let spans: Vec<Span> = hints
        .iter()
        .flat_map(|(key, action)| [Span::styled(*key, key_style), Span::raw(*action)])
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
