//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use taskdeck_core::session::LOGIN_ROUTE;
use tracing::debug;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::hit::Control;
use crate::input::{self, InputAction};
use crate::state::{AppState, Focus};
use crate::tasks;

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        Event::Paste(text) => {
            app.focus = Focus::Input;
            input::handle_paste(&mut app.input, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return vec![];
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return vec![];
        }
        _ => {}
    }

    match app.focus {
        Focus::Input => match input::handle_input_key(&mut app.input, key) {
            InputAction::Submit => activate(app, Control::Add),
            InputAction::Edited | InputAction::Ignored => vec![],
        },
        Focus::List => {
            tasks::handle_list_key(&mut app.tasks, key);
            vec![]
        }
        Focus::Logout => match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => activate(app, Control::Logout),
            _ => vec![],
        },
    }
}

fn handle_mouse(app: &mut AppState, mouse: MouseEvent) -> Vec<UiEffect> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let control = app.hits.borrow().control_at(mouse.column, mouse.row);
            match control {
                Some(control) => activate(app, control),
                None => vec![],
            }
        }
        MouseEventKind::ScrollUp => {
            app.tasks.select_prev();
            vec![]
        }
        MouseEventKind::ScrollDown => {
            app.tasks.select_next();
            vec![]
        }
        _ => vec![],
    }
}

/// Performs what pressing `control` means, whether by key or by click.
pub fn activate(app: &mut AppState, control: Control) -> Vec<UiEffect> {
    debug!(?control, "control activated");
    match control {
        Control::Input => {
            app.focus = Focus::Input;
            vec![]
        }
        Control::Add => {
            if app.tasks.add(app.input.value()).is_some() {
                app.input.clear();
            }
            vec![]
        }
        Control::Row(id) => {
            app.focus = Focus::List;
            app.tasks.select(id);
            vec![]
        }
        Control::SetStatus(id, status) => {
            app.focus = Focus::List;
            app.tasks.select(id);
            app.tasks.set_status(id, status);
            vec![]
        }
        Control::Remove(id) => {
            app.focus = Focus::List;
            app.tasks.remove(id);
            vec![]
        }
        Control::Logout => logout_effects(),
    }
}

/// Logout first, then leave for the login destination.
pub fn logout_effects() -> Vec<UiEffect> {
    vec![
        UiEffect::Logout,
        UiEffect::Navigate {
            destination: LOGIN_ROUTE.to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventState;
    use ratatui::layout::Rect;
    use taskdeck_core::store::{Task, TaskStatus};

    use super::*;
    use crate::common::Theme;

    fn app() -> AppState {
        AppState::new("tester", Theme::default())
    }

    fn key_event(code: KeyCode, modifiers: KeyModifiers) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(app, key_event(code, KeyModifiers::NONE))
    }

    fn type_text(app: &mut AppState, text: &str) {
        for ch in text.chars() {
            press(app, KeyCode::Char(ch));
        }
    }

    fn click(app: &mut AppState, column: u16, row: u16) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })),
        )
    }

    fn texts(app: &AppState) -> Vec<String> {
        app.tasks
            .list
            .list()
            .iter()
            .map(|task| task.text().to_string())
            .collect()
    }

    #[test]
    fn test_enter_adds_trimmed_text_and_clears_input() {
        let mut app = app();
        type_text(&mut app, "  Buy milk  ");

        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert_eq!(texts(&app), vec!["Buy milk"]);
        assert_eq!(app.tasks.list.list()[0].status(), TaskStatus::Pending);
        assert_eq!(app.input.value(), "");
    }

    #[test]
    fn test_whitespace_input_adds_nothing_and_is_kept() {
        let mut app = app();
        type_text(&mut app, "   ");

        press(&mut app, KeyCode::Enter);

        assert!(app.tasks.list.is_empty());
        assert_eq!(app.input.value(), "   ");
    }

    #[test]
    fn test_list_keys_update_and_remove() {
        let mut app = app();
        type_text(&mut app, "a");
        press(&mut app, KeyCode::Enter);
        type_text(&mut app, "b");
        press(&mut app, KeyCode::Enter);

        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::List);

        press(&mut app, KeyCode::Char('i'));
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('d'));

        let tasks = app.tasks.list.list();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].text(), "b");
        assert_eq!(tasks[0].status(), TaskStatus::InProgress);
    }

    #[test]
    fn test_typing_in_list_focus_does_not_edit_input() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "xyz");
        assert_eq!(app.input.value(), "");
    }

    #[test]
    fn test_logout_control_emits_logout_then_navigate() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Logout);

        let effects = press(&mut app, KeyCode::Enter);

        assert_eq!(
            effects,
            vec![
                UiEffect::Logout,
                UiEffect::Navigate {
                    destination: "Login".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_quit_keys_do_not_logout() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Esc), vec![UiEffect::Quit]);
        assert_eq!(
            update(&mut app, key_event(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            vec![UiEffect::Quit]
        );
    }

    #[test]
    fn test_click_routes_through_hit_map() {
        let mut app = app();
        let id = app.tasks.add("Buy milk").unwrap();
        {
            let mut hits = app.hits.borrow_mut();
            hits.push(
                Rect::new(2, 5, 12, 1),
                Control::SetStatus(id, TaskStatus::Completed),
            );
            hits.push(Rect::new(20, 5, 10, 1), Control::Remove(id));
            hits.push(Rect::new(0, 9, 15, 1), Control::Logout);
        }

        assert!(click(&mut app, 4, 5).is_empty());
        assert_eq!(app.tasks.list.get(id).map(Task::status), Some(TaskStatus::Completed));
        assert_eq!(app.focus, Focus::List);

        assert_eq!(click(&mut app, 0, 9), logout_effects());

        assert!(click(&mut app, 25, 5).is_empty());
        assert!(app.tasks.list.is_empty());

        // Nothing drawn here.
        assert!(click(&mut app, 50, 50).is_empty());
    }

    #[test]
    fn test_unknown_ids_from_stale_hits_are_noops() {
        let mut app = app();
        let id = app.tasks.add("gone").unwrap();
        app.tasks.add("stays");
        app.tasks.remove(id);

        activate(&mut app, Control::SetStatus(id, TaskStatus::Completed));
        activate(&mut app, Control::Remove(id));

        assert_eq!(texts(&app), vec!["stays"]);
        assert_eq!(app.tasks.list.list()[0].status(), TaskStatus::Pending);
    }

    #[test]
    fn test_paste_goes_to_input() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        update(&mut app, UiEvent::Terminal(Event::Paste("Llamar\nal banco".into())));
        assert_eq!(app.focus, Focus::Input);
        assert_eq!(app.input.value(), "Llamar al banco");
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut app = app();
        update(
            &mut app,
            UiEvent::Terminal(Event::Key(KeyEvent {
                code: KeyCode::Char('x'),
                modifiers: KeyModifiers::NONE,
                kind: KeyEventKind::Release,
                state: KeyEventState::NONE,
            })),
        );
        assert_eq!(app.input.value(), "");
    }
}
