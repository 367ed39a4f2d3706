//! Application state for the task screen.
//!
//! ```text
//! AppState
//! ├── focus: Focus            (which control receives keys)
//! ├── input: InputState       (pending new-task text)
//! ├── tasks: TasksState       (task store + selected row)
//! ├── theme: Theme            (status colours)
//! ├── user: String            (signed-in session name, header only)
//! └── hits: RefCell<HitMap>   (control areas from the last render)
//! ```
//!
//! Only the reducer mutates this state; render reads it, except for `hits`,
//! which render refills every frame for mouse routing.

use std::cell::RefCell;

use crate::common::Theme;
use crate::hit::HitMap;
use crate::input::InputState;
use crate::tasks::TasksState;

/// Which part of the screen receives key presses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Input,
    List,
    Logout,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::List,
            Focus::List => Focus::Logout,
            Focus::Logout => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Logout,
            Focus::List => Focus::Input,
            Focus::Logout => Focus::List,
        }
    }
}

pub struct AppState {
    /// Set when the screen should close (quit or navigated away).
    pub should_quit: bool,
    pub focus: Focus,
    pub input: InputState,
    pub tasks: TasksState,
    pub theme: Theme,
    pub user: String,
    /// Control areas recorded during the last render.
    pub hits: RefCell<HitMap>,
}

impl AppState {
    pub fn new(user: impl Into<String>, theme: Theme) -> Self {
        Self {
            should_quit: false,
            focus: Focus::default(),
            input: InputState::new(),
            tasks: TasksState::new(),
            theme,
            user: user.into(),
            hits: RefCell::new(HitMap::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_focus_cycle_round_trips() {
        for focus in [Focus::Input, Focus::List, Focus::Logout] {
            assert_eq!(focus.next().prev(), focus);
            assert_eq!(focus.next().next().next(), focus);
        }
    }
}
