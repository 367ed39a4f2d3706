//! Task list key handling.

use crossterm::event::{KeyCode, KeyEvent};
use taskdeck_core::store::TaskStatus;

use super::TasksState;

/// Maps a list-focused key to a store operation on the selected row.
///
/// Returns false when the key has no list meaning.
pub fn handle_list_key(tasks: &mut TasksState, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => tasks.select_prev(),
        KeyCode::Down | KeyCode::Char('j') => tasks.select_next(),
        KeyCode::Home | KeyCode::Char('g') => tasks.select_first(),
        KeyCode::End | KeyCode::Char('G') => tasks.select_last(),
        KeyCode::Char('d') | KeyCode::Delete => {
            tasks.remove_selected();
        }
        code => {
            let Some(status) = status_for_key(code) else {
                return false;
            };
            tasks.set_selected_status(status);
        }
    }
    true
}

fn status_for_key(code: KeyCode) -> Option<TaskStatus> {
    match code {
        KeyCode::Char('p' | '1') => Some(TaskStatus::Pending),
        KeyCode::Char('i' | '2') => Some(TaskStatus::InProgress),
        KeyCode::Char('c' | '3') => Some(TaskStatus::Completed),
        _ => None,
    }
}
