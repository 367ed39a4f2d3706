//! Input feature reducer.

use crossterm::event::{KeyCode, KeyEvent};

use super::InputState;

/// What the reducer should do after an input-focused key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Enter was pressed: try to add the pending text.
    Submit,
    /// The key edited the field (or moved the cursor).
    Edited,
    /// The key has no meaning for the field.
    Ignored,
}

pub fn handle_input_key(input: &mut InputState, key: KeyEvent) -> InputAction {
    if key.code == KeyCode::Enter {
        return InputAction::Submit;
    }
    if input.buffer.input(key) {
        InputAction::Edited
    } else {
        InputAction::Ignored
    }
}

/// Inserts pasted text at the cursor (newlines become spaces).
pub fn handle_paste(input: &mut InputState, text: &str) {
    input.buffer.insert_str(text);
}
