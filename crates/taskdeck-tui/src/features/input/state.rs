use super::text_buffer::TextBuffer;

/// Placeholder shown while the field is empty.
pub const PLACEHOLDER: &str = "Agregar nueva tarea";

/// Label of the add control next to the field.
pub const ADD_LABEL: &str = "Agregar";

/// Pending new-task text.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub buffer: TextBuffer,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        self.buffer.text()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }
}
