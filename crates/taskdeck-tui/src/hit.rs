//! Clickable controls and their last rendered positions.
//!
//! Render records where each control was drawn; the reducer looks up mouse
//! clicks against the areas from the most recent frame.

use ratatui::layout::{Position, Rect};
use taskdeck_core::store::{TaskId, TaskStatus};

/// A control on the task screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// The new-task text field.
    Input,
    /// `[Agregar]`.
    Add,
    /// The text line of a task row.
    Row(TaskId),
    /// A status control on a task row.
    SetStatus(TaskId, TaskStatus),
    /// `[Eliminar]` on a task row.
    Remove(TaskId),
    /// `[Cerrar Sesión]`.
    Logout,
}

#[derive(Debug, Clone, Default)]
pub struct HitMap {
    targets: Vec<(Rect, Control)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.targets.clear();
    }

    pub fn push(&mut self, area: Rect, control: Control) {
        if area.width > 0 && area.height > 0 {
            self.targets.push((area, control));
        }
    }

    /// Topmost control drawn at `(column, row)`.
    pub fn control_at(&self, column: u16, row: u16) -> Option<Control> {
        let position = Position::new(column, row);
        self.targets
            .iter()
            .rev()
            .find(|(area, _)| area.contains(position))
            .map(|(_, control)| *control)
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
