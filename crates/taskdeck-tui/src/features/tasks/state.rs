use taskdeck_core::store::{Task, TaskId, TaskList, TaskStatus};

/// Label of the delete control on each row.
pub const REMOVE_LABEL: &str = "Eliminar";

/// Task list plus the selected row.
///
/// `selected` is an index into the list and is kept in range after every
/// mutation (it is meaningless while the list is empty).
#[derive(Debug, Default)]
pub struct TasksState {
    pub list: TaskList,
    selected: usize,
}

impl TasksState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.list.is_empty()).then_some(self.selected)
    }

    pub fn selected(&self) -> Option<&Task> {
        self.list.list().get(self.selected)
    }

    pub fn selected_id(&self) -> Option<TaskId> {
        self.selected().map(Task::id)
    }

    /// Adds a task and selects it. Whitespace-only text adds nothing.
    pub fn add(&mut self, text: &str) -> Option<TaskId> {
        let id = self.list.add(text)?;
        self.selected = self.list.len() - 1;
        Some(id)
    }

    pub fn set_status(&mut self, id: TaskId, status: TaskStatus) -> bool {
        self.list.set_status(id, status)
    }

    pub fn set_selected_status(&mut self, status: TaskStatus) -> bool {
        match self.selected_id() {
            Some(id) => self.set_status(id, status),
            None => false,
        }
    }

    pub fn remove(&mut self, id: TaskId) -> bool {
        let removed = self.list.remove(id);
        if removed {
            self.clamp_selection();
        }
        removed
    }

    pub fn remove_selected(&mut self) -> bool {
        match self.selected_id() {
            Some(id) => self.remove(id),
            None => false,
        }
    }

    pub fn select(&mut self, id: TaskId) {
        if let Some(index) = self.list.position(id) {
            self.selected = index;
        }
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.list.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.list.len().saturating_sub(1);
    }

    fn clamp_selection(&mut self) {
        self.selected = self.selected.min(self.list.len().saturating_sub(1));
    }
}
