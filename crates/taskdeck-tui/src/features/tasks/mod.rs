//! Task list feature slice (state, key handling, rendering).

mod render;
mod state;
mod update;

pub use render::{ROW_HEIGHT, first_visible_row, render_task_list};
pub use state::{REMOVE_LABEL, TasksState};
pub use update::handle_list_key;
