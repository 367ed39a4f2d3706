//! New-task input feature slice.

mod render;
mod state;
pub mod text_buffer;
mod update;

pub use render::{INPUT_HEIGHT, render_input};
pub use state::{ADD_LABEL, InputState, PLACEHOLDER};
pub use update::{InputAction, handle_input_key, handle_paste};
