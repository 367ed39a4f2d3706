//! Shared helpers for the TUI (text measuring, scrollbar, colours).

pub mod scrollbar;
pub mod text;
pub mod theme;

pub use scrollbar::Scrollbar;
pub use theme::Theme;
