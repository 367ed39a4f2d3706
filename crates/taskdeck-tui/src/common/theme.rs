//! Colours used by the task screen.

use anyhow::{Context, Result};
use ratatui::style::Color;
use taskdeck_core::config::ColorsConfig;
use taskdeck_core::store::TaskStatus;

/// Add control background.
pub const ADD_COLOR: Color = Color::Rgb(0x4C, 0xAF, 0x50);
/// Delete control background.
pub const DELETE_COLOR: Color = Color::Rgb(0xF4, 0x43, 0x36);
/// Logout control background.
pub const LOGOUT_COLOR: Color = Color::Rgb(0x75, 0x75, 0x75);

/// Status accent colours, resolved from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub pending: Color,
    pub in_progress: Color,
    pub completed: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            pending: Color::Rgb(0xFF, 0xA0, 0x00),
            in_progress: Color::Rgb(0x21, 0x96, 0xF3),
            completed: Color::Rgb(0x4C, 0xAF, 0x50),
        }
    }
}

impl Theme {
    /// Parses the configured colours.
    ///
    /// # Errors
    /// Returns an error naming the first colour that is not a valid
    /// `#RRGGBB` value or terminal colour name.
    pub fn from_config(colors: &ColorsConfig) -> Result<Self> {
        Ok(Self {
            pending: parse_color("colors.pending", &colors.pending)?,
            in_progress: parse_color("colors.in_progress", &colors.in_progress)?,
            completed: parse_color("colors.completed", &colors.completed)?,
        })
    }

    pub fn accent(&self, status: TaskStatus) -> Color {
        match status {
            TaskStatus::Pending => self.pending,
            TaskStatus::InProgress => self.in_progress,
            TaskStatus::Completed => self.completed,
        }
    }
}

fn parse_color(key: &str, value: &str) -> Result<Color> {
    value
        .trim()
        .parse::<Color>()
        .ok()
        .with_context(|| format!("Invalid colour for {key}: {value:?}"))
}
