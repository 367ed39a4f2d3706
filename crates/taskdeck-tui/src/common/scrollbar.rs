//! Row scrollbar for the task list.
//!
//! Thumb length is computed once from the viewport/total ratio so it does not
//! change size while scrolling, and it reaches the bottom exactly at max scroll.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

#[derive(Debug, Clone)]
pub struct Scrollbar {
    total_rows: usize,
    visible_rows: usize,
    first_row: usize,
}

impl Scrollbar {
    pub fn new(total_rows: usize, visible_rows: usize, first_row: usize) -> Self {
        Self {
            total_rows,
            visible_rows,
            first_row,
        }
    }

    fn should_display(&self) -> bool {
        self.total_rows > self.visible_rows
    }

    /// Returns `(thumb_start, thumb_len)` for a track of `track_len` cells.
    fn thumb(&self, track_len: usize) -> Option<(usize, usize)> {
        let max_scroll = self.total_rows.saturating_sub(self.visible_rows);
        if track_len == 0 || max_scroll == 0 {
            return None;
        }

        let thumb_len = ((track_len * self.visible_rows + self.total_rows / 2) / self.total_rows)
            .clamp(1, track_len);
        let available = track_len - thumb_len;
        let thumb_start = self.first_row.min(max_scroll) * available / max_scroll;
        Some((thumb_start, thumb_len))
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() {
            return;
        }
        let Some((thumb_start, thumb_len)) = self.thumb(area.height as usize) else {
            return;
        };

        let x = area.x + area.width.saturating_sub(1);
        let style = Style::default().fg(Color::DarkGray);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let symbol = if idx >= thumb_start && idx < thumb_start + thumb_len {
                THUMB_SYMBOL
            } else {
                TRACK_SYMBOL
            };
            buf.set_string(x, y, symbol, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_display_when_rows_exceed_viewport() {
        assert!(Scrollbar::new(10, 4, 0).should_display());
        assert!(!Scrollbar::new(4, 4, 0).should_display());
    }

    #[test]
    fn test_thumb_reaches_bottom_at_max_scroll() {
        let bar = Scrollbar::new(10, 5, 5);
        let (start, len) = bar.thumb(10).unwrap();
        assert_eq!(start + len, 10);
    }

    #[test]
    fn test_thumb_starts_at_top() {
        let bar = Scrollbar::new(10, 5, 0);
        let (start, len) = bar.thumb(10).unwrap();
        assert_eq!(start, 0);
        assert_eq!(len, 5);
    }
}
