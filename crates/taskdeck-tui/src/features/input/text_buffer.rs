//! Single-line text buffer for the new-task field.
//!
//! Supports the editing operations the field needs: insert, delete,
//! cursor and word movement. Newlines are flattened to spaces because a task
//! text is a single line.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Cursor movement commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Forward,
    Back,
    Head,
    End,
}

/// Line buffer with a char-indexed cursor.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Inserts a string at the cursor, advancing the cursor.
    pub fn insert_str(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let flattened: String = text
            .chars()
            .filter(|ch| *ch != '\r')
            .map(|ch| if ch == '\n' { ' ' } else { ch })
            .collect();

        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.insert_str(byte_idx, &flattened);
        self.cursor += flattened.chars().count();
    }

    pub fn insert_char(&mut self, ch: char) {
        let mut buf = [0u8; 4];
        self.insert_str(ch.encode_utf8(&mut buf));
    }

    /// Deletes the character at the cursor (Delete key semantics).
    pub fn delete_next_char(&mut self) {
        if self.cursor >= self.char_len() {
            return;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    /// Deletes the character before the cursor (Backspace semantics).
    pub fn delete_prev_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        self.delete_next_char();
    }

    /// Deletes from the cursor to the end of the line.
    pub fn delete_line_by_end(&mut self) {
        let byte_idx = char_to_byte_index(&self.text, self.cursor);
        self.text.truncate(byte_idx);
    }

    /// Deletes the word immediately to the left of the cursor.
    pub fn delete_word_left(&mut self) {
        let target = self.word_left_target();
        let start = char_to_byte_index(&self.text, target);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor = target;
    }

    pub fn move_cursor(&mut self, movement: CursorMove) {
        match movement {
            CursorMove::Forward => self.cursor = (self.cursor + 1).min(self.char_len()),
            CursorMove::Back => self.cursor = self.cursor.saturating_sub(1),
            CursorMove::Head => self.cursor = 0,
            CursorMove::End => self.cursor = self.char_len(),
        }
    }

    pub fn move_word_left(&mut self) {
        self.cursor = self.word_left_target();
    }

    pub fn move_word_right(&mut self) {
        let chars: Vec<char> = self.text.chars().collect();
        self.cursor = scan_right_segment(&chars, self.cursor);
    }

    /// Handles a key for basic editing. Returns true if the key was consumed.
    pub fn input(&mut self, key: KeyEvent) -> bool {
        if matches!(key.kind, KeyEventKind::Release) {
            return false;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Char(ch) if !ctrl && !alt => self.insert_char(ch),
            KeyCode::Char('a') if ctrl => self.move_cursor(CursorMove::Head),
            KeyCode::Char('e') if ctrl => self.move_cursor(CursorMove::End),
            KeyCode::Char('k') if ctrl => self.delete_line_by_end(),
            KeyCode::Char('w') if ctrl => self.delete_word_left(),
            KeyCode::Backspace if alt || ctrl => self.delete_word_left(),
            KeyCode::Backspace => self.delete_prev_char(),
            KeyCode::Delete => self.delete_next_char(),
            KeyCode::Left if alt || ctrl => self.move_word_left(),
            KeyCode::Right if alt || ctrl => self.move_word_right(),
            KeyCode::Left => self.move_cursor(CursorMove::Back),
            KeyCode::Right => self.move_cursor(CursorMove::Forward),
            KeyCode::Home => self.move_cursor(CursorMove::Head),
            KeyCode::End => self.move_cursor(CursorMove::End),
            _ => return false,
        }
        true
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    fn word_left_target(&self) -> usize {
        let chars: Vec<char> = self.text.chars().collect();
        scan_left_segment(&chars, self.cursor.min(chars.len()))
    }
}

/// Returns true if the character is a word character (alphanumeric or underscore).
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum CharClass {
    Whitespace,
    Word,
    Punct,
}

fn char_class(c: char) -> CharClass {
    if c.is_whitespace() {
        CharClass::Whitespace
    } else if is_word_char(c) {
        CharClass::Word
    } else {
        CharClass::Punct
    }
}

fn scan_left_segment(chars: &[char], mut idx: usize) -> usize {
    if idx == 0 {
        return 0;
    }
    let class = char_class(chars[idx - 1]);
    while idx > 0 && char_class(chars[idx - 1]) == class {
        idx -= 1;
    }
    idx
}

fn scan_right_segment(chars: &[char], mut idx: usize) -> usize {
    if idx >= chars.len() {
        return chars.len();
    }
    let class = char_class(chars[idx]);
    while idx < chars.len() && char_class(chars[idx]) == class {
        idx += 1;
    }
    idx
}

fn char_to_byte_index(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn insert_and_backspace_multibyte() {
        let mut buf = TextBuffer::default();
        buf.insert_str("Cerrar Sesión");
        assert_eq!(buf.cursor(), 13);

        buf.delete_prev_char();
        assert_eq!(buf.text(), "Cerrar Sesió");
        buf.delete_prev_char();
        assert_eq!(buf.text(), "Cerrar Sesi");
    }

    #[test]
    fn insert_in_middle() {
        let mut buf = TextBuffer::default();
        buf.insert_str("Buy milk");
        buf.move_cursor(CursorMove::Head);
        buf.move_word_right();
        buf.insert_str(" oat");
        assert_eq!(buf.text(), "Buy oat milk");
    }

    #[test]
    fn newlines_are_flattened() {
        let mut buf = TextBuffer::default();
        buf.insert_str("one\r\ntwo\nthree");
        assert_eq!(buf.text(), "one two three");
        assert_eq!(buf.cursor(), 13);
    }

    #[test]
    fn delete_word_left_with_whitespace() {
        let mut buf = TextBuffer::default();
        buf.insert_str("hello world");

        buf.delete_word_left(); // "world"
        assert_eq!(buf.text(), "hello ");

        buf.delete_word_left(); // " "
        assert_eq!(buf.text(), "hello");

        buf.delete_word_left(); // "hello"
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn move_word_left_stops_at_punctuation() {
        let mut buf = TextBuffer::default();
        buf.insert_str("fix: login");

        buf.move_word_left(); // "login"
        assert_eq!(buf.cursor(), 5);
        buf.move_word_left(); // " "
        assert_eq!(buf.cursor(), 4);
        buf.move_word_left(); // ":"
        assert_eq!(buf.cursor(), 3);
        buf.move_word_left(); // "fix"
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn delete_line_by_end_from_middle() {
        let mut buf = TextBuffer::default();
        buf.insert_str("keep drop");
        buf.move_cursor(CursorMove::Head);
        buf.move_word_right();
        buf.delete_line_by_end();
        assert_eq!(buf.text(), "keep");
    }

    #[test]
    fn input_ignores_unhandled_keys() {
        let mut buf = TextBuffer::default();
        assert!(buf.input(key(KeyCode::Char('x'))));
        assert!(!buf.input(key(KeyCode::Enter)));
        assert!(!buf.input(key(KeyCode::Up)));
        assert_eq!(buf.text(), "x");
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut buf = TextBuffer::default();
        buf.insert_str("ab");
        buf.move_cursor(CursorMove::Forward);
        assert_eq!(buf.cursor(), 2);
        buf.move_cursor(CursorMove::Head);
        buf.move_cursor(CursorMove::Back);
        assert_eq!(buf.cursor(), 0);
        buf.delete_prev_char();
        assert_eq!(buf.text(), "ab");
    }
}
