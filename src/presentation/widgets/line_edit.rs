//! Single-line text editor state.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthChar;

/// Editable single-line buffer with a character-indexed cursor.
///
/// Owns editing state only; callers decide what Enter and Esc mean and
/// where the line is drawn.
#[derive(Debug, Clone, Default)]
pub struct LineEdit {
    value: String,
    cursor: usize,
}

impl LineEdit {
    /// Creates an empty editor.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true if the buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Replaces the value and moves the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.value.chars().count();
    }

    /// Clears the buffer.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Inserts a character at the cursor.
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    /// Deletes the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes the character at the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    /// Deletes the word before the cursor.
    pub fn delete_word(&mut self) {
        while self.cursor > 0 && self.char_before().is_some_and(char::is_whitespace) {
            self.backspace();
        }
        while self.cursor > 0 && self.char_before().is_some_and(|c| !c.is_whitespace()) {
            self.backspace();
        }
    }

    fn char_before(&self) -> Option<char> {
        self.value.chars().nth(self.cursor.checked_sub(1)?)
    }

    /// Moves cursor left.
    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Moves cursor right.
    pub fn move_right(&mut self) {
        if self.cursor < self.value.chars().count() {
            self.cursor += 1;
        }
    }

    /// Moves cursor to start.
    pub fn move_start(&mut self) {
        self.cursor = 0;
    }

    /// Moves cursor to end.
    pub fn move_end(&mut self) {
        self.cursor = self.value.chars().count();
    }

    /// Handles an editing key; returns false for keys it does not own.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.insert_char(c);
            }
            KeyCode::Backspace
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.delete_word();
            }
            KeyCode::Char('w') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.delete_word();
            }
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_start(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Returns the display column of the cursor.
    #[must_use]
    pub fn cursor_col(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Draws the line into `area` and highlights the cursor cell.
    pub fn render_line(&self, area: Rect, buf: &mut Buffer, style: Style, cursor_style: Style) {
        let mut x = area.x;
        for c in self.value.chars() {
            let w = u16::try_from(c.width().unwrap_or(0)).unwrap_or(0);
            if x + w > area.x + area.width {
                break;
            }
            if let Some(cell) = buf.cell_mut((x, area.y)) {
                cell.set_symbol(&c.to_string());
                cell.set_style(style);
            }
            x += w;
        }

        let cursor_x = area.x + u16::try_from(self.cursor_col()).unwrap_or(u16::MAX);
        if cursor_x < area.x + area.width
            && let Some(cell) = buf.cell_mut((cursor_x, area.y))
        {
            cell.set_style(cursor_style);
            if cell.symbol().is_empty() {
                cell.set_symbol(" ");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_backspace() {
        let mut edit = LineEdit::new();
        edit.insert_char('a');
        edit.insert_char('b');
        assert_eq!(edit.value(), "ab");

        edit.backspace();
        assert_eq!(edit.value(), "a");
    }

    #[test]
    fn test_insert_mid_line() {
        let mut edit = LineEdit::new();
        edit.set_value("hllo");
        edit.move_start();
        edit.move_right();
        edit.insert_char('e');
        assert_eq!(edit.value(), "hello");
    }

    #[test]
    fn test_multibyte_editing() {
        let mut edit = LineEdit::new();
        edit.set_value("café");
        edit.backspace();
        assert_eq!(edit.value(), "caf");

        edit.insert_char('é');
        edit.move_left();
        edit.delete();
        assert_eq!(edit.value(), "caf");
    }

    #[test]
    fn test_delete_word() {
        let mut edit = LineEdit::new();
        edit.set_value("hello world");
        edit.delete_word();
        assert_eq!(edit.value(), "hello ");
    }

    #[test]
    fn test_handle_key_typing() {
        let mut edit = LineEdit::new();
        assert!(edit.handle_key(KeyEvent::new(KeyCode::Char('h'), KeyModifiers::NONE)));
        assert!(edit.handle_key(KeyEvent::new(KeyCode::Char('i'), KeyModifiers::NONE)));
        assert_eq!(edit.value(), "hi");

        // Enter is not an editing key.
        assert!(!edit.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    }

    #[test]
    fn test_cursor_col_with_wide_chars() {
        let mut edit = LineEdit::new();
        edit.set_value("日本");
        assert_eq!(edit.cursor_col(), 4);
    }
}
