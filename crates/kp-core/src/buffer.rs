//! Editable single-document text buffer with a character cursor.
//!
//! Cursor and ranges are counted in `char`s, not bytes, so multi-byte
//! input (umlauts, ß) never splits a code point.

use std::ops::Range;

use crate::unicode::is_word_char;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at its end.
    pub fn with_text(text: &str) -> Self {
        Self {
            text: text.to_string(),
            cursor: text.chars().count(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len_chars(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn set_cursor(&mut self, pos: usize) {
        self.cursor = pos.min(self.len_chars());
    }

    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map_or(self.text.len(), |(b, _)| b)
    }

    /// Insert `s` at the cursor and move the cursor past it.
    pub fn insert_at_cursor(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Replace the chars in `range` with `s`; the cursor lands at the end
    /// of the inserted text. The range is clamped to the buffer.
    pub fn replace_range(&mut self, range: Range<usize>, s: &str) {
        let len = self.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        let (b_start, b_end) = (self.byte_offset(start), self.byte_offset(end));
        self.text.replace_range(b_start..b_end, s);
        self.cursor = start + s.chars().count();
    }

    /// Delete the char before the cursor. Returns it, if any.
    pub fn backspace(&mut self) -> Option<char> {
        if self.cursor == 0 {
            return None;
        }
        let at = self.byte_offset(self.cursor - 1);
        let removed = self.text.remove(at);
        self.cursor -= 1;
        Some(removed)
    }

    /// Delete the char after the cursor. Returns it, if any.
    pub fn delete_forward(&mut self) -> Option<char> {
        if self.cursor >= self.len_chars() {
            return None;
        }
        let at = self.byte_offset(self.cursor);
        Some(self.text.remove(at))
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.set_cursor(self.cursor + 1);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.len_chars();
    }

    /// Start of the run of word characters that ends at the cursor.
    /// Equals the cursor when the char before it is not a word char.
    pub fn word_start_before_cursor(&self) -> usize {
        let before = self.text.chars().take(self.cursor).collect::<Vec<_>>();
        let run = before.iter().rev().take_while(|c| is_word_char(**c)).count();
        self.cursor - run
    }

    /// End of the run of word characters that starts at the cursor.
    pub fn word_end_after_cursor(&self) -> usize {
        let run = self
            .text
            .chars()
            .skip(self.cursor)
            .take_while(|c| is_word_char(*c))
            .count();
        self.cursor + run
    }

    /// The word fragment immediately before the cursor.
    pub fn prefix_at_cursor(&self) -> String {
        self.slice(self.word_start_before_cursor()..self.cursor)
    }

    /// The whole word the cursor touches, including chars after it.
    pub fn word_under_cursor(&self) -> String {
        self.slice(self.word_start_before_cursor()..self.word_end_after_cursor())
    }

    /// Chars in `range`, clamped to the buffer.
    pub fn slice(&self, range: Range<usize>) -> String {
        let len = range.end.saturating_sub(range.start);
        self.text.chars().skip(range.start).take(len).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_cursor() {
        let mut buf = TextBuffer::new();
        buf.insert_at_cursor("Hallo");
        assert_eq!(buf.text(), "Hallo");
        assert_eq!(buf.cursor(), 5);
        buf.move_left();
        buf.move_left();
        buf.insert_at_cursor("X");
        assert_eq!(buf.text(), "HalXlo");
        assert_eq!(buf.cursor(), 4);
    }

    #[test]
    fn test_multibyte_chars() {
        let mut buf = TextBuffer::with_text("Grüße");
        assert_eq!(buf.cursor(), 5);
        assert_eq!(buf.backspace(), Some('e'));
        assert_eq!(buf.backspace(), Some('ß'));
        assert_eq!(buf.text(), "Grü");
        buf.move_home();
        assert_eq!(buf.delete_forward(), Some('G'));
        assert_eq!(buf.text(), "rü");
    }

    #[test]
    fn test_backspace_and_delete_at_edges() {
        let mut buf = TextBuffer::with_text("ab");
        assert_eq!(buf.delete_forward(), None);
        buf.move_home();
        assert_eq!(buf.backspace(), None);
        assert_eq!(buf.text(), "ab");
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut buf = TextBuffer::with_text("ab");
        buf.move_right();
        assert_eq!(buf.cursor(), 2);
        buf.move_home();
        buf.move_left();
        assert_eq!(buf.cursor(), 0);
        buf.move_end();
        assert_eq!(buf.cursor(), 2);
        buf.set_cursor(99);
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_prefix_at_cursor() {
        let buf = TextBuffer::with_text("Der Hun");
        assert_eq!(buf.word_start_before_cursor(), 4);
        assert_eq!(buf.prefix_at_cursor(), "Hun");

        let buf = TextBuffer::with_text("Der Hund ");
        assert_eq!(buf.prefix_at_cursor(), "");

        let buf = TextBuffer::with_text("Ende.");
        assert_eq!(buf.prefix_at_cursor(), "");
    }

    #[test]
    fn test_prefix_in_middle_of_word() {
        let mut buf = TextBuffer::with_text("Hausaufgabe");
        buf.set_cursor(4);
        assert_eq!(buf.prefix_at_cursor(), "Haus");
        assert_eq!(buf.word_under_cursor(), "Hausaufgabe");
        assert_eq!(buf.word_end_after_cursor(), 11);
    }

    #[test]
    fn test_replace_range() {
        let mut buf = TextBuffer::with_text("ein Hun und");
        buf.set_cursor(7);
        buf.replace_range(4..7, "Hund");
        assert_eq!(buf.text(), "ein Hund und");
        assert_eq!(buf.cursor(), 8);
    }

    #[test]
    fn test_replace_range_clamps() {
        let mut buf = TextBuffer::with_text("abc");
        buf.replace_range(2..10, "Z");
        assert_eq!(buf.text(), "abZ");
        assert_eq!(buf.cursor(), 3);
    }

    #[test]
    fn test_slice() {
        let buf = TextBuffer::with_text("Grüße dich");
        assert_eq!(buf.slice(2..5), "üße");
        assert_eq!(buf.slice(8..20), "ch");
    }
}
