use super::unicode::{next_char_boundary, next_word_boundary, prev_char_boundary, prev_word_boundary};

/// Single-line text input with a byte-indexed cursor that always sits on a
/// char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    text: String,
    cursor: usize,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Buffer holding `text` with the cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

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

    /// Return the contents and leave the buffer empty.
    pub fn take(&mut self) -> String {
        self.cursor = 0;
        std::mem::take(&mut self.text)
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let prev = prev_char_boundary(&self.text, self.cursor);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            let next = next_char_boundary(&self.text, self.cursor);
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = prev_char_boundary(&self.text, self.cursor);
    }

    pub fn move_right(&mut self) {
        self.cursor = next_char_boundary(&self.text, self.cursor);
    }

    pub fn move_word_left(&mut self) {
        self.cursor = prev_word_boundary(&self.text, self.cursor);
    }

    pub fn move_word_right(&mut self) {
        self.cursor = next_word_boundary(&self.text, self.cursor);
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_take() {
        let mut buf = LineBuffer::new();
        for c in "milk".chars() {
            buf.insert_char(c);
        }
        assert_eq!(buf.text(), "milk");
        assert_eq!(buf.cursor(), 4);

        assert_eq!(buf.take(), "milk");
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_with_text_puts_cursor_at_end() {
        let buf = LineBuffer::with_text("café");
        assert_eq!(buf.cursor(), "café".len());
    }

    #[test]
    fn test_insert_in_middle() {
        let mut buf = LineBuffer::with_text("by milk");
        buf.move_home();
        buf.move_right();
        buf.insert_char('u');
        assert_eq!(buf.text(), "buy milk");
        assert_eq!(buf.cursor(), 2);
    }

    #[test]
    fn test_backspace_multibyte() {
        let mut buf = LineBuffer::with_text("añ");
        buf.backspace();
        assert_eq!(buf.text(), "a");
        buf.backspace();
        buf.backspace();
        assert_eq!(buf.text(), "");
    }

    #[test]
    fn test_delete_under_cursor() {
        let mut buf = LineBuffer::with_text("abc");
        buf.move_home();
        buf.delete();
        assert_eq!(buf.text(), "bc");
        buf.move_end();
        buf.delete();
        assert_eq!(buf.text(), "bc");
    }

    #[test]
    fn test_word_movement() {
        let mut buf = LineBuffer::with_text("pay the rent");
        buf.move_word_left();
        assert_eq!(buf.cursor(), 8);
        buf.move_word_left();
        assert_eq!(buf.cursor(), 4);
        buf.move_word_right();
        assert_eq!(buf.cursor(), 8);
    }

    #[test]
    fn test_move_over_wide_chars() {
        let mut buf = LineBuffer::with_text("日本");
        buf.move_left();
        assert_eq!(buf.cursor(), "日".len());
        buf.move_left();
        assert_eq!(buf.cursor(), 0);
    }

    #[test]
    fn test_clear() {
        let mut buf = LineBuffer::with_text("x");
        buf.clear();
        assert!(buf.is_empty());
        assert_eq!(buf.cursor(), 0);
    }
}
