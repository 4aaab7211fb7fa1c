//! A small text editing core: a buffer, a byte-offset cursor, and an index of
//! line spans rebuilt after every edit.
//!
//! The cursor always sits on a character boundary. Character motion and
//! deletion step over whole grapheme clusters.

use std::ops::Range;

use unicode_segmentation::UnicodeSegmentation;

/// A line span `[begin, end)` in byte offsets. `end` excludes the newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Line {
    /// Offset of the first byte.
    pub begin: usize,
    /// Offset one past the last byte, before any newline.
    pub end: usize,
}

impl Line {
    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.begin
    }

    /// Is the line empty?
    pub fn is_empty(&self) -> bool {
        self.begin == self.end
    }
}

/// A text buffer with a cursor, an optional selection, and a private
/// clipboard.
#[derive(Debug, Clone)]
pub struct Editor {
    /// Buffer contents.
    text: String,
    /// Line index; never empty.
    lines: Vec<Line>,
    /// Cursor byte offset.
    cursor: usize,
    /// Selection anchor, while a selection is being extended.
    anchor: Option<usize>,
    /// Clipboard contents.
    clipboard: String,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new("")
    }
}

impl Editor {
    /// An editor holding `text`, with the cursor at the start.
    pub fn new(text: impl Into<String>) -> Self {
        let mut e = Self {
            text: text.into(),
            lines: Vec::new(),
            cursor: 0,
            anchor: None,
            clipboard: String::new(),
        };
        e.reindex();
        e
    }

    /// Buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the buffer and move the cursor to the start.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = 0;
        self.anchor = None;
        self.reindex();
    }

    /// Line spans, in order. There is always at least one.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Cursor byte offset.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor, clamping to the buffer and snapping back to a
    /// character boundary.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = self.floor_boundary(offset);
    }

    /// Rebuild the line index.
    fn reindex(&mut self) {
        self.lines.clear();
        let mut begin = 0;
        for (i, _) in self.text.match_indices('\n') {
            self.lines.push(Line { begin, end: i });
            begin = i + 1;
        }
        self.lines.push(Line {
            begin,
            end: self.text.len(),
        });
    }

    /// Buffer offsets moved: drop the selection and rebuild the index.
    fn edited(&mut self) {
        self.anchor = None;
        self.reindex();
    }

    /// Clamp to the buffer and round down to a character boundary.
    fn floor_boundary(&self, offset: usize) -> usize {
        let mut o = offset.min(self.text.len());
        while !self.text.is_char_boundary(o) {
            o -= 1;
        }
        o
    }

    /// Offset of the grapheme boundary before the cursor.
    fn prev_boundary(&self) -> usize {
        self.text[..self.cursor]
            .graphemes(true)
            .next_back()
            .map_or(0, |g| self.cursor - g.len())
    }

    /// Offset of the grapheme boundary after the cursor.
    fn next_boundary(&self) -> usize {
        self.text[self.cursor..]
            .graphemes(true)
            .next()
            .map_or(self.text.len(), |g| self.cursor + g.len())
    }

    /// Insert a character at the cursor and step past it.
    pub fn insert_char(&mut self, c: char) {
        let mut buf = [0; 4];
        self.insert_str(c.encode_utf8(&mut buf));
    }

    /// Insert text at the cursor and step past it. Any selection is dropped.
    pub fn insert_str(&mut self, s: &str) {
        self.cursor = self.floor_boundary(self.cursor);
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
        self.edited();
    }

    /// Remove the character before the cursor. Does nothing at the start.
    pub fn backspace(&mut self) {
        self.cursor = self.floor_boundary(self.cursor);
        if self.cursor == 0 {
            return;
        }
        let start = self.prev_boundary();
        self.text.replace_range(start..self.cursor, "");
        self.cursor = start;
        self.edited();
    }

    /// Remove the character under the cursor. Does nothing at the end.
    pub fn delete_char(&mut self) {
        if self.cursor >= self.text.len() {
            return;
        }
        let end = self.next_boundary();
        self.text.replace_range(self.cursor..end, "");
        self.edited();
    }

    /// Index of the line holding the cursor. A cursor at a line's end
    /// offset belongs to that line.
    pub fn cursor_row(&self) -> usize {
        self.lines
            .iter()
            .position(|l| l.begin <= self.cursor && self.cursor <= l.end)
            .unwrap_or(self.lines.len() - 1)
    }

    /// Byte offset of the cursor within its line.
    pub fn cursor_column(&self) -> usize {
        self.cursor.saturating_sub(self.lines[self.cursor_row()].begin)
    }

    /// Move to `row`, keeping the column where the line is long enough.
    fn move_to_row(&mut self, row: usize) {
        let col = self.cursor_column();
        let line = self.lines[row];
        self.cursor = self.floor_boundary(line.begin + col.min(line.len()));
    }

    /// Move up a line, keeping the column where possible.
    pub fn move_line_up(&mut self) {
        let row = self.cursor_row();
        if row > 0 {
            self.move_to_row(row - 1);
        }
    }

    /// Move down a line, keeping the column where possible.
    pub fn move_line_down(&mut self) {
        let row = self.cursor_row();
        if row + 1 < self.lines.len() {
            self.move_to_row(row + 1);
        }
    }

    /// Move back one character.
    pub fn move_char_left(&mut self) {
        self.cursor = self.prev_boundary();
    }

    /// Move forward one character.
    pub fn move_char_right(&mut self) {
        self.cursor = self.next_boundary();
    }

    /// Move to the start of the previous word.
    pub fn move_word_left(&mut self) {
        let before = |e: &Self| e.text[..e.cursor].chars().next_back();
        while let Some(c) = before(self) {
            if c.is_alphanumeric() {
                break;
            }
            self.cursor -= c.len_utf8();
        }
        while let Some(c) = before(self) {
            if !c.is_alphanumeric() {
                break;
            }
            self.cursor -= c.len_utf8();
        }
    }

    /// Move past the end of the next word.
    pub fn move_word_right(&mut self) {
        let after = |e: &Self| e.text[e.cursor..].chars().next();
        while let Some(c) = after(self) {
            if c.is_alphanumeric() {
                break;
            }
            self.cursor += c.len_utf8();
        }
        while let Some(c) = after(self) {
            if !c.is_alphanumeric() {
                break;
            }
            self.cursor += c.len_utf8();
        }
    }

    /// Move to the start of the buffer.
    pub fn move_to_begin(&mut self) {
        self.cursor = 0;
    }

    /// Move to the end of the buffer.
    pub fn move_to_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Move to the start of the current line.
    pub fn move_to_line_begin(&mut self) {
        self.cursor = self.lines[self.cursor_row()].begin;
    }

    /// Move to the end of the current line.
    pub fn move_to_line_end(&mut self) {
        self.cursor = self.lines[self.cursor_row()].end;
    }

    /// Move up to the nearest empty line above, or the buffer start.
    pub fn move_paragraph_up(&mut self) {
        let row = self.cursor_row();
        self.cursor = self.lines[..row]
            .iter()
            .rev()
            .find(|l| l.is_empty())
            .map_or(0, |l| l.begin);
    }

    /// Move down to the nearest empty line below, or the buffer end.
    pub fn move_paragraph_down(&mut self) {
        let row = self.cursor_row();
        self.cursor = self.lines[row + 1..]
            .iter()
            .find(|l| l.is_empty())
            .map_or(self.text.len(), |l| l.begin);
    }

    /// Start or end a selection before a cursor motion. With `shift` held,
    /// the current cursor becomes the anchor unless a selection is already
    /// being extended; without it, any selection is dropped.
    pub fn update_selection(&mut self, shift: bool) {
        if !shift {
            self.anchor = None;
        } else if self.anchor.is_none() {
            self.anchor = Some(self.cursor);
        }
    }

    /// The selected byte range, if any text is selected.
    pub fn selection_range(&self) -> Option<Range<usize>> {
        let anchor = self.anchor?;
        let (a, b) = if anchor <= self.cursor {
            (anchor, self.cursor)
        } else {
            (self.cursor, anchor)
        };
        (a < b).then_some(a..b.min(self.text.len()))
    }

    /// The selected text, if any.
    pub fn selected_text(&self) -> Option<&str> {
        self.selection_range().map(|r| &self.text[r])
    }

    /// Copy the selection, or the current line and its newline when nothing
    /// is selected.
    pub fn clipboard_copy(&mut self) {
        self.clipboard = match self.selected_text() {
            Some(s) => s.to_string(),
            None => {
                let line = self.lines[self.cursor_row()];
                format!("{}\n", &self.text[line.begin..line.end])
            }
        };
    }

    /// Insert the clipboard at the cursor.
    pub fn clipboard_paste(&mut self) {
        let clip = self.clipboard.clone();
        self.insert_str(&clip);
    }

    /// Clipboard contents.
    pub fn clipboard(&self) -> &str {
        &self.clipboard
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    /// Line spans as tuples.
    fn spans(e: &Editor) -> Vec<(usize, usize)> {
        e.lines().iter().map(|l| (l.begin, l.end)).collect()
    }

    #[test]
    fn insert_mid_line() {
        let mut e = Editor::new("ab\ncd");
        e.set_cursor(1);
        e.insert_char('X');
        assert_eq!(e.text(), "aXb\ncd");
        assert_eq!(e.cursor(), 2);
        assert_eq!(spans(&e), vec![(0, 3), (4, 6)]);
    }

    #[test]
    fn line_index() {
        assert_eq!(spans(&Editor::new("")), vec![(0, 0)]);
        assert_eq!(spans(&Editor::new("a\n")), vec![(0, 1), (2, 2)]);
        assert_eq!(spans(&Editor::new("\n\n")), vec![(0, 0), (1, 1), (2, 2)]);
    }

    #[test]
    fn backspace_and_delete_at_edges() {
        let mut e = Editor::new("ab");
        e.backspace();
        assert_eq!(e.text(), "ab");
        e.move_to_end();
        e.delete_char();
        assert_eq!(e.text(), "ab");
        e.backspace();
        assert_eq!((e.text(), e.cursor()), ("a", 1));
        e.move_to_begin();
        e.delete_char();
        assert_eq!((e.text(), e.cursor()), ("", 0));
    }

    #[test]
    fn graphemes_are_atomic() {
        let mut e = Editor::new("aé\u{301}b");
        e.move_to_end();
        e.move_char_left();
        e.backspace();
        assert_eq!(e.text(), "ab");
        assert_eq!(e.cursor(), 1);
    }

    #[test]
    fn vertical_motion_clamps_column() {
        let mut e = Editor::new("hello\nhi\nworld");
        e.set_cursor(4);
        e.move_line_down();
        assert_eq!((e.cursor_row(), e.cursor_column()), (1, 2));
        e.move_line_down();
        assert_eq!((e.cursor_row(), e.cursor_column()), (2, 2));
        e.move_line_down();
        assert_eq!(e.cursor_row(), 2);
        e.move_line_up();
        e.move_line_up();
        assert_eq!((e.cursor_row(), e.cursor_column()), (0, 2));
        e.move_line_up();
        assert_eq!(e.cursor(), 2);
    }

    #[test]
    fn word_motion() {
        let mut e = Editor::new("foo, bar baz");
        e.move_word_right();
        assert_eq!(e.cursor(), 3);
        e.move_word_right();
        assert_eq!(e.cursor(), 8);
        e.move_word_left();
        assert_eq!(e.cursor(), 5);
        e.move_word_left();
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn line_ends() {
        let mut e = Editor::new("one\ntwo");
        e.set_cursor(5);
        e.move_to_line_end();
        assert_eq!(e.cursor(), e.lines()[1].end);
        e.move_to_line_begin();
        assert_eq!(e.cursor(), 4);
    }

    #[test]
    fn paragraphs() {
        let mut e = Editor::new("a\nb\n\nc\n\nd");
        e.move_paragraph_down();
        assert_eq!(e.cursor(), 4);
        e.move_paragraph_down();
        assert_eq!(e.cursor(), 7);
        e.move_paragraph_down();
        assert_eq!(e.cursor(), 9);
        e.move_paragraph_up();
        assert_eq!(e.cursor(), 7);
        e.move_paragraph_up();
        e.move_paragraph_up();
        assert_eq!(e.cursor(), 0);
    }

    #[test]
    fn copy_paste() {
        let mut e = Editor::new("hello world");
        e.update_selection(true);
        e.move_word_right();
        assert_eq!(e.selected_text(), Some("hello"));
        e.clipboard_copy();
        e.update_selection(false);
        assert_eq!(e.selection_range(), None);
        e.move_to_end();
        e.clipboard_paste();
        assert_eq!(e.text(), "hello worldhello");

        let mut e = Editor::new("a\nb");
        e.clipboard_copy();
        e.move_to_end();
        e.clipboard_paste();
        assert_eq!(e.text(), "a\nba\n");
    }

    #[test]
    fn edits_drop_the_selection() {
        let mut e = Editor::new("abc");
        e.set_cursor(2);
        e.update_selection(true);
        e.move_to_begin();
        e.insert_str("€");
        assert_eq!(e.selection_range(), None);
        assert_eq!(e.selected_text(), None);
        e.clipboard_copy();
        assert_eq!(e.clipboard(), "€abc\n");

        e.update_selection(true);
        e.move_to_end();
        e.backspace();
        assert_eq!(e.selected_text(), None);
        e.update_selection(true);
        e.move_to_begin();
        e.delete_char();
        assert_eq!(e.selected_text(), None);
        assert_eq!(e.text(), "ab");
    }
}
