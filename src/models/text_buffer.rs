//! Text buffer model
//!
//! Rope storage plus a single caret kept as a char offset.

use ropey::Rope;
use std::borrow::Cow;
use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Clone, Debug)]
pub struct TextBuffer {
    rope: Rope,
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            cursor: 0,
        }
    }

    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            cursor: 0,
        }
    }

    pub fn rope(&self) -> &Rope {
        &self.rope
    }

    pub fn text(&self) -> String {
        self.rope.to_string()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_cursor(&mut self, char_offset: usize) {
        self.cursor = char_offset.min(self.rope.len_chars());
    }

    /// Inserts at `char_offset` (clamped). A caret at or after the insertion
    /// point moves with the text.
    pub fn insert(&mut self, char_offset: usize, text: &str) {
        let at = char_offset.min(self.rope.len_chars());
        self.rope.insert(at, text);
        if self.cursor >= at {
            self.cursor += text.chars().count();
        }
    }

    pub fn insert_at_cursor(&mut self, text: &str) {
        self.insert(self.cursor, text);
    }

    /// Removes `range` (clamped) and returns the removed text.
    pub fn remove(&mut self, range: Range<usize>) -> String {
        let len = self.rope.len_chars();
        let start = range.start.min(len);
        let end = range.end.clamp(start, len);
        if start == end {
            return String::new();
        }

        let removed = self.rope.slice(start..end).to_string();
        self.rope.remove(start..end);
        if self.cursor >= end {
            self.cursor -= end - start;
        } else if self.cursor > start {
            self.cursor = start;
        }
        removed
    }

    /// Deletes the grapheme before the caret.
    pub fn delete_backward(&mut self) -> Option<String> {
        if self.cursor == 0 {
            return None;
        }
        let head = self.rope.slice(..self.cursor);
        let head: Cow<'_, str> = match head.as_str() {
            Some(s) => Cow::Borrowed(s),
            None => Cow::Owned(head.to_string()),
        };
        let width = head.graphemes(true).next_back()?.chars().count();
        let end = self.cursor;
        Some(self.remove(end - width..end))
    }

    /// Replaces the whole content; the caret is clamped into the new text.
    pub fn set_text(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.cursor = self.cursor.min(self.rope.len_chars());
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/models/text_buffer.rs"]
mod tests;
