// Text source seam between the engine and its editable text.

use std::cell::RefCell;
use std::rc::Rc;

/// The editable text the engine annotates.
///
/// The engine never mutates text behind the source's back: edits go
/// through [`replace_range`](TextSource::replace_range) and the engine
/// then pulls a fresh snapshot via
/// [`current_text`](TextSource::current_text). All offsets are byte
/// offsets into the current text.
pub trait TextSource {
    /// The full text content.
    fn current_text(&self) -> String;

    /// Replace the byte range `start..end` with `new_text`.
    fn replace_range(&mut self, start: usize, end: usize, new_text: &str);

    /// The cursor position as a byte offset.
    fn cursor_position(&self) -> usize;

    /// Move the cursor to the given byte offset.
    fn set_cursor_position(&mut self, offset: usize);
}

/// A plain in-memory [`TextSource`] for tools and tests.
#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    text: String,
    cursor: usize,
}

impl TextBuffer {
    /// Create a buffer with the cursor at end-of-text.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.len();
        Self { text, cursor }
    }

    /// The buffer contents.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the whole contents, moving the cursor to end-of-text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.len();
    }
}

impl TextSource for TextBuffer {
    fn current_text(&self) -> String {
        self.text.clone()
    }

    fn replace_range(&mut self, start: usize, end: usize, new_text: &str) {
        self.text.replace_range(start..end, new_text);
        if self.cursor > self.text.len() {
            self.cursor = self.text.len();
        }
    }

    fn cursor_position(&self) -> usize {
        self.cursor
    }

    fn set_cursor_position(&mut self, offset: usize) {
        self.cursor = offset.min(self.text.len());
    }
}

// A shared buffer can stand in for a text source when the caller also
// needs to keep a handle to it (the CLI tools feed lines into the buffer
// and then tell the engine the text changed).
impl<T: TextSource> TextSource for Rc<RefCell<T>> {
    fn current_text(&self) -> String {
        self.borrow().current_text()
    }

    fn replace_range(&mut self, start: usize, end: usize, new_text: &str) {
        self.borrow_mut().replace_range(start, end, new_text);
    }

    fn cursor_position(&self) -> usize {
        self.borrow().cursor_position()
    }

    fn set_cursor_position(&mut self, offset: usize) {
        self.borrow_mut().set_cursor_position(offset);
    }
}
