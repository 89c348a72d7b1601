//! Editor façade — one buffer, one history, high-level editing verbs.
//!
//! `Editor` is the binding a presentation layer talks to: every editing
//! verb builds the matching [`Command`] and hands it to the history, so
//! the buffer is never mutated outside the undo machinery. The editor
//! holds no state of its own beyond the buffer and the history it owns.

use crate::buffer::TextBuffer;
use crate::command::{Command, MacroCommand};
use crate::error::Result;
use crate::history::History;

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

/// A display-oriented snapshot of editor state.
///
/// Read-only: a presentation layer polls this record instead of reaching
/// into the buffer or history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Statistics {
    /// Char count of the buffer.
    pub content_length: usize,
    /// Number of retained history entries.
    pub history_size: usize,
    /// Whether an undo step is available.
    pub can_undo: bool,
    /// Whether a redo step is available.
    pub can_redo: bool,
    /// Cursor into the history; `None` when nothing is executed.
    pub position: Option<usize>,
}

// ---------------------------------------------------------------------------
// Editor
// ---------------------------------------------------------------------------

/// Thin façade binding a [`TextBuffer`] to a [`History`].
#[derive(Debug)]
pub struct Editor {
    buffer: TextBuffer,
    history: History,
}

impl Editor {
    /// History capacity used by [`new`](Self::new) and
    /// [`from_text`](Self::from_text).
    pub const DEFAULT_CAPACITY: usize = 50;

    // -- Construction -------------------------------------------------------

    /// An editor with an empty buffer and the default history capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// An editor with an empty buffer and an explicit history capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: TextBuffer::new(),
            history: History::new(capacity),
        }
    }

    /// An editor over initial content, with the default history capacity.
    /// The initial content is not an undoable step.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self::from_text_with_capacity(text, Self::DEFAULT_CAPACITY)
    }

    /// An editor over initial content with an explicit history capacity.
    #[must_use]
    pub fn from_text_with_capacity(text: &str, capacity: usize) -> Self {
        Self {
            buffer: TextBuffer::from_text(text),
            history: History::new(capacity),
        }
    }

    // -- Editing verbs ------------------------------------------------------

    /// Insert `text` at a char position.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`](crate::error::EditError) if the
    /// position is past the end of the buffer; nothing is recorded.
    pub fn insert(&mut self, position: usize, text: &str) -> Result<()> {
        self.execute(Command::insert(position, text))
    }

    /// Delete `length` chars at a char position.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`](crate::error::EditError) if the
    /// span is out of bounds; nothing is recorded.
    pub fn delete(&mut self, position: usize, length: usize) -> Result<()> {
        self.execute(Command::delete(position, length))
    }

    /// Replace `length` chars at a char position with `text`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`](crate::error::EditError) if the
    /// span is out of bounds; nothing is recorded.
    pub fn replace(&mut self, position: usize, length: usize, text: &str) -> Result<()> {
        self.execute(Command::replace(position, length, text))
    }

    /// Append `text` at the end of the buffer.
    ///
    /// # Errors
    ///
    /// Cannot fail on a consistent buffer; the `Result` is the uniform
    /// verb signature.
    pub fn append(&mut self, text: &str) -> Result<()> {
        self.execute(Command::append(text))
    }

    /// Empty the buffer as an undoable step.
    ///
    /// # Errors
    ///
    /// Cannot fail on a consistent buffer; the `Result` is the uniform
    /// verb signature.
    pub fn clear(&mut self) -> Result<()> {
        self.execute(Command::clear())
    }

    /// Execute a macro as a single undoable entry.
    ///
    /// # Errors
    ///
    /// Propagates the first child failure. Per the macro's documented
    /// policy the already-applied prefix stays in the buffer, and the
    /// failed macro is not recorded in history.
    pub fn execute_macro(&mut self, macro_cmd: MacroCommand) -> Result<()> {
        self.execute(Command::from(macro_cmd))
    }

    /// Execute any prebuilt command.
    ///
    /// # Errors
    ///
    /// Propagates the command's failure; history is unchanged.
    pub fn execute(&mut self, command: Command) -> Result<()> {
        self.history.execute(command, &mut self.buffer)
    }

    /// Undo the most recent command. Returns `Ok(false)` when there is
    /// nothing to undo.
    ///
    /// # Errors
    ///
    /// Propagates a buffer failure from the reverse edit.
    pub fn undo(&mut self) -> Result<bool> {
        self.history.undo(&mut self.buffer)
    }

    /// Redo the most recently undone command. Returns `Ok(false)` when
    /// there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Propagates a buffer failure from re-execution.
    pub fn redo(&mut self) -> Result<bool> {
        self.history.redo(&mut self.buffer)
    }

    /// Drop all history entries. The buffer is untouched.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    // -- Accessors ----------------------------------------------------------

    /// The current buffer content.
    #[must_use]
    pub fn contents(&self) -> String {
        self.buffer.contents()
    }

    /// Char count of the buffer.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// True when the buffer contains no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// The buffer, read-only. Mutation goes through the editing verbs.
    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &TextBuffer {
        &self.buffer
    }

    /// The history, read-only.
    #[inline]
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Descriptions of every history entry, oldest first.
    #[must_use]
    pub fn history_labels(&self) -> Vec<String> {
        self.history.labels()
    }

    /// True if an undo step is available.
    #[inline]
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// True if a redo step is available.
    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// A display snapshot of the editor's state.
    #[must_use]
    pub fn statistics(&self) -> Statistics {
        Statistics {
            content_length: self.buffer.len(),
            history_size: self.history.len(),
            can_undo: self.history.can_undo(),
            can_redo: self.history.can_redo(),
            position: self.history.position(),
        }
    }
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
