//! Text buffer — the raw character store behind the undo engine.
//!
//! A `TextBuffer` wraps a [`ropey::Rope`] with bounds-checked editing
//! operations over a flat char-index coordinate space.
//!
//! # Design choices
//!
//! - **ropey** provides O(log n) insert/delete at any position and
//!   battle-tested Unicode handling. We build a small checked API on top
//!   rather than reimplementing text storage.
//!
//! - **Positions are char offsets**, not byte offsets. This means position
//!   3 of `"café"` addresses `'é'`, never a byte in the middle of its
//!   UTF-8 encoding. Byte offsets never leak into the public API.
//!
//! - **Failed operations leave the buffer untouched.** Every mutation
//!   validates its span up front and returns [`EditError::OutOfRange`] on
//!   bad input, so callers can treat any error as "edit rejected".
//!
//! - **No undo/redo here.** Reversibility is layered on top by
//!   [`crate::command`] and [`crate::history`]; the buffer only knows how
//!   to mutate and report what it removed.

use std::fmt;
use std::ops::Range;

use ropey::{Rope, RopeSlice};

use crate::error::{EditError, Result};

// ---------------------------------------------------------------------------
// TextBuffer
// ---------------------------------------------------------------------------

/// A mutable character sequence backed by a rope.
///
/// Each editor owns exactly one `TextBuffer`, mutated exclusively through
/// command execution and undo. All positions and lengths count Unicode
/// scalar values (chars).
pub struct TextBuffer {
    rope: Rope,
}

impl TextBuffer {
    // -- Construction -------------------------------------------------------

    /// Create an empty buffer.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a buffer from initial text.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope. Prefer the typed accessors, but this is
    /// available when you need direct rope operations.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total character count (Unicode scalar values, not bytes).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rope.len_chars()
    }

    /// True when the buffer contains no text.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// Get the character at a char index. Returns `None` if the index is
    /// out of bounds.
    #[must_use]
    pub fn char_at(&self, position: usize) -> Option<char> {
        (position < self.len()).then(|| self.rope.char(position))
    }

    /// Get a slice of text for the given char range. Returns `None` if
    /// the range is inverted or extends past the end of the buffer.
    #[must_use]
    pub fn slice(&self, range: Range<usize>) -> Option<RopeSlice<'_>> {
        (range.start <= range.end && range.end <= self.len()).then(|| self.rope.slice(range))
    }

    /// Collect all text into a `String`. Allocates — prefer `rope()` or
    /// `slice()` for zero-copy access when possible.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Editing ------------------------------------------------------------

    /// Insert text at a char position.
    ///
    /// A position equal to `len()` appends at the end. After insertion,
    /// any position at or after `position` shifts right by the char length
    /// of the inserted text.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`] if `position > len()`.
    pub fn insert(&mut self, position: usize, text: &str) -> Result<()> {
        if position > self.len() {
            return Err(EditError::OutOfRange {
                position,
                length: 0,
                len: self.len(),
            });
        }
        self.rope.insert(position, text);
        Ok(())
    }

    /// Delete `length` chars starting at `position`, returning the removed
    /// text.
    ///
    /// A `length` of 0 is a no-op returning the empty string, regardless
    /// of `position`.
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`] if `position >= len()` (when
    /// `length > 0`) or the span extends past the end of the buffer.
    pub fn delete(&mut self, position: usize, length: usize) -> Result<String> {
        if length == 0 {
            return Ok(String::new());
        }
        let len = self.len();
        if position >= len || length > len - position {
            return Err(EditError::OutOfRange {
                position,
                length,
                len,
            });
        }
        let removed = self.rope.slice(position..position + length).to_string();
        self.rope.remove(position..position + length);
        Ok(removed)
    }

    /// Replace `length` chars at `position` with `text`, returning the
    /// removed text.
    ///
    /// Equivalent to a delete followed by an insert at the same position.
    /// With `length == 0` this degrades to a plain insert (returning the
    /// empty string).
    ///
    /// # Errors
    ///
    /// Returns [`EditError::OutOfRange`] under the same conditions as
    /// [`delete`](Self::delete) and [`insert`](Self::insert). The buffer
    /// is unchanged on error: the delete validates the whole span, and an
    /// insert at the start of a just-deleted valid span cannot fail.
    pub fn replace(&mut self, position: usize, length: usize, text: &str) -> Result<String> {
        let removed = self.delete(position, length)?;
        self.insert(position, text)?;
        Ok(removed)
    }

    /// Empty the buffer, returning the previous content. Total — cannot
    /// fail.
    pub fn clear(&mut self) -> String {
        let old = self.rope.to_string();
        self.rope = Rope::new();
        old
    }
}

impl Default for TextBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TextBuffer")
            .field("chars", &self.len())
            .finish_non_exhaustive()
    }
}

impl fmt::Display for TextBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.rope)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    // -- Construction -------------------------------------------------------

    #[test]
    fn new_buffer_is_empty() {
        let buf = TextBuffer::new();
        assert!(buf.is_empty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.contents(), "");
    }

    #[test]
    fn from_text_basic() {
        let buf = TextBuffer::from_text("hello");
        assert!(!buf.is_empty());
        assert_eq!(buf.len(), 5);
        assert_eq!(buf.contents(), "hello");
    }

    #[test]
    fn len_counts_chars_not_bytes() {
        let buf = TextBuffer::from_text("café");
        assert_eq!(buf.len(), 4);
    }

    #[test]
    fn default_is_empty() {
        assert!(TextBuffer::default().is_empty());
    }

    // -- Access -------------------------------------------------------------

    #[test]
    fn char_at_in_bounds() {
        let buf = TextBuffer::from_text("café");
        assert_eq!(buf.char_at(3), Some('é'));
    }

    #[test]
    fn char_at_out_of_bounds() {
        let buf = TextBuffer::from_text("abc");
        assert_eq!(buf.char_at(3), None);
    }

    #[test]
    fn slice_in_bounds() {
        let buf = TextBuffer::from_text("hello world");
        assert_eq!(buf.slice(6..11).unwrap().to_string(), "world");
    }

    #[test]
    fn slice_end_past_len() {
        let buf = TextBuffer::from_text("abc");
        assert!(buf.slice(1..4).is_none());
    }

    #[test]
    fn slice_inverted_range() {
        let buf = TextBuffer::from_text("abc");
        assert!(buf.slice(2..1).is_none());
    }

    #[test]
    fn display_matches_contents() {
        let buf = TextBuffer::from_text("hello");
        assert_eq!(format!("{buf}"), "hello");
    }

    // -- Insert -------------------------------------------------------------

    #[test]
    fn insert_at_start() {
        let mut buf = TextBuffer::from_text("world");
        buf.insert(0, "hello ").unwrap();
        assert_eq!(buf.contents(), "hello world");
    }

    #[test]
    fn insert_in_middle() {
        let mut buf = TextBuffer::from_text("Hello World");
        buf.insert(5, ",").unwrap();
        assert_eq!(buf.contents(), "Hello, World");
    }

    #[test]
    fn insert_at_end() {
        let mut buf = TextBuffer::from_text("ab");
        buf.insert(2, "c").unwrap();
        assert_eq!(buf.contents(), "abc");
    }

    #[test]
    fn insert_past_end_rejected() {
        let mut buf = TextBuffer::from_text("ab");
        let err = buf.insert(3, "x").unwrap_err();
        assert_eq!(
            err,
            EditError::OutOfRange {
                position: 3,
                length: 0,
                len: 2
            }
        );
        assert_eq!(buf.contents(), "ab");
    }

    // -- Delete -------------------------------------------------------------

    #[test]
    fn delete_returns_removed_text() {
        let mut buf = TextBuffer::from_text("hello world");
        let removed = buf.delete(5, 6).unwrap();
        assert_eq!(removed, " world");
        assert_eq!(buf.contents(), "hello");
    }

    #[test]
    fn delete_full_range() {
        let mut buf = TextBuffer::from_text("abc");
        assert_eq!(buf.delete(0, 3).unwrap(), "abc");
        assert!(buf.is_empty());
    }

    #[test]
    fn delete_zero_length_is_noop() {
        let mut buf = TextBuffer::from_text("abc");
        assert_eq!(buf.delete(1, 0).unwrap(), "");
        assert_eq!(buf.contents(), "abc");
    }

    #[test]
    fn delete_zero_length_skips_bounds_check() {
        // Matches the delete contract: length 0 returns early, even at a
        // position that would otherwise be rejected.
        let mut buf = TextBuffer::from_text("abc");
        assert_eq!(buf.delete(99, 0).unwrap(), "");
    }

    #[test]
    fn delete_position_at_len_rejected() {
        let mut buf = TextBuffer::from_text("abc");
        assert!(buf.delete(3, 1).is_err());
        assert_eq!(buf.contents(), "abc");
    }

    #[test]
    fn delete_span_past_end_rejected() {
        let mut buf = TextBuffer::from_text("abc");
        let err = buf.delete(1, 5).unwrap_err();
        assert_eq!(
            err,
            EditError::OutOfRange {
                position: 1,
                length: 5,
                len: 3
            }
        );
        assert_eq!(buf.contents(), "abc");
    }

    #[test]
    fn delete_unicode_span() {
        let mut buf = TextBuffer::from_text("héllo");
        assert_eq!(buf.delete(1, 2).unwrap(), "él");
        assert_eq!(buf.contents(), "hlo");
    }

    // -- Replace ------------------------------------------------------------

    #[test]
    fn replace_returns_old_text() {
        let mut buf = TextBuffer::from_text("The quick brown fox");
        let old = buf.replace(4, 5, "slow").unwrap();
        assert_eq!(old, "quick");
        assert_eq!(buf.contents(), "The slow brown fox");
    }

    #[test]
    fn replace_zero_length_acts_as_insert() {
        let mut buf = TextBuffer::from_text("Hello World");
        assert_eq!(buf.replace(11, 0, "!").unwrap(), "");
        assert_eq!(buf.contents(), "Hello World!");
    }

    #[test]
    fn replace_with_longer_text() {
        let mut buf = TextBuffer::from_text("a b c");
        assert_eq!(buf.replace(2, 1, "beta").unwrap(), "b");
        assert_eq!(buf.contents(), "a beta c");
    }

    #[test]
    fn replace_out_of_bounds_rejected() {
        let mut buf = TextBuffer::from_text("abc");
        assert!(buf.replace(2, 5, "x").is_err());
        assert_eq!(buf.contents(), "abc");
    }

    // -- Clear --------------------------------------------------------------

    #[test]
    fn clear_returns_previous_content() {
        let mut buf = TextBuffer::from_text("precious data");
        assert_eq!(buf.clear(), "precious data");
        assert!(buf.is_empty());
    }

    #[test]
    fn clear_empty_buffer() {
        let mut buf = TextBuffer::new();
        assert_eq!(buf.clear(), "");
        assert!(buf.is_empty());
    }
}
