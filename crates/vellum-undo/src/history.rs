//! Undo/redo history — the bounded, ordered log of executed commands.
//!
//! `History` owns every command that has run, oldest first, with a cursor
//! marking the most recent not-yet-undone entry. Three rules govern the
//! log:
//!
//! - **Single timeline.** Any successful execute after one or more undos
//!   permanently discards the undone "future" entries. There is no redo
//!   tree; this is an explicit design simplification.
//! - **Bounded memory.** At most `capacity` entries are retained. On
//!   overflow the oldest entry is evicted and that undo step is
//!   permanently lost.
//! - **Atomic failure.** A command that fails to execute is not recorded;
//!   entries and cursor are left exactly as they were.
//!
//! The cursor is `Option<usize>`: `None` means nothing is executed (or
//! everything has been undone), `Some(i)` means `entries[i]` is the next
//! candidate for undo and `entries[i + 1]`, if present, the next for redo.

use crate::buffer::TextBuffer;
use crate::command::Command;
use crate::error::Result;

// ---------------------------------------------------------------------------
// History
// ---------------------------------------------------------------------------

/// Bounded, ordered log of executed commands with a current-position
/// cursor.
///
/// Created empty with a fixed capacity; it grows and shrinks only through
/// [`execute`](Self::execute), [`undo`](Self::undo), [`redo`](Self::redo),
/// eviction, and an explicit [`clear`](Self::clear).
#[derive(Debug)]
pub struct History {
    entries: Vec<Command>,
    cursor: Option<usize>,
    capacity: usize,
}

impl History {
    /// Create an empty history retaining at most `capacity` entries.
    /// A capacity of 0 is clamped to 1.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: Vec::new(),
            cursor: None,
            capacity: capacity.max(1),
        }
    }

    // -- State machine ------------------------------------------------------

    /// Execute `command` against `buffer` and record it.
    ///
    /// On success, any entries beyond the cursor (the redo branch) are
    /// discarded, the command is appended, and the cursor advances to it.
    /// If the log then exceeds capacity, the oldest entry is evicted and
    /// the cursor shifts back with it — that undo step is permanently
    /// lost.
    ///
    /// # Errors
    ///
    /// Propagates the command's failure unchanged; entries and cursor are
    /// not mutated.
    pub fn execute(&mut self, mut command: Command, buffer: &mut TextBuffer) -> Result<()> {
        command.execute(buffer)?;
        tracing::debug!(label = %command.describe(), "executed command");

        // Forward progress invalidates the redo branch.
        let keep = self.cursor.map_or(0, |c| c + 1);
        if keep < self.entries.len() {
            tracing::trace!(
                discarded = self.entries.len() - keep,
                "discarding redo entries"
            );
            self.entries.truncate(keep);
        }

        self.entries.push(command);

        if self.entries.len() > self.capacity {
            tracing::trace!(capacity = self.capacity, "evicting oldest history entry");
            self.entries.remove(0);
        }
        self.cursor = Some(self.entries.len() - 1);
        Ok(())
    }

    /// Undo the entry at the cursor and move the cursor back.
    ///
    /// Returns `Ok(false)` when there is nothing to undo.
    ///
    /// # Errors
    ///
    /// Propagates a buffer failure from the command's reverse edit; the
    /// cursor is not moved in that case.
    pub fn undo(&mut self, buffer: &mut TextBuffer) -> Result<bool> {
        let Some(idx) = self.cursor else {
            return Ok(false);
        };
        self.entries[idx].undo(buffer)?;
        tracing::debug!(label = %self.entries[idx].describe(), "undid command");
        self.cursor = idx.checked_sub(1);
        Ok(true)
    }

    /// Re-execute the entry after the cursor and advance the cursor to it.
    ///
    /// Returns `Ok(false)` when there is nothing to redo.
    ///
    /// # Errors
    ///
    /// Propagates a buffer failure from re-execution; the cursor is not
    /// moved in that case.
    pub fn redo(&mut self, buffer: &mut TextBuffer) -> Result<bool> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.entries.len() {
            return Ok(false);
        }
        self.entries[next].execute(buffer)?;
        tracing::debug!(label = %self.entries[next].describe(), "redid command");
        self.cursor = Some(next);
        Ok(true)
    }

    /// Drop all entries and reset the cursor.
    pub fn clear(&mut self) {
        tracing::debug!(discarded = self.entries.len(), "history cleared");
        self.entries.clear();
        self.cursor = None;
    }

    // -- Queries ------------------------------------------------------------

    /// True if there is an entry to undo.
    #[inline]
    #[must_use]
    pub const fn can_undo(&self) -> bool {
        self.cursor.is_some()
    }

    /// True if there is an entry to redo.
    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.entries.len()
    }

    /// Describe every entry, oldest first.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.entries.iter().map(Command::describe).collect()
    }

    /// Index of the most recently executed, not-yet-undone entry. `None`
    /// when nothing is executed.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        self.cursor
    }

    /// Number of retained entries (both sides of the cursor).
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries are retained.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Maximum number of retained entries.
    #[inline]
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
