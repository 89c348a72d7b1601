//! Reversible commands — the unit of undoable work.
//!
//! Every mutation of a [`TextBuffer`] is reified as a [`Command`]: a value
//! that knows how to perform its edit and how to reverse it exactly. The
//! forward pass captures whatever the reverse pass needs (the deleted
//! text, the prior content, the position an append landed at), so undo
//! never has to guess.
//!
//! # Captured state and the undo guard
//!
//! `execute` populates each variant's captured state; `undo` consumes it.
//! Calling `undo` on a command that was never executed, or was already
//! undone, is a defensive no-op rather than a panic: the guard is simply
//! absent. Re-executing (what the history does on redo) repopulates it.
//!
//! # Macros
//!
//! [`MacroCommand`] groups an ordered list of commands into one atomic
//! undo unit. If a child fails mid-macro, the children that already ran
//! stay applied and recorded; undo reverses exactly that executed prefix,
//! in reverse order. Automatic rollback on partial failure is deliberately
//! not performed — callers needing all-or-nothing macros must validate
//! their steps before building the macro.

use std::fmt;

use crate::buffer::TextBuffer;
use crate::error::Result;

/// Maximum chars of user text shown in a command description.
const PREVIEW_LEN: usize = 20;

// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

/// A reified, reversible edit against a [`TextBuffer`].
///
/// The buffer is passed explicitly to [`execute`](Self::execute) and
/// [`undo`](Self::undo); commands never hold a reference to their target.
/// Each command exclusively owns the snapshot it captured, so history
/// entries never alias.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Insert `text` at `position`. Undo deletes the same span; the
    /// `executed` flag prevents a double-delete on repeated undo.
    Insert {
        position: usize,
        text: String,
        executed: bool,
    },

    /// Delete `length` chars at `position`. The removed text is captured
    /// on execute; undo re-inserts it.
    Delete {
        position: usize,
        length: usize,
        deleted: Option<String>,
    },

    /// Replace `length` chars at `position` with `text`. The text actually
    /// removed is captured on execute; undo replaces it back over the span
    /// `text` now occupies.
    Replace {
        position: usize,
        length: usize,
        text: String,
        old: Option<String>,
    },

    /// Insert `text` at the end of the buffer. The insertion position
    /// (the buffer length at execute time) is captured; undo deletes that
    /// span.
    Append {
        text: String,
        position: Option<usize>,
    },

    /// Empty the buffer. The full prior content is captured; undo
    /// re-inserts it at position 0.
    Clear { old: Option<String> },

    /// A composite of child commands undone as one unit.
    Macro(MacroCommand),
}

impl Command {
    // -- Construction -------------------------------------------------------

    /// An insert of `text` at `position`.
    #[must_use]
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        Self::Insert {
            position,
            text: text.into(),
            executed: false,
        }
    }

    /// A delete of `length` chars at `position`.
    #[must_use]
    pub const fn delete(position: usize, length: usize) -> Self {
        Self::Delete {
            position,
            length,
            deleted: None,
        }
    }

    /// A replacement of `length` chars at `position` with `text`.
    #[must_use]
    pub fn replace(position: usize, length: usize, text: impl Into<String>) -> Self {
        Self::Replace {
            position,
            length,
            text: text.into(),
            old: None,
        }
    }

    /// An append of `text` at the end of the buffer.
    #[must_use]
    pub fn append(text: impl Into<String>) -> Self {
        Self::Append {
            text: text.into(),
            position: None,
        }
    }

    /// A clear of the whole buffer.
    #[must_use]
    pub const fn clear() -> Self {
        Self::Clear { old: None }
    }

    // -- Execution ----------------------------------------------------------

    /// Perform the forward mutation, capturing the state needed to
    /// reverse it.
    ///
    /// # Errors
    ///
    /// Propagates [`EditError::OutOfRange`](crate::error::EditError) from
    /// the buffer unchanged. On error nothing is captured, so a
    /// subsequent `undo` is a no-op.
    pub fn execute(&mut self, buffer: &mut TextBuffer) -> Result<()> {
        match self {
            Self::Insert {
                position,
                text,
                executed,
            } => {
                buffer.insert(*position, text)?;
                *executed = true;
                Ok(())
            }
            Self::Delete {
                position,
                length,
                deleted,
            } => {
                *deleted = Some(buffer.delete(*position, *length)?);
                Ok(())
            }
            Self::Replace {
                position,
                length,
                text,
                old,
            } => {
                *old = Some(buffer.replace(*position, *length, text)?);
                Ok(())
            }
            Self::Append { text, position } => {
                let at = buffer.len();
                buffer.insert(at, text)?;
                *position = Some(at);
                Ok(())
            }
            Self::Clear { old } => {
                *old = Some(buffer.clear());
                Ok(())
            }
            Self::Macro(macro_cmd) => macro_cmd.execute(buffer),
        }
    }

    /// Exactly reverse the effect of the most recent `execute`, consuming
    /// the captured state.
    ///
    /// Without a prior successful `execute` this is a no-op.
    ///
    /// # Errors
    ///
    /// Propagates [`EditError::OutOfRange`](crate::error::EditError) from
    /// the buffer unchanged. The reverse edits re-validate through the
    /// buffer rather than assuming the forward span is still intact.
    pub fn undo(&mut self, buffer: &mut TextBuffer) -> Result<()> {
        match self {
            Self::Insert {
                position,
                text,
                executed,
            } => {
                if *executed {
                    buffer.delete(*position, char_len(text))?;
                    *executed = false;
                }
                Ok(())
            }
            Self::Delete { position, deleted, .. } => {
                if let Some(text) = deleted.take() {
                    buffer.insert(*position, &text)?;
                }
                Ok(())
            }
            Self::Replace {
                position, text, old, ..
            } => {
                if let Some(old_text) = old.take() {
                    buffer.replace(*position, char_len(text), &old_text)?;
                }
                Ok(())
            }
            Self::Append { text, position } => {
                if let Some(at) = position.take() {
                    buffer.delete(at, char_len(text))?;
                }
                Ok(())
            }
            Self::Clear { old } => {
                if let Some(old_text) = old.take() {
                    buffer.insert(0, &old_text)?;
                }
                Ok(())
            }
            Self::Macro(macro_cmd) => macro_cmd.undo(buffer),
        }
    }

    /// Human-readable label for history display. Long text arguments are
    /// truncated to a short preview.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Insert { position, text, .. } => {
                format!("Insert '{}' at position {position}", preview(text))
            }
            Self::Delete {
                position, length, ..
            } => format!("Delete {length} chars at position {position}"),
            Self::Replace {
                position,
                length,
                text,
                ..
            } => format!(
                "Replace {length} chars with '{}' at position {position}",
                preview(text)
            ),
            Self::Append { text, .. } => format!("Append '{}'", preview(text)),
            Self::Clear { .. } => "Clear buffer".to_string(),
            Self::Macro(macro_cmd) => macro_cmd.describe(),
        }
    }
}

impl From<MacroCommand> for Command {
    fn from(macro_cmd: MacroCommand) -> Self {
        Self::Macro(macro_cmd)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

// ---------------------------------------------------------------------------
// MacroCommand
// ---------------------------------------------------------------------------

/// An ordered group of commands that executes and undoes as one unit.
///
/// From the history's point of view a macro is a single entry, so a
/// multi-step edit (say, the four symbol inserts of an autoformatted
/// heading) is undone by one `undo` call.
///
/// # Partial failure
///
/// `execute` runs children in list order and stops at the first failure,
/// leaving the already-applied prefix in place. `undo` reverses exactly
/// that prefix. There is no automatic rollback; see the module docs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroCommand {
    label: String,
    commands: Vec<Command>,
    /// Children `commands[..executed]` succeeded on the last execute and
    /// are what undo reverses.
    executed: usize,
}

impl MacroCommand {
    /// An empty macro with the given display label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            commands: Vec::new(),
            executed: 0,
        }
    }

    /// A macro over a prebuilt list of commands.
    #[must_use]
    pub fn with_commands(label: impl Into<String>, commands: Vec<Command>) -> Self {
        Self {
            label: label.into(),
            commands,
            executed: 0,
        }
    }

    /// Add a command to the end of the macro.
    pub fn push(&mut self, command: Command) {
        self.commands.push(command);
    }

    /// The display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Number of child commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when the macro has no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Execute each child in list order, recording how many succeeded.
    ///
    /// # Errors
    ///
    /// Propagates the first child failure. Children before the failing
    /// one stay applied and recorded for undo.
    pub fn execute(&mut self, buffer: &mut TextBuffer) -> Result<()> {
        self.executed = 0;
        for command in &mut self.commands {
            command.execute(buffer)?;
            self.executed += 1;
        }
        Ok(())
    }

    /// Undo the executed prefix in reverse order, then forget it (a second
    /// `undo` is a no-op).
    ///
    /// # Errors
    ///
    /// Propagates the first child failure; children already reversed stay
    /// reversed.
    pub fn undo(&mut self, buffer: &mut TextBuffer) -> Result<()> {
        for command in self.commands[..self.executed].iter_mut().rev() {
            command.undo(buffer)?;
        }
        self.executed = 0;
        Ok(())
    }

    /// `"{label} ({n} operations)"`.
    #[must_use]
    pub fn describe(&self) -> String {
        format!("{} ({} operations)", self.label, self.commands.len())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Char count of `text` — the span an insert of it occupies in the buffer.
fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Shorten `text` to at most [`PREVIEW_LEN`] chars, appending `...` when
/// truncated. Counts chars so truncation never splits a scalar value.
fn preview(text: &str) -> String {
    if char_len(text) > PREVIEW_LEN {
        let head: String = text.chars().take(PREVIEW_LEN).collect();
        format!("{head}...")
    } else {
        text.to_string()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
