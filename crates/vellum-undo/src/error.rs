//! Error types for buffer and command operations.
//!
//! The engine has exactly one failure mode a caller can provoke: asking
//! for an edit outside the buffer's bounds. Everything else (undo without
//! a prior execute, a second undo of the same command) is guarded inside
//! the commands themselves and degrades to a no-op rather than an error.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, EditError>;

/// An editing operation was rejected.
///
/// Raised by [`TextBuffer`](crate::buffer::TextBuffer) and surfaced
/// unchanged through command execution and the history. A rejected edit
/// leaves both the buffer and the history exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EditError {
    /// A position or length argument falls outside the buffer.
    ///
    /// `position` and `length` are the offending arguments (length is 0
    /// for pure insertions); `len` is the buffer's char count at the time
    /// of the call.
    #[error("position {position} with length {length} is out of bounds for a buffer of {len} chars")]
    OutOfRange {
        position: usize,
        length: usize,
        len: usize,
    },
}
