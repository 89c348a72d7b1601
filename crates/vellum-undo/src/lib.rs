//! # vellum-undo — command-based undo/redo engine
//!
//! The minimal reusable core an editor's undo subsystem embeds: a
//! rope-backed text buffer mutated exclusively through reversible
//! commands, sequenced by a bounded history with a single linear
//! timeline, behind a thin editor façade.
//!
//! - **[`error`]** — `EditError` and the crate `Result` alias
//! - **[`buffer`]** — `TextBuffer`, a rope with char-indexed checked editing
//! - **[`command`]** — reversible commands and composite macros
//! - **[`history`]** — the bounded execute/undo/redo log
//! - **[`editor`]** — the façade binding one buffer to one history
//!
//! Everything is single-threaded and synchronous; an embedding
//! application that needs cross-thread access serializes calls itself.

pub mod buffer;
pub mod command;
pub mod editor;
pub mod error;
pub mod history;
