//! OML Viewpoint Services - editor-facing edit operations
//!
//! Wraps the core edit kernel with lifecycle logging so that each gesture
//! the diagram editor performs shows up as one `start` and one `end` (or
//! `end_error`) event, and connects graph nodes to the host text editor.

pub mod commands;
pub mod editor;

pub use commands::execute;
pub use editor::{open_text_editor, LocateInSource, SourceLocation, SpanIndex, TextEditorHost};
