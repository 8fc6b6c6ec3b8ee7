//! Data models and types for the shell.
//!
//! Contains domain types for:
//! - [`FsNode`], [`FileKind`] - Virtual filesystem representation
//! - [`OutputUnit`], [`StyledText`], [`Style`] - Terminal output types

mod filesystem;
mod terminal;

pub use filesystem::{FileKind, FsNode};
pub use terminal::{OutputUnit, Prompt, Span, Style, StyledText, Swatch};
