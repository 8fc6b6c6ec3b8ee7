//! Core logic of the shell.
//!
//! This module provides:
//! - [`VirtualFs`] virtual filesystem and lookup
//! - [`path::resolve`] path resolution against a working directory
//! - [`commands`] the command table and [`commands::execute`]
//! - [`Session`] per-run state driven by the presentation layer

pub mod commands;
pub mod error;
mod filesystem;
pub mod parser;
pub mod path;
mod session;

pub use filesystem::{DirEntry, VirtualFs};
pub use session::{HistoryDirection, Session};
