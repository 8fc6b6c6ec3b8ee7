//! Error types for the shell.
//!
//! - [`FsError`] - filesystem lookup failures
//! - [`CommandError`] - command failures, rendered as ordinary output
//! - [`ConfigError`] - host configuration and manifest loading failures

use std::path::PathBuf;

use thiserror::Error;

/// Filesystem lookup errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FsError {
    /// No node exists at the path
    #[error("{0}: no such file or directory")]
    NotFound(String),
    /// A node exists but is not a directory
    #[error("{0}: not a directory")]
    NotADirectory(String),
}

/// Command failures.
///
/// The `Display` output is exactly what the user sees; the dispatcher turns
/// every error into an error-styled result instead of propagating it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Command not found: {0}. Type 'help' to see available commands.")]
    UnknownCommand(String),
    #[error("{0}: missing file operand")]
    MissingOperand(&'static str),
    #[error("ls: cannot access '{0}': No such directory")]
    CannotAccess(String),
    #[error("cd: no such directory: {0}")]
    NoSuchDirectory(String),
    #[error("cd: not a directory: {0}")]
    NotADirectory(String),
    #[error("cat: {0}: No such file or directory")]
    NoSuchFile(String),
    #[error("cat: {0}: Is a directory")]
    IsADirectory(String),
}

/// Errors raised while loading host configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid filesystem manifest: {0}")]
    Manifest(#[from] serde_json::Error),
    #[error("filesystem root must be a directory")]
    RootNotDirectory,
}
