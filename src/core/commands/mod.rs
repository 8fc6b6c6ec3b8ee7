//! Command dispatch.
//!
//! This module provides:
//! - [`COMMANDS`], the fixed table mapping names to handlers
//! - [`CommandContext`], the read-only view a handler receives
//! - [`execute`], which tokenizes a line and runs the matching handler
//!
//! # Architecture
//!
//! Handlers are plain functions. They read the context and return a
//! [`CommandResult`] whose optional [`SessionEffect`] describes any state
//! change, or a [`CommandError`] that [`execute`] renders as output.
//! Nothing escapes `execute`.

mod execute;
mod result;

pub use result::{CommandResult, SessionEffect};

use chrono::NaiveDateTime;
use tracing::debug;

use crate::core::VirtualFs;
use crate::core::error::CommandError;
use crate::core::parser::parse_input;
use crate::models::StyledText;

/// Everything a handler may read.
#[derive(Clone, Copy, Debug)]
pub struct CommandContext<'a> {
    /// Absolute working directory
    pub cwd: &'a str,
    pub user: &'a str,
    pub hostname: &'a str,
    pub fs: &'a VirtualFs,
    /// Wall-clock time shown by long listings
    pub now: NaiveDateTime,
}

/// Signature shared by every command handler.
pub type Handler = fn(&[String], &CommandContext<'_>) -> Result<CommandResult, CommandError>;

/// One row of the command table.
pub struct CommandSpec {
    pub name: &'static str,
    /// Argument synopsis shown by `help` (may be empty)
    pub usage: &'static str,
    pub summary: &'static str,
    pub handler: Handler,
}

/// Every command the shell understands, in `help` order.
pub const COMMANDS: &[CommandSpec] = &[
    CommandSpec {
        name: "ls",
        usage: "[-a] [-l] [directory]",
        summary: "List directory contents",
        handler: execute::ls,
    },
    CommandSpec {
        name: "cd",
        usage: "[directory]",
        summary: "Change directory",
        handler: execute::cd,
    },
    CommandSpec {
        name: "cat",
        usage: "[file]",
        summary: "Display file contents",
        handler: execute::cat,
    },
    CommandSpec {
        name: "pwd",
        usage: "",
        summary: "Print working directory",
        handler: execute::pwd,
    },
    CommandSpec {
        name: "clear",
        usage: "",
        summary: "Clear the terminal",
        handler: execute::clear,
    },
    CommandSpec {
        name: "echo",
        usage: "[text]",
        summary: "Display text",
        handler: execute::echo,
    },
    CommandSpec {
        name: "neofetch",
        usage: "",
        summary: "Display system information",
        handler: execute::neofetch,
    },
    CommandSpec {
        name: "help",
        usage: "",
        summary: "Show this help message",
        handler: execute::help,
    },
];

/// Look up a command by its (already lower-cased) name.
pub fn find(name: &str) -> Option<&'static CommandSpec> {
    COMMANDS.iter().find(|spec| spec.name == name)
}

/// Get all available command names.
pub fn names() -> impl Iterator<Item = &'static str> {
    COMMANDS.iter().map(|spec| spec.name)
}

/// Tokenize `input` and run the matching handler.
///
/// Blank input yields an empty result. Errors become error-styled output.
pub fn execute(input: &str, ctx: &CommandContext<'_>) -> CommandResult {
    let Some(cmd) = parse_input(input) else {
        return CommandResult::empty();
    };

    debug!(command = %cmd.name, args = ?cmd.args, cwd = ctx.cwd, "dispatching");

    let result = match find(&cmd.name) {
        Some(spec) => (spec.handler)(&cmd.args, ctx),
        None => Err(CommandError::UnknownCommand(cmd.name)),
    };

    result.unwrap_or_else(|err| {
        debug!(%err, "command failed");
        CommandResult::output(StyledText::error(err.to_string()))
    })
}
