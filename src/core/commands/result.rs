//! Command execution result type.

use crate::models::StyledText;

/// Session mutation requested by a command.
///
/// Handlers never touch the session directly; the session applies the
/// effect after the handler returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEffect {
    /// Replace the working directory with an absolute path
    ChangeDirectory(String),
    /// Empty the scrollback (command history is kept)
    ClearScrollback,
}

/// Result of executing a command.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CommandResult {
    /// Output to display; empty means nothing is appended to the scrollback
    pub output: StyledText,
    /// Optional mutation of the session
    pub effect: Option<SessionEffect>,
}

impl CommandResult {
    /// Create a result with just output.
    pub fn output(text: StyledText) -> Self {
        Self {
            output: text,
            effect: None,
        }
    }

    /// Create a silent result carrying an effect.
    pub fn effect(effect: SessionEffect) -> Self {
        Self {
            output: StyledText::new(),
            effect: Some(effect),
        }
    }

    /// Create an empty result (no output, no effect).
    pub fn empty() -> Self {
        Self::default()
    }
}
