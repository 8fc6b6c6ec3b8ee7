//! Input tokenization.
//!
//! Deliberately minimal: the line is trimmed and split on single spaces.
//! There is no quoting, escaping, expansion or piping, and runs of spaces
//! produce empty arguments.

/// A command name with its positional arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// Lower-cased command name
    pub name: String,
    /// Arguments with their case preserved
    pub args: Vec<String>,
}

/// Split a raw line into a command. Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<ParsedCommand> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return None;
    }

    let mut words = trimmed.split(' ');
    let name = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();

    Some(ParsedCommand { name, args })
}
