//! Per-run shell state.
//!
//! A [`Session`] owns the working directory, the scrollback and the command
//! history. The presentation layer feeds it lines with [`Session::submit`]
//! and arrow keys with [`Session::navigate_history`], then renders
//! [`Session::scrollback`].

use std::collections::VecDeque;

use chrono::Local;
use tracing::debug;

use crate::config::{HOME, ShellConfig, WELCOME_TITLE};
use crate::core::VirtualFs;
use crate::core::commands::{self, CommandContext, CommandResult, SessionEffect};
use crate::models::{OutputUnit, Prompt, Style, StyledText};
use crate::utils::RingBuffer;

/// Direction of a history navigation key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryDirection {
    /// Towards older entries
    Up,
    /// Towards newer entries and finally the empty input
    Down,
}

/// Mutable state of one interactive run.
#[derive(Clone, Debug)]
pub struct Session {
    user: String,
    hostname: String,
    /// Absolute path of an existing directory.
    working_directory: String,
    scrollback: RingBuffer<OutputUnit>,
    /// Submitted lines, most recent first.
    command_history: VecDeque<String>,
    /// `None` keeps every line
    max_history: Option<usize>,
    /// `None` when not browsing history.
    history_cursor: Option<usize>,
}

impl Session {
    /// Creates a new session in `~` with the given identity and limits.
    pub fn new(config: &ShellConfig) -> Self {
        Self {
            user: config.user.clone(),
            hostname: config.hostname.clone(),
            working_directory: HOME.to_string(),
            scrollback: RingBuffer::new(config.max_scrollback),
            command_history: VecDeque::new(),
            max_history: config.max_history.map(|max| max.max(1)),
            history_cursor: None,
        }
    }

    /// Like [`new`](Self::new), with the welcome banner already in the scrollback.
    pub fn with_welcome(config: &ShellConfig) -> Self {
        let mut session = Self::new(config);
        session.scrollback.push(OutputUnit::result(StyledText::styled(
            WELCOME_TITLE,
            Style::Accent,
        )));
        session.scrollback.push(OutputUnit::result(
            StyledText::plain("Type ")
                .with("help", Style::Keyword)
                .with(" to see available commands or ", Style::Plain)
                .with("neofetch", Style::Keyword)
                .with(" to see system info.", Style::Plain),
        ));
        session
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn hostname(&self) -> &str {
        &self.hostname
    }

    pub fn working_directory(&self) -> &str {
        &self.working_directory
    }

    /// Rendered output, oldest first.
    pub fn scrollback(&self) -> impl ExactSizeIterator<Item = &OutputUnit> {
        self.scrollback.iter()
    }

    pub fn scrollback_len(&self) -> usize {
        self.scrollback.len()
    }

    /// Submitted lines, most recent first.
    pub fn command_history(&self) -> impl ExactSizeIterator<Item = &str> {
        self.command_history.iter().map(String::as_str)
    }

    pub fn history_len(&self) -> usize {
        self.command_history.len()
    }

    pub fn history_cursor(&self) -> Option<usize> {
        self.history_cursor
    }

    /// Prompt for the current working directory.
    pub fn prompt(&self) -> Prompt {
        Prompt {
            user: self.user.clone(),
            hostname: self.hostname.clone(),
            cwd: self.working_directory.clone(),
        }
    }

    /// Window title: `user@host: cwd`.
    pub fn title(&self) -> String {
        format!("{}@{}: {}", self.user, self.hostname, self.working_directory)
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Run a line without recording it anywhere.
    ///
    /// The returned effect has not been applied.
    pub fn execute(&self, line: &str, fs: &VirtualFs) -> CommandResult {
        let ctx = CommandContext {
            cwd: &self.working_directory,
            user: &self.user,
            hostname: &self.hostname,
            fs,
            now: Local::now().naive_local(),
        };
        commands::execute(line, &ctx)
    }

    /// Submit a line as if the user pressed enter.
    ///
    /// Blank input is ignored. Otherwise the line is echoed behind the
    /// current prompt, executed, its effect applied, its output appended,
    /// and the line recorded in the command history.
    ///
    /// Returns how many units now at the end of the scrollback came from
    /// this line (zero after `clear`).
    pub fn submit(&mut self, line: &str, fs: &VirtualFs) -> usize {
        let line = line.trim();
        if line.is_empty() {
            return 0;
        }

        let prompt = self.prompt();
        self.scrollback.push(OutputUnit::command(prompt, line));
        let mut appended = 1;

        let CommandResult { output, effect } = self.execute(line, fs);
        if let Some(effect) = effect {
            if effect == SessionEffect::ClearScrollback {
                appended = 0;
            }
            self.apply(effect);
        }
        if !output.is_empty() {
            self.scrollback.push(OutputUnit::result(output));
            appended += 1;
        }

        self.record(line);
        appended.min(self.scrollback.len())
    }

    /// Apply a mutation requested by a command.
    ///
    /// Only effects produced by a handler reach this, so a new working
    /// directory has already been checked against the filesystem.
    fn apply(&mut self, effect: SessionEffect) {
        debug!(?effect, "applying session effect");
        match effect {
            SessionEffect::ChangeDirectory(path) => self.working_directory = path,
            SessionEffect::ClearScrollback => self.scrollback.clear(),
        }
    }

    fn record(&mut self, line: &str) {
        self.command_history.push_front(line.to_string());
        if let Some(max) = self.max_history {
            self.command_history.truncate(max);
        }
        self.history_cursor = None;
    }

    // =========================================================================
    // History Navigation
    // =========================================================================

    /// Move through the command history.
    ///
    /// Returns the text that should replace the input buffer, or `None`
    /// when the buffer should be left alone (Up with an empty history).
    /// Up stops at the oldest entry; Down past the newest entry yields an
    /// empty string.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> Option<String> {
        match direction {
            HistoryDirection::Up => {
                let last = self.command_history.len().checked_sub(1)?;
                let index = self.history_cursor.map_or(0, |i| (i + 1).min(last));
                self.history_cursor = Some(index);
                self.command_history.get(index).cloned()
            }
            HistoryDirection::Down => {
                self.history_cursor = self.history_cursor.and_then(|i| i.checked_sub(1));
                Some(
                    self.history_cursor
                        .and_then(|i| self.command_history.get(i).cloned())
                        .unwrap_or_default(),
                )
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&ShellConfig::default())
    }
}
