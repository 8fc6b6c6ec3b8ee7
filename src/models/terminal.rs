//! Terminal-related data types for output rendering.
//!
//! Command output is a [`StyledText`]: an ordered list of [`Span`]s, each
//! tagged with a [`Style`]. Renderers decide what a style looks like; the
//! interpreter never emits markup of its own.

use std::fmt;

use super::FileKind;

/// Fixed colour swatches used by decorative output.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Swatch {
    Red,
    Peach,
    Yellow,
    Green,
    Sky,
    Blue,
    Mauve,
}

/// Semantic style of a span.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Style {
    /// Undecorated text
    Plain,
    /// Error message
    Error,
    /// Directory entry in a listing
    Directory,
    /// File entry in a listing, coloured by kind
    File(FileKind),
    /// Command name (help listing)
    Command,
    /// Markdown `# heading`
    Heading,
    /// Markdown `## heading`
    SubHeading,
    /// Markdown `**bold**`
    Bold,
    /// Markdown `*italic*`
    Italic,
    /// Markdown bullet item text
    Bullet,
    /// `user@host` part of the prompt
    PromptUser,
    /// Working directory part of the prompt
    PromptPath,
    /// `$` of the prompt
    PromptSymbol,
    /// Highlighted banner text
    Accent,
    /// Inline keyword inside prose
    Keyword,
    /// Logo art
    Logo,
    /// Field label (neofetch)
    Label,
    /// Field value (neofetch)
    Value,
    /// Horizontal rule under a title
    Rule,
    /// Block of solid colour
    Swatch(Swatch),
}

/// A run of text carrying one style.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: Style,
}

/// Renderable text made of styled spans.
///
/// Adjacent spans sharing a style are merged on push and empty spans are
/// dropped, so two values with the same visible result compare equal.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StyledText {
    spans: Vec<Span>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn plain(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Plain)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::styled(text, Style::Error)
    }

    pub fn styled(text: impl Into<String>, style: Style) -> Self {
        let mut out = Self::new();
        out.push(text, style);
        out
    }

    /// Append a span, merging it into the previous one when styles match.
    pub fn push(&mut self, text: impl Into<String>, style: Style) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.spans.last_mut() {
            Some(last) if last.style == style => last.text.push_str(&text),
            _ => self.spans.push(Span { text, style }),
        }
    }

    /// Builder-style [`push`](Self::push).
    pub fn with(mut self, text: impl Into<String>, style: Style) -> Self {
        self.push(text, style);
        self
    }

    /// Append every span of `other`.
    pub fn append(&mut self, other: StyledText) {
        for span in other.spans {
            self.push(span.text, span.style);
        }
    }

    /// Join several texts with a plain separator.
    pub fn join(parts: impl IntoIterator<Item = StyledText>, separator: &str) -> Self {
        let mut out = Self::new();
        for (i, part) in parts.into_iter().enumerate() {
            if i > 0 {
                out.push(separator, Style::Plain);
            }
            out.append(part);
        }
        out
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// The text with all styling stripped.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for span in &self.spans {
            f.write_str(&span.text)?;
        }
        Ok(())
    }
}

// =============================================================================
// Prompt and Output Units
// =============================================================================

/// Prompt shown before echoed commands: `user@host cwd $`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prompt {
    pub user: String,
    pub hostname: String,
    pub cwd: String,
}

impl Prompt {
    pub fn to_styled(&self) -> StyledText {
        StyledText::new()
            .with(format!("{}@{}", self.user, self.hostname), Style::PromptUser)
            .with(" ", Style::Plain)
            .with(self.cwd.as_str(), Style::PromptPath)
            .with(" ", Style::Plain)
            .with("$", Style::PromptSymbol)
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{} {} $", self.user, self.hostname, self.cwd)
    }
}

/// One renderable entry of the scrollback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OutputUnit {
    /// Submitted line echoed behind the prompt that was active at the time
    CommandEcho { prompt: Prompt, input: String },
    /// Output of a command (or a banner line)
    Result(StyledText),
}

impl OutputUnit {
    pub fn command(prompt: Prompt, input: impl Into<String>) -> Self {
        Self::CommandEcho {
            prompt,
            input: input.into(),
        }
    }

    pub fn result(text: StyledText) -> Self {
        Self::Result(text)
    }

    pub fn is_command(&self) -> bool {
        matches!(self, Self::CommandEcho { .. })
    }

    /// Flatten to styled text for rendering.
    pub fn to_styled(&self) -> StyledText {
        match self {
            Self::CommandEcho { prompt, input } => {
                let mut text = prompt.to_styled();
                text.push(" ", Style::Plain);
                text.push(input.as_str(), Style::Plain);
                text
            }
            Self::Result(text) => text.clone(),
        }
    }
}

impl fmt::Display for OutputUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommandEcho { prompt, input } => write!(f, "{} {}", prompt, input),
            Self::Result(text) => write!(f, "{}", text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn prompt() -> Prompt {
        Prompt {
            user: "user".to_string(),
            hostname: "archlinux".to_string(),
            cwd: "~/testDir".to_string(),
        }
    }

    #[test]
    fn test_push_merges_same_style() {
        let text = StyledText::new()
            .with("ab", Style::Plain)
            .with("cd", Style::Plain)
            .with("ef", Style::Bold);

        assert_eq!(text.spans().len(), 2);
        assert_eq!(text.spans()[0].text, "abcd");
        assert_eq!(text.plain_text(), "abcdef");
    }

    #[test]
    fn test_empty_spans_dropped() {
        let text = StyledText::new().with("", Style::Bold);
        assert!(text.is_empty());
        assert!(StyledText::plain("").is_empty());
    }

    #[test]
    fn test_join() {
        let parts = vec![
            StyledText::styled("a/", Style::Directory),
            StyledText::styled("b.txt", Style::File(FileKind::Text)),
        ];
        let joined = StyledText::join(parts, "  ");

        assert_eq!(joined.plain_text(), "a/  b.txt");
        assert_eq!(joined.spans().len(), 3);
    }

    #[test]
    fn test_command_echo_display() {
        let unit = OutputUnit::command(prompt(), "ls -la");
        assert!(unit.is_command());
        assert_eq!(unit.to_string(), "user@archlinux ~/testDir $ ls -la");
        assert_eq!(unit.to_styled().plain_text(), unit.to_string());
    }

    #[test]
    fn test_prompt_styles() {
        let styled = prompt().to_styled();
        let styles: Vec<_> = styled.spans().iter().map(|s| s.style).collect();
        assert_eq!(
            styles,
            vec![
                Style::PromptUser,
                Style::Plain,
                Style::PromptPath,
                Style::Plain,
                Style::PromptSymbol
            ]
        );
    }
}
