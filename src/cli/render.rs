//! ANSI rendering of styled output.

use colored::{Color, ColoredString, Colorize};

use archsh::models::{FileKind, OutputUnit, Span, Style, StyledText, Swatch};

const TEXT: Color = rgb(0xcd, 0xd6, 0xf4);
const RED: Color = rgb(0xf3, 0x8b, 0xa8);
const PEACH: Color = rgb(0xfa, 0xb3, 0x87);
const YELLOW: Color = rgb(0xf9, 0xe2, 0xaf);
const GREEN: Color = rgb(0xa6, 0xe3, 0xa1);
const SKY: Color = rgb(0x89, 0xdc, 0xeb);
const BLUE: Color = rgb(0x89, 0xb4, 0xfa);
const MAUVE: Color = rgb(0xcb, 0xa6, 0xf7);
const PINK: Color = rgb(0xf5, 0xc2, 0xe7);

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::TrueColor { r, g, b }
}

/// Turns styled text into terminal strings.
#[derive(Clone, Copy, Debug)]
pub struct Renderer {
    colour: bool,
}

impl Renderer {
    pub fn new(colour: bool) -> Self {
        colored::control::set_override(colour);
        Self { colour }
    }

    pub fn unit(&self, unit: &OutputUnit) -> String {
        self.text(&unit.to_styled())
    }

    pub fn text(&self, text: &StyledText) -> String {
        if !self.colour {
            return text.plain_text();
        }
        text.spans().iter().map(|s| paint(s).to_string()).collect()
    }

    /// Escape sequence that wipes the screen, empty without colour.
    pub fn clear_screen(&self) -> &'static str {
        if self.colour { "\x1b[2J\x1b[H" } else { "" }
    }
}

fn paint(span: &Span) -> ColoredString {
    let text = span.text.as_str();
    match span.style {
        Style::Plain => text.normal(),
        Style::Error => text.color(RED),
        Style::Directory => text.color(SKY).bold(),
        Style::File(kind) => text.color(file_colour(kind)),
        Style::Command => text.color(PEACH),
        Style::Heading => text.color(RED).bold(),
        Style::SubHeading => text.color(PEACH).bold(),
        Style::Bold => text.color(BLUE).bold(),
        Style::Italic => text.color(GREEN).italic(),
        Style::Bullet => text.color(TEXT),
        Style::PromptUser | Style::Accent | Style::Logo => text.color(BLUE),
        Style::PromptPath | Style::Keyword | Style::Rule => text.color(RED),
        Style::PromptSymbol => text.color(GREEN),
        Style::Label => text.color(PINK),
        Style::Value => text.color(TEXT),
        Style::Swatch(swatch) => text.color(swatch_colour(swatch)),
    }
}

fn file_colour(kind: FileKind) -> Color {
    match kind {
        FileKind::Markdown => BLUE,
        FileKind::Script => YELLOW,
        FileKind::Python => GREEN,
        FileKind::Image => MAUVE,
        FileKind::Text => TEXT,
    }
}

fn swatch_colour(swatch: Swatch) -> Color {
    match swatch {
        Swatch::Red => RED,
        Swatch::Peach => PEACH,
        Swatch::Yellow => YELLOW,
        Swatch::Green => GREEN,
        Swatch::Sky => SKY,
        Swatch::Blue => BLUE,
        Swatch::Mauve => MAUVE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_rendering_strips_styles() {
        let renderer = Renderer { colour: false };
        let text = StyledText::styled("docs/", Style::Directory).with("  a.md", Style::Plain);
        assert_eq!(renderer.text(&text), "docs/  a.md");
        assert_eq!(renderer.clear_screen(), "");
    }
}
