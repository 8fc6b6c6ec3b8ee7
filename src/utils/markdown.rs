//! Lightweight markdown decoration for `cat`.
//!
//! This is not a markdown parser. A fixed list of patterns is applied in
//! order (headings, sub-headings, bold, italic, bullets), and each pattern
//! only looks at text no earlier pattern has already decorated.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::models::{Style, StyledText};

// Captures stop at `\r` as well as `\n` so CRLF content decorates cleanly.
static HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^# ([^\r\n]*)"));
static SUB_HEADING: LazyLock<Regex> = LazyLock::new(|| compile(r"(?m)^## ([^\r\n]*)"));
static BOLD: LazyLock<Regex> = LazyLock::new(|| compile(r"\*\*([^\r\n]*?)\*\*"));
static ITALIC: LazyLock<Regex> = LazyLock::new(|| compile(r"\*([^\r\n]*?)\*"));
static BULLET: LazyLock<Regex> = LazyLock::new(|| compile(r"- ([^\r\n]*)"));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("static markdown pattern")
}

/// Whether `cat` should decorate a file, judged by the literal argument.
pub fn is_markdown(name: &str) -> bool {
    name.ends_with(".md") || name.ends_with(".markdown")
}

/// Decorate markdown content with styled spans.
pub fn decorate(content: &str) -> StyledText {
    let text = StyledText::plain(content);
    let text = replace_plain(text, &HEADING, |c| wrap(c, Style::Heading));
    let text = replace_plain(text, &SUB_HEADING, |c| wrap(c, Style::SubHeading));
    let text = replace_plain(text, &BOLD, |c| wrap(c, Style::Bold));
    let text = replace_plain(text, &ITALIC, |c| wrap(c, Style::Italic));
    replace_plain(text, &BULLET, |c| {
        StyledText::plain("• ").with(&c[1], Style::Bullet)
    })
}

fn wrap(caps: &Captures<'_>, style: Style) -> StyledText {
    StyledText::styled(&caps[1], style)
}

/// Rewrite every match of `re` inside plain spans; styled spans pass through.
///
/// Plain spans left over by the heading passes always begin at a line
/// start, so the `^` anchors of later passes stay correct.
fn replace_plain(
    text: StyledText,
    re: &Regex,
    replace: impl Fn(&Captures<'_>) -> StyledText,
) -> StyledText {
    let mut out = StyledText::new();
    for span in text.spans() {
        if span.style != Style::Plain {
            out.push(span.text.as_str(), span.style);
            continue;
        }

        let mut last = 0;
        for caps in re.captures_iter(&span.text) {
            let Some(whole) = caps.get(0) else { continue };
            out.push(&span.text[last..whole.start()], Style::Plain);
            out.append(replace(&caps));
            last = whole.end();
        }
        out.push(&span.text[last..], Style::Plain);
    }
    out
}
