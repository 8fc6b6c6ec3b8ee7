//! Command handlers.
//!
//! Each handler receives the raw argument tokens (empty tokens included)
//! and the read-only [`CommandContext`].

use crate::config::{
    HELP_HEADER, HOME, NEOFETCH_ART, NEOFETCH_INFO, NEOFETCH_SWATCHES,
};
use crate::core::error::{CommandError, FsError};
use crate::core::filesystem::DirEntry;
use crate::core::path::resolve;
use crate::models::{FileKind, Style, StyledText};
use crate::utils::format::{format_listing_date, format_size};
use crate::utils::markdown;

use super::{COMMANDS, CommandContext, CommandResult, SessionEffect};

type HandlerResult = Result<CommandResult, CommandError>;

/// First argument that is not an empty token.
fn first_operand(args: &[String]) -> Option<&str> {
    args.iter().map(String::as_str).find(|a| !a.is_empty())
}

/// `ls [-a] [-l] [path]`
pub(super) fn ls(args: &[String], ctx: &CommandContext<'_>) -> HandlerResult {
    let (flags, operands): (Vec<&String>, Vec<&String>) =
        args.iter().partition(|a| a.starts_with('-'));
    let show_all = flags.iter().any(|f| f.contains('a'));
    let long = flags.iter().any(|f| f.contains('l'));

    let target = operands
        .iter()
        .map(|a| a.as_str())
        .find(|a| !a.is_empty())
        .unwrap_or(ctx.cwd);
    let path = resolve(target, ctx.cwd);

    let entries = ctx
        .fs
        .list_dir(&path, show_all)
        .map_err(|_| CommandError::CannotAccess(target.to_string()))?;

    let output = if long {
        let date = format_listing_date(&ctx.now);
        let lines = entries.iter().map(|entry| {
            StyledText::plain(format!(
                "{} {} {} {} {} ",
                entry.node.permissions(),
                ctx.user,
                ctx.user,
                format_size(entry.node.display_size()),
                date
            ))
            .with_entry(entry)
        });
        StyledText::join(lines, "\n")
    } else {
        StyledText::join(
            entries.iter().map(|e| StyledText::new().with_entry(e)),
            "  ",
        )
    };

    Ok(CommandResult::output(output))
}

/// Styling for a listing name; directories get a trailing `/`.
trait WithEntry {
    fn with_entry(self, entry: &DirEntry<'_>) -> Self;
}

impl WithEntry for StyledText {
    fn with_entry(self, entry: &DirEntry<'_>) -> Self {
        if entry.is_dir() {
            self.with(format!("{}/", entry.name), Style::Directory)
        } else {
            self.with(entry.name, Style::File(FileKind::from_name(entry.name)))
        }
    }
}

/// `cd [path]`
pub(super) fn cd(args: &[String], ctx: &CommandContext<'_>) -> HandlerResult {
    let Some(target) = first_operand(args) else {
        return Ok(CommandResult::effect(SessionEffect::ChangeDirectory(
            HOME.to_string(),
        )));
    };

    let path = resolve(target, ctx.cwd);
    match ctx.fs.lookup_dir(&path) {
        Ok(_) => Ok(CommandResult::effect(SessionEffect::ChangeDirectory(path))),
        Err(FsError::NotFound(_)) => Err(CommandError::NoSuchDirectory(target.to_string())),
        Err(FsError::NotADirectory(_)) => Err(CommandError::NotADirectory(target.to_string())),
    }
}

/// `cat <path>`
pub(super) fn cat(args: &[String], ctx: &CommandContext<'_>) -> HandlerResult {
    let target = first_operand(args).ok_or(CommandError::MissingOperand("cat"))?;

    let node = ctx
        .fs
        .lookup(&resolve(target, ctx.cwd))
        .map_err(|_| CommandError::NoSuchFile(target.to_string()))?;
    let content = node
        .content()
        .ok_or_else(|| CommandError::IsADirectory(target.to_string()))?;

    let output = if markdown::is_markdown(target) {
        markdown::decorate(content)
    } else {
        StyledText::plain(content)
    };

    Ok(CommandResult::output(output))
}

/// `pwd`
pub(super) fn pwd(_args: &[String], ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::output(StyledText::plain(ctx.cwd)))
}

/// `clear`
pub(super) fn clear(_args: &[String], _ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::effect(SessionEffect::ClearScrollback))
}

/// `echo <args...>`, empty tokens included so spacing survives.
pub(super) fn echo(args: &[String], _ctx: &CommandContext<'_>) -> HandlerResult {
    Ok(CommandResult::output(StyledText::plain(args.join(" "))))
}

/// `help`
pub(super) fn help(_args: &[String], _ctx: &CommandContext<'_>) -> HandlerResult {
    let mut text = StyledText::plain(HELP_HEADER);
    for spec in COMMANDS {
        text.push("\n  ", Style::Plain);
        text.push(spec.name, Style::Command);
        if !spec.usage.is_empty() {
            text.push(format!(" {}", spec.usage), Style::Plain);
        }
        text.push(format!(" - {}", spec.summary), Style::Plain);
    }
    Ok(CommandResult::output(text))
}

/// Gap between the logo and the info column.
const NEOFETCH_GAP: usize = 4;

/// `neofetch`: the logo on the left, static info fields on the right.
pub(super) fn neofetch(_args: &[String], ctx: &CommandContext<'_>) -> HandlerResult {
    let title = format!("{}@{}", ctx.user, ctx.hostname);

    let mut info = vec![
        StyledText::styled(title.as_str(), Style::Label),
        StyledText::styled("-".repeat(title.chars().count()), Style::Rule),
    ];
    info.extend(NEOFETCH_INFO.iter().map(|(label, value)| {
        StyledText::styled(format!("{}:", label), Style::Label)
            .with(" ", Style::Plain)
            .with(*value, Style::Value)
    }));
    info.push(StyledText::new());
    info.push(
        NEOFETCH_SWATCHES
            .iter()
            .fold(StyledText::new(), |row, swatch| {
                row.with("████", Style::Swatch(*swatch))
            }),
    );

    let art: Vec<&str> = NEOFETCH_ART.lines().collect();
    let width = art.iter().map(|l| l.chars().count()).max().unwrap_or(0) + NEOFETCH_GAP;
    let rows = art.len().max(info.len());

    let lines = (0..rows).map(|i| {
        let logo = art.get(i).copied().unwrap_or("");
        match info.get(i) {
            Some(field) if !field.is_empty() => {
                let mut line = StyledText::styled(logo, Style::Logo);
                let pad = width - logo.chars().count();
                line.push(" ".repeat(pad), Style::Plain);
                line.append(field.clone());
                line
            }
            _ => StyledText::styled(logo.trim_end(), Style::Logo),
        }
    });

    Ok(CommandResult::output(StyledText::join(lines, "\n")))
}
