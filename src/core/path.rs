//! Path resolution against a working directory.
//!
//! Absolute paths are rooted at [`HOME`]. Resolution is purely textual and
//! never fails; whether the result exists is for the filesystem to decide.
//!
//! Only a bare `..` moves up a level. A `..` embedded in a longer
//! expression is kept as-is and later skipped by
//! [`VirtualFs::lookup`](crate::core::VirtualFs::lookup).

use crate::config::HOME;

/// Resolve `expr` to an absolute path relative to `cwd`.
///
/// Rules, first match wins:
/// 1. `~...` is already absolute.
/// 2. `/...` has its leading slash replaced by `~` (`/` becomes `~`).
/// 3. `.` is `cwd`.
/// 4. `..` is `cwd` without its last segment, or `~` when nothing is left.
/// 5. Anything else is appended to `cwd`, collapsing doubled slashes.
pub fn resolve(expr: &str, cwd: &str) -> String {
    if expr.starts_with(HOME) {
        return expr.to_string();
    }

    if let Some(rest) = expr.strip_prefix('/') {
        return format!("{}{}", HOME, rest);
    }

    match expr {
        "." => cwd.to_string(),
        ".." => parent(cwd),
        _ => format!("{}/{}", cwd, expr).replace("//", "/"),
    }
}

/// Drop the last `/`-delimited segment of `path`.
fn parent(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((head, _)) if !head.is_empty() => head.to_string(),
        _ => HOME.to_string(),
    }
}
