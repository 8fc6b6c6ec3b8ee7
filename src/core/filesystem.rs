use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::config::{self, HOME};
use crate::core::error::{ConfigError, FsError};
use crate::models::FsNode;

/// Directory entry returned by [`VirtualFs::list_dir`].
#[derive(Clone, Debug)]
pub struct DirEntry<'a> {
    pub name: &'a str,
    pub node: &'a FsNode,
}

impl DirEntry<'_> {
    pub fn is_dir(&self) -> bool {
        self.node.is_directory()
    }

    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }
}

/// Read-only virtual filesystem rooted at `~`.
///
/// # Path Convention
///
/// - Root: `~` (or `/`)
/// - Children: `~/testDir`, `~/testDir/project1`
/// - Empty segments are ignored, so `~/testDir/` and `~//testDir` both work
/// - `..` segments are skipped rather than followed
#[derive(Clone, Debug)]
pub struct VirtualFs {
    /// Root directory entry containing all files
    root: FsNode,
}

impl VirtualFs {
    /// Wrap an existing tree. The root must be a directory.
    pub fn new(root: FsNode) -> Result<Self, ConfigError> {
        if !root.is_directory() {
            return Err(ConfigError::RootNotDirectory);
        }
        Ok(Self { root })
    }

    /// The tree every session starts with unless the host supplies one.
    pub fn builtin() -> Self {
        Self {
            root: config::default_tree(),
        }
    }

    /// Create filesystem from a JSON manifest.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let root: FsNode = serde_json::from_str(json)?;
        Self::new(root)
    }

    /// Get the node at an absolute path.
    ///
    /// Fails with [`FsError::NotFound`] as soon as a segment is missing or
    /// an intermediate segment is a file.
    pub fn lookup(&self, path: &str) -> Result<&FsNode, FsError> {
        if path == HOME || path == "/" {
            return Ok(&self.root);
        }

        let relative = path.replacen("~/", "", 1);
        let mut current = &self.root;

        for part in relative.split('/').filter(|s| !s.is_empty()) {
            if part == ".." {
                continue;
            }
            current = current
                .children()
                .and_then(|children| children.get(part))
                .ok_or_else(|| {
                    debug!(path, segment = part, "lookup failed");
                    FsError::NotFound(path.to_string())
                })?;
        }

        Ok(current)
    }

    /// Get the children of the directory at `path`.
    pub fn lookup_dir(&self, path: &str) -> Result<&HashMap<String, FsNode>, FsError> {
        self.lookup(path)?
            .children()
            .ok_or_else(|| FsError::NotADirectory(path.to_string()))
    }

    /// Check if a path is a directory.
    pub fn is_directory(&self, path: &str) -> bool {
        self.lookup(path).is_ok_and(FsNode::is_directory)
    }

    /// List directory contents.
    ///
    /// Directories come first, then files; within each group names are
    /// compared case-insensitively with a byte-order tie break.
    pub fn list_dir(&self, path: &str, include_hidden: bool) -> Result<Vec<DirEntry<'_>>, FsError> {
        let mut items: Vec<_> = self
            .lookup_dir(path)?
            .iter()
            .map(|(name, node)| DirEntry {
                name: name.as_str(),
                node,
            })
            .filter(|entry| include_hidden || !entry.is_hidden())
            .collect();

        items.sort_by(|a, b| match (a.is_dir(), b.is_dir()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => compare_names(a.name, b.name),
        });

        Ok(items)
    }
}

impl Default for VirtualFs {
    fn default() -> Self {
        Self::builtin()
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
