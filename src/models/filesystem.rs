use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// Filesystem Nodes
// =============================================================================

/// Represents an entry in the virtual filesystem.
///
/// The serialized form matches the manifest shape loaded by the host:
///
/// ```json
/// { "type": "directory", "content": { "notes.md": { "type": "file", "content": "# Hi" } } }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum FsNode {
    Directory {
        /// Children keyed by their exact name
        #[serde(rename = "content", default)]
        children: HashMap<String, FsNode>,
    },
    File {
        /// Opaque text content
        #[serde(default)]
        content: String,
    },
}

impl FsNode {
    /// Create an empty directory.
    pub fn dir() -> Self {
        FsNode::Directory {
            children: HashMap::new(),
        }
    }

    /// Create a file with the given content.
    pub fn file(content: impl Into<String>) -> Self {
        FsNode::File {
            content: content.into(),
        }
    }

    /// Builder-style insertion of a child. No-op on files.
    pub fn with_child(mut self, name: impl Into<String>, node: FsNode) -> Self {
        if let FsNode::Directory { children } = &mut self {
            children.insert(name.into(), node);
        }
        self
    }

    /// Check if this entry is a directory.
    pub fn is_directory(&self) -> bool {
        matches!(self, FsNode::Directory { .. })
    }

    /// Children of a directory (None for files).
    pub fn children(&self) -> Option<&HashMap<String, FsNode>> {
        match self {
            FsNode::Directory { children } => Some(children),
            FsNode::File { .. } => None,
        }
    }

    /// Content of a file (None for directories).
    pub fn content(&self) -> Option<&str> {
        match self {
            FsNode::File { content } => Some(content),
            FsNode::Directory { .. } => None,
        }
    }

    /// Size shown by long listings: 4096 for directories, content length for files.
    pub fn display_size(&self) -> usize {
        match self {
            FsNode::Directory { .. } => 4096,
            FsNode::File { content } => content.len(),
        }
    }

    /// Fixed synthetic permission string for long listings.
    pub fn permissions(&self) -> &'static str {
        match self {
            FsNode::Directory { .. } => "drwxr-xr-x",
            FsNode::File { .. } => "-rw-r--r--",
        }
    }
}

// =============================================================================
// File Kinds
// =============================================================================

/// File categories used to colour listing entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FileKind {
    Markdown,
    Script,
    Python,
    Image,
    Text,
}

impl FileKind {
    /// Detect the kind from the name's last extension.
    ///
    /// Unrecognized extensions (and names without one) are plain text.
    pub fn from_name(name: &str) -> Self {
        match name.rsplit('.').next() {
            Some("md" | "markdown") => Self::Markdown,
            Some("js" | "jsx" | "json") => Self::Script,
            Some("py") => Self::Python,
            Some("jpg" | "png" | "svg") => Self::Image,
            _ => Self::Text,
        }
    }
}
