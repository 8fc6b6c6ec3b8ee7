//! Shell configuration.
//!
//! Centralizes the constants used throughout the shell and the runtime
//! [`ShellConfig`] a host may load from TOML. Text assets are loaded at
//! compile time using `include_str!`.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::core::VirtualFs;
use crate::core::error::ConfigError;
use crate::models::{FsNode, Swatch};

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Logo printed by `neofetch`.
pub const NEOFETCH_ART: &str = include_str!("../assets/text/neofetch.txt");

// =============================================================================
// Session Identity
// =============================================================================

/// Default user shown in the prompt and in long listings.
pub const DEFAULT_USER: &str = "user";

/// Default hostname shown in the prompt.
pub const DEFAULT_HOSTNAME: &str = "archlinux";

/// Root of the virtual filesystem and the initial working directory.
pub const HOME: &str = "~";

// =============================================================================
// Terminal Configuration
// =============================================================================

/// First line of the `help` output.
pub const HELP_HEADER: &str = "Available commands:";

/// Banner shown when a session starts with a welcome message.
pub const WELCOME_TITLE: &str = "Welcome to Arch Linux with Hyprland!";

// =============================================================================
// Neofetch
// =============================================================================

/// Static system information fields printed by `neofetch`.
pub const NEOFETCH_INFO: &[(&str, &str)] = &[
    ("OS", "Arch Linux x86_64"),
    ("Host", "ThinkPad X1 Carbon"),
    ("Kernel", "6.7.2-arch1-1"),
    ("Uptime", "3 hours, 24 mins"),
    ("Packages", "873 (pacman)"),
    ("Shell", "zsh 5.9"),
    ("WM", "Hyprland"),
    ("Terminal", "alacritty"),
    ("CPU", "AMD Ryzen 7 7600H (8) @ 4.700GHz"),
    ("GPU", "AMD Integrated Graphics"),
    ("Memory", "3442MiB / 16384MiB"),
];

/// Colour row printed under the `neofetch` fields.
pub const NEOFETCH_SWATCHES: &[Swatch] = &[
    Swatch::Red,
    Swatch::Peach,
    Swatch::Yellow,
    Swatch::Green,
    Swatch::Sky,
    Swatch::Blue,
    Swatch::Mauve,
    Swatch::Red,
];

// =============================================================================
// Filesystem
// =============================================================================

/// The tree a session starts with when no manifest is supplied.
pub fn default_tree() -> FsNode {
    FsNode::dir()
        .with_child(
            "testDir",
            FsNode::dir()
                .with_child("project1", FsNode::dir())
                .with_child("project2", FsNode::dir())
                .with_child("project3", FsNode::dir()),
        )
        .with_child(
            "test.md",
            FsNode::file(
                "# Test file\n\nTohle je **test** file.\n## Notes\n- asjdg audgawdjv\n- kahd *vjw*",
            ),
        )
}

// =============================================================================
// Runtime Configuration
// =============================================================================

/// Host-side configuration, usually read from a TOML file.
///
/// Every field is optional in the file:
///
/// ```toml
/// user = "guest"
/// hostname = "archlinux"
/// filesystem = "tree.json"
/// max_scrollback = 500
/// max_history = 50
/// welcome = true
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ShellConfig {
    pub user: String,
    pub hostname: String,
    /// JSON manifest replacing the default tree
    pub filesystem: Option<PathBuf>,
    /// Keep at most this many output units; unset keeps all of them
    pub max_scrollback: Option<usize>,
    /// Keep at most this many history entries; unset keeps all of them
    pub max_history: Option<usize>,
    /// Start with the welcome banner in the scrollback
    pub welcome: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            user: DEFAULT_USER.to_string(),
            hostname: DEFAULT_HOSTNAME.to_string(),
            filesystem: None,
            max_scrollback: None,
            max_history: None,
            welcome: true,
        }
    }
}

impl ShellConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml(text: &str, origin: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Toml {
            path: origin.to_path_buf(),
            source,
        })
    }

    /// Read and parse a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "loading config");
        let text = read(path)?;
        Self::from_toml(&text, path)
    }

    /// Build the filesystem this configuration describes.
    pub fn filesystem(&self) -> Result<VirtualFs, ConfigError> {
        match &self.filesystem {
            Some(path) => {
                debug!(path = %path.display(), "loading filesystem manifest");
                VirtualFs::from_json(&read(path)?)
            }
            None => Ok(VirtualFs::builtin()),
        }
    }
}

fn read(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ShellConfig::from_toml("", Path::new("empty.toml")).unwrap();
        assert_eq!(config, ShellConfig::default());
        assert_eq!(config.user, "user");
        assert_eq!(config.hostname, "archlinux");
        assert_eq!(config.max_scrollback, None);
        assert_eq!(config.max_history, None);
    }

    #[test]
    fn test_partial_override() {
        let config =
            ShellConfig::from_toml("user = \"guest\"\nmax_history = 5", Path::new("x.toml"))
                .unwrap();
        assert_eq!(config.user, "guest");
        assert_eq!(config.max_history, Some(5));
        assert_eq!(config.max_scrollback, None);
        assert_eq!(config.hostname, DEFAULT_HOSTNAME);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let err = ShellConfig::from_toml("colour = \"red\"", Path::new("bad.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Toml { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = ShellConfig::load(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_load_with_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let manifest_path = dir.path().join("tree.json");
        let mut manifest = fs::File::create(&manifest_path).unwrap();
        write!(
            manifest,
            r#"{{"type":"directory","content":{{"hello.txt":{{"type":"file","content":"hi"}}}}}}"#
        )
        .unwrap();

        let config_path = dir.path().join("archsh.toml");
        fs::write(
            &config_path,
            format!("hostname = \"box\"\nfilesystem = {:?}", manifest_path),
        )
        .unwrap();

        let config = ShellConfig::load(&config_path).unwrap();
        assert_eq!(config.hostname, "box");

        let fs = config.filesystem().unwrap();
        assert_eq!(fs.lookup("~/hello.txt").unwrap().content(), Some("hi"));
    }

    #[test]
    fn test_builtin_filesystem_without_manifest() {
        let fs = ShellConfig::default().filesystem().unwrap();
        assert!(fs.is_directory("~/testDir"));
    }
}
