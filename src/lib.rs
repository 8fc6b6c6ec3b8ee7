//! A simulated shell over an in-memory filesystem.
//!
//! The library is presentation-agnostic: a host feeds lines into a
//! [`Session`] and renders the styled [`OutputUnit`]s it accumulates.
//!
//! ```
//! use archsh::{Session, VirtualFs};
//!
//! let fs = VirtualFs::builtin();
//! let mut session = Session::default();
//! session.submit("cd testDir", &fs);
//! session.submit("pwd", &fs);
//!
//! let last = session.scrollback().last().unwrap();
//! assert_eq!(last.to_string(), "~/testDir");
//! ```

pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use crate::config::ShellConfig;
pub use crate::core::{HistoryDirection, Session, VirtualFs};
pub use crate::models::{OutputUnit, Style, StyledText};
