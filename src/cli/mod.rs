//! Command-line host: argument parsing, rendering and the input loop.

mod render;
mod repl;

pub use render::Renderer;
pub use repl::{run_batch, run_interactive};

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use archsh::ShellConfig;
use archsh::core::error::ConfigError;

#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
    Off,
}

impl LogLevel {
    pub fn to_tracing_level(self) -> Option<tracing::Level> {
        match self {
            LogLevel::Trace => Some(tracing::Level::TRACE),
            LogLevel::Debug => Some(tracing::Level::DEBUG),
            LogLevel::Info => Some(tracing::Level::INFO),
            LogLevel::Warn => Some(tracing::Level::WARN),
            LogLevel::Error => Some(tracing::Level::ERROR),
            LogLevel::Off => None,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "archsh")]
#[command(about = "A simulated shell over an in-memory filesystem")]
#[command(version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// JSON filesystem manifest (overrides the config's `filesystem`)
    #[arg(long = "fs")]
    pub filesystem: Option<PathBuf>,

    /// Run these lines and exit instead of reading stdin
    #[arg(short = 'c', value_name = "LINE")]
    pub commands: Vec<String>,

    /// Disable colours
    #[arg(long)]
    pub plain: bool,

    /// Skip the welcome banner
    #[arg(long)]
    pub no_welcome: bool,

    #[arg(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,
}

impl Cli {
    /// Merge the config file (if any) with command-line overrides.
    pub fn shell_config(&self) -> Result<ShellConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ShellConfig::load(path)?,
            None => ShellConfig::default(),
        };
        if let Some(path) = &self.filesystem {
            config.filesystem = Some(path.clone());
        }
        if self.no_welcome {
            config.welcome = false;
        }
        Ok(config)
    }
}
