mod cli;

use std::process::ExitCode;

use clap::Parser;
use tracing::debug;

use archsh::Session;
use archsh::core::error::ConfigError;

use cli::{Cli, Renderer};

fn main() -> ExitCode {
    let cli = Cli::parse();
    setup_tracing(&cli);
    debug!("Parsed CLI arguments: {cli:?}");

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("archsh: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), ConfigError> {
    let config = cli.shell_config()?;
    let fs = config.filesystem()?;
    let renderer = Renderer::new(!cli.plain);

    let mut session = if config.welcome {
        Session::with_welcome(&config)
    } else {
        Session::new(&config)
    };

    if cli.commands.is_empty() {
        cli::run_interactive(&mut session, &fs, renderer);
    } else {
        cli::run_batch(&mut session, &fs, &cli.commands, renderer);
    }
    Ok(())
}

fn setup_tracing(cli: &Cli) {
    if let Some(level) = cli.log_level.to_tracing_level() {
        tracing_subscriber::fmt()
            .with_max_level(level)
            .with_writer(std::io::stderr)
            .without_time()
            .compact()
            .init();
    }
}
