//! Input loops driving a [`Session`].

use std::io::{self, BufRead, Write};

use tracing::{info, warn};

use archsh::{Session, VirtualFs};

use super::Renderer;

/// Leaves the interactive loop. Not a shell command.
const EXIT: &str = "exit";

/// Run each line in order, printing the transcript including echoes.
pub fn run_batch(session: &mut Session, fs: &VirtualFs, lines: &[String], renderer: Renderer) {
    print_all(session, renderer);
    for line in lines {
        let appended = session.submit(line, fs);
        print_tail(session, appended, renderer, true);
    }
}

/// Read lines from stdin until EOF or `exit`.
pub fn run_interactive(session: &mut Session, fs: &VirtualFs, renderer: Renderer) {
    read_loop(session, fs, renderer, io::stdin().lock());
}

/// Lines that are not valid UTF-8 are reported and skipped; any other read
/// error ends the loop.
fn read_loop(session: &mut Session, fs: &VirtualFs, renderer: Renderer, input: impl BufRead) {
    print_all(session, renderer);

    let mut lines = input.lines();
    loop {
        print!("{} ", renderer.text(&session.prompt().to_styled()));
        // a failed flush only delays the prompt
        let _ = io::stdout().flush();

        let line = match lines.next() {
            Some(Ok(line)) => line,
            Some(Err(err)) if err.kind() == io::ErrorKind::InvalidData => {
                warn!(%err, "skipping unreadable input line");
                eprintln!("archsh: {err}");
                continue;
            }
            Some(Err(err)) => {
                warn!(%err, "reading input failed");
                eprintln!("archsh: {err}");
                break;
            }
            None => {
                println!();
                break;
            }
        };
        if line.trim() == EXIT {
            break;
        }

        let had_output = session.scrollback_len() > 0;
        let appended = session.submit(&line, fs);
        if appended == 0 && had_output && session.scrollback_len() == 0 {
            print!("{}", renderer.clear_screen());
        }
        // The terminal already shows what the user typed
        print_tail(session, appended, renderer, false);
    }

    info!(commands = session.history_len(), "session finished");
}

fn print_all(session: &Session, renderer: Renderer) {
    for unit in session.scrollback() {
        println!("{}", renderer.unit(unit));
    }
}

fn print_tail(session: &Session, count: usize, renderer: Renderer, echo: bool) {
    let skip = session.scrollback_len() - count;
    for unit in session.scrollback().skip(skip) {
        if echo || !unit.is_command() {
            println!("{}", renderer.unit(unit));
        }
    }
}
