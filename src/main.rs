//! Command-line entry point.
//!
//! Two modes, dispatched on invocation shape:
//! - no arguments: read candidate commands from stdin and print them in MRU
//!   order (history hits first, then the rest in stream order);
//! - one or more arguments: space-join them into one command, promote it to
//!   the front of `~/.dmenu_hist`, and echo it to stdout.
//!
//! Diagnostics go to stderr; stdout carries only command data. `RUST_LOG`
//! controls tracing verbosity.

use std::env;
use std::io::{self, BufRead, BufWriter, Write};

use dmenu_mru::{merge, CommandList, Error, HistoryStore};
use tracing_subscriber::EnvFilter;

/// Longest accepted joined command, in bytes.
const MAX_COMMAND: usize = 1024;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(err) = run() {
        eprintln!("dmenu-mru: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let args: Vec<String> = env::args().skip(1).collect();
    let store = HistoryStore::in_home_dir()?;

    if args.is_empty() {
        let history = store.load();
        let candidates = read_candidates(io::stdin().lock())?;
        let mut out = BufWriter::new(io::stdout().lock());
        for command in merge(&history, candidates) {
            writeln!(out, "{command}")?;
        }
        out.flush()?;
    } else {
        let command = join_args(&args)?;
        store.touch_command(&command)?;
        // Echo so the caller can exec it; no trailing newline.
        let mut out = io::stdout().lock();
        out.write_all(command.as_bytes())?;
        out.flush()?;
    }
    Ok(())
}

/// Space-join argv into the single command string, enforcing the length cap.
fn join_args(args: &[String]) -> Result<String, Error> {
    let command = args.join(" ");
    if command.len() > MAX_COMMAND {
        return Err(Error::CommandTooLong {
            len: command.len(),
            max: MAX_COMMAND,
        });
    }
    Ok(command)
}

/// Read candidate commands, one per line; blank lines are skipped.
fn read_candidates(reader: impl BufRead) -> io::Result<CommandList> {
    let mut candidates = CommandList::new();
    for line in reader.lines() {
        let line = line?;
        if !line.is_empty() {
            candidates.push_back(line);
        }
    }
    Ok(candidates)
}
