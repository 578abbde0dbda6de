//! Conch - an embeddable command-language front end for interactive shells.

mod cli;
mod logging;

use std::io::BufRead;

use tracing::info;

use cli::Cli;
use conch::config::Config;
use conch::error::{ConchError, Result};
use conch::output::{ConsoleSink, OutputFormat, OutputSink};
use conch::shell::Shell;

fn main() {
    let cli = Cli::parse_args();

    if cli.log_file {
        logging::init_file_logging();
    } else {
        logging::init_stderr_logging();
    }

    if let Err(e) = run(cli) {
        tracing::error!("{}: {}", e.category(), e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = cli.config_path();
    info!("Loading config from: {}", config_path.display());
    let config = Config::load_from_file(&config_path)?;

    let format: OutputFormat = cli
        .output
        .parse()
        .map_err(ConchError::config)?;
    let mut sink = ConsoleSink::new(format);

    let mut shell = Shell::new(&config);
    if let Some(user) = &cli.user {
        shell.session_mut().user = user.clone();
    }
    if cli.no_echo {
        shell.session_mut().echo = false;
    }

    if let Some(motd) = &config.motd {
        sink.log(motd);
    }

    // One-shot mode: run the given line and exit.
    if let Some(line) = &cli.command {
        shell.submit(line, &mut sink);
        return Ok(());
    }

    // REPL mode: one submitted line is one atomic parse-and-execute unit.
    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.map_err(|e| ConchError::io(format!("failed to read input: {e}")))?;
        shell.submit(&line, &mut sink);
    }

    info!("input closed, exiting");
    Ok(())
}
