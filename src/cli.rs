//! Command-line argument parsing for the conch binary.

use std::path::PathBuf;

use clap::Parser;

/// An embeddable command-language front end for interactive shells.
#[derive(Parser, Debug)]
#[command(name = "conch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Run a single command line and exit
    #[arg(short = 'c', long, value_name = "LINE")]
    pub command: Option<String>,

    /// Config file path
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the session user name
    #[arg(long, value_name = "NAME", env = "CONCH_USER")]
    pub user: Option<String>,

    /// Do not echo submitted lines back with the prompt
    #[arg(long)]
    pub no_echo: bool,

    /// Output format
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    pub output: String,

    /// Write diagnostics to a log file instead of stderr
    #[arg(long)]
    pub log_file: bool,
}

impl Cli {
    /// Parses command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The config file path to load, explicit or platform default.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(conch::config::Config::default_path)
    }
}
