//! Logging configuration.
//!
//! Interactive runs log to a file so diagnostics never interleave with the
//! shell's own output; `--log-file` off means stderr, which suits one-shot
//! and scripted runs.

use std::fs::{self, File};
use std::path::PathBuf;

use tracing_subscriber::EnvFilter;

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes logging to stderr.
pub fn init_stderr_logging() {
    tracing_subscriber::fmt().with_env_filter(env_filter()).init();
}

/// Initializes logging to a file under the platform state directory.
///
/// Falls back to no logging at all rather than polluting the shell's
/// streams when the file cannot be created.
pub fn init_file_logging() {
    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("Warning: Could not create log directory: {e}");
            return;
        }
    }

    let log_file = match File::create(&log_path) {
        Ok(f) => f,
        Err(e) => {
            eprintln!("Warning: Could not create log file: {e}");
            return;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(log_file)
        .with_ansi(false)
        .init();
}

/// Returns the path for the log file.
///
/// Uses the XDG state directory on Linux (`~/.local/state/conch/conch.log`)
/// and falls back to the config directory, then the temp directory.
pub fn get_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        return state_dir.join("conch").join("conch.log");
    }

    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("conch").join("conch.log");
    }

    std::env::temp_dir().join("conch.log")
}
