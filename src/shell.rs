//! The shell driver: one submitted line, one atomic parse-and-execute.
//!
//! Owns the registry, the session state and the raw-text history. Parse
//! failures are reported to the sink and stop the line there; validation
//! failures inside handlers are reported by the execution boundary. Neither
//! aborts the driver loop.

use crate::commands::{CommandRegistry, ExecutionContext, Parser};
use crate::config::Config;
use crate::output::OutputSink;
use crate::session::SessionState;

/// An interactive shell session over a command registry.
pub struct Shell {
    registry: CommandRegistry,
    session: SessionState,
    history: Vec<String>,
}

impl Shell {
    /// Creates a shell with the baseline commands and config defaults.
    pub fn new(config: &Config) -> Self {
        Self::with_registry(config, CommandRegistry::with_builtins())
    }

    /// Creates a shell over a caller-assembled registry.
    pub fn with_registry(config: &Config, registry: CommandRegistry) -> Self {
        Self {
            registry,
            session: SessionState::from_config(&config.session),
            history: Vec::new(),
        }
    }

    /// Submits one line: echo, record, parse, execute.
    ///
    /// Empty lines are echoed (when echo is on) but neither recorded nor
    /// parsed. A parse failure is written to the sink as an error entry
    /// and execution is never reached for that line.
    pub fn submit(&mut self, line: &str, sink: &mut dyn OutputSink) {
        if self.session.echo {
            sink.log(&format!("{}{}", self.session.prompt(), line));
        }

        if line.is_empty() {
            return;
        }

        self.history.push(line.to_string());

        let command = match Parser::parse(&self.registry, line) {
            Ok(command) => command,
            Err(err) => {
                tracing::warn!(category = err.category(), "failed to parse '{line}': {err}");
                sink.error(&err.to_string());
                return;
            }
        };

        tracing::debug!("executing '{}'", command.name());
        let mut ctx = ExecutionContext {
            sink,
            session: &mut self.session,
            registry: &self.registry,
        };
        command.execute(&mut ctx);
    }

    /// The session state.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Mutable session state, for host-side overrides (CLI flags).
    pub fn session_mut(&mut self) -> &mut SessionState {
        &mut self.session
    }

    /// The command registry.
    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Raw text of every non-empty submitted line, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }
}
