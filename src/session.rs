//! Explicit session state for the shell.
//!
//! A plain struct, passed to handlers through the execution context; never
//! ambient. Nothing else in the core reads or writes it.

use crate::config::SessionConfig;

/// Mutable per-session state commands may read and update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    /// Name of the active user, shown in the prompt and settable via
    /// the `user` command.
    pub user: String,
    /// Device name shown in the prompt.
    pub device: String,
    /// Current working directory, shown in the prompt.
    pub cwd: String,
    /// Whether submitted lines are echoed back with the prompt.
    pub echo: bool,
}

impl SessionState {
    /// Seeds session state from configuration defaults.
    pub fn from_config(config: &SessionConfig) -> Self {
        Self {
            user: config.user.clone(),
            device: config.device.clone(),
            cwd: config.cwd.clone(),
            echo: config.echo,
        }
    }

    /// Renders the prompt: `user@device:cwd$ `.
    pub fn prompt(&self) -> String {
        format!("{}@{}:{}$ ", self.user, self.device, self.cwd)
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
