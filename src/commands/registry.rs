//! The command registry: name → grammar + handler + help text.
//!
//! Populated once at startup and read-only afterwards; every parse resolves
//! the command name through one registry lookup.

use std::collections::HashMap;

use super::command::Handler;
use super::definitions::BUILTIN_COMMANDS;
use super::grammar::CommandGrammar;

/// Everything registered under one command name.
#[derive(Debug, Clone)]
pub struct CommandSpec {
    /// The argument grammar applied after the command name.
    pub grammar: CommandGrammar,
    /// The handler bound into the parsed [`Command`].
    ///
    /// [`Command`]: crate::commands::Command
    pub handler: Handler,
    /// Human-readable help text, if the command documents itself.
    pub help: Option<String>,
}

/// Registry of all known commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    entries: HashMap<String, CommandSpec>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry with the baseline command set installed.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for def in BUILTIN_COMMANDS {
            registry.register(
                def.name,
                CommandGrammar::new(def.grammar),
                def.handler,
                Some(def.help),
            );
        }
        registry
    }

    /// Registers a command. Registering a name twice replaces the earlier
    /// entry.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        grammar: CommandGrammar,
        handler: Handler,
        help: Option<impl Into<String>>,
    ) {
        self.entries.insert(
            name.into(),
            CommandSpec {
                grammar,
                handler,
                help: help.map(Into::into),
            },
        );
    }

    /// Looks up a command by its exact name.
    pub fn resolve(&self, name: &str) -> Option<&CommandSpec> {
        self.entries.get(name)
    }

    /// Returns true if `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// All registered names, sorted for stable listings.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}
