//! Declarative definitions for the baseline command set.
//!
//! One entry per built-in command: its name, argument grammar, handler and
//! help text. [`CommandRegistry::with_builtins`] installs this table.
//!
//! [`CommandRegistry::with_builtins`]: crate::commands::CommandRegistry::with_builtins

use super::command::Handler;
use super::grammar::GrammarStep;
use super::handlers;

/// Definition of a built-in command.
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    /// Command name as typed on the line.
    pub name: &'static str,
    /// Argument grammar; the terminating `End` step may be omitted here,
    /// registration appends it.
    pub grammar: &'static [GrammarStep],
    /// Handler invoked on execution.
    pub handler: Handler,
    /// Help text shown by `help <name>`.
    pub help: &'static str,
}

/// The baseline command set.
pub static BUILTIN_COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "help",
        grammar: &[GrammarStep::WordOrEnd, GrammarStep::End],
        handler: handlers::system::help,
        help: "the ever helpful help command, helps you get some of that sweet help when you need it",
    },
    CommandDef {
        name: "print",
        grammar: &[GrammarStep::QuotedString, GrammarStep::End],
        handler: handlers::system::print,
        help: "prints the string to the log",
    },
    CommandDef {
        name: "clear",
        grammar: &[GrammarStep::End],
        handler: handlers::system::clear,
        help: "clears the log",
    },
    CommandDef {
        name: "user",
        grammar: &[GrammarStep::QuotedString, GrammarStep::End],
        handler: handlers::session::user,
        help: "sets the active user for the session",
    },
];

/// Finds a built-in definition by name.
pub fn find_builtin(name: &str) -> Option<&'static CommandDef> {
    BUILTIN_COMMANDS.iter().find(|def| def.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_builtin() {
        assert!(find_builtin("help").is_some());
        assert!(find_builtin("print").is_some());
        assert!(find_builtin("nonexistent").is_none());
    }

    #[test]
    fn test_every_builtin_grammar_ends_on_end_of_line() {
        for def in BUILTIN_COMMANDS {
            assert_eq!(
                def.grammar.last(),
                Some(&GrammarStep::End),
                "grammar of '{}' must terminate on end-of-line",
                def.name
            );
        }
    }

    #[test]
    fn test_every_builtin_has_help_text() {
        for def in BUILTIN_COMMANDS {
            assert!(!def.help.is_empty(), "'{}' is undocumented", def.name);
        }
    }
}
