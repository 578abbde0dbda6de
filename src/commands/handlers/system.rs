//! System command handlers (`help`, `print`, `clear`).

use super::ExecutionContext;
use crate::commands::command::{CommandExecutionEvent, ParameterNode, ValidationError};

/// Handles `help` and `help <command>`.
///
/// Without an argument, lists every registered command. With one, shows
/// that command's help text, or `[no documentation]` when it has none.
pub fn help(
    event: &CommandExecutionEvent<'_>,
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ValidationError> {
    match event.parameter(0) {
        Some(ParameterNode::Word(name)) => {
            let spec = ctx
                .registry
                .resolve(name)
                .ok_or_else(|| ValidationError::new(format!("Unknown command '{name}'")))?;
            match &spec.help {
                Some(text) => ctx.sink.log(text),
                None => ctx.sink.log("[no documentation]"),
            }
        }
        _ => {
            let listing = ctx.registry.names().join("\n  ");
            ctx.sink.log(&format!(
                "List of all available commands\n  {listing}\n\nUse help <command> to learn more about a specific command"
            ));
        }
    }
    Ok(())
}

/// Handles `print "<text>"`: writes the decoded string to the sink.
pub fn print(
    event: &CommandExecutionEvent<'_>,
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ValidationError> {
    if let Some(ParameterNode::StringLiteral(text)) = event.parameter(0) {
        if text.is_empty() {
            return Err(ValidationError::new(
                "First argument of print cannot be an empty string",
            ));
        }
        ctx.sink.log(text);
    }
    Ok(())
}

/// Handles `clear`: empties the sink.
pub fn clear(
    _event: &CommandExecutionEvent<'_>,
    ctx: &mut ExecutionContext<'_>,
) -> Result<(), ValidationError> {
    ctx.sink.clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::registry::CommandRegistry;
    use crate::output::{LogLevel, MemorySink, OutputSink};
    use crate::session::SessionState;

    fn run(
        handler: crate::commands::command::Handler,
        parameters: &[ParameterNode],
    ) -> MemorySink {
        let registry = CommandRegistry::with_builtins();
        let mut session = SessionState::default();
        let mut sink = MemorySink::new();
        let event = CommandExecutionEvent::new(parameters);
        let mut ctx = ExecutionContext {
            sink: &mut sink,
            session: &mut session,
            registry: &registry,
        };
        if let Err(err) = handler(&event, &mut ctx) {
            ctx.sink.error(&err.to_string());
        }
        sink
    }

    #[test]
    fn test_help_lists_all_commands() {
        let sink = run(help, &[ParameterNode::EndOfLine, ParameterNode::EndOfLine]);
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert!(entries[0].message.starts_with("List of all available commands"));
        for name in ["clear", "help", "print", "user"] {
            assert!(entries[0].message.contains(name));
        }
    }

    #[test]
    fn test_help_for_known_command() {
        let sink = run(
            help,
            &[
                ParameterNode::Word("clear".to_string()),
                ParameterNode::EndOfLine,
            ],
        );
        assert_eq!(sink.entries()[0].message, "clears the log");
    }

    #[test]
    fn test_help_for_unknown_command() {
        let sink = run(
            help,
            &[
                ParameterNode::Word("xyz".to_string()),
                ParameterNode::EndOfLine,
            ],
        );
        let entries = sink.entries();
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(entries[0].message, "Unknown command 'xyz'");
    }

    #[test]
    fn test_print_logs_text() {
        let sink = run(
            print,
            &[
                ParameterNode::StringLiteral("hello".to_string()),
                ParameterNode::EndOfLine,
            ],
        );
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Output);
        assert_eq!(entries[0].message, "hello");
    }

    #[test]
    fn test_print_rejects_empty_string() {
        let sink = run(
            print,
            &[
                ParameterNode::StringLiteral(String::new()),
                ParameterNode::EndOfLine,
            ],
        );
        let entries = sink.entries();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].level, LogLevel::Error);
        assert_eq!(
            entries[0].message,
            "First argument of print cannot be an empty string"
        );
    }

    #[test]
    fn test_clear_empties_sink() {
        let registry = CommandRegistry::with_builtins();
        let mut session = SessionState::default();
        let mut sink = MemorySink::new();
        sink.log("before");

        let event = CommandExecutionEvent::new(&[ParameterNode::EndOfLine]);
        let mut ctx = ExecutionContext {
            sink: &mut sink,
            session: &mut session,
            registry: &registry,
        };
        clear(&event, &mut ctx).unwrap();

        assert!(sink.entries().is_empty());
    }
}
