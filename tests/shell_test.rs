//! End-to-end tests over the public API: parse, execute, observe the sink.
//!
//! Run with: `cargo test --test shell_test`

use pretty_assertions::assert_eq;

use conch::commands::{
    CommandRegistry, ExecutionContext, ParameterNode, ParseError, Parser, TokenKind, Tokenizer,
};
use conch::config::Config;
use conch::output::{LogLevel, MemorySink};
use conch::session::SessionState;
use conch::shell::Shell;

fn quiet_shell() -> Shell {
    let mut shell = Shell::new(&Config::default());
    shell.session_mut().echo = false;
    shell
}

#[test]
fn test_parse_and_execute_print() {
    let registry = CommandRegistry::with_builtins();
    let command = Parser::parse(&registry, "print \"hello\"").unwrap();

    assert_eq!(command.name(), "print");
    assert_eq!(
        command.parameters(),
        &[
            ParameterNode::StringLiteral("hello".to_string()),
            ParameterNode::EndOfLine,
        ]
    );

    let mut session = SessionState::default();
    let mut sink = MemorySink::new();
    let mut ctx = ExecutionContext {
        sink: &mut sink,
        session: &mut session,
        registry: &registry,
    };
    command.execute(&mut ctx);

    assert_eq!(sink.messages(), vec!["hello"]);
    assert_eq!(sink.entries()[0].level, LogLevel::Output);
}

#[test]
fn test_every_builtin_parses_with_valid_args() {
    let registry = CommandRegistry::with_builtins();
    let lines = [
        ("help", "help"),
        ("help", "help clear"),
        ("print", "print \"x\""),
        ("clear", "clear"),
        ("user", "user \"u\""),
    ];

    for (name, line) in lines {
        let command = Parser::parse(&registry, line)
            .unwrap_or_else(|e| panic!("'{line}' should parse: {e}"));
        let spec = registry.resolve(name).unwrap();
        assert_eq!(command.name(), name);
        assert_eq!(command.parameters().len(), spec.grammar.steps().len());
    }
}

#[test]
fn test_empty_line_fails_with_end_of_input() {
    let registry = CommandRegistry::with_builtins();
    assert_eq!(
        Parser::parse(&registry, "").unwrap_err(),
        ParseError::UnexpectedEndOfInput
    );
}

#[test]
fn test_unknown_command_fails_with_its_name() {
    let registry = CommandRegistry::with_builtins();
    assert_eq!(
        Parser::parse(&registry, "xyz").unwrap_err(),
        ParseError::UnknownCommand("xyz".to_string())
    );
}

#[test]
fn test_trailing_argument_after_clear_is_rejected() {
    let registry = CommandRegistry::with_builtins();
    let err = Parser::parse(&registry, "clear extra").unwrap_err();
    assert!(matches!(err, ParseError::UnexpectedSymbol { .. }));
    assert_eq!(
        err.to_string(),
        "Unexpected symbol `extra`, expected end-of-line (at position 6)"
    );
}

#[test]
fn test_parse_success_and_execution_success_are_independent() {
    // `print ""` satisfies the grammar, so parsing succeeds...
    let registry = CommandRegistry::with_builtins();
    let command = Parser::parse(&registry, "print \"\"").unwrap();
    assert_eq!(
        command.parameters()[0],
        ParameterNode::StringLiteral(String::new())
    );

    // ...but execution reports a validation error instead of output.
    let mut session = SessionState::default();
    let mut sink = MemorySink::new();
    let mut ctx = ExecutionContext {
        sink: &mut sink,
        session: &mut session,
        registry: &registry,
    };
    command.execute(&mut ctx);

    let entries = sink.entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].level, LogLevel::Error);
    assert_eq!(
        entries[0].message,
        "First argument of print cannot be an empty string"
    );
}

#[test]
fn test_boolean_literals_tokenize_as_words() {
    let mut tokenizer = Tokenizer::new("true");
    let token = tokenizer.next_token().unwrap();
    assert_eq!(token.kind, TokenKind::Word);
    assert_eq!(token.text, "true");
}

#[test]
fn test_reparsing_a_line_yields_structurally_equal_commands() {
    let registry = CommandRegistry::with_builtins();
    let first = Parser::parse(&registry, "user \"alice\"").unwrap();
    let second = Parser::parse(&registry, "user \"alice\"").unwrap();

    assert_eq!(first, second);
    assert_eq!(first.name(), second.name());
    assert_eq!(first.parameters(), second.parameters());
}

#[test]
fn test_shell_session_flow() {
    let mut shell = Shell::new(&Config::default());
    let mut sink = MemorySink::new();

    shell.submit("user \"alice\"", &mut sink);
    shell.submit("print \"hi alice\"", &mut sink);

    assert_eq!(shell.session().user, "alice");
    // Echo of both lines plus the printed output; the first echo still
    // shows the default user because the prompt is rendered before the
    // command runs.
    assert_eq!(
        sink.messages(),
        vec![
            "user@conch:~$ user \"alice\"",
            "alice@conch:~$ print \"hi alice\"",
            "hi alice",
        ]
    );
    assert_eq!(shell.history(), &["user \"alice\"", "print \"hi alice\""]);
}

#[test]
fn test_shell_reports_parse_errors_and_continues() {
    let mut shell = quiet_shell();
    let mut sink = MemorySink::new();

    shell.submit("print", &mut sink);
    shell.submit("print \"recovered\"", &mut sink);

    let entries = sink.entries();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].level, LogLevel::Error);
    assert_eq!(entries[0].message, "Unexpected end of input");
    assert_eq!(entries[1].level, LogLevel::Output);
    assert_eq!(entries[1].message, "recovered");
}

#[test]
fn test_help_lists_sorted_command_names() {
    let mut shell = quiet_shell();
    let mut sink = MemorySink::new();

    shell.submit("help", &mut sink);

    let message = &sink.entries()[0].message;
    assert_eq!(
        message.as_str(),
        "List of all available commands\n  clear\n  help\n  print\n  user\n\n\
         Use help <command> to learn more about a specific command"
    );
}

#[test]
fn test_help_on_specific_and_unknown_commands() {
    let mut shell = quiet_shell();
    let mut sink = MemorySink::new();

    shell.submit("help print", &mut sink);
    shell.submit("help nope", &mut sink);

    let entries = sink.entries();
    assert_eq!(entries[0].level, LogLevel::Output);
    assert_eq!(entries[0].message, "prints the string to the log");
    assert_eq!(entries[1].level, LogLevel::Error);
    assert_eq!(entries[1].message, "Unknown command 'nope'");
}

#[test]
fn test_clear_command_wipes_the_sink() {
    let mut shell = quiet_shell();
    let mut sink = MemorySink::new();

    shell.submit("print \"gone soon\"", &mut sink);
    shell.submit("clear", &mut sink);

    assert!(sink.entries().is_empty());
}

#[test]
fn test_registered_custom_command_participates_end_to_end() {
    use conch::commands::{
        CommandExecutionEvent, CommandGrammar, GrammarStep, ValidationError,
    };

    fn greet(
        event: &CommandExecutionEvent<'_>,
        ctx: &mut ExecutionContext<'_>,
    ) -> Result<(), ValidationError> {
        if let Some(ParameterNode::Word(name)) = event.parameter(0) {
            ctx.sink.log(&format!("hello {name}"));
        }
        Ok(())
    }

    let mut registry = CommandRegistry::with_builtins();
    registry.register(
        "greet",
        CommandGrammar::new([GrammarStep::Word]),
        greet,
        Some("greets the given name"),
    );

    let mut shell = Shell::with_registry(&Config::default(), registry);
    shell.session_mut().echo = false;
    let mut sink = MemorySink::new();

    shell.submit("greet world", &mut sink);
    shell.submit("help greet", &mut sink);

    assert_eq!(sink.messages(), vec!["hello world", "greets the given name"]);
}
