//! The parsed command artifact and its execution model.
//!
//! A [`Command`] exists for the duration of one submitted line: parsed,
//! optionally executed, then discarded. Execution is the only place side
//! effects happen, and a handler's validation failure is reported to the
//! output sink rather than propagated — parse failures, by contrast, mean
//! execution is never reached at all.

use thiserror::Error;

use super::handlers::ExecutionContext;

/// A parsed command argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParameterNode {
    /// A bare word.
    Word(String),
    /// A quoted string with the surrounding quotes stripped.
    StringLiteral(String),
    /// An operator symbol such as `?`.
    Operator(String),
    /// The end of the line. Carries no value.
    EndOfLine,
}

impl ParameterNode {
    /// Returns the contained text for value-carrying nodes.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Word(s) | Self::StringLiteral(s) | Self::Operator(s) => Some(s),
            Self::EndOfLine => None,
        }
    }
}

/// Semantic rejection of an argument by a command handler.
///
/// Never raised during parsing. Raised by handlers for arguments that are
/// syntactically fine but semantically invalid (an empty required string,
/// an unknown help topic), caught by [`Command::execute`] and reported to
/// the sink as a non-fatal error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Handler invoked when a command executes.
pub type Handler =
    fn(&CommandExecutionEvent<'_>, &mut ExecutionContext<'_>) -> Result<(), ValidationError>;

/// The event object passed to a handler at invocation time.
///
/// Constructed fresh for each execution over the command's resolved
/// parameters; not retained afterwards.
#[derive(Debug)]
pub struct CommandExecutionEvent<'a> {
    parameters: &'a [ParameterNode],
}

impl<'a> CommandExecutionEvent<'a> {
    /// Wraps the resolved parameter sequence.
    pub fn new(parameters: &'a [ParameterNode]) -> Self {
        Self { parameters }
    }

    /// The full parameter sequence, in grammar order.
    pub fn parameters(&self) -> &[ParameterNode] {
        self.parameters
    }

    /// The parameter at `index`, if present.
    pub fn parameter(&self, index: usize) -> Option<&ParameterNode> {
        self.parameters.get(index)
    }
}

/// A parsed, not-yet-executed command.
///
/// Owned by the caller until executed or discarded. Two commands compare
/// equal when their names and parameter lists are equal; the bound handler
/// does not take part in equality.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    parameters: Vec<ParameterNode>,
    handler: Handler,
}

impl Command {
    /// Binds a name, its parsed parameters and the registered handler.
    pub fn new(name: impl Into<String>, parameters: Vec<ParameterNode>, handler: Handler) -> Self {
        Self {
            name: name.into(),
            parameters,
            handler,
        }
    }

    /// The command name as written on the line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parsed parameters, one per grammar step.
    pub fn parameters(&self) -> &[ParameterNode] {
        &self.parameters
    }

    /// Invokes the bound handler with a fresh execution event.
    ///
    /// A [`ValidationError`] returned by the handler is reported to the
    /// context's sink and swallowed here; it never aborts the caller's
    /// loop.
    pub fn execute(&self, ctx: &mut ExecutionContext<'_>) {
        let event = CommandExecutionEvent::new(&self.parameters);
        if let Err(err) = (self.handler)(&event, ctx) {
            tracing::debug!("command '{}' rejected its arguments: {}", self.name, err);
            ctx.sink.error(&err.to_string());
        }
    }
}

impl PartialEq for Command {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.parameters == other.parameters
    }
}

impl Eq for Command {}
