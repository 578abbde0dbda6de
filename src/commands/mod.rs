//! Command parsing and dispatch.
//!
//! The front end proper: tokenizer, recursive-descent parser, command
//! registry and the execution model. One submitted line flows one way
//! through it: raw string → tokens → parsed [`Command`] → handler
//! invocation against a caller-supplied context.

pub mod command;
pub mod definitions;
pub mod error;
pub mod grammar;
pub mod handlers;
pub mod parser;
pub mod registry;
pub mod tokenizer;

pub use command::{Command, CommandExecutionEvent, Handler, ParameterNode, ValidationError};
pub use definitions::{CommandDef, BUILTIN_COMMANDS};
pub use error::ParseError;
pub use grammar::{CommandGrammar, GrammarStep};
pub use handlers::ExecutionContext;
pub use parser::Parser;
pub use registry::{CommandRegistry, CommandSpec};
pub use tokenizer::{Token, TokenKind, Tokenizer};
