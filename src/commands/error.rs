//! Parse error types for the command front end.
//!
//! Parsing returns a typed error so callers can distinguish "do not execute"
//! from handler-level validation failures, which are reported to the output
//! sink instead (see [`crate::commands::command::ValidationError`]).

use thiserror::Error;

use super::tokenizer::TokenKind;

/// Errors produced while tokenizing or parsing a command line.
///
/// Any of these aborts the whole parse: no partial [`Command`] is returned
/// and execution is never reached for that line.
///
/// [`Command`]: crate::commands::Command
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// No token rule matched at the current cursor position.
    #[error("Invalid symbol `{symbol}` at position {position}")]
    InvalidSymbol {
        /// The character that no rule could classify.
        symbol: char,
        /// Byte offset of the character in the input line.
        position: usize,
    },

    /// The leading word does not name a registered command.
    #[error("Unknown command '{0}'")]
    UnknownCommand(String),

    /// Input ran out where a non-end-of-line token was mandatory.
    #[error("Unexpected end of input")]
    UnexpectedEndOfInput,

    /// A token was present but its kind was not among the accepted kinds.
    #[error("Unexpected symbol `{symbol}`, expected {} (at position {position})", expected_list(.expected))]
    UnexpectedSymbol {
        /// Text of the offending token.
        symbol: String,
        /// Token kinds the current grammar step would have accepted.
        expected: Vec<TokenKind>,
        /// Byte offset where the offending token starts.
        position: usize,
    },
}

impl ParseError {
    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidSymbol { .. } => "Lex Error",
            Self::UnknownCommand(_) => "Unknown Command",
            Self::UnexpectedEndOfInput => "Unexpected End Of Input",
            Self::UnexpectedSymbol { .. } => "Unexpected Symbol",
        }
    }
}

/// Renders the accepted token kinds for an error message, `" | "` separated.
fn expected_list(kinds: &[TokenKind]) -> String {
    kinds
        .iter()
        .map(|k| k.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
