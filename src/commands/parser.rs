//! Recursive-descent parser for command lines.
//!
//! One production per registered command: the leading word selects the
//! grammar, then each grammar step runs a terminal-symbol parser built on
//! the shared [`Parser::expect`] primitive. The whole line is consumed by
//! design — every grammar ends on end-of-line, so trailing garbage always
//! surfaces as an error instead of being dropped.

use super::command::{Command, ParameterNode};
use super::error::ParseError;
use super::grammar::GrammarStep;
use super::registry::CommandRegistry;
use super::tokenizer::{Token, TokenKind, Tokenizer};

/// Parser over one command line.
///
/// Each parse owns its tokenizer exclusively; the registry is only read.
pub struct Parser<'a, 'r> {
    tokens: Tokenizer<'a>,
    registry: &'r CommandRegistry,
}

impl<'a, 'r> Parser<'a, 'r> {
    /// Parses one line into a [`Command`] bound to its registered handler.
    pub fn parse(registry: &'r CommandRegistry, line: &'a str) -> Result<Command, ParseError> {
        let mut parser = Self {
            tokens: Tokenizer::new(line),
            registry,
        };
        parser.command()
    }

    /// The single production: command name, then the registered grammar.
    fn command(&mut self) -> Result<Command, ParseError> {
        let name = match self.word()? {
            ParameterNode::Word(name) => name,
            _ => unreachable!("word() only returns Word nodes"),
        };

        let spec = self
            .registry
            .resolve(&name)
            .ok_or_else(|| ParseError::UnknownCommand(name.clone()))?;

        let steps = spec.grammar.steps();
        let mut parameters = Vec::with_capacity(steps.len());
        for step in steps {
            parameters.push(self.step(*step)?);
        }

        Ok(Command::new(name, parameters, spec.handler))
    }

    /// Runs one grammar step.
    fn step(&mut self, step: GrammarStep) -> Result<ParameterNode, ParseError> {
        match step {
            GrammarStep::Word => self.word(),
            GrammarStep::QuotedString => self.string(),
            GrammarStep::Question => self.question(),
            GrammarStep::WordOrEnd => self.word_or_end(),
            GrammarStep::End => self.end(),
        }
    }

    /// Terminal symbol: a bare word.
    fn word(&mut self) -> Result<ParameterNode, ParseError> {
        let token = self.expect(&[TokenKind::Word])?;
        Ok(ParameterNode::Word(token.text))
    }

    /// Terminal symbol: a quoted string, quotes stripped.
    fn string(&mut self) -> Result<ParameterNode, ParseError> {
        let token = self.expect(&[TokenKind::QuotedString])?;
        let value = token.text[1..token.text.len() - 1].to_string();
        Ok(ParameterNode::StringLiteral(value))
    }

    /// Terminal symbol: the `?` operator.
    fn question(&mut self) -> Result<ParameterNode, ParseError> {
        let token = self.expect(&[TokenKind::Question])?;
        Ok(ParameterNode::Operator(token.text))
    }

    /// Combinator: a bare word, or end-of-line as a distinguished
    /// alternative. Used for optional trailing subcommand names.
    fn word_or_end(&mut self) -> Result<ParameterNode, ParseError> {
        let token = self.expect(&[TokenKind::Word, TokenKind::EndOfLine])?;
        match token.kind {
            TokenKind::Word => Ok(ParameterNode::Word(token.text)),
            _ => Ok(ParameterNode::EndOfLine),
        }
    }

    /// Terminal symbol: end of the line.
    fn end(&mut self) -> Result<ParameterNode, ParseError> {
        self.expect(&[TokenKind::EndOfLine])?;
        Ok(ParameterNode::EndOfLine)
    }

    /// Peeks the next token; consumes and returns it when its kind is in
    /// `kinds`.
    ///
    /// Failure is two-tier: hitting end-of-line where it is not accepted
    /// reports the distinct, less detailed [`ParseError::UnexpectedEndOfInput`],
    /// while a present-but-wrong token reports
    /// [`ParseError::UnexpectedSymbol`] with the offending text, the
    /// accepted kinds and the position.
    fn expect(&mut self, kinds: &[TokenKind]) -> Result<Token, ParseError> {
        let position = self.tokens.pos();
        let token = self.tokens.peek()?;

        if token.is_end_of_line() && !kinds.contains(&TokenKind::EndOfLine) {
            return Err(ParseError::UnexpectedEndOfInput);
        }

        if kinds.contains(&token.kind) {
            return self.tokens.next_token();
        }

        Err(ParseError::UnexpectedSymbol {
            symbol: token.text,
            expected: kinds.to_vec(),
            position,
        })
    }
}
