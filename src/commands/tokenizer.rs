//! Tokenizer for the command language.
//!
//! Classifies one token at a time from a cursor over the input line, using
//! an ordered rule table with first-match-wins semantics. The rule order is
//! significant and is part of the observable language: reordering it changes
//! which kind wins when several patterns match at the same position.

use std::sync::OnceLock;

use regex::Regex;

use super::error::ParseError;

/// Kind of a lexical token, in rule priority order.
///
/// Rules are tried in declaration order and the first pattern matching at
/// the cursor wins. `Word` precedes `Boolean`, and the word pattern
/// accepts everything the boolean pattern accepts, so `true` and `false`
/// always surface as `Word` tokens: the boolean rule is unreachable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `{`
    BraceOpen,
    /// `}`
    BraceClose,
    /// `[`
    BracketOpen,
    /// `]`
    BracketClose,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// An integer or decimal number.
    Number,
    /// A quoted string, single or double quotes included in the text.
    QuotedString,
    /// A slash-separated path ending in an extension or a trailing slash.
    Path,
    /// A bare word: identifier-shaped text.
    Word,
    /// `true` or `false` (shadowed by `Word`, see above).
    Boolean,
    /// `?`
    Question,
    /// Zero-width match over trailing whitespace; the grammar's sentinel.
    EndOfLine,
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::BraceOpen => "brace-open",
            Self::BraceClose => "brace-close",
            Self::BracketOpen => "bracket-open",
            Self::BracketClose => "bracket-close",
            Self::Comma => "comma",
            Self::Dot => "dot",
            Self::Number => "number",
            Self::QuotedString => "string",
            Self::Path => "path",
            Self::Word => "word",
            Self::Boolean => "boolean",
            Self::Question => "question",
            Self::EndOfLine => "end-of-line",
        };
        f.write_str(name)
    }
}

/// A classified, immutable lexical unit extracted from the input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The rule that matched.
    pub kind: TokenKind,
    /// The matched text, exactly as it appears in the line.
    pub text: String,
}

impl Token {
    /// Returns the token text if this is a bare word.
    pub fn as_word(&self) -> Option<&str> {
        match self.kind {
            TokenKind::Word => Some(&self.text),
            _ => None,
        }
    }

    /// Returns true if this token marks the end of the line.
    pub fn is_end_of_line(&self) -> bool {
        self.kind == TokenKind::EndOfLine
    }
}

/// The ordered rule table. Compiled once; every pattern is anchored so a
/// match can only start at the cursor.
fn rules() -> &'static [(TokenKind, Regex)] {
    static RULES: OnceLock<Vec<(TokenKind, Regex)>> = OnceLock::new();
    RULES.get_or_init(|| {
        [
            (TokenKind::BraceOpen, r"^\{"),
            (TokenKind::BraceClose, r"^\}"),
            (TokenKind::BracketOpen, r"^\["),
            (TokenKind::BracketClose, r"^\]"),
            (TokenKind::Comma, r"^,"),
            (TokenKind::Dot, r"^\."),
            (TokenKind::Number, r"^\d+(?:\.\d+)?"),
            (TokenKind::QuotedString, r#"^(?:".*"|'.*')"#),
            (TokenKind::Path, r"^[^/\t]+(?:/[^/\t]+)*(?:\.[a-zA-Z0-9]+|/)"),
            (TokenKind::Word, r"^[a-zA-Z_][a-zA-Z_0-9]*"),
            (TokenKind::Boolean, r"^(?:true|false)"),
            (TokenKind::Question, r"^\?"),
            (TokenKind::EndOfLine, r"^\s*$"),
        ]
        .into_iter()
        .map(|(kind, pattern)| {
            let regex = Regex::new(pattern).expect("token rule pattern must compile");
            (kind, regex)
        })
        .collect()
    })
}

/// Tokenizer over one command line.
///
/// Owns the cursor exclusively; each parse constructs its own tokenizer, so
/// no state is shared between parses of the same line.
#[derive(Debug)]
pub struct Tokenizer<'a> {
    source: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// Byte offset of the cursor into the source line.
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Matches the next token without advancing the cursor.
    pub fn peek(&self) -> Result<Token, ParseError> {
        self.match_at_cursor()
    }

    /// Matches the next token and advances the cursor past it.
    ///
    /// After consuming a token the cursor skips any run of single space
    /// characters. Tabs are deliberately not treated as separators: they
    /// either surface inside a `Path` match or fail tokenization.
    pub fn next_token(&mut self) -> Result<Token, ParseError> {
        let token = self.match_at_cursor()?;
        self.advance(token.text.len());
        Ok(token)
    }

    /// Tries each rule in order against the remaining slice.
    fn match_at_cursor(&self) -> Result<Token, ParseError> {
        let remaining = &self.source[self.pos..];

        for (kind, regex) in rules() {
            if let Some(m) = regex.find(remaining) {
                return Ok(Token {
                    kind: *kind,
                    text: m.as_str().to_string(),
                });
            }
        }

        // The end-of-line rule matches any all-whitespace remainder
        // (including the empty string), so reaching this point means a
        // non-whitespace character that no rule accepts.
        match remaining.chars().next() {
            Some(symbol) => Err(ParseError::InvalidSymbol {
                symbol,
                position: self.pos,
            }),
            None => Err(ParseError::UnexpectedEndOfInput),
        }
    }

    fn advance(&mut self, len: usize) {
        self.pos += len;
        while self.source[self.pos..].starts_with(' ') {
            self.pos += 1;
        }
    }
}
