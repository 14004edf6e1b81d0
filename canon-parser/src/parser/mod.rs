pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;

use canon_error::ErrorKind;
use error::{Error, kind};
use super::tokenizer::{tokenize_complete, Token, TokenKind};
use std::ops::Range;

/// A high-level parser for equations. This is the type to use to parse an equation into an
/// abstract syntax tree.
///
/// The grammar is LL(1): every rule decides what to do by looking at the current token only, and
/// the parser never backtracks.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The tokens that this parser is currently parsing. The last token is always
    /// [`TokenKind::End`].
    tokens: Box<[Token<'source>]>,

    /// The index of the **next** token to be parsed.
    cursor: usize,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    ///
    /// Returns an error if the source contains a character that cannot be tokenized.
    pub fn new(source: &'source str) -> Result<Self, Error> {
        Ok(Self {
            tokens: tokenize_complete(source)?,
            cursor: 0,
        })
    }

    /// Creates an error that points at the current token.
    pub fn error(&self, kind: impl ErrorKind + 'static) -> Error {
        Error::new(vec![self.span()], kind)
    }

    /// Returns a span pointing at the end of the source code.
    pub fn eof_span(&self) -> Range<usize> {
        self.tokens.last().map_or(0..0, |token| token.span.clone())
    }

    /// Returns the span of the current token, or the end of the source code if the cursor is at
    /// the end of the stream.
    pub fn span(&self) -> Range<usize> {
        self.tokens
            .get(self.cursor)
            .map_or(self.eof_span(), |token| token.span.clone())
    }

    /// Returns the current token. The cursor is not moved. Returns [`None`] if the cursor has
    /// moved past the [`TokenKind::End`] token.
    pub fn current_token(&self) -> Option<&Token<'source>> {
        self.tokens.get(self.cursor)
    }

    /// Returns the kind of the current token without moving the cursor.
    pub fn peek(&self) -> TokenKind {
        self.current_token().map_or(TokenKind::End, |token| token.kind)
    }

    /// Returns the next token to be parsed, then advances the cursor.
    ///
    /// Returns an EOF error if the current token is [`TokenKind::End`]; the cursor never moves past
    /// it.
    pub fn next_token(&mut self) -> Result<Token<'source>, Error> {
        match self.current_token() {
            Some(token) if token.kind != TokenKind::End => {
                // cloning is cheap: only Range<_> is cloned
                let token = token.clone();
                self.cursor += 1;
                Ok(token)
            },
            _ => Err(self.error(kind::UnexpectedEof)),
        }
    }

    /// Advances the cursor past the current token if it is of the given kind, returning it.
    pub fn next_if(&mut self, kind: TokenKind) -> Option<Token<'source>> {
        if kind != TokenKind::End && self.peek() == kind {
            self.next_token().ok()
        } else {
            None
        }
    }

    /// Parses a value from the stream of tokens, advancing the stream past the consumed tokens.
    pub fn try_parse<T: Parse>(&mut self) -> Result<T, Error> {
        T::parse(self)
    }

    /// Attempts to parse a value from the given stream of tokens. All the tokens must be consumed
    /// by the parser; if not, an error is returned.
    pub fn try_parse_full<T: Parse>(&mut self) -> Result<T, Error> {
        let value = T::parse(self)?;
        match self.peek() {
            TokenKind::End => Ok(value),
            TokenKind::CloseParen => Err(self.error(kind::UnclosedParenthesis { opening: false })),
            _ => Err(self.error(kind::ExpectedEof)),
        }
    }
}

/// Any type that can be parsed from a source of tokens.
pub trait Parse: Sized {
    /// Parses a value from the given stream of tokens, advancing the stream past the consumed
    /// tokens if parsing is successful.
    fn parse(input: &mut Parser) -> Result<Self, Error>;
}

/// The precedence of an operation, in order from lowest precedence (evaluated last) to highest
/// precedence (evaluated first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Precedence of addition (`+`) and subtraction (`-`), which separate terms.
    Term,

    /// Precedence of multiplication (`*` and implicit), which separates factors.
    Factor,

    /// Precedence of unary subtraction (`-`).
    Neg,

    /// Precedence of exponentiation (`^` or `**`).
    Exp,

    /// Precedence of a literal, which never needs parentheses.
    Literal,
}

impl PartialOrd for Precedence {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        let left = *self as u8;
        let right = *other as u8;
        left.partial_cmp(&right)
    }
}
