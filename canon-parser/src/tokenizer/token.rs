use logos::Logos;
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The different kinds of tokens that can be produced by the tokenizer.
#[derive(Logos, Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TokenKind {
    #[regex(r"[ \t\r\n\f]+")]
    Whitespace,

    #[token("+")]
    Add,

    #[token("-")]
    Sub,

    #[token("*")]
    Mul,

    #[token("^")]
    #[token("**")]
    Exp,

    #[token("=")]
    Equals,

    #[token("(")]
    OpenParen,

    #[token(")")]
    CloseParen,

    #[regex(r"([0-9]+\.?[0-9]*|\.[0-9]+)([eE][+-]?[0-9]+)?")]
    Number,

    #[regex(r"[t-z]")]
    Variable,

    /// Marks the end of the token stream. Never produced by the lexer itself; it is appended by
    /// [`tokenize_complete`](super::tokenize_complete).
    End,
}

impl TokenKind {
    /// Returns true if the token represents whitespace.
    pub fn is_whitespace(self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    /// Returns true if a token of this kind can begin a factor, which is what allows implicit
    /// multiplication such as `2x` or `x(y + 1)`.
    pub fn starts_factor(self) -> bool {
        matches!(self, TokenKind::Number | TokenKind::Variable | TokenKind::OpenParen)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Whitespace => write!(f, "whitespace"),
            TokenKind::Add => write!(f, "`+`"),
            TokenKind::Sub => write!(f, "`-`"),
            TokenKind::Mul => write!(f, "`*`"),
            TokenKind::Exp => write!(f, "`^`"),
            TokenKind::Equals => write!(f, "`=`"),
            TokenKind::OpenParen => write!(f, "`(`"),
            TokenKind::CloseParen => write!(f, "`)`"),
            TokenKind::Number => write!(f, "a number"),
            TokenKind::Variable => write!(f, "a variable"),
            TokenKind::End => write!(f, "the end of the equation"),
        }
    }
}

/// A token produced by the tokenizer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token<'source> {
    /// The region of the source code that this token originated from.
    pub span: Range<usize>,

    /// The kind of token.
    pub kind: TokenKind,

    /// The raw lexeme that was parsed into this token.
    pub lexeme: &'source str,
}
