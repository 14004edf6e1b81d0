use crate::{
    parser::{
        ast::expr::Expr,
        error::{kind, Error},
        Parse,
        Parser,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An equation, made of two expressions separated by exactly one `=`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Equation {
    /// The left-hand side of the equation.
    pub lhs: Expr,

    /// The right-hand side of the equation.
    pub rhs: Expr,

    /// The span of the `=` sign.
    pub eq_span: Range<usize>,
}

impl Equation {
    /// Returns the span of the whole equation.
    pub fn span(&self) -> Range<usize> {
        self.lhs.span().start..self.rhs.span().end
    }
}

impl Parse for Equation {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        if matches!(input.peek(), TokenKind::Equals | TokenKind::End) {
            return Err(input.error(kind::EmptySide { left: true }));
        }
        let lhs = input.try_parse::<Expr>()?;

        let eq_span = match input.peek() {
            TokenKind::Equals => input.next_token()?.span,
            TokenKind::CloseParen => return Err(input.error(kind::UnclosedParenthesis { opening: false })),
            _ => return Err(input.error(kind::MissingEquals)),
        };

        match input.peek() {
            TokenKind::End => return Err(input.error(kind::EmptySide { left: false })),
            TokenKind::Equals => return Err(input.error(kind::DuplicateEquals)),
            _ => (),
        }
        let rhs = input.try_parse::<Expr>()?;

        match input.peek() {
            TokenKind::End => Ok(Self { lhs, rhs, eq_span }),
            TokenKind::Equals => Err(input.error(kind::DuplicateEquals)),
            TokenKind::CloseParen => Err(input.error(kind::UnclosedParenthesis { opening: false })),
            _ => Err(input.error(kind::ExpectedEof)),
        }
    }
}

impl fmt::Display for Equation {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} = {}", self.lhs, self.rhs)
    }
}
