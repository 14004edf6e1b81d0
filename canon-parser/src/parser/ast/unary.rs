use crate::{
    parser::{
        ast::{expr::Expr, pow::Pow},
        error::Error,
        fmt::fmt_operand,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A negation, such as `-x` or `-(x + 1)`.
///
/// Negation binds looser than exponentiation, so `-x^2` is the negation of `x^2`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neg {
    /// The negated expression.
    pub operand: Box<Expr>,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Neg {
    /// Returns the span of the negation.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses any number of leading `-` operators followed by a power, or a power alone if there
    /// is no `-`.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let Some(op) = input.next_if(TokenKind::Sub) else {
            return Pow::parse_or_lower(input);
        };

        let operand = Self::parse_or_lower(input)?;
        let span = op.span.start..operand.span().end;
        Ok(Expr::Neg(Self {
            operand: Box::new(operand),
            span,
        }))
    }
}

impl fmt::Display for Neg {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "-")?;
        fmt_operand(f, &self.operand, self.operand.precedence() < Precedence::Neg)
    }
}
