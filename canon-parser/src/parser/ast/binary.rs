use crate::{
    parser::{
        ast::{expr::Expr, pow::Pow, unary::Neg},
        error::Error,
        fmt::fmt_operand,
        token::op::{BinOp, BinOpKind},
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A binary expression, such as `1 + 2`. Binary expressions can include nested expressions.
///
/// Implicit multiplication, as in `2x` or `x(y + 1)`, is represented as a multiplication whose
/// [`BinOp::implicit`] flag is set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand-side of the binary expression.
    pub lhs: Box<Expr>,

    /// The operator of the binary expression.
    pub op: BinOp,

    /// The right-hand-side of the binary expression.
    pub rhs: Box<Expr>,

    /// The region of the source code that this binary expression was parsed from.
    pub span: Range<usize>,
}

impl Binary {
    /// Creates a binary expression, spanning from the start of `lhs` to the end of `rhs`.
    fn new(lhs: Expr, op: BinOp, rhs: Expr) -> Self {
        let span = lhs.span().start..rhs.span().end;
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
            span,
        }
    }

    /// Returns the span of the binary expression.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a sequence of terms separated by `+` and `-`, folding them left to right.
    pub fn parse_expr(input: &mut Parser) -> Result<Expr, Error> {
        let mut lhs = Self::parse_term(input)?;

        while matches!(input.peek(), TokenKind::Add | TokenKind::Sub) {
            let op = input.try_parse::<BinOp>()?;
            let rhs = Self::parse_term(input)?;
            lhs = Expr::Binary(Self::new(lhs, op, rhs));
        }

        Ok(lhs)
    }

    /// Parses a sequence of factors, separated by `*` or placed next to each other, folding them
    /// left to right.
    ///
    /// Only the first factor and factors after an explicit `*` may be negated. A `-` directly
    /// after a factor is always subtraction, so `x -y` is `x - y`.
    fn parse_term(input: &mut Parser) -> Result<Expr, Error> {
        let mut lhs = Neg::parse_or_lower(input)?;

        loop {
            let kind = input.peek();
            if kind == TokenKind::Mul {
                let op = input.try_parse::<BinOp>()?;
                let rhs = Neg::parse_or_lower(input)?;
                lhs = Expr::Binary(Self::new(lhs, op, rhs));
            } else if kind.starts_factor() {
                let rhs = Pow::parse_or_lower(input)?;
                let op = BinOp {
                    kind: BinOpKind::Mul,
                    implicit: true,
                    span: lhs.span().end..rhs.span().start,
                };
                lhs = Expr::Binary(Self::new(lhs, op, rhs));
            } else {
                return Ok(lhs);
            }
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let lhs_prec = self.lhs.precedence();
        let rhs_prec = self.rhs.precedence();

        match self.op.kind {
            BinOpKind::Add | BinOpKind::Sub => {
                fmt_operand(f, &self.lhs, lhs_prec < Precedence::Term)?;
                write!(f, " {} ", self.op.kind)?;
                fmt_operand(f, &self.rhs, rhs_prec <= Precedence::Term)
            },
            BinOpKind::Mul if self.op.implicit => {
                fmt_operand(f, &self.lhs, lhs_prec < Precedence::Factor)?;
                if rhs_prec < Precedence::Exp {
                    return fmt_operand(f, &self.rhs, true);
                }

                // `2 3` must not be written as `23`
                let rhs = self.rhs.to_string();
                if rhs.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
                    write!(f, " ")?;
                }
                write!(f, "{}", rhs)
            },
            BinOpKind::Mul => {
                fmt_operand(f, &self.lhs, lhs_prec < Precedence::Factor)?;
                write!(f, " * ")?;
                fmt_operand(f, &self.rhs, rhs_prec <= Precedence::Factor)
            },
        }
    }
}
