use crate::{
    parser::{
        ast::{binary::Binary, literal::Literal, pow::Pow, unary::Neg},
        error::{kind, Error},
        Parse,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Represents a general expression, one side of an equation.
///
/// Parentheses do not produce a node of their own: `(x + y)` parses to the [`Expr::Binary`] it
/// contains, and the tree shape records the grouping. The span of that node is widened to cover
/// the parentheses.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Expr {
    /// A literal value, such as `2` or `x`.
    Literal(Literal),

    /// A negation, such as `-x`.
    Neg(Neg),

    /// A binary operation, such as `1 + 2` or `2x`.
    Binary(Binary),

    /// An expression raised to an integer power, such as `x^2`.
    Pow(Pow),
}

impl Expr {
    /// Returns the span of the expression.
    pub fn span(&self) -> Range<usize> {
        match self {
            Expr::Literal(literal) => literal.span(),
            Expr::Neg(neg) => neg.span(),
            Expr::Binary(binary) => binary.span(),
            Expr::Pow(pow) => pow.span(),
        }
    }

    /// Replaces the span of the outermost node of the expression.
    pub(crate) fn with_span(mut self, span: Range<usize>) -> Self {
        match &mut self {
            Expr::Literal(Literal::Number(num)) => num.span = span,
            Expr::Literal(Literal::Variable(var)) => var.span = span,
            Expr::Neg(neg) => neg.span = span,
            Expr::Binary(binary) => binary.span = span,
            Expr::Pow(pow) => pow.span = span,
        }
        self
    }

    /// Returns the precedence of the outermost operation of the expression, used to decide where
    /// parentheses are needed when formatting.
    pub fn precedence(&self) -> Precedence {
        match self {
            Expr::Literal(Literal::Number(num)) if num.value.is_sign_negative() => Precedence::Neg,
            Expr::Literal(_) => Precedence::Literal,
            Expr::Neg(_) => Precedence::Neg,
            Expr::Binary(binary) => binary.op.precedence(),
            Expr::Pow(_) => Precedence::Exp,
        }
    }

    /// Parses a primary expression: a number, a variable, or a parenthesized expression.
    pub fn parse_primary(input: &mut Parser) -> Result<Self, Error> {
        match input.peek() {
            TokenKind::Number | TokenKind::Variable => input.try_parse::<Literal>().map(Self::Literal),
            TokenKind::OpenParen => {
                let open_paren = input.next_token()?;
                if input.peek() == TokenKind::CloseParen {
                    return Err(input.error(kind::EmptyParenthesis));
                }

                let expr = input.try_parse::<Self>()?;
                match input.next_if(TokenKind::CloseParen) {
                    Some(close_paren) => Ok(expr.with_span(open_paren.span.start..close_paren.span.end)),
                    None => Err(Error::new(vec![open_paren.span], kind::UnclosedParenthesis { opening: true })),
                }
            },
            TokenKind::End => Err(input.error(kind::UnexpectedEof)),
            found => Err(input.error(kind::UnexpectedToken {
                expected: &[TokenKind::Number, TokenKind::Variable, TokenKind::OpenParen, TokenKind::Sub],
                found,
            })),
        }
    }
}

impl Parse for Expr {
    fn parse(input: &mut Parser) -> Result<Self, Error> {
        Binary::parse_expr(input)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expr::Literal(literal) => literal.fmt(f),
            Expr::Neg(neg) => neg.fmt(f),
            Expr::Binary(binary) => binary.fmt(f),
            Expr::Pow(pow) => pow.fmt(f),
        }
    }
}
