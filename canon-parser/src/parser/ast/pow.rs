use crate::{
    parser::{
        ast::{expr::Expr, literal::Literal},
        error::{kind, Error},
        fmt::fmt_operand,
        Parser,
        Precedence,
    },
    tokenizer::TokenKind,
};
use std::{fmt, ops::Range};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression raised to an integer power, such as `x^2`, `x**2`, or `(x + 1)^3`.
///
/// The power applies to the primary expression immediately before the `^`: in `2x^2`, only `x` is
/// squared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pow {
    /// The base of the power.
    pub base: Box<Expr>,

    /// The integer exponent. Chained exponents such as `x^2^3` are folded right to left into a
    /// single value when parsing.
    pub exponent: i64,

    /// The region of the source code that this expression was parsed from.
    pub span: Range<usize>,
}

impl Pow {
    /// Returns the span of the power.
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Parses a primary expression, followed by an optional exponent.
    pub fn parse_or_lower(input: &mut Parser) -> Result<Expr, Error> {
        let base = Expr::parse_primary(input)?;
        if input.next_if(TokenKind::Exp).is_none() {
            return Ok(base);
        }

        let allow_negative = matches!(base, Expr::Literal(Literal::Number(_)));
        let (exponent, exponent_span) = parse_exponent(input, allow_negative)?;
        let span = base.span().start..exponent_span.end;
        Ok(Expr::Pow(Self {
            base: Box::new(base),
            exponent,
            span,
        }))
    }
}

/// Parses the exponent after a `^` token: an integer literal, optionally preceded by `-` if
/// `allow_negative` is set, and optionally followed by another `^` and exponent.
///
/// Returns the value of the exponent and the span it covers.
fn parse_exponent(input: &mut Parser, allow_negative: bool) -> Result<(i64, Range<usize>), Error> {
    let minus = input.next_if(TokenKind::Sub);
    if let Some(minus) = &minus {
        if !allow_negative {
            return Err(Error::new(vec![minus.span.clone()], kind::InvalidExponent {
                reason: "negative exponents are only allowed on numbers",
            }));
        }
    }

    if input.peek() != TokenKind::Number {
        return Err(input.error(kind::InvalidExponent {
            reason: "expected an integer exponent here",
        }));
    }

    let token = input.next_token()?;
    if !token.lexeme.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::new(vec![token.span], kind::InvalidExponent {
            reason: "this exponent is not an integer",
        }));
    }

    let too_large = |span: Range<usize>| Error::new(vec![span], kind::InvalidExponent {
        reason: "this exponent is too large",
    });
    let mut value = token.lexeme.parse::<u32>()
        .map_err(|_| too_large(token.span.clone()))?;
    let mut end = token.span.end;

    // exponentiation is right-associative: `2^3^2` is `2^(3^2)`
    if input.next_if(TokenKind::Exp).is_some() {
        let (inner, inner_span) = parse_exponent(input, false)?;
        value = u32::try_from(inner)
            .ok()
            .and_then(|inner| value.checked_pow(inner))
            .ok_or_else(|| too_large(token.span.start..inner_span.end))?;
        end = inner_span.end;
    }

    let value = i64::from(value);
    match minus {
        Some(minus) => Ok((-value, minus.span.start..end)),
        None => Ok((value, token.span.start..end)),
    }
}

impl fmt::Display for Pow {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt_operand(f, &self.base, self.base.precedence() <= Precedence::Exp)?;
        write!(f, "^{}", self.exponent)
    }
}
