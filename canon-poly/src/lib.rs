//! Reduces equations such as `x^2 + 3.5xy + y = y^2 - xy + y` to the canonical form `P = 0`, where
//! `P` is the fully expanded difference of the two sides:
//!
//! ```
//! use canon_poly::canonicalize;
//!
//! assert_eq!(canonicalize("x^2 + 3.5xy + y = y^2 - xy + y").unwrap(), "x^2 - y^2 + 4.5xy = 0");
//! assert_eq!(canonicalize("x = 1").unwrap(), "x - 1 = 0");
//! ```
//!
//! The equation is tokenized and parsed by [`canon_parser`], expanded into a [`Polynomial`] by
//! [`expand`], and rendered with the terms in the canonical order described on [`Monomial`].

pub mod error;
pub mod expand;
pub mod monomial;
pub mod polynomial;

use canon_error::Error;
use canon_parser::parser::{ast::Equation, Parser};
use log::debug;
use std::{fmt, io};

pub use expand::expand;
pub use monomial::Monomial;
pub use polynomial::{Polynomial, ZERO_TOLERANCE};

/// An error that occurred while canonicalizing an equation, grouped by the stage that produced
/// it.
#[derive(Debug)]
pub enum EquationError {
    /// The equation contains a character that does not belong to any token.
    Lex(Error),

    /// The equation is not syntactically valid.
    Parse(Error),

    /// The equation could not be expanded into a polynomial.
    Expand(Error),
}

impl EquationError {
    /// Returns the name of the stage that produced the error.
    pub fn stage(&self) -> &'static str {
        match self {
            Self::Lex(_) => "lex",
            Self::Parse(_) => "parse",
            Self::Expand(_) => "expand",
        }
    }

    /// Returns the underlying error.
    pub fn inner(&self) -> &Error {
        match self {
            Self::Lex(err) | Self::Parse(err) | Self::Expand(err) => err,
        }
    }

    /// Returns the byte offset in the equation at which the error is reported.
    pub fn position(&self) -> usize {
        self.inner().position()
    }

    /// Returns the message of the error, without the stage or position.
    pub fn message(&self) -> String {
        self.inner().to_string()
    }

    /// Writes the full report of this error to the given writer, using `input` as the source
    /// code.
    pub fn write_report<W: io::Write>(&self, src_id: &str, input: &str, writer: W) -> io::Result<()> {
        self.inner().write_report(src_id, input, writer)
    }

    /// Reports this error to stderr, using `input` as the source code.
    pub fn report_to_stderr(&self, src_id: &str, input: &str) -> io::Result<()> {
        self.inner().report_to_stderr(src_id, input)
    }
}

impl fmt::Display for EquationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} error at position {}: {}", self.stage(), self.position(), self.message())
    }
}

impl std::error::Error for EquationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(self.inner())
    }
}

/// Tokenizes and parses an equation.
pub fn parse_equation(input: &str) -> Result<Equation, EquationError> {
    let mut parser = Parser::new(input).map_err(EquationError::Lex)?;
    parser.try_parse_full::<Equation>().map_err(EquationError::Parse)
}

/// Returns the canonical form of an equation, `P = 0`, or `0 = 0` if both sides are equal.
pub fn canonicalize(input: &str) -> Result<String, EquationError> {
    debug!("canonicalizing `{}`", input);

    let equation = parse_equation(input)?;
    debug!("parsed as `{}`", equation);

    let poly = Polynomial::from_equation(&equation).map_err(EquationError::Expand)?;
    let canonical = format!("{} = 0", poly);
    debug!("canonical form: `{}`", canonical);
    Ok(canonical)
}
