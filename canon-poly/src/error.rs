use ariadne::Fmt;
use canon_attrs::ErrorKind;
use canon_error::{ErrorKind, EXPR};
use canon_parser::VARIABLES;

/// A power has a negative exponent, which has no polynomial expansion.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot expand a power with negative exponent `{}`", exponent),
    labels = ["this power"],
    help = format!("only {} exponents can be expanded into a polynomial", "non-negative integer".fg(EXPR)),
)]
pub struct NegativeExponent {
    /// The exponent of the power.
    pub exponent: i64,
}

/// A variable that is not one of the allowed variable names was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unknown variable `{}`", letter),
    labels = ["this variable"],
    help = format!(
        "valid variable names are: {}",
        VARIABLES.iter().map(char::to_string).collect::<Vec<_>>().join(", ").fg(EXPR),
    ),
)]
pub struct UnknownVariable {
    /// The letter that was found.
    pub letter: char,
}

/// The exponent of some variable in the expansion does not fit in a 32-bit integer.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "exponent too large",
    labels = ["expanding this expression produces an exponent that is too large"],
)]
pub struct ExponentOverflow;

/// A coefficient of the expansion is infinite or not a number.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "coefficient out of range",
    labels = ["expanding this expression produces a coefficient that cannot be represented"],
    help = "coefficients must stay within the range of a 64-bit floating-point number",
)]
pub struct NonFiniteCoefficient;
