use ariadne::Fmt;
use canon_attrs::ErrorKind;
use canon_error::{ErrorKind, EXPR};
use crate::{tokenizer::TokenKind, VARIABLES};

/// A character that does not begin any token was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unrecognized character `{}`", character),
    labels = ["I don't know what to do with this"],
    help = if character.is_alphabetic() {
        format!(
            "variables are single letters; valid variable names are: {}",
            VARIABLES.iter().map(char::to_string).collect::<Vec<_>>().join(", ").fg(EXPR),
        )
    } else {
        format!("equations may only contain numbers, variables, {}, parentheses, and {}", "+ - * ^ **".fg(EXPR), "=".fg(EXPR))
    },
)]
pub struct UnrecognizedChar {
    /// The character that was found.
    pub character: char,
}

/// The end of the equation was reached unexpectedly.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unexpected end of equation",
    labels = [format!("you might need to add another {} here", "term".fg(EXPR))],
)]
pub struct UnexpectedEof;

/// The end of the equation was expected, but something else was found.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "expected end of equation",
    labels = [format!("I could not understand the remaining {} here", "expression".fg(EXPR))],
)]
pub struct ExpectedEof;

/// An unexpected token was encountered.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("unexpected {}", found),
    labels = [format!("expected one of: {}", expected.iter().map(|t| t.to_string()).collect::<Vec<_>>().join(", "))],
)]
pub struct UnexpectedToken {
    /// The token(s) that were expected.
    pub expected: &'static [TokenKind],

    /// The token that was found.
    pub found: TokenKind,
}

/// A parenthesis was not closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is not closed"],
    help = if *opening {
        "add a closing parenthesis `)` somewhere after this"
    } else {
        "add an opening parenthesis `(` somewhere before this"
    },
)]
pub struct UnclosedParenthesis {
    /// Whether the parenthesis was an opening parenthesis `(`. Otherwise, the parenthesis was a
    /// closing parenthesis `)`.
    pub opening: bool,
}

/// There was no expression inside a pair of parentheses.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing expression inside parenthesis",
    labels = ["add an expression here"],
)]
pub struct EmptyParenthesis;

/// The equation has no `=` sign.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing `=` in equation",
    labels = [format!("expected {} here", "=".fg(EXPR))],
    help = "an equation has the form `<expression> = <expression>`",
)]
pub struct MissingEquals;

/// The equation has more than one `=` sign.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "cannot have more than one `=` in an equation",
    labels = ["this is an additional `=`"],
    help = "an equation has the form `<expression> = <expression>`",
)]
pub struct DuplicateEquals;

/// One side of the equation is empty.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("the {} side of the equation is empty", if *left { "left" } else { "right" }),
    labels = [format!("add an {} here", "expression".fg(EXPR))],
    help = "write `0` for a side with no terms",
)]
pub struct EmptySide {
    /// Whether the empty side is the left-hand side. Otherwise, it is the right-hand side.
    pub left: bool,
}

/// The exponent of a power is not an integer literal.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid exponent",
    labels = [*reason],
    help = format!("exponents must be {}, such as `x^2`", "integer literals".fg(EXPR)),
)]
pub struct InvalidExponent {
    /// Why the exponent was rejected.
    pub reason: &'static str,
}

/// A number literal could not be read as a floating-point value.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "invalid number",
    labels = ["this number could not be read"],
    help = format!("numbers are written like {}, with at most one decimal point", "3, 3.5, .5, or 2.5e-3".fg(EXPR)),
)]
pub struct InvalidNumber;
