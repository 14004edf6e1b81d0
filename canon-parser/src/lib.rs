//! Tokenizer and recursive-descent parser for polynomial equations such as
//! `x^2 + 3.5xy + y = y^2 - xy + y`.
//!
//! The entry point is [`parser::Parser`], which tokenizes the source with [`tokenizer`] and parses
//! it into the syntax tree defined in [`parser::ast`]:
//!
//! ```
//! use canon_parser::parser::{ast::Equation, Parser};
//!
//! let mut parser = Parser::new("2(x + y) = 3x").unwrap();
//! let equation = parser.try_parse_full::<Equation>().unwrap();
//! assert_eq!(equation.to_string(), "2(x + y) = 3x");
//! ```

pub mod parser;
pub mod tokenizer;

/// The variable names that are allowed in an equation.
pub const VARIABLES: [char; 7] = ['t', 'u', 'v', 'w', 'x', 'y', 'z'];

/// Returns true if `c` is one of the allowed [`VARIABLES`].
pub fn is_variable(c: char) -> bool {
    VARIABLES.contains(&c)
}
