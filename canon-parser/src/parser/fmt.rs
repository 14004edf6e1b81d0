use crate::parser::ast::expr::Expr;
use std::fmt::{Display, Formatter, Result};

/// Formats an operand of an expression, surrounding it with parentheses if `parenthesize` is set.
pub fn fmt_operand(f: &mut Formatter, expr: &Expr, parenthesize: bool) -> Result {
    if parenthesize {
        write!(f, "(")?;
        expr.fmt(f)?;
        write!(f, ")")
    } else {
        expr.fmt(f)
    }
}
