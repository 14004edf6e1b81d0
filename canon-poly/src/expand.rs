use canon_error::Error;
use canon_parser::{
    is_variable,
    parser::{
        ast::{Binary, Equation, Expr, Literal, Pow},
        token::op::BinOpKind,
    },
};
use crate::{error, polynomial::{Polynomial, ProductError}};
use log::trace;
use std::ops::Range;

/// Expands an expression into a polynomial, distributing every multiplication and power over
/// addition and subtraction.
pub fn expand(expr: &Expr) -> Result<Polynomial, Error> {
    let poly = match expr {
        Expr::Literal(Literal::Number(num)) => Polynomial::constant(num.value),
        Expr::Literal(Literal::Variable(var)) => {
            if !is_variable(var.name) {
                return Err(Error::new(vec![var.span.clone()], error::UnknownVariable {
                    letter: var.name,
                }));
            }
            Polynomial::var(var.name)
        },
        Expr::Neg(neg) => -expand(&neg.operand)?,
        Expr::Binary(binary) => expand_binary(binary)?,
        Expr::Pow(pow) => expand_pow(pow)?,
    };

    trace!("expanded `{}` into `{}`", expr, poly);
    Ok(poly)
}

fn expand_binary(binary: &Binary) -> Result<Polynomial, Error> {
    let lhs = expand(&binary.lhs)?;
    let rhs = expand(&binary.rhs)?;
    match binary.op.kind {
        BinOpKind::Add => Ok(lhs + rhs),
        BinOpKind::Sub => Ok(lhs - rhs),
        BinOpKind::Mul => lhs.checked_mul(&rhs).map_err(product_error(binary.span())),
    }
}

fn expand_pow(pow: &Pow) -> Result<Polynomial, Error> {
    if pow.exponent < 0 {
        return Err(Error::new(vec![pow.span()], error::NegativeExponent {
            exponent: pow.exponent,
        }));
    }

    let exponent = u32::try_from(pow.exponent)
        .map_err(|_| Error::new(vec![pow.span()], error::ExponentOverflow))?;

    // `0^0` is `1`, like any other base
    if exponent == 0 {
        return Ok(Polynomial::constant(1.0));
    }

    expand(&pow.base)?
        .checked_pow(exponent)
        .map_err(product_error(pow.span()))
}

/// Returns a function that reports a failed product of the expression at `span`.
fn product_error(span: Range<usize>) -> impl FnOnce(ProductError) -> Error {
    move |err| match err {
        ProductError::ExponentOverflow => Error::new(vec![span], error::ExponentOverflow),
        ProductError::NonFiniteCoefficient => Error::new(vec![span], error::NonFiniteCoefficient),
    }
}

impl TryFrom<&Expr> for Polynomial {
    type Error = Error;

    fn try_from(expr: &Expr) -> Result<Self, Self::Error> {
        expand(expr)
    }
}

impl Polynomial {
    /// Expands both sides of the equation and returns `lhs - rhs`, the polynomial `P` such that
    /// the equation is equivalent to `P = 0`.
    pub fn from_equation(equation: &Equation) -> Result<Self, Error> {
        let poly = expand(&equation.lhs)? - expand(&equation.rhs)?;
        if !poly.is_finite() {
            return Err(Error::new(vec![equation.span()], error::NonFiniteCoefficient));
        }
        Ok(poly)
    }
}

#[cfg(test)]
mod tests {
    use canon_parser::parser::{
        ast::{LitVar, Neg},
        Parser,
    };
    use crate::monomial::Monomial;
    use pretty_assertions::assert_eq;
    use super::*;

    fn expand_str(source: &str) -> Result<Polynomial, Error> {
        let expr = Parser::new(source)?.try_parse_full::<Expr>()?;
        expand(&expr)
    }

    fn poly(terms: &[(&[(char, u32)], f64)]) -> Polynomial {
        terms.iter()
            .map(|(vars, coeff)| (vars.iter().copied().collect::<Monomial>(), *coeff))
            .collect()
    }

    #[test]
    fn literals() {
        assert_eq!(expand_str("3.5").unwrap(), Polynomial::constant(3.5));
        assert_eq!(expand_str("z").unwrap(), Polynomial::var('z'));
        assert_eq!(expand_str("0").unwrap(), Polynomial::zero());
    }

    #[test]
    fn implicit_products() {
        assert_eq!(expand_str("3.5xy").unwrap(), poly(&[(&[('x', 1), ('y', 1)], 3.5)]));
        assert_eq!(expand_str("2x x").unwrap(), poly(&[(&[('x', 2)], 2.0)]));
    }

    #[test]
    fn distribution() {
        assert_eq!(
            expand_str("2(x + y) - (x - 3)").unwrap(),
            poly(&[(&[('x', 1)], 1.0), (&[('y', 1)], 2.0), (&[], 3.0)]),
        );
        assert_eq!(
            expand_str("(x + 1)(x - 1)").unwrap(),
            poly(&[(&[('x', 2)], 1.0), (&[], -1.0)]),
        );
    }

    #[test]
    fn powers() {
        assert_eq!(
            expand_str("(x + y)^2").unwrap(),
            poly(&[(&[('x', 2)], 1.0), (&[('x', 1), ('y', 1)], 2.0), (&[('y', 2)], 1.0)]),
        );
        assert_eq!(expand_str("2x^2").unwrap(), poly(&[(&[('x', 2)], 2.0)]));
        assert_eq!(expand_str("-x^2").unwrap(), poly(&[(&[('x', 2)], -1.0)]));
        assert_eq!(expand_str("x^2^3").unwrap(), poly(&[(&[('x', 8)], 1.0)]));
        assert_eq!(expand_str("2^10").unwrap(), Polynomial::constant(1024.0));
    }

    #[test]
    fn zeroth_power() {
        assert_eq!(expand_str("(x + y)^0").unwrap(), Polynomial::constant(1.0));
        assert_eq!(expand_str("(x - x)^0").unwrap(), Polynomial::constant(1.0));
        assert_eq!(expand_str("0^0").unwrap(), Polynomial::constant(1.0));
    }

    #[test]
    fn negative_exponent() {
        let err = expand_str("x + 2^-1").unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&error::NegativeExponent { exponent: -1 }));
        assert_eq!(err.spans[0], 4..8);
    }

    #[test]
    fn exponent_overflow() {
        let err = expand_str("x^4294967295 x").unwrap_err();
        assert!(err.is::<error::ExponentOverflow>());
        assert_eq!(err.spans[0], 0..14);
    }

    #[test]
    fn unknown_variable() {
        // unreachable through the tokenizer, which only accepts `t` through `z`
        let expr = Expr::Neg(Neg {
            operand: Box::new(Expr::Literal(Literal::Variable(LitVar { name: 'a', span: 1..2 }))),
            span: 0..2,
        });

        let err = expand(&expr).unwrap_err();
        assert_eq!(err.downcast_ref(), Some(&error::UnknownVariable { letter: 'a' }));
        assert_eq!(err.spans[0], 1..2);
    }

    #[test]
    fn equation_moves_rhs_to_lhs() {
        let equation = Parser::new("x^2 = 2x - 1").unwrap().try_parse_full::<Equation>().unwrap();
        assert_eq!(
            Polynomial::from_equation(&equation).unwrap(),
            poly(&[(&[('x', 1)], -2.0), (&[('x', 2)], 1.0), (&[], 1.0)]),
        );
    }

    #[test]
    fn non_finite_product() {
        let err = expand_str("1e300 * 1e300 x").unwrap_err();
        assert!(err.is::<error::NonFiniteCoefficient>());
        assert_eq!(err.spans[0], 0..13);
    }

    #[test]
    fn non_finite_power_stops_early() {
        let err = expand_str("y + (x + 1)^100000").unwrap_err();
        assert!(err.is::<error::NonFiniteCoefficient>());
        assert_eq!(err.spans[0], 4..18);
    }

    #[test]
    fn non_finite_sum() {
        let equation = Parser::new("1e308x + 1e308x = 0").unwrap().try_parse_full::<Equation>().unwrap();
        let err = Polynomial::from_equation(&equation).unwrap_err();
        assert!(err.is::<error::NonFiniteCoefficient>());
        assert_eq!(err.spans[0], 0..19);
    }
}
