use crate::monomial::Monomial;
use std::{collections::BTreeMap, fmt, ops::{Add, Neg, Sub}};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Coefficients whose magnitude is below this value are treated as zero, and their terms removed
/// from the polynomial.
pub const ZERO_TOLERANCE: f64 = 1e-9;

/// The reason a product of two polynomials could not be computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductError {
    /// The exponent of some variable does not fit in a `u32`.
    ExponentOverflow,

    /// Some coefficient of the product is infinite or NaN.
    NonFiniteCoefficient,
}

/// A sum of monomials with real coefficients.
///
/// No term of a polynomial ever has a coefficient within [`ZERO_TOLERANCE`] of zero; every
/// operation removes such terms before returning. The zero polynomial has no terms at all.
///
/// Terms are stored, iterated, and rendered in the canonical order defined by [`Monomial`]'s
/// [`Ord`] implementation.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polynomial {
    terms: BTreeMap<Monomial, f64>,
}

impl Polynomial {
    /// Returns the zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Returns a constant polynomial.
    pub fn constant(value: f64) -> Self {
        Self::from_iter([(Monomial::constant(), value)])
    }

    /// Returns the polynomial consisting of a single variable.
    pub fn var(name: char) -> Self {
        Self::from_iter([(Monomial::var(name), 1.0)])
    }

    /// Returns true if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the number of terms in the polynomial.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Returns true if the polynomial has no terms. Equivalent to [`Polynomial::is_zero`].
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the coefficient of the given monomial, which is 0 if the monomial does not appear.
    pub fn coefficient(&self, monomial: &Monomial) -> f64 {
        self.terms.get(monomial).copied().unwrap_or(0.0)
    }

    /// Returns an iterator over the terms of the polynomial in canonical order.
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, f64)> + '_ {
        self.terms.iter().map(|(monomial, &coeff)| (monomial, coeff))
    }

    /// Returns true if every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.terms.values().all(|coeff| coeff.is_finite())
    }

    /// Adds `coeff * monomial` to the polynomial, without pruning.
    fn add_term(&mut self, monomial: Monomial, coeff: f64) {
        *self.terms.entry(monomial).or_insert(0.0) += coeff;
    }

    /// Removes every term whose coefficient is within [`ZERO_TOLERANCE`] of zero.
    fn prune(mut self) -> Self {
        self.terms.retain(|_, coeff| coeff.abs() >= ZERO_TOLERANCE || coeff.is_nan());
        self
    }

    /// Multiplies two polynomials, distributing every term of `self` over every term of `other`.
    ///
    /// Returns an error if the exponent of some variable overflows, or if some coefficient of the
    /// product is not finite.
    pub fn checked_mul(&self, other: &Self) -> Result<Self, ProductError> {
        let mut product = Self::zero();
        for (lhs, &lhs_coeff) in &self.terms {
            for (rhs, &rhs_coeff) in &other.terms {
                let monomial = lhs.checked_mul(rhs).ok_or(ProductError::ExponentOverflow)?;
                product.add_term(monomial, lhs_coeff * rhs_coeff);
            }
        }

        if !product.is_finite() {
            return Err(ProductError::NonFiniteCoefficient);
        }
        Ok(product.prune())
    }

    /// Raises the polynomial to a non-negative integer power. Any polynomial to the power of 0,
    /// including the zero polynomial, is the constant `1`.
    ///
    /// Returns an error as soon as one of the intermediate products fails, see
    /// [`Polynomial::checked_mul`].
    pub fn checked_pow(&self, exponent: u32) -> Result<Self, ProductError> {
        // exponentiation by squaring
        let mut result = Self::constant(1.0);
        let mut base = self.clone();
        let mut exponent = exponent;
        while exponent > 0 {
            if exponent & 1 == 1 {
                result = result.checked_mul(&base)?;
            }
            exponent >>= 1;
            if exponent > 0 {
                base = base.checked_mul(&base)?;
            }
        }
        Ok(result)
    }
}

/// Builds a polynomial from `(monomial, coefficient)` pairs, combining like terms.
impl FromIterator<(Monomial, f64)> for Polynomial {
    fn from_iter<I: IntoIterator<Item = (Monomial, f64)>>(iter: I) -> Self {
        let mut poly = Self::zero();
        for (monomial, coeff) in iter {
            poly.add_term(monomial, coeff);
        }
        poly.prune()
    }
}

impl Add for Polynomial {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self::Output {
        for (monomial, coeff) in rhs.terms {
            self.add_term(monomial, coeff);
        }
        self.prune()
    }
}

impl Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        self + -rhs
    }
}

impl Neg for Polynomial {
    type Output = Self;

    fn neg(mut self) -> Self::Output {
        self.terms.values_mut().for_each(|coeff| *coeff = -*coeff);
        self
    }
}

/// Renders the terms in canonical order. The first term has a leading `-` only if its coefficient
/// is negative, and the other terms are joined with ` + ` or ` - `. A coefficient of exactly 1 is
/// omitted, unless the term is constant. The zero polynomial is rendered as `0`.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        for (i, (monomial, coeff)) in self.terms().enumerate() {
            let negative = coeff.is_sign_negative();
            if i == 0 {
                if negative {
                    write!(f, "-")?;
                }
            } else {
                write!(f, " {} ", if negative { '-' } else { '+' })?;
            }

            let magnitude = coeff.abs();
            if monomial.is_constant() || magnitude != 1.0 {
                // `Display` for `f64` writes the shortest string that reads back as the same
                // value, and never uses exponent notation
                write!(f, "{}", magnitude)?;
            }
            write!(f, "{}", monomial)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_float_eq::{
        afe_abs,
        afe_relative_error_msg,
        afe_is_relative_eq,
        assert_float_relative_eq,
    };
    use pretty_assertions::assert_eq;
    use super::*;

    fn mono(vars: &[(char, u32)]) -> Monomial {
        vars.iter().copied().collect()
    }

    /// `x + y`
    fn x_plus_y() -> Polynomial {
        Polynomial::var('x') + Polynomial::var('y')
    }

    #[test]
    fn combine_like_terms() {
        let poly = Polynomial::var('x') + Polynomial::constant(2.0) + Polynomial::var('x');
        assert_eq!(poly.len(), 2);
        assert_float_relative_eq!(poly.coefficient(&Monomial::var('x')), 2.0);
        assert_float_relative_eq!(poly.coefficient(&Monomial::constant()), 2.0);
    }

    #[test]
    fn cancellation_removes_term() {
        let poly = x_plus_y() - Polynomial::var('x');
        assert_eq!(poly, Polynomial::var('y'));

        let poly = x_plus_y() - x_plus_y();
        assert!(poly.is_zero());
    }

    #[test]
    fn tiny_coefficients_are_pruned() {
        let poly = Polynomial::constant(0.1) + Polynomial::constant(0.2) - Polynomial::constant(0.3);
        assert!(poly.is_zero());

        assert!(Polynomial::constant(1e-10).is_zero());
        assert!(!Polynomial::constant(1e-8).is_zero());
    }

    #[test]
    fn distribute() {
        let product = x_plus_y().checked_mul(&(Polynomial::var('x') - Polynomial::var('y'))).unwrap();
        assert_eq!(product, Polynomial::from_iter([
            (mono(&[('x', 2)]), 1.0),
            (mono(&[('y', 2)]), -1.0),
        ]));
    }

    #[test]
    fn multiply_by_zero() {
        let product = x_plus_y().checked_mul(&Polynomial::zero()).unwrap();
        assert!(product.is_zero());
    }

    #[test]
    fn square_of_sum() {
        let square = x_plus_y().checked_pow(2).unwrap();
        assert_eq!(square.len(), 3);
        assert_float_relative_eq!(square.coefficient(&mono(&[('x', 2)])), 1.0);
        assert_float_relative_eq!(square.coefficient(&mono(&[('x', 1), ('y', 1)])), 2.0);
        assert_float_relative_eq!(square.coefficient(&mono(&[('y', 2)])), 1.0);
    }

    #[test]
    fn binomial_coefficients() {
        let poly = (Polynomial::var('x') + Polynomial::constant(1.0)).checked_pow(5).unwrap();
        let coeffs = (0..=5)
            .map(|k| poly.coefficient(&mono(&[('x', k)])))
            .collect::<Vec<_>>();
        assert_eq!(coeffs, vec![1.0, 5.0, 10.0, 10.0, 5.0, 1.0]);
    }

    #[test]
    fn zeroth_power_is_one() {
        assert_eq!(x_plus_y().checked_pow(0).unwrap(), Polynomial::constant(1.0));
        assert_eq!(Polynomial::zero().checked_pow(0).unwrap(), Polynomial::constant(1.0));
        assert!(Polynomial::zero().checked_pow(3).unwrap().is_zero());
    }

    #[test]
    fn huge_power_of_monomial() {
        let poly = Polynomial::var('x').checked_pow(u32::MAX).unwrap();
        assert_eq!(poly.len(), 1);
        assert_float_relative_eq!(poly.coefficient(&mono(&[('x', u32::MAX)])), 1.0);

        assert_eq!(poly.checked_mul(&Polynomial::var('x')), Err(ProductError::ExponentOverflow));
    }

    #[test]
    fn overflowing_coefficient() {
        let big = Polynomial::from_iter([(Monomial::var('x'), 1e200)]);
        assert_eq!(big.checked_mul(&big), Err(ProductError::NonFiniteCoefficient));
    }

    #[test]
    fn power_stops_at_first_overflowing_coefficient() {
        // the binomial coefficients of `(x + 1)^n` leave the range of `f64` near `n = 1030`, long
        // before the squaring would finish
        let poly = Polynomial::var('x') + Polynomial::constant(1.0);
        assert_eq!(poly.checked_pow(100_000), Err(ProductError::NonFiniteCoefficient));
        assert_eq!(poly.checked_pow(1000).map(|poly| poly.len()), Ok(1001));
    }

    #[test]
    fn display() {
        assert_eq!(Polynomial::zero().to_string(), "0");
        assert_eq!(Polynomial::constant(-1.0).to_string(), "-1");

        let poly = Polynomial::from_iter([
            (Monomial::constant(), 1.0),
            (mono(&[('x', 1), ('y', 1)]), 4.5),
            (mono(&[('y', 2)]), -1.0),
            (mono(&[('x', 2)]), 1.0),
        ]);
        assert_eq!(poly.to_string(), "x^2 - y^2 + 4.5xy + 1");

        let poly = Polynomial::from_iter([
            (Monomial::var('x'), -2.0),
            (Monomial::constant(), -0.25),
        ]);
        assert_eq!(poly.to_string(), "-2x - 0.25");
    }
}
