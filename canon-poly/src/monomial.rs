use std::{cmp::Ordering, collections::BTreeMap, fmt};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A product of variables raised to positive integer powers, such as `x^2y`.
///
/// Variables are kept sorted by letter and every stored exponent is at least 1, so two monomials
/// describing the same product are always equal. The monomial with no variables is the constant
/// monomial.
///
/// The [`Ord`] implementation is the canonical order in which terms are rendered:
///
/// 1. The constant monomial comes after every other monomial.
/// 2. Lower total degree comes first.
/// 3. Fewer distinct variables comes first.
/// 4. Otherwise, the `(variable, exponent)` sequences are compared lexicographically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Monomial {
    vars: BTreeMap<char, u32>,
}

impl Monomial {
    /// Returns the constant monomial.
    pub fn constant() -> Self {
        Self::default()
    }

    /// Returns the monomial consisting of a single variable to the first power.
    pub fn var(name: char) -> Self {
        Self::from_iter([(name, 1)])
    }

    /// Returns true if this is the constant monomial.
    pub fn is_constant(&self) -> bool {
        self.vars.is_empty()
    }

    /// Returns the total degree of the monomial, the sum of its exponents.
    pub fn degree(&self) -> u64 {
        self.vars.values().map(|&exp| u64::from(exp)).sum()
    }

    /// Returns the number of distinct variables in the monomial.
    pub fn num_vars(&self) -> usize {
        self.vars.len()
    }

    /// Returns the exponent of the given variable, which is 0 if the variable does not appear.
    pub fn exponent(&self, name: char) -> u32 {
        self.vars.get(&name).copied().unwrap_or(0)
    }

    /// Returns an iterator over the variables and their exponents, sorted by variable.
    pub fn iter(&self) -> impl Iterator<Item = (char, u32)> + '_ {
        self.vars.iter().map(|(&name, &exp)| (name, exp))
    }

    /// Multiplies two monomials by adding the exponents of shared variables.
    ///
    /// Returns [`None`] if an exponent overflows.
    pub fn checked_mul(&self, other: &Self) -> Option<Self> {
        let mut vars = self.vars.clone();
        for (&name, &exp) in &other.vars {
            let entry = vars.entry(name).or_insert(0);
            *entry = entry.checked_add(exp)?;
        }
        Some(Self { vars })
    }
}

/// Builds a monomial from `(variable, exponent)` pairs. Repeated variables have their exponents
/// added (saturating at [`u32::MAX`]), and zero exponents are dropped.
impl FromIterator<(char, u32)> for Monomial {
    fn from_iter<I: IntoIterator<Item = (char, u32)>>(iter: I) -> Self {
        let mut vars = BTreeMap::new();
        for (name, exp) in iter {
            let entry = vars.entry(name).or_insert(0u32);
            *entry = entry.saturating_add(exp);
        }
        vars.retain(|_, exp| *exp > 0);
        Self { vars }
    }
}

impl Ord for Monomial {
    fn cmp(&self, other: &Self) -> Ordering {
        self.is_constant().cmp(&other.is_constant())
            .then_with(|| self.degree().cmp(&other.degree()))
            .then_with(|| self.num_vars().cmp(&other.num_vars()))
            .then_with(|| self.iter().cmp(other.iter()))
    }
}

impl PartialOrd for Monomial {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Writes the variables in alphabetical order, each followed by `^k` if its exponent is greater
/// than 1. The constant monomial is written as the empty string.
impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (name, exp) in self.iter() {
            write!(f, "{}", name)?;
            if exp > 1 {
                write!(f, "^{}", exp)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn mono(vars: &[(char, u32)]) -> Monomial {
        vars.iter().copied().collect()
    }

    #[test]
    fn normalized() {
        assert_eq!(mono(&[('y', 1), ('x', 2)]), mono(&[('x', 2), ('y', 1)]));
        assert_eq!(mono(&[('x', 1), ('x', 1)]), mono(&[('x', 2)]));
        assert_eq!(mono(&[('x', 0)]), Monomial::constant());
    }

    #[test]
    fn multiply() {
        let product = mono(&[('x', 2), ('y', 1)]).checked_mul(&mono(&[('y', 3), ('z', 1)])).unwrap();
        assert_eq!(product, mono(&[('x', 2), ('y', 4), ('z', 1)]));
        assert_eq!(product.degree(), 7);
        assert_eq!(product.num_vars(), 3);
        assert_eq!(product.exponent('y'), 4);
        assert_eq!(product.exponent('t'), 0);
    }

    #[test]
    fn multiply_overflow() {
        let big = mono(&[('x', u32::MAX)]);
        assert_eq!(big.checked_mul(&Monomial::var('x')), None);
        assert_eq!(big.checked_mul(&Monomial::var('y')), Some(mono(&[('x', u32::MAX), ('y', 1)])));
    }

    #[test]
    fn display() {
        assert_eq!(Monomial::constant().to_string(), "");
        assert_eq!(mono(&[('y', 1), ('x', 2)]).to_string(), "x^2y");
        assert_eq!(mono(&[('z', 10), ('t', 1)]).to_string(), "tz^10");
    }

    #[test]
    fn canonical_order() {
        let mut monomials = vec![
            Monomial::constant(),
            mono(&[('x', 1), ('y', 1)]),
            mono(&[('y', 2)]),
            mono(&[('x', 3)]),
            mono(&[('x', 2)]),
            Monomial::var('y'),
            Monomial::var('x'),
        ];
        monomials.sort();

        let rendered = monomials.iter().map(Monomial::to_string).collect::<Vec<_>>();
        assert_eq!(rendered, vec!["x", "y", "x^2", "y^2", "xy", "x^3", ""]);
    }
}
