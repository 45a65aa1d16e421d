// -*- mode: rust; -*-
//
// This file is part of edwards25519.
// Copyright (c) 2016-2021 isis lovecruft
// Copyright (c) 2016-2019 Henry de Valence
// See LICENSE for licensing information.
//
// Authors:
// - isis agora lovecruft <isis@patternsinthevoid.net>
// - Henry de Valence <hdevalence@hdevalence.ca>

//! Field arithmetic modulo p = 2^255 - 19, on arbitrary-precision
//! integers.
//!
//! Elements are heap-allocated `BigUint` values kept in canonical reduced
//! form: the wrapped integer is in [0, p) at every boundary, and every
//! operation ends with a single canonicalizing reduction. Because the
//! representation is canonical, the derived equality on [`FieldElement`]
//! is exact field equality.
//!
//! The modulus is not a global. Operations are methods on [`Field`], the
//! explicit description of the field, so every call site names the
//! parameter record it computes under.

use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::errors::CurveError;

/// The prime field with p = 2^255 - 19, carried as an explicit value.
///
/// A `Field` is constructed once (usually as part of
/// [`CurveParams`](crate::constants::CurveParams)) and passed by reference
/// into every operation that reduces modulo p.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Field {
    pub(crate) p: BigUint,
}

/// A `FieldElement` represents an element of the field Z/(2^255 - 19).
///
/// The wrapped integer is always the canonical representative in [0, p);
/// the constructors and the operations on [`Field`] maintain this.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FieldElement(BigUint);

impl Field {
    /// Construct the field underlying the Ed25519 curve, with prime
    /// p = 2^255 - 19.
    pub fn ed25519() -> Field {
        Field {
            p: (BigUint::one() << 255) - BigUint::from(19u32),
        }
    }

    /// The field prime p.
    pub fn prime(&self) -> &BigUint {
        &self.p
    }

    /// Reduce an arbitrary non-negative integer to its canonical
    /// representative in [0, p).
    pub fn element(&self, value: BigUint) -> FieldElement {
        FieldElement(value % &self.p)
    }

    /// Add two field elements.
    pub fn add(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        FieldElement((&x.0 + &y.0) % &self.p)
    }

    /// Subtract `y` from `x`, mapping negative intermediates back into
    /// [0, p).
    pub fn sub(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        // x < p, so p + x - y never underflows for canonical y.
        FieldElement((&self.p + &x.0 - &y.0) % &self.p)
    }

    /// Multiply two field elements.
    pub fn mul(&self, x: &FieldElement, y: &FieldElement) -> FieldElement {
        FieldElement((&x.0 * &y.0) % &self.p)
    }

    /// Square a field element.
    pub fn square(&self, x: &FieldElement) -> FieldElement {
        self.mul(x, x)
    }

    /// Compute the multiplicative inverse of `x`.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NotInvertible`] when `x` is zero, the one
    /// element of a prime field without an inverse.
    pub fn invert(&self, x: &FieldElement) -> Result<FieldElement, CurveError> {
        x.0.modinv(&self.p)
            .map(FieldElement)
            .ok_or(CurveError::NotInvertible)
    }
}

impl FieldElement {
    /// Construct the additive identity.
    pub fn zero() -> FieldElement {
        FieldElement(BigUint::zero())
    }

    /// Construct the multiplicative identity.
    pub fn one() -> FieldElement {
        FieldElement(BigUint::one())
    }

    /// Determine if this `FieldElement` is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Borrow the canonical integer representative in [0, p).
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

#[cfg(test)]
mod test {
    use super::*;

    /// p in decimal, for pinning the constructed prime.
    static P_DECIMAL: &str =
        "57896044618658097711785492504343953926634992332820282019728792003956564819949";

    fn field() -> Field {
        Field::ed25519()
    }

    #[test]
    fn prime_matches_decimal_value() {
        let expected = BigUint::parse_bytes(P_DECIMAL.as_bytes(), 10).unwrap();
        assert_eq!(*field().prime(), expected);
    }

    #[test]
    fn element_reduces_values_at_or_above_p() {
        let f = field();
        assert_eq!(f.element(f.p.clone()), FieldElement::zero());
        assert_eq!(f.element(&f.p + 5u32), f.element(BigUint::from(5u32)));
    }

    #[test]
    fn addition_wraps_at_p() {
        let f = field();
        let p_minus_one = f.element(&f.p - 1u32);
        assert_eq!(f.add(&p_minus_one, &FieldElement::one()), FieldElement::zero());
    }

    #[test]
    fn subtraction_maps_negatives_into_range() {
        let f = field();
        let minus_one = f.sub(&FieldElement::zero(), &FieldElement::one());
        assert_eq!(minus_one, f.element(&f.p - 1u32));
    }

    #[test]
    fn multiplication_reduces_canonically() {
        let f = field();
        let p_minus_one = f.element(&f.p - 1u32);
        // (p - 1)^2 = p^2 - 2p + 1 = 1 (mod p)
        assert_eq!(f.mul(&p_minus_one, &p_minus_one), FieldElement::one());
        assert_eq!(f.square(&p_minus_one), FieldElement::one());
    }

    #[test]
    fn inversion_agrees_with_fermat_exponentiation() {
        let f = field();
        let x = f.element(BigUint::from(121666u32));
        let inverse = f.invert(&x).unwrap();
        // The fallback inverse: x^(p-2) mod p.
        let fermat = x.as_biguint().modpow(&(&f.p - 2u32), &f.p);
        assert_eq!(*inverse.as_biguint(), fermat);
        assert_eq!(f.mul(&x, &inverse), FieldElement::one());
    }

    #[test]
    fn inverting_zero_is_a_domain_error() {
        let f = field();
        assert_eq!(
            f.invert(&FieldElement::zero()),
            Err(CurveError::NotInvertible)
        );
    }

    #[test]
    fn inverse_of_one_is_one() {
        let f = field();
        assert_eq!(f.invert(&FieldElement::one()).unwrap(), FieldElement::one());
    }
}
