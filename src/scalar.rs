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

//! Arbitrary-width scalars and the fixed-width bit view consumed by the
//! scalar-multiplication ladder.
//!
//! A [`Scalar`] is a plain non-negative integer. It is deliberately not
//! reduced modulo the group order: multiplying by l and by 0 are distinct
//! computations even though they land on the same point, and callers may
//! rely on that. The only width constraint in the crate is the ladder's,
//! which rejects scalars wider than 256 bits at the point of use.

use num_bigint::BigUint;

/// A non-negative integer scalar.
///
/// Scalars convert losslessly from the unsigned integer primitives and
/// from [`BigUint`]; construction never fails. Width is checked by scalar
/// multiplication, not here.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Scalar(pub(crate) BigUint);

impl Scalar {
    /// Width of the bit window the ladder scans, and the widest scalar
    /// multiplication accepts.
    pub(crate) const BITS: u64 = 256;

    /// The position of the highest set bit; zero for the zero scalar.
    pub fn bit_length(&self) -> u64 {
        self.0.bits()
    }

    /// Iterator over exactly 256 bits of the scalar, most significant
    /// first, zero-padded at the top for narrow values.
    ///
    /// Bits above position 255 are never visited; callers enforce the
    /// width bound before scanning.
    pub(crate) fn bits_be(&self) -> impl Iterator<Item = bool> + '_ {
        (0..Scalar::BITS).rev().map(move |i| self.0.bit(i))
    }
}

impl From<BigUint> for Scalar {
    fn from(value: BigUint) -> Scalar {
        Scalar(value)
    }
}

macro_rules! impl_scalar_from_uint {
    ($($t:ty),+) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Scalar {
                    Scalar(BigUint::from(value))
                }
            }
        )+
    };
}

impl_scalar_from_uint!(u8, u16, u32, u64, u128);

#[cfg(test)]
mod test {
    use super::*;
    use num_traits::One;

    #[test]
    fn bit_view_is_exactly_256_wide() {
        assert_eq!(Scalar::from(0u8).bits_be().count(), 256);
        assert_eq!(Scalar::from(u128::MAX).bits_be().count(), 256);
    }

    #[test]
    fn bit_view_is_big_endian_and_left_padded() {
        // 11 = 0b1011
        let bits: Vec<bool> = Scalar::from(11u8).bits_be().collect();
        assert!(bits[..252].iter().all(|b| !b));
        assert_eq!(bits[252..], [true, false, true, true]);
    }

    #[test]
    fn bit_length_counts_to_the_highest_set_bit() {
        assert_eq!(Scalar::from(0u8).bit_length(), 0);
        assert_eq!(Scalar::from(1u8).bit_length(), 1);
        assert_eq!(Scalar::from(255u8).bit_length(), 8);
        assert_eq!(Scalar::from(256u16).bit_length(), 9);
        let two_pow_256 = Scalar::from(BigUint::one() << 256);
        assert_eq!(two_pow_256.bit_length(), 257);
    }

    #[test]
    fn conversions_from_primitives_agree() {
        assert_eq!(Scalar::from(897987897u32), Scalar::from(897987897u64));
        assert_eq!(
            Scalar::from(BigUint::from(897987897u32)),
            Scalar::from(897987897u128)
        );
    }
}
