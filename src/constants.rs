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

//! Curve parameters for the Ed25519 curve.
//!
//! The parameters are not exposed as global constants. [`CurveParams`]
//! packages the field, the curve coefficient, the basepoint, and the
//! subgroup order into one read-only record; callers construct it once
//! with [`CurveParams::ed25519`] and pass it by reference into every
//! operation. The raw numbers live here as fixed big-endian byte arrays
//! so that construction is infallible.

use num_bigint::BigUint;

use crate::edwards::AffinePoint;
use crate::field::{Field, FieldElement};

/// Edwards curve coefficient d = -121665/121666 (mod p), as big-endian
/// bytes. In decimal:
///
/// 37095705934669439343138083508754565189542113879843219016388785533085940283555
const EDWARDS_D: [u8; 32] = [
    0x52, 0x03, 0x6c, 0xee, 0x2b, 0x6f, 0xfe, 0x73,
    0x8c, 0xc7, 0x40, 0x79, 0x77, 0x79, 0xe8, 0x98,
    0x00, 0x70, 0x0a, 0x4d, 0x41, 0x41, 0xd8, 0xab,
    0x75, 0xeb, 0x4d, 0xca, 0x13, 0x59, 0x78, 0xa3,
];

/// x coordinate of the basepoint, as big-endian bytes. In decimal:
///
/// 15112221349535400772501151409588531511454012693041857206046113283949847762202
const BASEPOINT_X: [u8; 32] = [
    0x21, 0x69, 0x36, 0xd3, 0xcd, 0x6e, 0x53, 0xfe,
    0xc0, 0xa4, 0xe2, 0x31, 0xfd, 0xd6, 0xdc, 0x5c,
    0x69, 0x2c, 0xc7, 0x60, 0x95, 0x25, 0xa7, 0xb2,
    0xc9, 0x56, 0x2d, 0x60, 0x8f, 0x25, 0xd5, 0x1a,
];

/// y coordinate of the basepoint, equal to 4/5 (mod p), as big-endian
/// bytes. In decimal:
///
/// 46316835694926478169428394003475163141307993866256225615783033603165251855960
const BASEPOINT_Y: [u8; 32] = [
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66,
    0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x66, 0x58,
];

/// Order of the basepoint subgroup,
/// l = 2^252 + 27742317777372353535851937790883648493, as big-endian
/// bytes.
const BASEPOINT_ORDER: [u8; 32] = [
    0x10, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
    0x14, 0xde, 0xf9, 0xde, 0xa2, 0xf7, 0x9c, 0xd6,
    0x58, 0x12, 0x63, 0x1a, 0x5c, 0xf5, 0xd3, 0xed,
];

/// The complete parameter set of the Ed25519 curve.
///
/// One record carries everything the arithmetic depends on. It is
/// constructed once and then only ever borrowed; no operation in the
/// crate mutates it or reaches for hidden state. The curve coefficient
/// a = -1 is not a field: the group-law formulas are specialized to it.
#[derive(Clone, Debug)]
pub struct CurveParams {
    /// The prime field the curve is defined over.
    pub field: Field,
    /// The Edwards curve coefficient d.
    pub d: FieldElement,
    /// 2d (mod p), cached at construction for the unified addition.
    pub d2: FieldElement,
    /// The conventional basepoint G.
    pub basepoint: AffinePoint,
    /// The prime order l of the basepoint subgroup.
    pub basepoint_order: BigUint,
}

impl CurveParams {
    /// Construct the Ed25519 parameter set.
    pub fn ed25519() -> CurveParams {
        let field = Field::ed25519();
        let d = field.element(BigUint::from_bytes_be(&EDWARDS_D));
        let d2 = field.add(&d, &d);
        let basepoint = AffinePoint {
            x: field.element(BigUint::from_bytes_be(&BASEPOINT_X)),
            y: field.element(BigUint::from_bytes_be(&BASEPOINT_Y)),
        };

        CurveParams {
            field,
            d,
            d2,
            basepoint,
            basepoint_order: BigUint::from_bytes_be(&BASEPOINT_ORDER),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::traits::ValidityCheck;
    use num_traits::One;

    #[test]
    fn d_is_ratio_of_minus_121665_over_121666() {
        let params = CurveParams::ed25519();
        let f = &params.field;
        let numerator = f.sub(&FieldElement::zero(), &f.element(BigUint::from(121665u32)));
        let denominator = f.element(BigUint::from(121666u32));
        let ratio = f.mul(&numerator, &f.invert(&denominator).unwrap());
        assert_eq!(ratio, params.d);
    }

    #[test]
    fn d2_matches_its_decimal_value() {
        // 2d mod p, computed with ed25519.py.
        let params = CurveParams::ed25519();
        let expected = params.field.element(
            BigUint::parse_bytes(
                b"16295367250680780974490674513165176452449235426866156013048779062215315747161",
                10,
            )
            .unwrap(),
        );
        assert_eq!(params.d2, expected);
    }

    #[test]
    fn basepoint_y_is_four_fifths() {
        let params = CurveParams::ed25519();
        let f = &params.field;
        let four = f.element(BigUint::from(4u32));
        let five = f.element(BigUint::from(5u32));
        let ratio = f.mul(&four, &f.invert(&five).unwrap());
        assert_eq!(ratio, params.basepoint.y);
    }

    #[test]
    fn basepoint_order_is_2_252_plus_delta() {
        let params = CurveParams::ed25519();
        let delta =
            BigUint::parse_bytes(b"27742317777372353535851937790883648493", 10).unwrap();
        assert_eq!(params.basepoint_order, (BigUint::one() << 252) + delta);
    }

    #[test]
    fn basepoint_satisfies_the_curve_equation() {
        let params = CurveParams::ed25519();
        assert!(params.basepoint.is_valid(&params));
        assert!(params.basepoint.to_extended(&params).is_valid(&params));
    }
}
