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

//! Uniform double-and-add scalar multiplication in extended coordinates.

#![allow(non_snake_case)]

use crate::constants::CurveParams;
use crate::edwards::ExtendedPoint;
use crate::errors::CurveError;
use crate::scalar::Scalar;
use crate::traits::Identity;

/// Perform uniform, variable-base scalar multiplication.
/// Computes scalar * point on the Ed25519 curve.
///
/// The scalar is scanned as exactly 256 bits, most significant first and
/// zero-padded at the top, so every accepted scalar costs the same 256
/// iterations; the scan never short-circuits at the leading one bit.
///
/// Setting u to the integer formed by the bits consumed so far, the loop
/// maintains the pair
///
/// Q = u * P0,    P = (u + 1) * P0.
///
/// Appending bit b updates u to 2u + b. Both branches perform one unified
/// addition and one doubling; the bit only decides which variable receives
/// which result:
///
/// * b = 0: the new u is 2u, so Q doubles and P becomes Q + P
///   (= (2u + 1) * P0);
/// * b = 1: the new u is 2u + 1, so Q becomes Q + P and P doubles.
///
/// After 256 bits, u = scalar and Q is the answer.
///
/// # Errors
///
/// Returns [`CurveError::OversizedScalar`] when the scalar is wider than
/// 256 bits. The check runs before any group operation; oversized scalars
/// are never truncated into range.
pub(crate) fn mul(
    point: &ExtendedPoint,
    scalar: &Scalar,
    params: &CurveParams,
) -> Result<ExtendedPoint, CurveError> {
    if scalar.bit_length() > Scalar::BITS {
        return Err(CurveError::OversizedScalar);
    }

    let mut Q = ExtendedPoint::identity();
    let mut P = point.clone();

    for bit in scalar.bits_be() {
        if bit {
            Q = Q.add(&P, params);
            P = P.double(params);
        } else {
            P = Q.add(&P, params);
            Q = Q.double(params);
        }
    }

    Ok(Q)
}
