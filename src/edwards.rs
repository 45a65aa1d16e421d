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

//! Group operations on the twisted Edwards form of Curve25519,
//! -x² + y² = 1 + dx²y².
//!
//! # Curve representations
//!
//! Points are kept in two models:
//!
//! * [`AffinePoint`]: a coordinate pair (x, y) satisfying the curve
//!   equation. This is the boundary representation callers hand in and
//!   get back.
//! * [`ExtendedPoint`]: the extended homogeneous coordinates
//!   (X : Y : Z : T) of ["Twisted Edwards Curves
//!   Revisited"](https://www.iacr.org/archive/asiacrypt2008/53500329/53500329.pdf)
//!   by Hisil, Wong, Carter, and Dawson, with x = X/Z, y = Y/Z and the
//!   auxiliary coordinate kept coherent through XY = ZT. All group
//!   arithmetic happens here, inversion-free.
//!
//! The addition formula is the unified one for a = -1: it computes the
//! correct sum with no special cases for equal operands, opposite
//! operands, or the identity, because d is non-square in this field and
//! the formula is complete. Doubling has its own, cheaper formula. Both
//! are used exactly as specified in [RFC
//! 8032](https://www.rfc-editor.org/rfc/rfc8032) section 5.1.4.
//!
//! Extended points deliberately implement neither `PartialEq` nor point
//! equality helpers: a curve point has many (X : Y : Z : T)
//! representatives, and deciding equality takes field multiplications,
//! which need the parameter record. Convert to affine and compare there.

#![allow(non_snake_case)]

use core::fmt;

use crate::constants::CurveParams;
use crate::errors::CurveError;
use crate::field::FieldElement;
use crate::scalar::Scalar;
use crate::scalar_mul;
use crate::traits::{Identity, IsIdentity, ValidityCheck};

// ------------------------------------------------------------------------
// Point representations
// ------------------------------------------------------------------------

/// A point on the curve in affine coordinates.
///
/// Constructing an `AffinePoint` does not check the curve equation;
/// validation is the caller's concern at system boundaries, and the
/// arithmetic assumes it already happened.
#[derive(Clone, Eq, PartialEq)]
pub struct AffinePoint {
    /// The x coordinate, canonically reduced.
    pub x: FieldElement,
    /// The y coordinate, canonically reduced.
    pub y: FieldElement,
}

/// A point (X : Y : Z : T) on the curve in extended homogeneous
/// coordinates, with x = X/Z, y = Y/Z, and XY = ZT.
///
/// Every point produced by this crate has a nonzero Z coordinate.
#[derive(Clone)]
pub struct ExtendedPoint {
    pub(crate) X: FieldElement,
    pub(crate) Y: FieldElement,
    pub(crate) Z: FieldElement,
    pub(crate) T: FieldElement,
}

// ------------------------------------------------------------------------
// Constructors and conversions
// ------------------------------------------------------------------------

impl Identity for AffinePoint {
    fn identity() -> AffinePoint {
        AffinePoint {
            x: FieldElement::zero(),
            y: FieldElement::one(),
        }
    }
}

impl Identity for ExtendedPoint {
    fn identity() -> ExtendedPoint {
        ExtendedPoint {
            X: FieldElement::zero(),
            Y: FieldElement::one(),
            Z: FieldElement::one(),
            T: FieldElement::zero(),
        }
    }
}

impl AffinePoint {
    /// Lift this point into extended homogeneous coordinates:
    /// (x, y) becomes (x : y : 1 : xy).
    pub fn to_extended(&self, params: &CurveParams) -> ExtendedPoint {
        ExtendedPoint {
            X: self.x.clone(),
            Y: self.y.clone(),
            Z: FieldElement::one(),
            T: params.field.mul(&self.x, &self.y),
        }
    }

    /// Multiply this point by a scalar, returning the result in extended
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::OversizedScalar`] when the scalar is wider
    /// than 256 bits.
    pub fn mul(
        &self,
        scalar: &Scalar,
        params: &CurveParams,
    ) -> Result<ExtendedPoint, CurveError> {
        self.to_extended(params).mul(scalar, params)
    }
}

impl ExtendedPoint {
    /// Project back to affine coordinates: (X : Y : Z : T) becomes
    /// (X/Z, Y/Z). The inverse of Z is computed once and reused for both
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::NotInvertible`] when Z is zero. The
    /// operations in this crate never produce such a point, so the error
    /// marks a hand-built quadruple whose invariants do not hold; it is
    /// reported, not repaired.
    pub fn to_affine(&self, params: &CurveParams) -> Result<AffinePoint, CurveError> {
        let f = &params.field;
        let Zinv = f.invert(&self.Z)?;

        Ok(AffinePoint {
            x: f.mul(&self.X, &Zinv),
            y: f.mul(&self.Y, &Zinv),
        })
    }

    // ------------------------------------------------------------------
    // Group law
    // ------------------------------------------------------------------

    /// Unified point addition (the "add-2008-hwcd-3" formulas, as fixed
    /// by RFC 8032 section 5.1.4).
    ///
    /// Complete for this curve: the same sequence of field operations is
    /// correct when the operands are equal, opposite, or the identity.
    pub fn add(&self, other: &ExtendedPoint, params: &CurveParams) -> ExtendedPoint {
        let f = &params.field;

        let A = f.mul(&f.sub(&self.Y, &self.X), &f.sub(&other.Y, &other.X));
        let B = f.mul(&f.add(&self.Y, &self.X), &f.add(&other.Y, &other.X));
        let C = f.mul(&f.mul(&self.T, &params.d2), &other.T);
        let ZZ = f.mul(&self.Z, &other.Z);
        let D = f.add(&ZZ, &ZZ);
        let E = f.sub(&B, &A);
        let F = f.sub(&D, &C);
        let G = f.add(&D, &C);
        let H = f.add(&B, &A);

        ExtendedPoint {
            X: f.mul(&E, &F),
            Y: f.mul(&G, &H),
            Z: f.mul(&F, &G),
            T: f.mul(&E, &H),
        }
    }

    /// Dedicated point doubling (the "dbl-2008-hwcd" formulas, as fixed
    /// by RFC 8032 section 5.1.4).
    pub fn double(&self, params: &CurveParams) -> ExtendedPoint {
        let f = &params.field;

        let A = f.square(&self.X);
        let B = f.square(&self.Y);
        let ZZ = f.square(&self.Z);
        let C = f.add(&ZZ, &ZZ);
        let H = f.add(&A, &B);
        let E = f.sub(&H, &f.square(&f.add(&self.X, &self.Y)));
        let G = f.sub(&A, &B);
        let F = f.add(&C, &G);

        ExtendedPoint {
            X: f.mul(&E, &F),
            Y: f.mul(&G, &H),
            Z: f.mul(&F, &G),
            T: f.mul(&E, &H),
        }
    }

    // ------------------------------------------------------------------
    // Scalar multiplication
    // ------------------------------------------------------------------

    /// Multiply this point by a scalar with the uniform 256-iteration
    /// ladder.
    ///
    /// # Errors
    ///
    /// Returns [`CurveError::OversizedScalar`] when the scalar is wider
    /// than 256 bits; the scalar is rejected before any group operation
    /// runs.
    pub fn mul(
        &self,
        scalar: &Scalar,
        params: &CurveParams,
    ) -> Result<ExtendedPoint, CurveError> {
        scalar_mul::mul(self, scalar, params)
    }
}

// ------------------------------------------------------------------------
// Identity testing
// ------------------------------------------------------------------------

impl IsIdentity for AffinePoint {
    fn is_identity(&self) -> bool {
        self.x.is_zero() && self.y == FieldElement::one()
    }
}

impl IsIdentity for ExtendedPoint {
    fn is_identity(&self) -> bool {
        // The identity's projective class is (0 : λ : λ : 0) for λ ≠ 0,
        // so X = 0 and Y = Z picks out exactly its representatives.
        self.X.is_zero() && self.Y == self.Z
    }
}

// ------------------------------------------------------------------------
// Validity checks
// ------------------------------------------------------------------------

impl ValidityCheck for AffinePoint {
    fn is_valid(&self, params: &CurveParams) -> bool {
        let f = &params.field;

        // Curve equation: -x² + y² = 1 + d·x²·y².
        let xx = f.square(&self.x);
        let yy = f.square(&self.y);
        let lhs = f.sub(&yy, &xx);
        let rhs = f.add(&FieldElement::one(), &f.mul(&params.d, &f.mul(&xx, &yy)));

        lhs == rhs
    }
}

impl ValidityCheck for ExtendedPoint {
    fn is_valid(&self, params: &CurveParams) -> bool {
        let f = &params.field;

        // Homogenized curve equation: (-X² + Y²)·Z² = Z⁴ + d·X²·Y².
        let XX = f.square(&self.X);
        let YY = f.square(&self.Y);
        let ZZ = f.square(&self.Z);
        let ZZZZ = f.square(&ZZ);
        let lhs = f.mul(&f.sub(&YY, &XX), &ZZ);
        let rhs = f.add(&ZZZZ, &f.mul(&params.d, &f.mul(&XX, &YY)));
        let on_curve = lhs == rhs;

        let on_segre_image = f.mul(&self.X, &self.Y) == f.mul(&self.Z, &self.T);

        on_curve && on_segre_image
    }
}

// ------------------------------------------------------------------------
// Debug traits
// ------------------------------------------------------------------------

impl fmt::Debug for AffinePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AffinePoint{{\n\tx: {:?},\n\ty: {:?}\n}}", &self.x, &self.y)
    }
}

impl fmt::Debug for ExtendedPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ExtendedPoint{{\n\tX: {:?},\n\tY: {:?},\n\tZ: {:?},\n\tT: {:?}\n}}",
            &self.X, &self.Y, &self.Z, &self.T
        )
    }
}

// ------------------------------------------------------------------------
// Tests
// ------------------------------------------------------------------------
