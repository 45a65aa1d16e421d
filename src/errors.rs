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

//! Errors which may occur while doing curve arithmetic.
//!
//! Both variants are domain errors: they report inputs the operations are
//! defined to reject, never internal failures of the arithmetic itself.

use core::fmt;
use core::fmt::Display;

/// Errors raised by field inversion and scalar multiplication.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CurveError {
    /// The multiplicative inverse of a field element equal to zero modulo
    /// the field prime was requested.
    ///
    /// Conversion to affine coordinates surfaces this error when the Z
    /// coordinate is zero. No operation in this crate produces such a
    /// point, so hitting this variant means an invariant was broken by a
    /// hand-built input; the failure is reported rather than replaced
    /// with a substitute value.
    NotInvertible,
    /// A scalar wider than 256 bits was passed to scalar multiplication.
    ///
    /// The ladder scans a fixed 256-bit window, so wider scalars are
    /// rejected up front instead of being silently truncated.
    OversizedScalar,
}

impl Display for CurveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            CurveError::NotInvertible => {
                write!(f, "Cannot invert a field element equal to zero")
            }
            CurveError::OversizedScalar => {
                write!(f, "Cannot multiply by a scalar wider than 256 bits")
            }
        }
    }
}

impl std::error::Error for CurveError {}
