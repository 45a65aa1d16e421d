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

//! Module for common traits.

use crate::constants::CurveParams;

// ------------------------------------------------------------------------
// Public Traits
// ------------------------------------------------------------------------

/// Trait for getting the identity element of a point type.
pub trait Identity {
    /// Returns the identity element of the curve.
    /// Can be used as a constructor.
    fn identity() -> Self;
}

/// Trait for testing if a curve point is equivalent to the identity point.
///
/// The test is representation-independent: every projective scaling of the
/// identity answers `true`.
pub trait IsIdentity {
    /// Return true if this element is the identity element of the curve.
    fn is_identity(&self) -> bool;
}

// ------------------------------------------------------------------------
// Private Traits
// ------------------------------------------------------------------------

/// A trait for checking the validity of a point, for debugging and
/// testing. Point operations assume valid inputs and never re-check this
/// on the hot path.
pub(crate) trait ValidityCheck {
    /// Checks whether the point satisfies the curve equation, and for
    /// representations carrying redundant coordinates, whether those are
    /// coherent with one another.
    fn is_valid(&self, params: &CurveParams) -> bool;
}
