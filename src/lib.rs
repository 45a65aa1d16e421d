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

#![deny(missing_docs)]
#![doc(html_root_url = "https://docs.rs/edwards25519/0.1.0")]

//! # edwards25519
//!
//! Scalar multiplication on the twisted Edwards curve used by Ed25519,
//! -x² + y² = 1 + dx²y² with d = -121665/121666, over the prime field
//! with p = 2^255 - 19, built on arbitrary-precision integer arithmetic.
//!
//! The crate is layered bottom-up:
//!
//! * [`field`]: arithmetic modulo p, with every result canonically
//!   reduced into [0, p);
//! * [`edwards`]: affine and extended homogeneous point representations,
//!   the conversions between them, and the unified addition and dedicated
//!   doubling formulas in extended coordinates;
//! * [`scalar`]: arbitrary-width scalars and their fixed 256-bit view;
//! * a uniform double-and-add ladder that scans exactly 256 scalar bits
//!   for every multiplication, exposed as [`ExtendedPoint::mul`] and
//!   [`AffinePoint::mul`].
//!
//! Curve parameters are not global state. A [`CurveParams`] record is
//! constructed once and passed by reference into every operation, so each
//! operation is a pure function of its explicit inputs:
//!
//! ```
//! use edwards25519::{CurveParams, Scalar};
//!
//! let params = CurveParams::ed25519();
//! let g = params.basepoint.to_extended(&params);
//!
//! // [2]G computed by the ladder agrees with one doubling of G.
//! let ladder = g.mul(&Scalar::from(2u8), &params).unwrap();
//! let doubled = g.double(&params);
//! assert_eq!(
//!     ladder.to_affine(&params).unwrap(),
//!     doubled.to_affine(&params).unwrap(),
//! );
//! ```
//!
//! This crate deliberately stops at the group arithmetic: it contains no
//! point encoding or decoding, no signatures, no hashing, and it makes no
//! constant-time claims. The ladder's operation *sequence* is independent
//! of the scalar bits, but the underlying bigint arithmetic is
//! variable-time.

//------------------------------------------------------------------------
// External dependencies
//------------------------------------------------------------------------

extern crate num_bigint;
extern crate num_traits;

//------------------------------------------------------------------------
// Public modules
//------------------------------------------------------------------------

pub mod constants;
pub mod edwards;
pub mod errors;
pub mod field;
pub mod scalar;
pub mod traits;

//------------------------------------------------------------------------
// Internal modules
//------------------------------------------------------------------------

pub(crate) mod scalar_mul;

pub use crate::constants::CurveParams;
pub use crate::edwards::{AffinePoint, ExtendedPoint};
pub use crate::errors::CurveError;
pub use crate::scalar::Scalar;
