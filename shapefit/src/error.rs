// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for border construction and interpolation.

use thiserror::Error;

/// Contract violations reported by this crate.
///
/// These are programmer errors: each one aborts the construction or
/// interpolation that raised it, and nothing is substituted in its place.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// `squash` was not within `0.0..=1.0`.
    #[error("squash must be within 0.0..=1.0, got {0}")]
    SquashOutOfRange(f64),
    /// A border that is itself the result of a morph was interpolated again.
    ///
    /// Rebuild the operand with [`ShapeFitBorder::copy_with`] and a fresh
    /// shape before interpolating it.
    ///
    /// [`ShapeFitBorder::copy_with`]: crate::ShapeFitBorder::copy_with
    #[error("cannot interpolate a border that was produced by a morph; give it a shape first")]
    MorphOfMorph,
    /// An interpolation parameter was NaN or infinite.
    #[error("interpolation parameter must be finite, got {0}")]
    NonFiniteProgress(f64),
    /// A polygon needs at least three vertices.
    #[error("a polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(u32),
    /// Corner rounding was not within `0.0..=1.0`.
    #[error("rounding must be within 0.0..=1.0, got {0}")]
    RoundingOutOfRange(f64),
}
