// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Traits connecting shape definitions and morphs to borders.

extern crate alloc;
use alloc::vec::Vec;

use core::{fmt::Debug, hash::Hash};

use peniko::kurbo::CubicBez;

/// A named outline that can be tessellated into cubic segments.
///
/// The cubics are in normalized coordinates, inside the unit square, and
/// form one closed contour in order: each segment starts where the previous
/// one ends and the last ends where the first starts.
///
/// Tessellation must be deterministic; borders compare and hash both the
/// definition and the cubics it produced.
pub trait ShapeDefinition: Clone + PartialEq + Hash + Debug {
    /// Morph between two definitions of this type.
    type Morph: Morph;

    /// Tessellate into normalized cubic segments.
    fn cubics(&self) -> Vec<CubicBez>;

    /// Build a morph that starts at `self` and ends at `end`.
    fn morph_to(&self, end: &Self) -> Self::Morph;
}

/// A blend between two outlines.
pub trait Morph {
    /// The outline at `progress`.
    ///
    /// `0.0` gives the start outline and `1.0` the end outline, up to the
    /// re-tessellation needed to put the two in correspondence. Values outside
    /// `0.0..=1.0` extrapolate.
    fn as_cubics(&self, progress: f64) -> Vec<CubicBez>;
}
