// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shapefit draws a closed, possibly rounded, outline as the border of any rectangle.
//!
//! A [`ShapeFitBorder`] holds an outline as cubic Bézier segments normalized
//! to the unit square. Painting it fits the outline to the rectangle: the
//! short side of the rectangle is always used, and [`squash`] decides how far
//! the outline stretches along the long side, from a centered square at `0.0`
//! to the whole rectangle at `1.0`.
//!
//! Two borders built from shape definitions can be blended with
//! [`ShapeFitBorder::lerp`]. The blend is a morph between the two outlines;
//! it carries no shape definition of its own, so it cannot be the input of
//! another blend until [`ShapeFitBorder::copy_with`] gives it a shape.
//!
//! ```
//! use shapefit::{BorderSide, DisplayList, RoundedPolygon, ShapeFitBorder};
//! use shapefit::peniko::{kurbo::Rect, Color};
//!
//! let side = BorderSide::new(Color::BLACK, 2.0);
//! let pentagon = ShapeFitBorder::new(RoundedPolygon::PENTAGON, side, 0.0).unwrap();
//! let hexagon = ShapeFitBorder::new(RoundedPolygon::HEXAGON, side, 1.0).unwrap();
//!
//! let halfway = ShapeFitBorder::lerp(&pentagon, &hexagon, 0.5).unwrap();
//! assert!(halfway.shape().is_none());
//!
//! let mut list = DisplayList::default();
//! halfway.paint(&mut list, Rect::new(0.0, 0.0, 200.0, 100.0));
//! assert_eq!(list.len(), 1);
//! ```
//!
//! [`squash`]: ShapeFitBorder::squash

// LINEBENDER LINT SET - lib.rs - v1
// See https://linebender.org/wiki/canonical-lints/
// These lints aren't included in Cargo.toml because they
// shouldn't apply to examples and tests
#![warn(unused_crate_dependencies)]
#![warn(clippy::print_stdout, clippy::print_stderr)]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(all(not(feature = "std"), not(test)))]
mod floatfuncs;

pub use peniko;

pub mod border;
pub mod canvas;
mod error;
pub mod fit;
pub mod morph;
pub mod polygon;
mod shape;
pub mod side;

pub use border::{Origin, ShapeFitBorder};
pub use canvas::{Canvas, DisplayItem, DisplayList, FatPaint, FatShape};
pub use error::Error;
pub use fit::{fit_to_rect, fit_transform};
pub use morph::PolygonMorph;
pub use polygon::RoundedPolygon;
pub use shape::{Morph, ShapeDefinition};
pub use side::{BorderSide, BorderStyle};

use core::hash::Hasher;

/// Hash a float so that values comparing equal hash alike.
pub(crate) fn hash_f64<H: Hasher>(x: f64, state: &mut H) {
    // `0.0 == -0.0`, so both take the bits of `0.0`.
    let x = if x == 0.0 { 0.0 } else { x };
    state.write_u64(x.to_bits());
}
