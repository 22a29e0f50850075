// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Regular polygons with rounded corners.

extern crate alloc;
use alloc::vec::Vec;

use core::{
    f64::consts::{FRAC_PI_2, FRAC_PI_4, FRAC_PI_8, TAU},
    hash::{Hash, Hasher},
};

use peniko::kurbo::{Affine, CubicBez, ParamCurveExtrema, Point, Rect, Vec2};

#[cfg(all(not(feature = "std"), not(test)))]
use crate::floatfuncs::FloatFuncs;

use crate::{hash_f64, morph::PolygonMorph, Error, ShapeDefinition};

/// A regular polygon whose corners may be rounded off.
///
/// Tessellates to one corner cubic per vertex (omitted when sharp) followed
/// by a straight edge cubic, normalized into the unit square with its aspect
/// ratio kept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundedPolygon {
    vertices: u32,
    rounding: f64,
    rotation: f64,
}

impl RoundedPolygon {
    /// Triangle pointing up.
    pub const TRIANGLE: Self = Self::sharp(3, -FRAC_PI_2);
    /// Axis-aligned square.
    pub const SQUARE: Self = Self::sharp(4, FRAC_PI_4);
    /// Pentagon with a vertex at the top.
    pub const PENTAGON: Self = Self::sharp(5, -FRAC_PI_2);
    /// Hexagon with a vertex at the top.
    pub const HEXAGON: Self = Self::sharp(6, -FRAC_PI_2);
    /// Octagon with flat sides on every axis.
    pub const OCTAGON: Self = Self::sharp(8, FRAC_PI_8);

    const fn sharp(vertices: u32, rotation: f64) -> Self {
        Self {
            vertices,
            rounding: 0.0,
            rotation,
        }
    }

    /// Make a polygon with one vertex pointing up.
    ///
    /// `rounding` is the fraction of each half edge taken up by the corner
    /// curve: `0.0` is sharp, `1.0` rounds the whole edge away.
    ///
    /// # Errors
    ///
    /// [`Error::TooFewVertices`] for fewer than 3 vertices, and
    /// [`Error::RoundingOutOfRange`] when `rounding` is not within `0.0..=1.0`.
    pub fn new(vertices: u32, rounding: f64) -> Result<Self, Error> {
        Self::sharp(vertices, -FRAC_PI_2).with_rounding(rounding)
    }

    /// Replace the corner rounding.
    ///
    /// # Errors
    ///
    /// The same as [`RoundedPolygon::new`].
    pub fn with_rounding(self, rounding: f64) -> Result<Self, Error> {
        if self.vertices < 3 {
            return Err(Error::TooFewVertices(self.vertices));
        }
        if !(0.0..=1.0).contains(&rounding) {
            return Err(Error::RoundingOutOfRange(rounding));
        }
        Ok(Self { rounding, ..self })
    }

    /// Replace the rotation, in radians, of the first vertex from the x axis.
    #[must_use]
    pub fn with_rotation(self, rotation: f64) -> Self {
        Self { rotation, ..self }
    }

    /// Number of vertices.
    pub fn vertices(&self) -> u32 {
        self.vertices
    }

    /// Corner rounding.
    pub fn rounding(&self) -> f64 {
        self.rounding
    }

    /// Rotation of the first vertex.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    fn corners(&self) -> Vec<Point> {
        let n = f64::from(self.vertices);
        (0..self.vertices)
            .map(|i| {
                let (sin, cos) = (self.rotation + TAU * f64::from(i) / n).sin_cos();
                Point::new(cos, sin)
            })
            .collect()
    }
}

impl Hash for RoundedPolygon {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertices.hash(state);
        hash_f64(self.rounding, state);
        hash_f64(self.rotation, state);
    }
}

impl ShapeDefinition for RoundedPolygon {
    type Morph = PolygonMorph;

    fn cubics(&self) -> Vec<CubicBez> {
        let corners = self.corners();
        let n = corners.len();
        let cut = 0.5 * self.rounding;
        let mut cubics = Vec::with_capacity(2 * n);
        for (i, &vertex) in corners.iter().enumerate() {
            let prev = corners[(i + n - 1) % n];
            let next = corners[(i + 1) % n];
            let enter = vertex.lerp(prev, cut);
            let exit = vertex.lerp(next, cut);
            if self.rounding > 0.0 {
                cubics.push(CubicBez::new(
                    enter,
                    enter.lerp(vertex, 2.0 / 3.0),
                    exit.lerp(vertex, 2.0 / 3.0),
                    exit,
                ));
            }
            cubics.push(straight(exit, next.lerp(vertex, cut)));
        }
        normalize(&mut cubics);
        cubics
    }

    fn morph_to(&self, end: &Self) -> PolygonMorph {
        PolygonMorph::new(self.cubics(), end.cubics())
    }
}

/// A line expressed as a cubic.
pub(crate) fn straight(p0: Point, p3: Point) -> CubicBez {
    CubicBez::new(p0, p0.lerp(p3, 1.0 / 3.0), p0.lerp(p3, 2.0 / 3.0), p3)
}

/// Tight bounds of an outline, `None` when it has no segments.
pub(crate) fn cubics_bounds(cubics: &[CubicBez]) -> Option<Rect> {
    cubics
        .iter()
        .map(ParamCurveExtrema::bounding_box)
        .reduce(|a, b| a.union(b))
}

/// Fit into the unit square keeping the aspect ratio, centered on the short axis.
fn normalize(cubics: &mut [CubicBez]) {
    let Some(bounds) = cubics_bounds(cubics) else {
        return;
    };
    let side = bounds.width().max(bounds.height());
    if side <= 0.0 {
        return;
    }
    let s = 1.0 / side;
    let transform = Affine::translate(-bounds.origin().to_vec2())
        .then_scale(s)
        .then_translate(Vec2::new(
            0.5 * (1.0 - bounds.width() * s),
            0.5 * (1.0 - bounds.height() * s),
        ));
    for c in cubics.iter_mut() {
        *c = transform * *c;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_closed(cubics: &[CubicBez]) {
        for (a, b) in cubics.iter().zip(cubics.iter().cycle().skip(1)) {
            assert_eq!(a.p3, b.p0, "segments must join");
        }
    }

    #[test]
    fn sharp_polygon_has_one_segment_per_edge() {
        let cubics = RoundedPolygon::PENTAGON.cubics();
        assert_eq!(cubics.len(), 5, "one edge per vertex");
        assert_closed(&cubics);
    }

    #[test]
    fn rounded_polygon_adds_corners() {
        let hexagon = RoundedPolygon::HEXAGON.with_rounding(0.5).unwrap();
        let cubics = hexagon.cubics();
        assert_eq!(cubics.len(), 12, "corner and edge per vertex");
        assert_closed(&cubics);
    }

    #[test]
    fn normalized_into_unit_square() {
        for shape in [
            RoundedPolygon::TRIANGLE,
            RoundedPolygon::SQUARE,
            RoundedPolygon::PENTAGON,
            RoundedPolygon::new(7, 0.3).unwrap(),
        ] {
            let bounds = cubics_bounds(&shape.cubics()).unwrap();
            let side = bounds.width().max(bounds.height());
            assert!((side - 1.0).abs() < 1e-9, "{shape:?} long side {side}");
            let center = bounds.center();
            assert!((center.x - 0.5).abs() < 1e-9, "{shape:?} centered x");
            assert!((center.y - 0.5).abs() < 1e-9, "{shape:?} centered y");
        }
    }

    #[test]
    fn square_fills_unit_square() {
        let bounds = cubics_bounds(&RoundedPolygon::SQUARE.cubics()).unwrap();
        assert!(
            (bounds.width() - 1.0).abs() < 1e-9 && (bounds.height() - 1.0).abs() < 1e-9,
            "square bounds {bounds:?}"
        );
    }

    #[test]
    fn pentagon_is_wider_than_tall() {
        let bounds = cubics_bounds(&RoundedPolygon::PENTAGON.cubics()).unwrap();
        assert!((bounds.width() - 1.0).abs() < 1e-9, "width {}", bounds.width());
        assert!(bounds.height() < 1.0, "height {}", bounds.height());
    }

    #[test]
    fn tessellation_is_deterministic() {
        let shape = RoundedPolygon::new(5, 0.25).unwrap();
        assert_eq!(shape.cubics(), shape.cubics(), "same definition, same cubics");
    }

    #[test]
    fn rejects_bad_parameters() {
        assert_eq!(RoundedPolygon::new(2, 0.0), Err(Error::TooFewVertices(2)), "2-gon");
        assert_eq!(
            RoundedPolygon::new(4, 1.5),
            Err(Error::RoundingOutOfRange(1.5)),
            "rounding above 1"
        );
        assert!(RoundedPolygon::new(4, f64::NAN).is_err(), "NaN rounding");
    }
}
