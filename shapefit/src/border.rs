// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Borders whose outline is a shape fitted to the painted rectangle.

extern crate alloc;
use alloc::sync::Arc;

use core::hash::{Hash, Hasher};

use peniko::{
    kurbo::{BezPath, CubicBez, Insets, Rect, Stroke},
    Brush,
};

use crate::{
    canvas::{Canvas, FatPaint},
    fit::fit_to_rect,
    hash_f64,
    side::{BorderSide, BorderStyle},
    Error, Morph, ShapeDefinition,
};

/// Where a border's outline came from.
#[derive(Debug, Clone, PartialEq, Hash)]
pub enum Origin<S> {
    /// Tessellated from a shape definition.
    Shape(S),
    /// Produced by a morph; there is no definition to morph from again.
    Morphed,
}

/// A border drawn along a shape that is fitted to the rectangle it decorates.
///
/// The outline is stored as cubics normalized to the unit square. Fitting
/// scales them to the rectangle's short side, stretched toward the long side
/// by [`squash`](Self::squash).
///
/// Borders are values. Every operation that changes one returns a new border.
#[derive(Debug, Clone)]
pub struct ShapeFitBorder<S> {
    origin: Origin<S>,
    cubics: Arc<[CubicBez]>,
    side: BorderSide,
    squash: f64,
}

impl<S: ShapeDefinition> ShapeFitBorder<S> {
    /// Make a border that outlines `shape`.
    ///
    /// # Errors
    ///
    /// [`Error::SquashOutOfRange`] when `squash` is not within `0.0..=1.0`.
    pub fn new(shape: S, side: BorderSide, squash: f64) -> Result<Self, Error> {
        check_squash(squash)?;
        Ok(Self {
            cubics: shape.cubics().into(),
            origin: Origin::Shape(shape),
            side,
            squash,
        })
    }

    fn morphed(cubics: Arc<[CubicBez]>, side: BorderSide, squash: f64) -> Self {
        Self {
            origin: Origin::Morphed,
            cubics,
            side,
            squash,
        }
    }

    /// The shape definition, or `None` if this border came out of a morph.
    pub fn shape(&self) -> Option<&S> {
        match &self.origin {
            Origin::Shape(shape) => Some(shape),
            Origin::Morphed => None,
        }
    }

    /// Where the outline came from.
    pub fn origin(&self) -> &Origin<S> {
        &self.origin
    }

    /// `true` if this border was produced by a morph.
    pub fn is_morphed(&self) -> bool {
        matches!(self.origin, Origin::Morphed)
    }

    /// The normalized outline.
    pub fn cubics(&self) -> &[CubicBez] {
        &self.cubics
    }

    /// The stroke.
    pub fn side(&self) -> &BorderSide {
        &self.side
    }

    /// Aspect ratio fidelity of the fit, from `0.0` (square) to `1.0` (the full rectangle).
    pub fn squash(&self) -> f64 {
        self.squash
    }

    /// Space taken up by the border inside the rectangle.
    pub fn dimensions(&self) -> Insets {
        Insets::uniform(self.side.stroke_inset())
    }

    /// Outline fitted to `rect` grown by the stroke's outer extent.
    pub fn outer_path(&self, rect: Rect) -> BezPath {
        let outset = self.side.stroke_outset();
        fit_to_rect(inflate(rect, outset), self.squash, &self.cubics)
    }

    /// Outline fitted to `rect` shrunk by the stroke's inner extent.
    ///
    /// An inset wider than the rectangle collapses the outline to its center.
    pub fn inner_path(&self, rect: Rect) -> BezPath {
        let inset = self.side.stroke_inset();
        fit_to_rect(inflate(rect, -inset), self.squash, &self.cubics)
    }

    /// Stroke the outline around `rect` onto `canvas`.
    ///
    /// Does nothing when the side's style is [`BorderStyle::None`].
    #[tracing::instrument(skip_all)]
    pub fn paint(&self, canvas: &mut impl Canvas, rect: Rect) {
        if self.side.style == BorderStyle::None {
            return;
        }
        let grow = 0.5 * self.side.stroke_offset();
        let path = fit_to_rect(inflate(rect, grow), self.squash, &self.cubics);
        canvas.draw_path(&path, &self.side.to_paint());
    }

    /// Fill the area enclosed by the outer path of `rect` with `brush`.
    #[tracing::instrument(skip_all)]
    pub fn paint_interior(&self, canvas: &mut impl Canvas, rect: Rect, brush: Brush) {
        let paint = FatPaint {
            stroke: Stroke::default(),
            stroke_paint: None,
            fill_paint: Some(brush),
        };
        canvas.draw_path(&self.outer_path(rect), &paint);
    }

    /// Scale the stroke by `t`.
    ///
    /// The outline and squash are left alone.
    #[must_use]
    pub fn scale(&self, t: f64) -> Self {
        Self {
            side: self.side.scale(t),
            ..self.clone()
        }
    }

    /// Copy with some fields replaced.
    ///
    /// A new `shape` is tessellated and gives the copy a shape again, even if
    /// this border came out of a morph. Without one, a border that has a shape
    /// is tessellated from it again and a morphed border keeps its cubics.
    ///
    /// # Errors
    ///
    /// [`Error::SquashOutOfRange`] when `squash` is not within `0.0..=1.0`.
    pub fn copy_with(
        &self,
        shape: Option<S>,
        side: Option<BorderSide>,
        squash: Option<f64>,
    ) -> Result<Self, Error> {
        let side = side.unwrap_or(self.side);
        let squash = squash.unwrap_or(self.squash);
        let shape = match (shape, &self.origin) {
            (Some(shape), _) => shape,
            (None, Origin::Shape(shape)) => shape.clone(),
            (None, Origin::Morphed) => {
                check_squash(squash)?;
                return Ok(Self::morphed(self.cubics.clone(), side, squash));
            }
        };
        Self::new(shape, side, squash)
    }

    /// Blend from `a` to `b`.
    ///
    /// `t = 0.0` returns `a` and `t = 1.0` returns `b`. Anything else morphs
    /// the two shapes, blends the sides, and blends squash linearly, clamped
    /// to `0.0..=1.0` when `t` is outside that range. The result has no shape.
    ///
    /// # Errors
    ///
    /// [`Error::NonFiniteProgress`] when `t` is NaN or infinite, and
    /// [`Error::MorphOfMorph`] when `t` is strictly between the endpoints and
    /// either border is itself the product of a morph.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Result<Self, Error> {
        if !t.is_finite() {
            return Err(Error::NonFiniteProgress(t));
        }
        if t == 0.0 {
            return Ok(a.clone());
        }
        if t == 1.0 {
            return Ok(b.clone());
        }
        let (Origin::Shape(start), Origin::Shape(end)) = (&a.origin, &b.origin) else {
            return Err(Error::MorphOfMorph);
        };
        tracing::debug!(?start, ?end, t, "morphing border");
        let cubics = start.morph_to(end).as_cubics(t);
        let squash = (a.squash + t * (b.squash - a.squash)).clamp(0.0, 1.0);
        Ok(Self::morphed(
            cubics.into(),
            BorderSide::lerp(&a.side, &b.side, t),
            squash,
        ))
    }

    /// Blend from `a` toward this border.
    ///
    /// # Errors
    ///
    /// See [`ShapeFitBorder::lerp`].
    pub fn lerp_from(&self, a: &Self, t: f64) -> Result<Self, Error> {
        Self::lerp(a, self, t)
    }

    /// Blend from this border toward `b`.
    ///
    /// # Errors
    ///
    /// See [`ShapeFitBorder::lerp`].
    pub fn lerp_to(&self, b: &Self, t: f64) -> Result<Self, Error> {
        Self::lerp(self, b, t)
    }
}

/// Grow `rect` by `amount` on every side; shrinking past the center collapses that axis.
fn inflate(rect: Rect, amount: f64) -> Rect {
    let grown = rect.inflate(amount, amount);
    let center = rect.center();
    let (x0, x1) = if grown.x0 <= grown.x1 {
        (grown.x0, grown.x1)
    } else {
        (center.x, center.x)
    };
    let (y0, y1) = if grown.y0 <= grown.y1 {
        (grown.y0, grown.y1)
    } else {
        (center.y, center.y)
    };
    Rect::new(x0, y0, x1, y1)
}

fn check_squash(squash: f64) -> Result<(), Error> {
    if (0.0..=1.0).contains(&squash) {
        Ok(())
    } else {
        Err(Error::SquashOutOfRange(squash))
    }
}

impl<S: PartialEq> PartialEq for ShapeFitBorder<S> {
    fn eq(&self, other: &Self) -> bool {
        self.origin == other.origin
            && self.cubics == other.cubics
            && self.side == other.side
            && self.squash == other.squash
    }
}

impl<S: Hash> Hash for ShapeFitBorder<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.origin.hash(state);
        self.cubics.len().hash(state);
        for c in self.cubics.iter() {
            for p in [c.p0, c.p1, c.p2, c.p3] {
                hash_f64(p.x, state);
                hash_f64(p.y, state);
            }
        }
        hash_f64(self.squash, state);
        self.side.hash(state);
    }
}
