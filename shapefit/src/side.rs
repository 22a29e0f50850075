// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke descriptor for borders.

use core::hash::{Hash, Hasher};

use peniko::{kurbo::Stroke, Brush, Color};

use crate::{canvas::FatPaint, hash_f64};

/// Whether a [`BorderSide`] is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// Suppressed; nothing is painted.
    None,
    /// A single solid line.
    #[default]
    Solid,
}

/// Width, color, style and alignment of a border stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BorderSide {
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
    /// Stroke style.
    pub style: BorderStyle,
    /// Where the stroke sits relative to the outline.
    ///
    /// `-1.0` is fully inside, `0.0` is centered and `1.0` is fully outside.
    pub stroke_align: f64,
}

impl BorderSide {
    /// Stroke drawn entirely inside the outline.
    pub const STROKE_ALIGN_INSIDE: f64 = -1.0;
    /// Stroke centered on the outline.
    pub const STROKE_ALIGN_CENTER: f64 = 0.0;
    /// Stroke drawn entirely outside the outline.
    pub const STROKE_ALIGN_OUTSIDE: f64 = 1.0;

    /// A side that paints nothing.
    pub const NONE: Self = Self {
        color: Color::BLACK,
        width: 0.0,
        style: BorderStyle::None,
        stroke_align: Self::STROKE_ALIGN_INSIDE,
    };

    /// Make a solid side, aligned inside the outline.
    pub const fn new(color: Color, width: f64) -> Self {
        Self {
            color,
            width,
            style: BorderStyle::Solid,
            stroke_align: Self::STROKE_ALIGN_INSIDE,
        }
    }

    /// Replace the stroke alignment.
    #[must_use]
    pub const fn with_stroke_align(self, stroke_align: f64) -> Self {
        Self {
            stroke_align,
            ..self
        }
    }

    /// Replace the style.
    #[must_use]
    pub const fn with_style(self, style: BorderStyle) -> Self {
        Self { style, ..self }
    }

    /// How far the stroke reaches inside the outline.
    pub fn stroke_inset(&self) -> f64 {
        self.width * (1.0 - (1.0 + self.stroke_align) / 2.0)
    }

    /// How far the stroke reaches outside the outline.
    pub fn stroke_outset(&self) -> f64 {
        self.width * (1.0 + self.stroke_align) / 2.0
    }

    /// Offset of the stroke's center line from the outline, outward positive.
    ///
    /// Painting inflates the fitted rectangle by half of this.
    pub fn stroke_offset(&self) -> f64 {
        self.width * self.stroke_align
    }

    /// Scale the width by `t`.
    ///
    /// A non-positive `t` also turns the style off.
    #[must_use]
    pub fn scale(&self, t: f64) -> Self {
        Self {
            width: (self.width * t).max(0.0),
            style: if t <= 0.0 {
                BorderStyle::None
            } else {
                self.style
            },
            ..*self
        }
    }

    /// Blend two sides.
    ///
    /// A side with [`BorderStyle::None`] fades in or out through its color
    /// made fully transparent.
    pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        if t == 0.0 {
            return *a;
        }
        if t == 1.0 {
            return *b;
        }
        let width = a.width + (b.width - a.width) * t;
        if width < 0.0 {
            return Self::NONE;
        }
        if a.style == b.style && a.stroke_align == b.stroke_align {
            return Self {
                color: lerp_color(a.color, b.color, t),
                width,
                style: a.style,
                stroke_align: a.stroke_align,
            };
        }

        let color = lerp_color(a.visible_color(), b.visible_color(), t);
        let stroke_align = if a.stroke_align == b.stroke_align {
            a.stroke_align
        } else {
            a.stroke_align + (b.stroke_align - a.stroke_align) * t
        };
        Self {
            color,
            width,
            style: BorderStyle::Solid,
            stroke_align,
        }
    }

    /// Paint description for stroking an outline with this side.
    pub fn to_paint(&self) -> FatPaint {
        match self.style {
            BorderStyle::Solid => FatPaint {
                stroke: Stroke::new(self.width),
                stroke_paint: Some(Brush::Solid(self.color)),
                fill_paint: None,
            },
            BorderStyle::None => FatPaint::default(),
        }
    }

    fn visible_color(&self) -> Color {
        match self.style {
            BorderStyle::Solid => self.color,
            BorderStyle::None => {
                let [r, g, b, _] = self.color.components;
                Color::new([r, g, b, 0.0])
            }
        }
    }
}

impl Default for BorderSide {
    fn default() -> Self {
        Self::new(Color::BLACK, 1.0)
    }
}

impl Hash for BorderSide {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for c in self.color.components {
            // Same canonicalization as `hash_f64`, at f32 precision.
            let c = if c == 0.0 { 0.0_f32 } else { c };
            c.to_bits().hash(state);
        }
        hash_f64(self.width, state);
        self.style.hash(state);
        hash_f64(self.stroke_align, state);
    }
}

#[expect(
    clippy::cast_possible_truncation,
    reason = "Color channels are stored as f32."
)]
fn lerp_color(a: Color, b: Color, t: f64) -> Color {
    let t = t as f32;
    let mut out = a.components;
    for (o, (x, y)) in out
        .iter_mut()
        .zip(a.components.iter().zip(b.components.iter()))
    {
        *o = x + (y - x) * t;
    }
    Color::new(out)
}
