// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing surface seam, and a display list that records what was painted.

extern crate alloc;
use alloc::vec::Vec;

use peniko::{
    kurbo::{BezPath, Rect, Shape, Stroke},
    Brush,
};

/// Paint style for a path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FatPaint {
    /// Stroke information
    pub stroke: Stroke,
    /// `Brush` for stroke
    pub stroke_paint: Option<Brush>,
    /// `Brush` for fill
    pub fill_paint: Option<Brush>,
}

impl FatPaint {
    /// `true` if painting with this draws nothing.
    pub fn is_empty(&self) -> bool {
        self.stroke_paint.is_none() && self.fill_paint.is_none()
    }
}

/// A surface that paths can be painted onto.
///
/// Fills are drawn before strokes.
pub trait Canvas {
    /// Paint `path` with `paint`.
    fn draw_path(&mut self, path: &BezPath, paint: &FatPaint);
}

/// A path with the paint it was drawn with.
#[derive(Debug, Clone)]
pub struct FatShape {
    /// Paint information
    pub paint: FatPaint,
    /// Outline, already in canvas coordinates.
    pub path: BezPath,
}

impl FatShape {
    /// Bounding box of the path, ignoring stroke width.
    pub fn bounding_box(&self) -> Rect {
        self.path.bounding_box()
    }
}

/// Items for [`DisplayList`]
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum DisplayItem {
    /// `DisplayItem` is a [`FatShape`]
    FatShape(FatShape),
}

impl From<FatShape> for DisplayItem {
    fn from(s: FatShape) -> Self {
        Self::FatShape(s)
    }
}

/// Simple display list
#[derive(Debug, Default)]
pub struct DisplayList {
    /// Items in `DisplayList`
    pub items: Vec<DisplayItem>,
}

impl DisplayList {
    /// Push a [`DisplayItem`], returning its index.
    pub fn push(&mut self, i: impl Into<DisplayItem>) -> usize {
        let n = self.items.len();
        self.items.push(i.into());
        n
    }

    /// Get an individual [`DisplayItem`]
    pub fn get(&self, idx: usize) -> Option<&DisplayItem> {
        self.items.get(idx)
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Canvas for DisplayList {
    fn draw_path(&mut self, path: &BezPath, paint: &FatPaint) {
        if paint.is_empty() {
            return;
        }
        self.push(FatShape {
            paint: paint.clone(),
            path: path.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;

    #[test]
    fn records_only_visible_paint() {
        let mut list = DisplayList::default();
        let path = Rect::new(1.0, 1.0, 3.0, 2.0).to_path(0.1);
        list.draw_path(&path, &FatPaint::default());
        assert!(list.is_empty(), "empty paint is not recorded");

        let paint = FatPaint {
            fill_paint: Some(Brush::Solid(Color::WHITE)),
            ..Default::default()
        };
        assert_eq!(list.len(), 0, "still empty");
        list.draw_path(&path, &paint);
        assert_eq!(list.len(), 1, "fill is recorded");
        let Some(DisplayItem::FatShape(shape)) = list.get(0) else {
            panic!("expected a shape");
        };
        assert_eq!(shape.paint, paint, "paint is kept");
        let bbox = shape.bounding_box();
        assert_eq!(bbox, Rect::new(1.0, 1.0, 3.0, 2.0), "bounding box");
    }
}
