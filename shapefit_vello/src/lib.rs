// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Vello rendering utilities for Shapefit.

use shapefit::{
    peniko::kurbo::{Affine, BezPath},
    Canvas, DisplayItem, DisplayList, FatPaint, FatShape,
};

use vello::{peniko::Fill::NonZero, Scene};

/// A [`Canvas`] that encodes into a Vello [`Scene`].
#[allow(
    missing_debug_implementations,
    reason = "Not useful, and Scene doesn't implement Debug."
)]
pub struct SceneCanvas<'a> {
    scene: &'a mut Scene,
    transform: Affine,
}

impl<'a> SceneCanvas<'a> {
    /// Draw into `scene` without any extra transform.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self::with_transform(scene, Affine::IDENTITY)
    }

    /// Draw into `scene`, placing every path with `transform`.
    pub fn with_transform(scene: &'a mut Scene, transform: Affine) -> Self {
        Self { scene, transform }
    }
}

impl Canvas for SceneCanvas<'_> {
    fn draw_path(&mut self, path: &BezPath, paint: &FatPaint) {
        encode_path(self.scene, self.transform, path, paint);
    }
}

fn encode_path(scene: &mut Scene, transform: Affine, path: &BezPath, paint: &FatPaint) {
    let FatPaint {
        stroke,
        stroke_paint,
        fill_paint,
    } = paint;

    if let Some(fill_paint) = fill_paint {
        scene.fill(NonZero, transform, fill_paint, None, path);
    }
    if let Some(stroke_paint) = stroke_paint {
        scene.stroke(stroke, transform, stroke_paint, None, path);
    }
}

/// Add a recorded [`DisplayList`] to a Vello [`Scene`].
#[tracing::instrument(skip_all)]
pub fn add_display_list_to_scene(scene: &mut Scene, transform: Affine, list: &DisplayList) {
    for item in &list.items {
        match item {
            DisplayItem::FatShape(FatShape { paint, path }) => {
                encode_path(scene, transform, path, paint);
            }
            _ => {
                tracing::warn!(?item, "skipping unsupported display item");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shapefit::{
        peniko::{kurbo::Rect, Color},
        BorderSide, RoundedPolygon, ShapeFitBorder,
    };

    fn border() -> ShapeFitBorder<RoundedPolygon> {
        ShapeFitBorder::new(
            RoundedPolygon::PENTAGON,
            BorderSide::new(Color::BLACK, 2.0),
            0.5,
        )
        .unwrap()
    }

    #[test]
    fn paints_into_scene() {
        let mut scene = Scene::new();
        border().paint(
            &mut SceneCanvas::new(&mut scene),
            Rect::new(0.0, 0.0, 64.0, 32.0),
        );
        assert!(!scene.encoding().is_empty(), "stroke was encoded");
    }

    #[test]
    fn replays_display_list() {
        let mut list = DisplayList::default();
        border().paint(&mut list, Rect::new(0.0, 0.0, 64.0, 32.0));

        let mut scene = Scene::new();
        add_display_list_to_scene(&mut scene, Affine::IDENTITY, &list);
        assert!(!scene.encoding().is_empty(), "recorded stroke was encoded");
    }

    #[test]
    fn empty_list_encodes_nothing() {
        let mut scene = Scene::new();
        add_display_list_to_scene(&mut scene, Affine::IDENTITY, &DisplayList::default());
        assert!(scene.encoding().is_empty(), "nothing to encode");
    }
}
