// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Fitting normalized outlines into rectangles.

use peniko::kurbo::{Affine, BezPath, CubicBez, Rect, Vec2};

/// Transform taking the unit square onto the fitted box inside `rect`.
///
/// The fitted box keeps the short side of `rect`. Along the long side it
/// blends from the short side's length at `squash = 0.0` (a centered square)
/// to the full length at `squash = 1.0`, and it is centered in `rect`.
pub fn fit_transform(rect: Rect, squash: f64) -> Affine {
    let (width, height) = (rect.width(), rect.height());
    let (scale_x, scale_y) = if width <= height {
        (width, width + squash * (height - width))
    } else {
        (height + squash * (width - height), height)
    };
    let offset = Vec2::new(
        rect.x0 + 0.5 * (width - scale_x),
        rect.y0 + 0.5 * (height - scale_y),
    );
    tracing::trace!(?rect, squash, scale_x, scale_y, ?offset, "fit");
    Affine::scale_non_uniform(scale_x, scale_y).then_translate(offset)
}

/// Build a closed path from normalized `cubics`, fitted into `rect`.
///
/// The path has one `MoveTo`, one `CurveTo` per cubic in order, and a
/// `ClosePath`. No cubics gives an empty path.
pub fn fit_to_rect(rect: Rect, squash: f64, cubics: &[CubicBez]) -> BezPath {
    let mut path = BezPath::new();
    let Some(first) = cubics.first() else {
        return path;
    };
    path.move_to(first.p0);
    for c in cubics {
        path.curve_to(c.p1, c.p2, c.p3);
    }
    path.close_path();
    path.apply_affine(fit_transform(rect, squash));
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::kurbo::{PathEl, Point, Shape};

    use crate::polygon::straight;

    fn unit_square() -> [CubicBez; 4] {
        let p = [
            Point::new(0.0, 0.0),
            Point::new(1.0, 0.0),
            Point::new(1.0, 1.0),
            Point::new(0.0, 1.0),
        ];
        [
            straight(p[0], p[1]),
            straight(p[1], p[2]),
            straight(p[2], p[3]),
            straight(p[3], p[0]),
        ]
    }

    #[test]
    fn squash_zero_fits_a_centered_square() {
        let path = fit_to_rect(Rect::new(0.0, 0.0, 200.0, 100.0), 0.0, &unit_square());
        assert_eq!(
            path.bounding_box(),
            Rect::new(50.0, 0.0, 150.0, 100.0),
            "square on the short side"
        );
    }

    #[test]
    fn squash_one_fills_the_rect() {
        let rect = Rect::new(10.0, 20.0, 210.0, 120.0);
        let path = fit_to_rect(rect, 1.0, &unit_square());
        assert_eq!(path.bounding_box(), rect, "full rect");
    }

    #[test]
    fn squash_blends_between_footprints() {
        let path = fit_to_rect(Rect::new(0.0, 0.0, 100.0, 300.0), 0.5, &unit_square());
        assert_eq!(
            path.bounding_box(),
            Rect::new(0.0, 50.0, 100.0, 250.0),
            "tall rect keeps width, halfway height"
        );
    }

    #[test]
    fn square_rect_ignores_squash() {
        let rect = Rect::new(5.0, 5.0, 85.0, 85.0);
        let cubics = unit_square();
        let expected = fit_to_rect(rect, 0.0, &cubics);
        for squash in [0.25, 0.5, 0.75, 1.0] {
            assert_eq!(fit_to_rect(rect, squash, &cubics), expected, "squash {squash}");
        }
    }

    #[test]
    fn path_has_one_closed_contour() {
        let cubics = unit_square();
        let path = fit_to_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 1.0, &cubics);
        let els = path.elements();
        assert_eq!(els.len(), cubics.len() + 2, "move, curves, close");
        assert!(matches!(els[0], PathEl::MoveTo(_)), "starts with a move");
        assert!(
            els[1..=cubics.len()]
                .iter()
                .all(|el| matches!(el, PathEl::CurveTo(..))),
            "one curve per cubic"
        );
        assert_eq!(els.last(), Some(&PathEl::ClosePath), "ends closed");
        let PathEl::CurveTo(_, _, end) = els[1] else {
            panic!("expected a curve");
        };
        assert_eq!(end, Point::new(10.0, 0.0), "first curve in order");
    }

    #[test]
    fn degenerate_inputs() {
        assert!(
            fit_to_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.5, &[])
                .elements()
                .is_empty(),
            "no cubics, no path"
        );
        let path = fit_to_rect(Rect::new(3.0, 4.0, 3.0, 4.0), 0.5, &unit_square());
        assert_eq!(path.bounding_box(), Rect::new(3.0, 4.0, 3.0, 4.0), "zero size");
    }
}
