// Copyright 2025 the Shapefit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Morphing between two closed outlines.

extern crate alloc;
use alloc::vec::Vec;

use peniko::kurbo::{CubicBez, ParamCurve, ParamCurveArclen, Point};

use crate::Morph;

/// Arc length accuracy used when picking which segment to split.
const ARCLEN_ACCURACY: f64 = 1e-6;

/// Pairwise blend of two outlines brought to the same segment count.
///
/// The outline with fewer segments has its longest segment split in half
/// until the counts match. The end outline is then rotated to the cyclic
/// offset with the least total squared distance between paired control
/// points, so swapping start and end pairs the same segments.
#[derive(Debug, Clone, PartialEq)]
pub struct PolygonMorph {
    start: Vec<CubicBez>,
    end: Vec<CubicBez>,
}

impl PolygonMorph {
    /// Put `start` and `end` in correspondence.
    pub fn new(start: Vec<CubicBez>, end: Vec<CubicBez>) -> Self {
        if start.is_empty() || end.is_empty() {
            return Self { start, end };
        }
        let count = start.len().max(end.len());
        tracing::debug!(
            start = start.len(),
            end = end.len(),
            count,
            "matching morph outlines"
        );
        let start = refine(start, count);
        let mut end = refine(end, count);
        if let Some(k) = best_rotation(&start, &end) {
            end.rotate_left(k);
        }
        Self { start, end }
    }

    /// The start outline, after refinement.
    pub fn start(&self) -> &[CubicBez] {
        &self.start
    }

    /// The end outline, after refinement and rotation.
    pub fn end(&self) -> &[CubicBez] {
        &self.end
    }
}

impl Morph for PolygonMorph {
    fn as_cubics(&self, progress: f64) -> Vec<CubicBez> {
        if self.start.is_empty() {
            return self.end.clone();
        }
        if self.end.is_empty() {
            return self.start.clone();
        }
        self.start
            .iter()
            .zip(&self.end)
            .map(|(a, b)| CubicBez {
                p0: blend(a.p0, b.p0, progress),
                p1: blend(a.p1, b.p1, progress),
                p2: blend(a.p2, b.p2, progress),
                p3: blend(a.p3, b.p3, progress),
            })
            .collect()
    }
}

/// Exact at both ends: `t = 0` gives `a` and `t = 1` gives `b`.
fn blend(a: Point, b: Point, t: f64) -> Point {
    let s = 1.0 - t;
    Point::new(a.x * s + b.x * t, a.y * s + b.y * t)
}

/// Split the longest segment in half until there are `count` segments.
fn refine(mut cubics: Vec<CubicBez>, count: usize) -> Vec<CubicBez> {
    let mut lengths: Vec<f64> = cubics.iter().map(|c| c.arclen(ARCLEN_ACCURACY)).collect();
    while cubics.len() < count {
        let Some((i, _)) = lengths
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
        else {
            break;
        };
        let (left, right) = cubics[i].subdivide();
        cubics[i] = left;
        cubics.insert(i + 1, right);
        lengths[i] = left.arclen(ARCLEN_ACCURACY);
        lengths.insert(i + 1, right.arclen(ARCLEN_ACCURACY));
    }
    cubics
}

/// Left rotation of `end` that minimizes the pairing cost against `start`.
fn best_rotation(start: &[CubicBez], end: &[CubicBez]) -> Option<usize> {
    let n = end.len();
    (0..n)
        .map(|k| {
            start
                .iter()
                .enumerate()
                .map(|(i, a)| pair_cost(a, &end[(i + k) % n]))
                .sum::<f64>()
        })
        .enumerate()
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(k, _)| k)
}

fn pair_cost(a: &CubicBez, b: &CubicBez) -> f64 {
    a.p0.distance_squared(b.p0)
        + a.p1.distance_squared(b.p1)
        + a.p2.distance_squared(b.p2)
        + a.p3.distance_squared(b.p3)
}
