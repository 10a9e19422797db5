// src/utilities/outline.rs
//
// Generates the moon outline: a circle whose radius is pushed out (or pulled
// in) by a gaussian bump centered on one angular index.
//
// Points are in surface coordinates: y grows downward, angle 0 points
// straight up and angles increase clockwise.

use nannou::prelude::*;
use std::f64::consts::PI as PI_F64;

/// Samples per revolution used by the moon.
pub const DEFAULT_POINT_COUNT: u32 = 360;

// a dent spreads over point_count / 8 samples, a bulge over point_count / 12
const DENT_SPREAD_DIVISOR: i32 = 8;
const BULGE_SPREAD_DIVISOR: i32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathVerb {
    MoveTo,
    LineTo,
    Close,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OutlinePoint {
    pub position: Point2,
    pub verb: PathVerb,
}

/// Number of samples the gaussian falloff is scaled by.
pub fn effect_count(strength: f32, point_count: u32) -> i32 {
    let point_count = point_count as i32;
    if strength < 0.0 {
        point_count / DENT_SPREAD_DIVISOR
    } else {
        point_count / BULGE_SPREAD_DIVISOR
    }
}

/// Lazy iterator over one closed outline.
///
/// Iterates `i` over `index - point_count / 2 ..= index + point_count / 2`, so
/// the seam of the path sits opposite the deformation. Yields
/// `point_count + 1` points: a `MoveTo`, the `LineTo`s, and a final `Close`
/// that lands back on the first point.
///
/// `index` may be any integer; it is reduced modulo `point_count`.
/// Expects `base_radius > 0`, a finite `strength` and `point_count >= 12`.
/// Other inputs produce meaningless (but not panicking) output.
#[derive(Debug, Clone)]
pub struct RadialOutline {
    center: Point2,
    base_radius: f32,
    strength: f32,
    index: i32,
    point_count: u32,
    effect_count: i32,
    from_index: i32,
    to_index: i32,
    next: i32,
}

impl RadialOutline {
    pub fn new(center: Point2, base_radius: f32, strength: f32, index: i32, point_count: u32) -> Self {
        // the outline repeats every point_count samples
        let index = index.rem_euclid(point_count as i32);
        let from_index = index - point_count as i32 / 2;
        let to_index = from_index + point_count as i32;
        Self {
            center,
            base_radius,
            strength,
            index,
            point_count,
            effect_count: effect_count(strength, point_count),
            from_index,
            to_index,
            next: from_index,
        }
    }

    pub fn effect_count(&self) -> i32 {
        self.effect_count
    }

    /// Radius of sample `i`.
    pub fn radius_at(&self, i: i32) -> f32 {
        let x0 = (i as i64 - self.index as i64) as f64 / self.effect_count as f64;
        let p = self.strength as f64 * (-x0 * x0).exp();
        (self.base_radius as f64 * (1.0 + p)) as f32
    }

    /// Position of sample `i`.
    pub fn point_at(&self, i: i32) -> Point2 {
        let theta = i as f64 * 2.0 * PI_F64 / self.point_count as f64;
        let radius = self.radius_at(i) as f64;
        pt2(
            (self.center.x as f64 + theta.sin() * radius) as f32,
            (self.center.y as f64 - theta.cos() * radius) as f32,
        )
    }

    fn remaining(&self) -> usize {
        (self.to_index - self.next + 1).max(0) as usize
    }
}

impl Iterator for RadialOutline {
    type Item = OutlinePoint;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next > self.to_index {
            return None;
        }
        let i = self.next;
        self.next += 1;

        let verb = if i == self.from_index {
            PathVerb::MoveTo
        } else if i == self.to_index {
            PathVerb::Close
        } else {
            PathVerb::LineTo
        };

        Some(OutlinePoint {
            position: self.point_at(i),
            verb,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RadialOutline {}
