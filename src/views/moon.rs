// src/views/moon.rs
//
// The moon: a square region of the window holding the deformable outline.
// Drag positions are made local to that square before reaching the tracker.

use nannou::prelude::*;

use crate::{
    config::MoonConfig,
    models::DragState,
    utilities::{PathVerb, RadialOutline, SurfaceTransform},
};

pub struct MoonView {
    origin: Point2, // top-left of the square, surface coords
    size: f32,
    radius_ratio: f32,
    point_count: u32,
    color: Srgb<u8>,
}

impl MoonView {
    pub fn new(config: &MoonConfig) -> Self {
        let [r, g, b] = config.color;
        Self {
            origin: pt2(config.offset[0], config.offset[1]),
            size: config.size,
            radius_ratio: config.radius_ratio,
            point_count: config.point_count,
            color: rgb8(r, g, b),
        }
    }

    pub fn bounds(&self) -> Vec2 {
        vec2(self.size, self.size)
    }

    /// Center of the outline, local to the square.
    pub fn center(&self) -> Point2 {
        self.bounds() / 2.0
    }

    pub fn base_radius(&self) -> f32 {
        self.size * self.radius_ratio
    }

    pub fn to_local(&self, surface_point: Point2) -> Point2 {
        surface_point - self.origin
    }

    pub fn to_surface(&self, local_point: Point2) -> Point2 {
        local_point + self.origin
    }

    /// Outline for the current drag, local to the square.
    pub fn outline(&self, state: &DragState) -> RadialOutline {
        RadialOutline::new(
            self.center(),
            self.base_radius(),
            state.strength,
            state.index,
            self.point_count,
        )
    }

    pub fn draw(&self, draw: &Draw, state: &DragState, transform: &SurfaceTransform) {
        // the polygon closes itself, the Close point would duplicate the first
        let points = self
            .outline(state)
            .filter(|point| point.verb != PathVerb::Close)
            .map(|point| transform.to_window(self.to_surface(point.position)));

        draw.polygon().color(self.color).points(points);
    }
}
