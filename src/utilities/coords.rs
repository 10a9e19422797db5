// src/utilities/coords.rs
//
// Conversions between nannou window space (origin at the window center,
// y up) and surface space (origin at the top-left corner, y down).
// The outline, the star field and the drag tracker all work in surface space.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceTransform {
    pub width: f32,
    pub height: f32,
}

impl SurfaceTransform {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self::new(rect.w(), rect.h())
    }

    pub fn size(&self) -> Vec2 {
        vec2(self.width, self.height)
    }

    pub fn to_surface(&self, window_point: Point2) -> Point2 {
        pt2(
            window_point.x + self.width / 2.0,
            self.height / 2.0 - window_point.y,
        )
    }

    pub fn to_window(&self, surface_point: Point2) -> Point2 {
        pt2(
            surface_point.x - self.width / 2.0,
            self.height / 2.0 - surface_point.y,
        )
    }
}
