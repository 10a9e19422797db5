// src/models/star.rs

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Star {
    pub position: Point2, // surface coords
    pub size: f32,        // diameter
}

impl Star {
    pub fn radius(&self) -> f32 {
        self.size / 2.0
    }
}
