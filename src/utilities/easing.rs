//src/utilities/easing.rs

// easing functions for time based animations
// input and output are normalized progress, 0.0 at the start and 1.0 at the end

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EasingType {
    #[default]
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    Bounce,
}

impl EasingType {
    pub fn apply(&self, t: f32) -> f32 {
        match self {
            EasingType::Linear => t,
            EasingType::EaseIn => ease_in(t),
            EasingType::EaseOut => ease_out(t),
            EasingType::EaseInOut => ease_in_out(t),
            EasingType::Bounce => bounce(t),
        }
    }
}

pub fn ease_in_out(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        -1.0 + (4.0 - 2.0 * t) * t
    }
}

pub fn ease_in(t: f32) -> f32 {
    t * t
}

pub fn ease_out(t: f32) -> f32 {
    t * (2.0 - t)
}

// Reaches 1.0 early, then drops back three times with shrinking dips.
// Can exceed 1.0 by a hair right before t = 1.0.
pub fn bounce(t: f32) -> f32 {
    let t = t * 1.1226;
    if t < 0.3535 {
        bounce_segment(t)
    } else if t < 0.7408 {
        bounce_segment(t - 0.54719) + 0.7
    } else if t < 0.9644 {
        bounce_segment(t - 0.8526) + 0.9
    } else {
        bounce_segment(t - 1.0435) + 0.95
    }
}

fn bounce_segment(t: f32) -> f32 {
    t * t * 8.0
}
