// src/config/config_types.rs
//
// Config types for the app.
// Every section falls back to its defaults, so a partial config.toml is fine.

use crate::utilities::{easing::EasingType, outline::DEFAULT_POINT_COUNT};
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1080,
            height: 720,
            title: String::from("moonvis"),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct MoonConfig {
    pub size: f32,          // side of the square the moon is drawn in
    pub offset: [f32; 2],   // top-left corner of that square, surface coords
    pub radius_ratio: f32,  // base radius as a fraction of size
    pub color: [u8; 3],
    pub point_count: u32,   // outline samples per revolution
}

impl Default for MoonConfig {
    fn default() -> Self {
        Self {
            size: 300.0,
            offset: [0.0, 0.0],
            radius_ratio: 1.0 / 3.0,
            color: [204, 204, 204],
            point_count: DEFAULT_POINT_COUNT,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DragConfig {
    pub strength_normalization: f32, // pixels of radial travel per unit of strength
    pub touch_slop: f32,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            strength_normalization: 500.0,
            touch_slop: 8.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ReleaseConfig {
    pub duration: f32, // seconds
    pub easing: EasingType,
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        Self {
            duration: 0.5,
            easing: EasingType::Bounce,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SkyConfig {
    pub background: [u8; 3],
    pub star_color: [u8; 3],
    pub star_count: u32,
    pub star_size_min: u32,
    pub star_size_max: u32,
    pub seed: Option<u64>,
}

impl Default for SkyConfig {
    fn default() -> Self {
        Self {
            background: [10, 12, 28],
            star_color: [204, 204, 204],
            star_count: 40,
            star_size_min: 1,
            star_size_max: 6,
            seed: None,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: String::from("info"),
        }
    }
}
