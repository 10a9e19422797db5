// src/views/background.rs
//
// The night sky: a flat background color and a field of static stars.
// Stars are generated once when the sky is created and redrawn every frame.

use nannou::prelude::*;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{config::SkyConfig, models::Star, utilities::SurfaceTransform};

pub struct NightSky {
    color: Srgb<u8>,
    star_color: Srgb<u8>,
    stars: Vec<Star>,
}

impl NightSky {
    /// `surface` is the size of the window the stars are scattered over.
    pub fn new(config: &SkyConfig, surface: Vec2) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let stars = generate_stars(
            &mut rng,
            surface,
            config.star_count,
            config.star_size_min..=config.star_size_max,
        );
        tracing::debug!(count = stars.len(), seed = ?config.seed, "generated star field");

        let [r, g, b] = config.background;
        let [sr, sg, sb] = config.star_color;
        Self {
            color: rgb8(r, g, b),
            star_color: rgb8(sr, sg, sb),
            stars,
        }
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn draw(&self, draw: &Draw, transform: &SurfaceTransform) {
        draw.background().color(self.color);
        for star in &self.stars {
            draw.ellipse()
                .xy(transform.to_window(star.position))
                .radius(star.radius())
                .color(self.star_color);
        }
    }
}

/// `count + 1` stars on whole-pixel positions inside `surface`.
pub fn generate_stars<R: Rng>(
    rng: &mut R,
    surface: Vec2,
    count: u32,
    sizes: std::ops::RangeInclusive<u32>,
) -> Vec<Star> {
    let max_x = surface.x.max(0.0) as u32;
    let max_y = surface.y.max(0.0) as u32;

    (0..=count)
        .map(|_| {
            let x = rng.gen_range(0..=max_x);
            let y = rng.gen_range(0..=max_y);
            let size = rng.gen_range(sizes.clone());
            Star {
                position: pt2(x as f32, y as f32),
                size: size as f32,
            }
        })
        .collect()
}
