// src/views/mod.rs

pub mod background;
pub mod moon;

pub use background::NightSky;
pub use moon::MoonView;
