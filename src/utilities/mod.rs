pub mod coords;
pub mod easing;
pub mod outline;

pub use coords::SurfaceTransform;
pub use easing::EasingType;
pub use outline::{OutlinePoint, PathVerb, RadialOutline, DEFAULT_POINT_COUNT};
