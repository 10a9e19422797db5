pub mod value_animation;

pub use value_animation::ValueAnimation;
