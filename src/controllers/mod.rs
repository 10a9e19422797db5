pub mod drag_tracker;
pub mod gesture;

pub use drag_tracker::DragTracker;
pub use gesture::{DragGesture, GestureDetector, PointerId};
