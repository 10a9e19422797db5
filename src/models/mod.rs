pub mod drag_state;
pub mod star;

pub use drag_state::DragState;
pub use star::Star;
