// src/models/drag_state.rs
//
// The single piece of mutable state shared by the drag tracker, the release
// animation and the moon renderer. Whoever writes last wins.

pub const DEGREES_PER_TURN: i32 = 360;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragState {
    /// Signed deformation: negative dents the moon, positive bulges it.
    pub strength: f32,
    /// Degree the deformation is centered on, in `0..360`.
    pub index: i32,
}

impl DragState {
    pub fn new(strength: f32, index: i32) -> Self {
        Self {
            strength,
            index: index.rem_euclid(DEGREES_PER_TURN),
        }
    }

    pub fn is_deformed(&self) -> bool {
        self.strength != 0.0
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_is_normalized() {
        assert_eq!(DragState::new(0.1, 0).index, 0);
        assert_eq!(DragState::new(0.1, 270).index, 270);
        assert_eq!(DragState::new(0.1, 360).index, 0);
        assert_eq!(DragState::new(0.1, -89).index, 271);
        assert_eq!(DragState::new(0.1, 725).index, 5);
    }

    #[test]
    fn test_reset() {
        let mut state = DragState::new(-0.4, 200);
        assert!(state.is_deformed());
        state.reset();
        assert_eq!(state, DragState::default());
        assert!(!state.is_deformed());
    }
}
