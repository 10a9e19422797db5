// src/controllers/gesture.rs
//
// Raw pointer input -> drag gestures.
// A press only becomes a drag once the pointer has moved past the touch slop.
// One pointer at a time; presses from other pointers are ignored until the
// tracked one is released.

use nannou::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerId {
    Mouse,
    Touch(u64),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragGesture {
    Start(Point2), // where the pointer went down
    Move(Point2),
    End,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum GesturePhase {
    Idle,
    Pressed { pointer: PointerId, origin: Point2 },
    Dragging { pointer: PointerId },
}

pub struct GestureDetector {
    touch_slop: f32,
    phase: GesturePhase,
}

impl GestureDetector {
    pub fn new(touch_slop: f32) -> Self {
        Self {
            touch_slop,
            phase: GesturePhase::Idle,
        }
    }

    pub fn pointer_down(&mut self, pointer: PointerId, position: Point2) {
        if self.phase == GesturePhase::Idle {
            self.phase = GesturePhase::Pressed {
                pointer,
                origin: position,
            };
        }
    }

    pub fn pointer_move(&mut self, pointer: PointerId, position: Point2) -> Vec<DragGesture> {
        match self.phase {
            GesturePhase::Pressed {
                pointer: tracked,
                origin,
            } if tracked == pointer => {
                if origin.distance(position) > self.touch_slop {
                    self.phase = GesturePhase::Dragging { pointer };
                    vec![DragGesture::Start(origin), DragGesture::Move(position)]
                } else {
                    Vec::new()
                }
            }
            GesturePhase::Dragging { pointer: tracked } if tracked == pointer => {
                vec![DragGesture::Move(position)]
            }
            _ => Vec::new(),
        }
    }

    pub fn pointer_up(&mut self, pointer: PointerId) -> Option<DragGesture> {
        match self.phase {
            GesturePhase::Pressed { pointer: tracked, .. } if tracked == pointer => {
                self.phase = GesturePhase::Idle;
                None
            }
            GesturePhase::Dragging { pointer: tracked } if tracked == pointer => {
                self.phase = GesturePhase::Idle;
                Some(DragGesture::End)
            }
            _ => None,
        }
    }

    /// Drops whatever pointer is tracked. A drag in progress still ends normally.
    pub fn cancel(&mut self) -> Option<DragGesture> {
        let was_dragging = matches!(self.phase, GesturePhase::Dragging { .. });
        self.phase = GesturePhase::Idle;
        was_dragging.then_some(DragGesture::End)
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, GesturePhase::Dragging { .. })
    }
}
