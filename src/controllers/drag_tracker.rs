// src/controllers/drag_tracker.rs
//
// Turns drag gestures on the moon into a DragState: how hard the outline is
// pushed or pulled, and at which angle. On release the strength bounces back
// to zero.
//
// Positions are local to the moon's square, in surface coords (y down).

use nannou::prelude::*;

use crate::{
    animation::ValueAnimation,
    config::{DragConfig, ReleaseConfig},
    models::DragState,
    utilities::easing::EasingType,
};

// index 0 is straight up, atan2 measures from the +x axis
const INDEX_OFFSET: i32 = 90;

pub struct DragTracker {
    start: Option<Point2>,
    release: Option<ValueAnimation>,
    strength_normalization: f32,
    release_duration: f32,
    release_easing: EasingType,
}

impl DragTracker {
    pub fn new(drag_config: &DragConfig, release_config: &ReleaseConfig) -> Self {
        Self {
            start: None,
            release: None,
            strength_normalization: drag_config.strength_normalization,
            release_duration: release_config.duration,
            release_easing: release_config.easing,
        }
    }

    pub fn drag_start(&mut self, position: Point2) {
        self.cancel_release();
        self.start = Some(position);
        tracing::debug!(x = position.x, y = position.y, "drag start");
    }

    /// Returns true when the state was overwritten.
    ///
    /// Moves are ignored when the drag began outside the moon's circle
    /// (`bounds.x / 2` from the center), no matter where the pointer is now.
    pub fn drag_move(&mut self, state: &mut DragState, position: Point2, bounds: Vec2) -> bool {
        let Some(start) = self.start else {
            return false;
        };

        let center = bounds / 2.0;
        let relative_start = start - center;
        if relative_start.length_squared() > (bounds.x / 2.0).powi(2) {
            return false;
        }

        let relative = position - center;
        let index = INDEX_OFFSET + angle_bucket(relative);
        let strength = (relative.length() - relative_start.length()) / self.strength_normalization;

        *state = DragState::new(strength, index);
        tracing::trace!(strength, index = state.index, "drag move");
        true
    }

    pub fn drag_end(&mut self, state: &DragState, time: f32) {
        self.start = None;
        self.release = Some(ValueAnimation::new(
            state.strength,
            0.0,
            self.release_duration,
            self.release_easing,
            time,
        ));
        tracing::debug!(strength = state.strength, index = state.index, "drag end, releasing");
    }

    /// Frame tick for the release animation.
    pub fn update(&mut self, state: &mut DragState, time: f32) {
        let Some(release) = &self.release else {
            return;
        };

        if !release.is_active() {
            self.release = None;
            return;
        }

        state.strength = release.value_at(time);
        if release.is_finished(time) {
            self.release = None;
            tracing::debug!("release settled");
        }
    }

    pub fn cancel_release(&mut self) {
        if let Some(release) = self.release.as_mut() {
            release.cancel();
            tracing::debug!("release cancelled");
        }
    }

    pub fn is_releasing(&self) -> bool {
        self.release
            .as_ref()
            .map(|release| release.is_active())
            .unwrap_or(false)
    }

    pub fn is_dragging(&self) -> bool {
        self.start.is_some()
    }
}

/// Whole degrees of the vector's angle, floored. In `-180..=180`.
fn angle_bucket(relative: Vec2) -> i32 {
    let degrees = (relative.y as f64).atan2(relative.x as f64).to_degrees();
    // axis-aligned vectors come out a rounding error off a whole degree
    let snapped = degrees.round();
    let degrees = if (degrees - snapped).abs() < 1e-6 {
        snapped
    } else {
        degrees
    };
    degrees.floor() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn bounds() -> Vec2 {
        vec2(100.0, 100.0)
    }

    fn tracker() -> DragTracker {
        DragTracker::new(&DragConfig::default(), &ReleaseConfig::default())
    }

    // converts a center-relative offset into box-local coords
    fn at(x: f32, y: f32) -> Point2 {
        pt2(50.0 + x, 50.0 + y)
    }

    #[test]
    fn test_drag_from_boundary_upward() {
        let mut tracker = tracker();
        let mut state = DragState::default();

        // start exactly on the circle is still inside
        tracker.drag_start(at(0.0, -50.0));
        assert!(tracker.drag_move(&mut state, at(0.0, -60.0), bounds()));
        assert!((state.strength - 0.02).abs() < EPSILON);
        assert_eq!(state.index, 0);
    }

    #[test]
    fn test_index_for_each_direction() {
        let directions = vec![
            ((0.0, -30.0), 0),   // up
            ((30.0, 0.0), 90),   // right
            ((0.0, 30.0), 180),  // down
            ((-30.0, 0.0), 270), // left
            ((30.0, -30.0), 45),
        ];

        for ((x, y), expected) in directions {
            let mut tracker = tracker();
            let mut state = DragState::default();
            tracker.drag_start(at(0.0, 0.0));
            tracker.drag_move(&mut state, at(x, y), bounds());
            assert_eq!(state.index, expected, "direction ({}, {})", x, y);
        }
    }

    #[test]
    fn test_pull_inward_is_negative() {
        let mut tracker = tracker();
        let mut state = DragState::default();
        tracker.drag_start(at(40.0, 0.0));
        tracker.drag_move(&mut state, at(15.0, 0.0), bounds());
        assert!((state.strength - (-25.0 / 500.0)).abs() < EPSILON);
        assert_eq!(state.index, 90);
    }

    #[test]
    fn test_drag_started_outside_is_ignored() {
        let mut tracker = tracker();
        let mut state = DragState::new(0.1, 30);

        tracker.drag_start(at(45.0, 45.0)); // corner of the box, outside the circle
        for (x, y) in [(40.0, 40.0), (0.0, 0.0), (10.0, -5.0), (-49.0, 0.0)] {
            assert!(!tracker.drag_move(&mut state, at(x, y), bounds()));
        }
        assert_eq!(state, DragState::new(0.1, 30));
    }

    #[test]
    fn test_move_without_start_is_ignored() {
        let mut tracker = tracker();
        let mut state = DragState::default();
        assert!(!tracker.drag_move(&mut state, at(10.0, 10.0), bounds()));
        assert_eq!(state, DragState::default());
    }

    #[test]
    fn test_release_bounces_back_to_zero() {
        let mut tracker = tracker();
        let mut state = DragState::default();

        // start 50 below center, drag to 200 below: strength 0.3 at index 180
        tracker.drag_start(at(0.0, 50.0));
        tracker.drag_move(&mut state, at(0.0, 200.0), bounds());
        assert!((state.strength - 0.3).abs() < EPSILON);
        assert_eq!(state.index, 180);

        let start_time = 10.0;
        tracker.drag_end(&state, start_time);
        assert!(tracker.is_releasing());
        assert!(!tracker.is_dragging());

        let mut samples = Vec::new();
        for frame in 0..=44 {
            let time = start_time + frame as f32 * 0.0125;
            tracker.update(&mut state, time);
            assert_eq!(state.index, 180);
            assert!(state.strength <= 0.3 + EPSILON);
            assert!(state.strength >= -0.001);
            samples.push(state.strength);
        }

        assert_eq!(state.strength, 0.0);
        assert!(!tracker.is_releasing());
        assert!(samples[0] > samples[samples.len() - 1]);
    }

    #[test]
    fn test_release_rebounds_shrink() {
        let mut tracker = tracker();
        let mut state = DragState::new(0.3, 180);
        tracker.drag_end(&state, 0.0);

        // each rebound peaks lower than the last
        let mut peaks = Vec::new();
        for scaled in [0.54719_f32, 0.8526, 1.0435] {
            tracker.update(&mut state, scaled / 1.1226 * 0.5);
            peaks.push(state.strength);
        }
        assert!((peaks[0] - 0.09).abs() < 0.001);
        assert!((peaks[1] - 0.03).abs() < 0.001);
        assert!((peaks[2] - 0.015).abs() < 0.001);
        assert!(peaks[0] > peaks[1] && peaks[1] > peaks[2]);
    }

    #[test]
    fn test_new_drag_cancels_release() {
        let mut tracker = tracker();
        let mut state = DragState::new(0.5, 90);
        tracker.drag_end(&state, 0.0);
        tracker.update(&mut state, 0.05);
        let mid_release = state.strength;
        assert!(tracker.is_releasing());

        tracker.drag_start(at(0.0, 0.0));
        assert!(!tracker.is_releasing());
        assert!(tracker.is_dragging());

        // later frames leave the state alone
        tracker.update(&mut state, 0.2);
        tracker.update(&mut state, 0.3);
        assert_eq!(state.strength, mid_release);
        assert_eq!(state.index, 90);
    }

    #[test]
    fn test_angle_bucket_floors() {
        assert_eq!(angle_bucket(vec2(1.0, 0.0)), 0);
        assert_eq!(angle_bucket(vec2(0.0, -1.0)), -90);
        assert_eq!(angle_bucket(vec2(-1.0, 0.0)), 180);
        // just past -90 degrees rounds down, not toward zero
        assert_eq!(angle_bucket(vec2(0.01, -1.0)), -90);
        assert_eq!(angle_bucket(vec2(-0.01, -1.0)), -91);
    }
}
