// src/animation/value_animation.rs
//
// A single scalar tweened from one value to another over a fixed duration.
// Time is the app clock in seconds, the same clock the effects use.

use crate::utilities::easing::EasingType;

#[derive(Debug, Clone)]
pub struct ValueAnimation {
    pub from: f32,
    pub to: f32,
    pub start_time: f32,
    pub duration: f32,
    pub easing: EasingType,
    is_active: bool,
}

impl ValueAnimation {
    pub fn new(from: f32, to: f32, duration: f32, easing: EasingType, start_time: f32) -> Self {
        Self {
            from,
            to,
            start_time,
            duration,
            easing,
            is_active: true,
        }
    }

    /// Normalized progress in `0.0..=1.0`.
    pub fn progress(&self, time: f32) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((time - self.start_time) / self.duration).clamp(0.0, 1.0)
    }

    /// Lands exactly on `to` once the duration has elapsed, whatever the easing.
    pub fn value_at(&self, time: f32) -> f32 {
        if self.is_finished(time) {
            return self.to;
        }
        let eased = self.easing.apply(self.progress(time));
        self.from + (self.to - self.from) * eased
    }

    pub fn is_finished(&self, time: f32) -> bool {
        time - self.start_time >= self.duration
    }

    pub fn cancel(&mut self) {
        self.is_active = false;
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    #[test]
    fn test_linear_interpolation() {
        let animation = ValueAnimation::new(10.0, 20.0, 2.0, EasingType::Linear, 1.0);
        assert_eq!(animation.value_at(1.0), 10.0);
        assert!((animation.value_at(2.0) - 15.0).abs() < EPSILON);
        assert!((animation.progress(2.5) - 0.75).abs() < EPSILON);
        assert_eq!(animation.value_at(3.0), 20.0);
    }

    #[test]
    fn test_clamps_outside_window() {
        let animation = ValueAnimation::new(0.3, 0.0, 0.5, EasingType::Bounce, 4.0);
        assert_eq!(animation.value_at(3.0), 0.3);
        assert_eq!(animation.progress(3.0), 0.0);
        assert_eq!(animation.value_at(10.0), 0.0);
        assert!(animation.is_finished(4.5));
        assert!(!animation.is_finished(4.49));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let animation = ValueAnimation::new(1.0, -1.0, 0.0, EasingType::EaseOut, 2.0);
        assert!(animation.is_finished(2.0));
        assert_eq!(animation.value_at(2.0), -1.0);
        assert_eq!(animation.progress(0.0), 1.0);
    }

    #[test]
    fn test_cancel() {
        let mut animation = ValueAnimation::new(1.0, 0.0, 1.0, EasingType::Linear, 0.0);
        assert!(animation.is_active());
        animation.cancel();
        assert!(!animation.is_active());
    }
}
