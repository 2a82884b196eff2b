use log::debug;

use crate::animation::van_wijk;
use crate::camera::frame::Frame;

/// An animated jump from one bookmark frame to another.
///
/// The transition is a plain value: it captures the two frames and the
/// Van Wijk duration at construction, and the caller feeds it elapsed
/// seconds each tick. Typical per-frame drive loop:
///
/// ```
/// use gimbal::{Frame, Transition};
/// use glam::Vec2;
///
/// let a = Frame::Map { extent: 1000.0, center: Vec2::ZERO };
/// let b = Frame::Map { extent: 100.0, center: Vec2::new(250.0, 0.0) };
/// let transition = Transition::new(a, b).with_speed(3.0);
///
/// let mut elapsed = 0.0;
/// while !transition.is_finished(elapsed) {
///     let frame = transition.frame_at(elapsed);
///     assert!(frame.extent().is_some()); // controller.goto_frame(frame)
///     elapsed += 1.0 / 60.0;
/// }
/// assert_eq!(transition.frame_at(elapsed), b);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    source: Frame,
    target: Frame,
    duration: f64,
    speed: f64,
}

impl Transition {
    /// Plan a transition between two frames.
    #[must_use]
    pub fn new(source: Frame, target: Frame) -> Self {
        let duration = van_wijk::duration(source, target);
        debug!("planned camera transition over {duration:.3} path units");
        Self {
            source,
            target,
            duration,
            speed: 1.0,
        }
    }

    /// Scale playback speed; values above 1 shorten the transition.
    /// Non-positive speeds are ignored.
    #[must_use]
    pub fn with_speed(mut self, speed: f64) -> Self {
        if speed > 0.0 {
            self.speed = speed;
        }
        self
    }

    /// The frame the transition starts from.
    #[must_use]
    pub const fn source(&self) -> Frame {
        self.source
    }

    /// The frame the transition lands on.
    #[must_use]
    pub const fn target(&self) -> Frame {
        self.target
    }

    /// Wall-clock duration in seconds at the configured speed.
    #[must_use]
    pub fn duration_seconds(&self) -> f64 {
        self.duration / self.speed
    }

    /// Normalized progress in `[0, 1]` for the given elapsed time.
    /// Coincident frames finish immediately.
    #[must_use]
    pub fn progress(&self, elapsed_seconds: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.speed * elapsed_seconds / self.duration).clamp(0.0, 1.0)
    }

    /// Whether the transition has reached its target.
    #[must_use]
    pub fn is_finished(&self, elapsed_seconds: f64) -> bool {
        self.progress(elapsed_seconds) >= 1.0
    }

    /// The frame to show at the given elapsed time. Exactly the target
    /// once finished, so the last applied frame never carries
    /// interpolation error.
    #[must_use]
    pub fn frame_at(&self, elapsed_seconds: f64) -> Frame {
        let t = self.progress(elapsed_seconds);
        if t >= 1.0 {
            self.target
        } else {
            van_wijk::interpolate(self.source, self.target, t)
        }
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;

    fn map(extent: f32, x: f32, y: f32) -> Frame {
        Frame::Map {
            extent,
            center: Vec2::new(x, y),
        }
    }

    #[test]
    fn starts_at_source_and_ends_at_target() {
        let a = map(1000.0, 0.0, 0.0);
        let b = map(200.0, 400.0, 100.0);
        let transition = Transition::new(a, b);
        let start = transition.frame_at(0.0);
        let Frame::Map { extent, center } = start else {
            panic!("expected a map frame");
        };
        assert!((extent - 1000.0).abs() < 1e-2);
        assert!(center.length() < 1e-2);
        assert_eq!(
            transition.frame_at(transition.duration_seconds() + 1.0),
            b
        );
    }

    #[test]
    fn finishes_after_its_duration() {
        let transition =
            Transition::new(map(1000.0, 0.0, 0.0), map(100.0, 0.0, 0.0));
        let d = transition.duration_seconds();
        assert!(d > 0.0);
        assert!(!transition.is_finished(d * 0.5));
        assert!(transition.is_finished(d));
    }

    #[test]
    fn coincident_frames_snap_immediately() {
        let a = map(500.0, 1.0, 2.0);
        let transition = Transition::new(a, a);
        assert!(transition.is_finished(0.0));
        assert_eq!(transition.frame_at(0.0), a);
    }

    #[test]
    fn speed_scales_wall_clock_duration() {
        let a = map(1000.0, 0.0, 0.0);
        let b = map(100.0, 300.0, 0.0);
        let normal = Transition::new(a, b);
        let fast = Transition::new(a, b).with_speed(3.0);
        assert!(
            (normal.duration_seconds() / fast.duration_seconds() - 3.0)
                .abs()
                < 1e-9
        );
        // Same path, just traversed faster.
        let at_normal = normal.frame_at(0.3 * normal.duration_seconds());
        let at_fast = fast.frame_at(0.3 * fast.duration_seconds());
        assert!(
            (at_normal.extent().unwrap() - at_fast.extent().unwrap()).abs()
                < 1e-3
        );
    }

    #[test]
    fn non_positive_speed_is_ignored() {
        let a = map(1000.0, 0.0, 0.0);
        let b = map(100.0, 0.0, 0.0);
        let transition = Transition::new(a, b).with_speed(-1.0);
        assert!((transition.duration_seconds()
            - Transition::new(a, b).duration_seconds())
        .abs()
            < 1e-12);
    }
}
