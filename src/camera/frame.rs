use glam::{Vec2, Vec3};

use crate::options::Mode;

/// Captured camera state for bookmarks and Van Wijk animation.
///
/// A frame is a compact, mode-tagged snapshot:
///
/// - [`Frame::Map`] stores the zoom level as the world-space extent of
///   the rectangle formed by intersecting the frustum with the map
///   plane (a width or a height depending on the FOV orientation), and
///   the pan offset as a 2D vector from the home target projected onto
///   the plane's tangent basis.
/// - [`Frame::Orbit`] stores the two rotation angles, the rotation
///   pivot, and the eye-to-pivot distance. `phi` is the X-axis-style
///   elevation in `[-pi/2, +pi/2]` and applies first; `theta` is the
///   azimuth in `[-pi, +pi]` and applies second.
///
/// Frames are plain values: they carry no ownership of controller
/// state, and a frame's variant must match the controller's active mode
/// when applied.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Frame {
    /// Map-mode bookmark: visible extent plus pan offset.
    Map {
        /// World-space extent along the FOV-fixed axis. Always positive
        /// for frames produced by the controller.
        extent: f32,
        /// Offset from the home target in the map plane's tangent
        /// basis.
        center: Vec2,
    },
    /// Orbit-mode bookmark: rotation angles, pivot, and distance.
    Orbit {
        /// Elevation angle in radians, constrained to `[-pi/2, +pi/2]`.
        phi: f32,
        /// Azimuth angle in radians.
        theta: f32,
        /// World-space rotation center. Starts at the home target but
        /// may move via strafe panning.
        pivot: Vec3,
        /// Distance between the eye and the pivot.
        distance: f32,
    },
}

impl Frame {
    /// Which controller mode this frame belongs to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        match self {
            Self::Map { .. } => Mode::Map,
            Self::Orbit { .. } => Mode::Orbit,
        }
    }

    /// Visible extent for map frames, `None` for orbit frames.
    #[must_use]
    pub const fn extent(&self) -> Option<f32> {
        match self {
            Self::Map { extent, .. } => Some(*extent),
            Self::Orbit { .. } => None,
        }
    }

    /// Pan offset for map frames, `None` for orbit frames.
    #[must_use]
    pub const fn center(&self) -> Option<Vec2> {
        match self {
            Self::Map { center, .. } => Some(*center),
            Self::Orbit { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_reports_its_mode() {
        let map = Frame::Map {
            extent: 100.0,
            center: Vec2::ZERO,
        };
        let orbit = Frame::Orbit {
            phi: 0.0,
            theta: 0.0,
            pivot: Vec3::ZERO,
            distance: 5.0,
        };
        assert_eq!(map.mode(), Mode::Map);
        assert_eq!(orbit.mode(), Mode::Orbit);
    }

    #[test]
    fn map_accessors() {
        let frame = Frame::Map {
            extent: 250.0,
            center: Vec2::new(3.0, -4.0),
        };
        assert_eq!(frame.extent(), Some(250.0));
        assert_eq!(frame.center(), Some(Vec2::new(3.0, -4.0)));
    }

    #[test]
    fn orbit_accessors_are_empty() {
        let frame = Frame::Orbit {
            phi: 0.5,
            theta: 1.0,
            pivot: Vec3::ONE,
            distance: 2.0,
        };
        assert_eq!(frame.extent(), None);
        assert_eq!(frame.center(), None);
    }
}
