//! Map-mode pan/zoom constraint clamping.
//!
//! Pure frame-space math: given a proposed `(extent, center)` pair the
//! engine returns the clamped pair for the active policy. The
//! controller derives the proposal from a candidate eye/target pose,
//! runs it through [`constrain`], and writes the result back through
//! the frame codec. Axis handling order is load-bearing: the FOV axis
//! is clamped first, so it wins when both axes are simultaneously
//! over-extent.

use glam::Vec2;

use crate::options::{Constraint, FovOrientation};

/// Everything the clamp needs to know about the current configuration.
#[derive(Debug, Clone, Copy)]
pub struct ClampContext {
    /// Active constraint policy.
    pub constraint: Constraint,
    /// Which FOV angle is fixed; decides which axis is clamped first.
    pub orientation: FovOrientation,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Full map extent (width, height) centered at the home target.
    pub map_extent: Vec2,
    /// Extent of the home frame along the FOV axis.
    pub home_extent: f32,
    /// Zoom floor: `2 * map_min_distance * tan(fov/2)`. The extent
    /// never drops below this regardless of policy.
    pub min_extent: f32,
}

/// Clamp like the C stdlib idiom where the lower bound wins if the
/// bounds cross; `f32::clamp` would panic instead.
fn clamp(v: f32, lo: f32, hi: f32) -> f32 {
    v.min(hi).max(lo)
}

/// Apply the zoom floor and the active constraint policy to a proposed
/// frame.
///
/// `previous_center` is the pan offset of the frame *before* this move;
/// when the floor trips, the center reverts to it so a single gesture
/// never zooms and pans at once. Always produces a valid frame, even
/// for misconfigured map extents; garbage-in bounds are the caller's
/// responsibility.
#[must_use]
pub fn constrain(
    extent: f32,
    center: Vec2,
    previous_center: Vec2,
    ctx: &ClampContext,
) -> (f32, Vec2) {
    let mut extent = extent;
    let mut x = center.x;
    let mut y = center.y;

    if extent < ctx.min_extent {
        extent = ctx.min_extent;
        x = previous_center.x;
        y = previous_center.y;
    }

    if ctx.constraint == Constraint::None {
        return (extent, Vec2::new(x, y));
    }

    let aspect = ctx.aspect;
    let map_width = ctx.map_extent.x / 2.0;
    let map_height = ctx.map_extent.y / 2.0;

    match ctx.orientation {
        FovOrientation::Horizontal => {
            let mut vp_width = extent / 2.0;
            let mut vp_height = vp_width / aspect;
            if map_width < vp_width {
                extent = ctx.home_extent;
                vp_width = extent / 2.0;
                vp_height = vp_width / aspect;
                x = 0.0;
                y = previous_center.y;
            }
            x = clamp(x, -map_width + vp_width, map_width - vp_width);
            if map_height < vp_height {
                if ctx.constraint == Constraint::Full {
                    // Viewport taller than the map: shrink the extent
                    // until the secondary axis fits, then re-clamp
                    // both centers against the tightened viewport.
                    extent = 2.0 * map_height * aspect;
                    vp_width = extent / 2.0;
                    vp_height = vp_width / aspect;
                    x = previous_center.x;
                    x = clamp(x, -map_width + vp_width, map_width - vp_width);
                    y = clamp(
                        y,
                        -map_height + vp_height,
                        map_height - vp_height,
                    );
                } else {
                    // Axis policy: can't scroll the map fully out of
                    // view, but under/overshooting the centering is
                    // allowed.
                    y = clamp(
                        y,
                        -vp_height + map_height,
                        vp_height - map_height,
                    );
                }
            } else {
                y = clamp(y, -map_height + vp_height, map_height - vp_height);
            }
        }
        FovOrientation::Vertical => {
            let mut vp_height = extent / 2.0;
            let mut vp_width = vp_height * aspect;
            if map_height < vp_height {
                extent = ctx.home_extent;
                vp_height = extent / 2.0;
                vp_width = vp_height * aspect;
                y = 0.0;
                x = previous_center.x;
            }
            y = clamp(y, -map_height + vp_height, map_height - vp_height);
            if map_width < vp_width {
                if ctx.constraint == Constraint::Full {
                    extent = 2.0 * map_width / aspect;
                    vp_height = extent / 2.0;
                    vp_width = vp_height * aspect;
                    y = previous_center.y;
                    y = clamp(
                        y,
                        -map_height + vp_height,
                        map_height - vp_height,
                    );
                    x = clamp(x, -map_width + vp_width, map_width - vp_width);
                } else {
                    x = clamp(x, -vp_width + map_width, vp_width - map_width);
                }
            } else {
                x = clamp(x, -map_width + vp_width, map_width - vp_width);
            }
        }
    }

    (extent, Vec2::new(x, y))
}
