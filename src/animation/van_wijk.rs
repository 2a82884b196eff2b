use glam::Vec2;
use log::warn;

use crate::camera::frame::Frame;

/// The ρ parameter of the Van Wijk & Nuij path, balancing zoom against
/// pan. √2 is the authors' recommended value.
const RHO: f64 = std::f64::consts::SQRT_2;

/// Intermediate coefficients of the closed-form path between two map
/// frames, computed in f64 to keep the hyperbolic terms stable.
struct MapPath {
    ux0: f64,
    uy0: f64,
    w0: f64,
    dx: f64,
    dy: f64,
    d1: f64,
    r0: f64,
    /// Arc-length parameter `S`; the path is traversed as `s = t * S`.
    s_total: f64,
    /// Whether the closed form applies. Degenerate pan distances make
    /// `r1 - r0` undefined, selecting the pure-zoom fallback.
    closed_form: bool,
}

fn map_path(w0: f64, c0: Vec2, w1: f64, c1: Vec2) -> MapPath {
    let rho2 = RHO * RHO;
    let rho4 = rho2 * rho2;
    let (ux0, uy0) = (f64::from(c0.x), f64::from(c0.y));
    let (ux1, uy1) = (f64::from(c1.x), f64::from(c1.y));
    let dx = ux1 - ux0;
    let dy = uy1 - uy0;
    let d2 = dx * dx + dy * dy;
    let d1 = d2.sqrt();
    let b0 = (w1 * w1 - w0 * w0 + rho4 * d2) / (2.0 * w0 * rho2 * d1);
    let b1 = (w1 * w1 - w0 * w0 - rho4 * d2) / (2.0 * w1 * rho2 * d1);
    let r0 = ((b0 * b0 + 1.0).sqrt() - b0).ln();
    let r1 = ((b1 * b1 + 1.0).sqrt() - b1).ln();
    let dr = r1 - r0;
    let closed_form = dr.is_finite() && dr != 0.0;
    let s_total = if closed_form { dr } else { (w1 / w0).ln() } / RHO;
    MapPath {
        ux0,
        uy0,
        w0,
        dx,
        dy,
        d1,
        r0,
        s_total,
        closed_form,
    }
}

/// Evaluate the interpolation path between two frames at `t` in
/// `[0, 1]`.
///
/// Map pairs follow the Van Wijk closed form, falling back to a linear
/// pan with exponential zoom when the pan distance degenerates; orbit
/// pairs interpolate linearly on angles, pivot, and distance. Mixing
/// variants cannot produce a meaningful path, so a mismatched pair is
/// logged and snaps to the target at `t = 1`.
#[must_use]
pub fn interpolate(a: Frame, b: Frame, t: f64) -> Frame {
    match (a, b) {
        (
            Frame::Map {
                extent: w0,
                center: c0,
            },
            Frame::Map {
                extent: w1,
                center: c1,
            },
        ) => {
            let path = map_path(f64::from(w0), c0, f64::from(w1), c1);
            let s = t * path.s_total;
            if path.closed_form {
                let rho2 = RHO * RHO;
                let cosh_r0 = path.r0.cosh();
                let u = path.w0 / (rho2 * path.d1)
                    * (cosh_r0 * (RHO * s + path.r0).tanh()
                        - path.r0.sinh());
                Frame::Map {
                    extent: (path.w0 * cosh_r0 / (RHO * s + path.r0).cosh())
                        as f32,
                    center: Vec2::new(
                        (path.ux0 + u * path.dx) as f32,
                        (path.uy0 + u * path.dy) as f32,
                    ),
                }
            } else {
                Frame::Map {
                    extent: (path.w0 * (RHO * s).exp()) as f32,
                    center: Vec2::new(
                        (path.ux0 + t * path.dx) as f32,
                        (path.uy0 + t * path.dy) as f32,
                    ),
                }
            }
        }
        (
            Frame::Orbit {
                phi: phi0,
                theta: theta0,
                pivot: pivot0,
                distance: d0,
            },
            Frame::Orbit {
                phi: phi1,
                theta: theta1,
                pivot: pivot1,
                distance: d1,
            },
        ) => {
            let t32 = t as f32;
            Frame::Orbit {
                phi: phi0 + (phi1 - phi0) * t32,
                theta: theta0 + (theta1 - theta0) * t32,
                pivot: pivot0.lerp(pivot1, t32),
                distance: d0 + (d1 - d0) * t32,
            }
        }
        (a, b) => {
            warn!(
                "cannot interpolate between {:?} and {:?} frames; snapping",
                a.mode(),
                b.mode()
            );
            if t < 1.0 {
                a
            } else {
                b
            }
        }
    }
}

/// Duration of the path between two frames, in seconds at unit speed.
///
/// This is the absolute value of the same arc-length parameter `S` the
/// interpolation traverses, so it is symmetric in its arguments and
/// zero for coincident frames.
#[must_use]
pub fn duration(a: Frame, b: Frame) -> f64 {
    match (a, b) {
        (
            Frame::Map {
                extent: w0,
                center: c0,
            },
            Frame::Map {
                extent: w1,
                center: c1,
            },
        ) => map_path(f64::from(w0), c0, f64::from(w1), c1)
            .s_total
            .abs(),
        (
            Frame::Orbit {
                phi: phi0,
                theta: theta0,
                distance: d0,
                ..
            },
            Frame::Orbit {
                phi: phi1,
                theta: theta1,
                distance: d1,
                ..
            },
        ) => {
            let angular = f64::from(
                (phi1 - phi0).hypot(theta1 - theta0),
            );
            let radial = if d0 > 0.0 && d1 > 0.0 {
                f64::from(d1 / d0).ln().abs()
            } else {
                0.0
            };
            (angular + radial) / RHO
        }
        (a, b) => {
            warn!(
                "no duration between {:?} and {:?} frames",
                a.mode(),
                b.mode()
            );
            0.0
        }
    }
}
