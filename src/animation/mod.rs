//! Smooth animated jumps between bookmark frames.
//!
//! The math follows Van Wijk & Nuij's "Smooth and efficient zooming
//! and panning": a closed-form hyperbolic path through pan/zoom space
//! that zooms out just enough to keep perceived velocity constant.
//! [`Transition`] wraps a source/target pair with the derived duration;
//! the caller supplies elapsed time each tick - there is no internal
//! timer, and an in-progress transition is abandoned simply by starting
//! another or jumping directly to a frame.

/// Transition driver pairing two frames with a duration.
pub mod transition;
/// The closed-form interpolation path and its duration metric.
pub mod van_wijk;

pub use transition::Transition;
pub use van_wijk::{duration, interpolate};
