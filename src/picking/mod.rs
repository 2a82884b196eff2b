//! Ray casting: primitives, intersectors, and the provider seam.
//!
//! The controller resolves screen-space picks against a caller-supplied
//! [`RaycastProvider`] when one is installed, falling back to the
//! built-in [`Plane`] intersector (map mode) or [`Aabb`] intersector
//! (orbit mode).

/// Capability interface for caller-supplied hit testing.
pub mod provider;
/// Ray, plane, and box primitives with parametric intersectors.
pub mod ray;

pub use provider::RaycastProvider;
pub use ray::{Aabb, Plane, Ray};
