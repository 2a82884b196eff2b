//! Camera pose control: the controller, its bookmark frames, the
//! map-mode constraint engine, and view/projection derivation.

/// Named in-memory storage for bookmark frames.
pub mod bookmarks;
/// Map-mode pan/zoom constraint clamping.
pub mod constraint;
/// The camera controller: grab, zoom, raycast, and frame operations.
pub mod controller;
/// Camera value struct, matrix builders, and the GPU uniform.
pub mod core;
/// Compact camera-state bookmarks.
pub mod frame;
