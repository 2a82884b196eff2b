// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]
// Graphics math: float literals are compared and precision loss is
// intentional throughout
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::suboptimal_flops)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::use_self)]
#![allow(clippy::default_trait_access)]
#![allow(clippy::items_after_statements)]

//! Through-the-lens camera controller for orbit and map-style navigation.
//!
//! Gimbal maintains a 3D eye/target pose from screen-space gestures
//! (grab, drag, scroll) and hands back look-at vectors or projection /
//! view matrices each frame. No assumptions are made about the renderer
//! or platform; in a sense this is just a math library.
//!
//! Two interaction modes are supported:
//!
//! - [`Mode::Orbit`] - the camera tumbles around a pivot at a
//!   controllable distance using two Euler-like angles (no roll).
//! - [`Mode::Map`] - the camera pans and zooms over a bounded planar
//!   region, like a slippy map with perspective. Dragging keeps the
//!   grabbed world point glued under the cursor, optionally against a
//!   caller-supplied [`RaycastProvider`] (e.g. a BVH over terrain).
//!
//! Camera state can be captured as a compact [`Frame`] bookmark and
//! smoothly animated between bookmarks with the Van Wijk & Nuij
//! pan-and-zoom path (see [`animation`]).
//!
//! # Key entry points
//!
//! - [`CameraController`] - the controller itself
//! - [`Properties`] - the public configuration surface
//! - [`Frame`] / [`Transition`] - bookmarks and animated jumps
//! - [`input::InputProcessor`] - optional raw-event translation
//!
//! # Screen coordinates
//!
//! All pick operations take physical pixel coordinates with the origin
//! at the **top-left** corner: `x` in `[0, viewport_width)` increasing
//! rightward, `y` in `[0, viewport_height)` increasing downward. Rays
//! are sampled through pixel centers.

pub mod animation;
pub mod camera;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod util;

pub use animation::Transition;
pub use camera::bookmarks::Bookmarks;
pub use camera::controller::{CameraCommand, CameraController};
pub use camera::core::{Camera, CameraUniform};
pub use camera::frame::Frame;
pub use error::GimbalError;
pub use options::{Constraint, FovOrientation, Mode, Properties};
pub use picking::provider::RaycastProvider;
