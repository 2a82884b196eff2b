use glam::{Mat4, Vec2, Vec3};
use log::{debug, warn};

use crate::camera::constraint::{constrain, ClampContext};
use crate::camera::core::{Camera, CameraUniform};
use crate::camera::frame::Frame;
use crate::options::{Constraint, FovOrientation, Mode, Properties};
use crate::picking::provider::RaycastProvider;
use crate::picking::ray::{Aabb, Plane, Ray};

/// Displacements shorter than this are treated as degenerate when they
/// appear in a denominator.
const DEGENERATE_EPSILON: f32 = 1e-6;

/// How close `phi` may get to the poles before it is clamped.
const POLE_MARGIN: f32 = 5e-3;

/// A discrete or parameterized camera operation.
///
/// Every user-facing interaction - mouse gesture, touch, GUI button, or
/// programmatic call - can be expressed as a command and passed to
/// [`CameraController::execute`]. The controller never cares how a
/// command was produced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    /// Begin a grab at the given pixel. `strafe` selects pivot panning
    /// in orbit mode and is ignored in map mode.
    GrabBegin {
        /// Cursor x in pixels, origin at the left edge.
        x: f32,
        /// Cursor y in pixels, origin at the top edge.
        y: f32,
        /// Pan instead of rotate (orbit mode only).
        strafe: bool,
    },
    /// Move the cursor during an active grab.
    GrabUpdate {
        /// Cursor x in pixels.
        x: f32,
        /// Cursor y in pixels.
        y: f32,
    },
    /// End the active grab, if any.
    GrabEnd,
    /// Zoom at the given pixel. Positive `delta` zooms in.
    Zoom {
        /// Cursor x in pixels.
        x: f32,
        /// Cursor y in pixels.
        y: f32,
        /// Scroll amount, scaled by the configured zoom speed.
        delta: f32,
    },
    /// Viewport was resized.
    Resize {
        /// New width in physical pixels.
        width: u32,
        /// New height in physical pixels.
        height: u32,
    },
    /// Snap directly to a bookmark frame.
    GotoFrame(
        /// The frame to apply; must match the active mode.
        Frame,
    ),
    /// Snap back to the home frame.
    GotoHome,
}

/// State captured at grab-begin, valid only while the grab is active.
#[derive(Debug, Clone, Copy)]
enum GrabSession {
    /// Map-mode drag: keep the grabbed world point under the cursor.
    MapDrag {
        /// World-space point grabbed at begin.
        world: Vec3,
        /// Far-plane point under the cursor at begin.
        far: Vec3,
        /// Eye position at begin.
        eye: Vec3,
        /// Target position at begin.
        target: Vec3,
    },
    /// Orbit-mode rotation from a cursor anchor.
    OrbitRotate {
        /// Cursor position at begin.
        cursor: Vec2,
        /// Elevation angle at begin.
        phi: f32,
        /// Azimuth angle at begin.
        theta: f32,
    },
    /// Orbit-mode pivot panning, same drag rule as the map drag.
    OrbitStrafe {
        /// World-space point grabbed at begin.
        world: Vec3,
        /// Far-plane point under the cursor at begin.
        far: Vec3,
        /// Eye position at begin.
        eye: Vec3,
        /// Target position at begin.
        target: Vec3,
        /// Rotation pivot at begin.
        pivot: Vec3,
    },
}

/// Camera-pose controller driven by screen-space gestures.
///
/// The controller owns its pose and grab session exclusively and is
/// meant to be called from a single thread; every operation runs to
/// completion inside the calling event handler or per-frame tick.
/// Matrix derivation is pull-based: nothing is computed until
/// [`view_matrix`](Self::view_matrix) /
/// [`projection_matrix`](Self::projection_matrix) /
/// [`camera`](Self::camera) are queried.
pub struct CameraController {
    props: Properties,
    eye: Vec3,
    target: Vec3,
    // Orbit pose; authoritative only in orbit mode.
    phi: f32,
    theta: f32,
    pivot: Vec3,
    distance: f32,
    grab: Option<GrabSession>,
    raycast_provider: Option<Box<dyn RaycastProvider>>,
}

impl CameraController {
    /// Create a controller and move it to its home frame.
    #[must_use]
    pub fn new(props: &Properties) -> Self {
        let props = props.clone().sanitized();
        let pivot = Vec3::from_array(props.home_target);
        let distance = Vec3::from_array(props.home_vector).length();
        let mut controller = Self {
            props,
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            phi: 0.0,
            theta: 0.0,
            pivot,
            distance,
            grab: None,
            raycast_provider: None,
        };
        let home = controller.home_frame();
        controller.goto_frame(home);
        controller
    }

    /// Install (or clear) a caller-supplied hit-test provider used for
    /// precise grabbing and zooming, e.g. a BVH over terrain.
    pub fn set_raycast_provider(
        &mut self,
        provider: Option<Box<dyn RaycastProvider>>,
    ) {
        self.raycast_provider = provider;
    }

    /// Builder form of [`set_raycast_provider`](Self::set_raycast_provider).
    #[must_use]
    pub fn with_raycast_provider(
        mut self,
        provider: Box<dyn RaycastProvider>,
    ) -> Self {
        self.raycast_provider = Some(provider);
        self
    }

    /// Copy of the active properties.
    #[must_use]
    pub fn properties(&self) -> Properties {
        self.props.clone()
    }

    /// Replace the active properties.
    ///
    /// Zero-valued fields are filled with their documented defaults
    /// first. The current pose is minimally re-clamped (not reset)
    /// when the constraint policy becomes strictly more restrictive,
    /// when the FOV orientation changes, or when the viewport is
    /// resized under [`Constraint::Full`].
    pub fn set_properties(&mut self, props: &Properties) {
        let props = props.clone().sanitized();

        let more_constrained = props.map_constraint > self.props.map_constraint;
        let orientation_changed =
            props.fov_orientation != self.props.fov_orientation;
        let viewport_resized = props.viewport_width
            != self.props.viewport_width
            || props.viewport_height != self.props.viewport_height;

        self.props = props;

        let needs_reclamp = more_constrained
            || orientation_changed
            || (viewport_resized
                && self.props.map_constraint == Constraint::Full);
        if needs_reclamp && self.props.mode == Mode::Map {
            debug!("property change triggered a pose re-clamp");
            self.move_with_constraints(self.eye, self.target);
        }
    }

    /// Update the viewport dimensions, re-clamping if required.
    pub fn resize(&mut self, width: u32, height: u32) {
        let mut props = self.props.clone();
        props.viewport_width = width;
        props.viewport_height = height;
        self.set_properties(&props);
    }

    /// Apply a [`CameraCommand`].
    pub fn execute(&mut self, command: CameraCommand) {
        match command {
            CameraCommand::GrabBegin { x, y, strafe } => {
                if strafe {
                    self.grab_begin_strafe(x, y);
                } else {
                    self.grab_begin(x, y);
                }
            }
            CameraCommand::GrabUpdate { x, y } => self.grab_update(x, y),
            CameraCommand::GrabEnd => self.grab_end(),
            CameraCommand::Zoom { x, y, delta } => self.zoom(x, y, delta),
            CameraCommand::Resize { width, height } => {
                self.resize(width, height);
            }
            CameraCommand::GotoFrame(frame) => self.goto_frame(frame),
            CameraCommand::GotoHome => {
                let home = self.home_frame();
                self.goto_frame(home);
            }
        }
    }

    // ── Grab / zoom ─────────────────────────────────────────────────

    /// Begin a grab at the given pixel.
    ///
    /// In map mode this raycasts into the scene and anchors the hit
    /// point under the cursor; a miss leaves the controller idle. In
    /// orbit mode this starts a rotation and always succeeds.
    pub fn grab_begin(&mut self, x: f32, y: f32) {
        match self.props.mode {
            Mode::Map => self.begin_anchored_grab(x, y, false),
            Mode::Orbit => {
                self.grab = Some(GrabSession::OrbitRotate {
                    cursor: Vec2::new(x, y),
                    phi: self.phi,
                    theta: self.theta,
                });
            }
        }
    }

    /// Begin a strafe grab: in orbit mode this pans the rotation pivot
    /// instead of rotating; in map mode it behaves like
    /// [`grab_begin`](Self::grab_begin). Typically bound to the
    /// secondary mouse button or a modifier-drag.
    pub fn grab_begin_strafe(&mut self, x: f32, y: f32) {
        match self.props.mode {
            Mode::Map => self.begin_anchored_grab(x, y, false),
            Mode::Orbit => self.begin_anchored_grab(x, y, true),
        }
    }

    fn begin_anchored_grab(&mut self, x: f32, y: f32, strafe: bool) {
        let Some(world) = self.raycast(x, y) else {
            return;
        };
        let far = self.ray_far(x, y);
        self.grab = Some(if strafe {
            GrabSession::OrbitStrafe {
                world,
                far,
                eye: self.eye,
                target: self.target,
                pivot: self.pivot,
            }
        } else {
            GrabSession::MapDrag {
                world,
                far,
                eye: self.eye,
                target: self.target,
            }
        });
    }

    /// Update the active grab with a new cursor position. Does nothing
    /// while idle.
    pub fn grab_update(&mut self, x: f32, y: f32) {
        let Some(session) = self.grab else {
            return;
        };
        match session {
            GrabSession::MapDrag {
                world,
                far,
                eye,
                target,
            } => {
                let Some(translation) =
                    self.drag_translation(world, far, eye, x, y)
                else {
                    return;
                };
                self.move_with_constraints(
                    eye + translation,
                    target + translation,
                );
            }
            GrabSession::OrbitRotate { cursor, phi, theta } => {
                let width = self.props.viewport_width as f32;
                let height = self.props.viewport_height as f32;
                // Full-width drag sweeps a whole revolution; full-height
                // drag sweeps pole to pole. Dragging follows the globe.
                let theta =
                    theta - std::f32::consts::TAU * (x - cursor.x) / width;
                let phi =
                    phi + std::f32::consts::PI * (y - cursor.y) / height;
                self.phi = clamp_phi(phi);
                self.theta = theta;
                self.apply_orbit();
            }
            GrabSession::OrbitStrafe {
                world,
                far,
                eye,
                target,
                pivot,
            } => {
                let Some(translation) =
                    self.drag_translation(world, far, eye, x, y)
                else {
                    return;
                };
                self.pivot = pivot + translation;
                self.eye = eye + translation;
                self.target = target + translation;
            }
        }
    }

    /// End the active grab.
    pub fn grab_end(&mut self) {
        self.grab = None;
    }

    /// Whether a grab is currently active.
    #[must_use]
    pub const fn is_grabbing(&self) -> bool {
        self.grab.is_some()
    }

    /// Similar-triangle drag rule: the ratio between the eye-to-anchor
    /// and anchor-to-far-plane edge lengths converts far-plane cursor
    /// displacement into world translation, which keeps the grabbed
    /// point glued under the cursor regardless of perspective
    /// distortion.
    fn drag_translation(
        &self,
        world: Vec3,
        far: Vec3,
        eye: Vec3,
        x: f32,
        y: f32,
    ) -> Option<Vec3> {
        let u_len = (world - eye).length();
        let v_len = (far - world).length();
        if v_len < DEGENERATE_EPSILON {
            return None;
        }
        let far_now = self.ray_far(x, y);
        Some((far_now - far) * (-u_len / v_len))
    }

    /// Zoom at the given pixel. Positive `delta` zooms in.
    ///
    /// The eye-to-hit vector is deliberately left unnormalized so the
    /// motion decelerates as the surface approaches; a raycast miss is
    /// a no-op. Zooming in stops once the hit point is closer than the
    /// zoom speed, which prevents tunneling through the surface.
    pub fn zoom(&mut self, x: f32, y: f32, delta: f32) {
        if delta == 0.0 {
            return;
        }
        let Some(world) = self.raycast(x, y) else {
            return;
        };
        let u_vec = world - self.eye;

        let zoom_speed = self.props.zoom_speed;
        if delta > 0.0 && u_vec.length() < zoom_speed {
            return;
        }

        let translation = u_vec * (delta * zoom_speed);
        match self.props.mode {
            Mode::Map => {
                self.move_with_constraints(
                    self.eye + translation,
                    self.target + translation,
                );
            }
            Mode::Orbit => {
                let offset = (self.eye + translation) - self.pivot;
                let distance = offset.length();
                if distance < self.props.near_plane {
                    return;
                }
                let (forward, right, up) = self.orbit_basis();
                let dir = offset / distance;
                self.phi = clamp_phi(dir.dot(up).clamp(-1.0, 1.0).asin());
                self.theta = dir.dot(right).atan2(dir.dot(forward));
                self.distance = distance;
                self.apply_orbit();
            }
        }
    }

    // ── Raycasting ──────────────────────────────────────────────────

    /// Cast a ray from the eye through the given pixel and return the
    /// world-space hit point, if any.
    ///
    /// The caller-supplied provider is consulted first when installed;
    /// on a miss the built-in fallback (the map plane in map mode, the
    /// map bounds box in orbit mode) is tried before reporting failure.
    #[must_use]
    pub fn raycast(&self, x: f32, y: f32) -> Option<Vec3> {
        let direction = self.pixel_dir(x, y).normalize();
        let ray = Ray::new(self.eye, direction);
        let t = match &self.raycast_provider {
            Some(provider) => provider
                .cast(ray.origin, ray.direction)
                .or_else(|| self.fallback_cast(&ray)),
            None => self.fallback_cast(&ray),
        }?;
        Some(ray.at(t))
    }

    fn fallback_cast(&self, ray: &Ray) -> Option<f32> {
        match self.props.mode {
            Mode::Map => self.map_plane().intersect(ray),
            Mode::Orbit => {
                let bounds = self.orbit_bounds();
                if bounds.is_degenerate() {
                    // No usable box configured; the plane still gives
                    // orbit grabs something to hold on to.
                    self.map_plane().intersect(ray)
                } else {
                    bounds.intersect(ray)
                }
            }
        }
    }

    fn map_plane(&self) -> Plane {
        Plane::from_equation(self.props.map_plane)
    }

    /// Axis-aligned bounds of the map quad extruded along the plane
    /// normal by the minimum camera distance; the built-in orbit-mode
    /// pick target.
    fn orbit_bounds(&self) -> Aabb {
        let plane = self.map_plane();
        let (u, v) = self.tangent_basis();
        let center = Vec3::from_array(self.props.home_target);
        let half_u = u * (self.props.map_extent[0] / 2.0);
        let half_v = v * (self.props.map_extent[1] / 2.0);
        let lift = plane.normal * self.props.map_min_distance;
        let base = [
            center + half_u + half_v,
            center + half_u - half_v,
            center - half_u + half_v,
            center - half_u - half_v,
        ];
        let mut corners = [Vec3::ZERO; 8];
        for (i, b) in base.iter().enumerate() {
            corners[i] = *b;
            corners[i + 4] = *b + lift;
        }
        Aabb::from_points(&corners)
    }

    /// Unnormalized direction from the eye through the center of the
    /// given pixel.
    fn pixel_dir(&self, x: f32, y: f32) -> Vec3 {
        let width = self.props.viewport_width as f32;
        let height = self.props.viewport_height as f32;
        let tangent = (self.props.fov_radians() / 2.0).tan();
        let aspect = width / height;
        let (gaze, right, up) = self.view_basis();

        // Remap to [-1, +1] at the pixel center. The vertical term is
        // negated because pixel y grows downward.
        let u = 2.0 * (x + 0.5) / width - 1.0;
        let v = -(2.0 * (y + 0.5) / height - 1.0);

        // The fixed FOV angle spans its own axis directly; the floating
        // axis picks up the aspect ratio.
        let (right_scale, up_scale) = match self.props.fov_orientation {
            FovOrientation::Vertical => (tangent * u * aspect, tangent * v),
            FovOrientation::Horizontal => (tangent * u, tangent * v / aspect),
        };
        gaze + right * right_scale + up * up_scale
    }

    /// Point where the pick ray for the given pixel meets the far
    /// plane.
    fn ray_far(&self, x: f32, y: f32) -> Vec3 {
        self.eye + self.pixel_dir(x, y) * self.props.far_plane
    }

    // ── Frame codec ─────────────────────────────────────────────────

    /// Capture the current pose as a bookmark frame.
    #[must_use]
    pub fn current_frame(&self) -> Frame {
        match self.props.mode {
            Mode::Map => {
                self.map_frame_for(self.eye, self.target).unwrap_or_else(
                    || {
                        warn!(
                            "gaze does not meet the map plane; \
                             reporting the home frame"
                        );
                        self.home_frame()
                    },
                )
            }
            Mode::Orbit => Frame::Orbit {
                phi: self.phi,
                theta: self.theta,
                pivot: self.pivot,
                distance: self.distance,
            },
        }
    }

    /// The frame the controller starts in, derived from the configured
    /// home pose.
    ///
    /// Under [`Constraint::Full`] the map-mode home extent is shrunk as
    /// needed so the whole viewport starts inside the map.
    #[must_use]
    pub fn home_frame(&self) -> Frame {
        match self.props.mode {
            Mode::Map => {
                let aspect = self.props.aspect();
                let map_half_width = self.props.map_extent[0] / 2.0;
                let map_half_height = self.props.map_extent[1] / 2.0;
                let horizontal = self.props.fov_orientation
                    == FovOrientation::Horizontal;
                let mut extent = if horizontal {
                    self.props.map_extent[0]
                } else {
                    self.props.map_extent[1]
                };
                if self.props.map_constraint == Constraint::Full {
                    if horizontal {
                        let vp_width = extent / 2.0;
                        let vp_height = vp_width / aspect;
                        if map_half_height < vp_height {
                            extent = 2.0 * map_half_height * aspect;
                        }
                    } else {
                        let vp_height = extent / 2.0;
                        let vp_width = vp_height * aspect;
                        if map_half_width < vp_width {
                            extent = 2.0 * map_half_width / aspect;
                        }
                    }
                }
                Frame::Map {
                    extent,
                    center: Vec2::ZERO,
                }
            }
            Mode::Orbit => Frame::Orbit {
                phi: 0.0,
                theta: 0.0,
                pivot: Vec3::from_array(self.props.home_target),
                distance: Vec3::from_array(self.props.home_vector).length(),
            },
        }
    }

    /// Jump directly to a bookmark frame.
    ///
    /// The frame's variant must match the active mode; a mismatch is
    /// logged and ignored.
    pub fn goto_frame(&mut self, frame: Frame) {
        match (self.props.mode, frame) {
            (Mode::Map, Frame::Map { extent, center }) => {
                self.apply_map_frame(extent, center);
            }
            (
                Mode::Orbit,
                Frame::Orbit {
                    phi,
                    theta,
                    pivot,
                    distance,
                },
            ) => {
                self.phi = clamp_phi(phi);
                self.theta = theta;
                self.pivot = pivot;
                self.distance = distance;
                self.apply_orbit();
            }
            (mode, frame) => {
                warn!(
                    "ignoring {:?} frame while in {mode:?} mode",
                    frame.mode()
                );
            }
        }
    }

    /// Reconstruct eye/target from a map frame: the inverse of
    /// [`current_frame`](Self::current_frame).
    fn apply_map_frame(&mut self, extent: f32, center: Vec2) {
        let half_extent = extent / 2.0;
        let distance = half_extent / (self.props.fov_radians() / 2.0).tan();
        let (u, v) = self.tangent_basis();
        let normal = self.map_plane().normal;
        self.target = Vec3::from_array(self.props.home_target)
            + u * center.x
            + v * center.y;
        self.eye = self.target + normal * distance;
    }

    /// Derive the map frame a candidate pose corresponds to. `None`
    /// when the gaze never meets the plane.
    fn map_frame_for(&self, eye: Vec3, target: Vec3) -> Option<Frame> {
        let direction = (target - eye).normalize();
        let distance =
            self.map_plane().intersect(&Ray::new(eye, direction))?;
        let half_extent = distance * (self.props.fov_radians() / 2.0).tan();
        let on_plane = eye + direction * distance;
        let (u, v) = self.tangent_basis();
        let offset = on_plane - Vec3::from_array(self.props.home_target);
        Some(Frame::Map {
            extent: half_extent * 2.0,
            center: Vec2::new(u.dot(offset), v.dot(offset)),
        })
    }

    /// Tangent basis on the map plane, defined by the plane normal and
    /// the home up vector.
    fn tangent_basis(&self) -> (Vec3, Vec3) {
        let normal = self.map_plane().normal;
        let up = Vec3::from_array(self.props.home_upward);
        let u = up.cross(normal);
        let v = normal.cross(u);
        (u, v)
    }

    // ── Constraints ─────────────────────────────────────────────────

    /// Route a candidate map-mode pose through the constraint engine
    /// and commit the clamped result via the frame codec.
    fn move_with_constraints(&mut self, eye: Vec3, target: Vec3) {
        let previous_center =
            self.current_frame().center().unwrap_or(Vec2::ZERO);
        let Some(Frame::Map { extent, center }) =
            self.map_frame_for(eye, target)
        else {
            // Candidate gaze misses the plane entirely; abandon the
            // move rather than commit an unrepresentable pose.
            return;
        };
        let home_extent =
            self.home_frame().extent().unwrap_or(self.props.map_extent[1]);
        let min_extent = 2.0
            * self.props.map_min_distance
            * (self.props.fov_radians() / 2.0).tan();
        let ctx = ClampContext {
            constraint: self.props.map_constraint,
            orientation: self.props.fov_orientation,
            aspect: self.props.aspect(),
            map_extent: Vec2::from_array(self.props.map_extent),
            home_extent,
            min_extent,
        };
        let (extent, center) =
            constrain(extent, center, previous_center, &ctx);
        self.apply_map_frame(extent, center);
    }

    // ── Orbit pose ──────────────────────────────────────────────────

    /// Home-pose orbit basis: `forward` points from pivot to the home
    /// eye, `right`/`up` complete the frame around the home up vector.
    fn orbit_basis(&self) -> (Vec3, Vec3, Vec3) {
        let forward = Vec3::from_array(self.props.home_vector)
            .try_normalize()
            .unwrap_or(Vec3::Z);
        let home_up = Vec3::from_array(self.props.home_upward);
        let mut right = home_up.cross(forward);
        if right.length_squared() < DEGENERATE_EPSILON {
            right = forward.any_orthonormal_vector();
        }
        let right = right.normalize();
        let up = forward.cross(right);
        (forward, right, up)
    }

    /// Re-derive eye/target from the orbit pose.
    fn apply_orbit(&mut self) {
        let (forward, right, up) = self.orbit_basis();
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        let dir = forward * (cos_theta * cos_phi)
            + right * (sin_theta * cos_phi)
            + up * sin_phi;
        self.eye = self.pivot + dir * self.distance;
        self.target = self.pivot;
    }

    // ── Pose queries ────────────────────────────────────────────────

    /// Eye position in world space.
    #[must_use]
    pub const fn eye(&self) -> Vec3 {
        self.eye
    }

    /// Look-at target position in world space.
    #[must_use]
    pub const fn target(&self) -> Vec3 {
        self.target
    }

    /// Current roll-free up vector, re-derived from the home up vector
    /// and the gaze on every query.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.view_basis().2
    }

    /// Eye, target, and up in one call.
    #[must_use]
    pub fn look_at(&self) -> (Vec3, Vec3, Vec3) {
        (self.eye, self.target, self.up())
    }

    /// Snapshot the pose and projection parameters as a [`Camera`].
    #[must_use]
    pub fn camera(&self) -> Camera {
        Camera {
            eye: self.eye,
            target: self.target,
            up: self.up(),
            aspect: self.props.aspect(),
            fov_orientation: self.props.fov_orientation,
            fov_degrees: self.props.fov_degrees,
            znear: self.props.near_plane,
            zfar: self.props.far_plane,
        }
    }

    /// View matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        self.camera().build_view()
    }

    /// Projection matrix for the current configuration.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        self.camera().build_projection()
    }

    /// GPU-ready uniform for the current pose.
    #[must_use]
    pub fn uniform(&self) -> CameraUniform {
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&self.camera());
        uniform
    }

    /// Gaze, right, and up unit vectors for the current pose, with the
    /// up vector orthogonalized against the gaze so the camera never
    /// rolls.
    fn view_basis(&self) -> (Vec3, Vec3, Vec3) {
        let gaze = (self.target - self.eye).normalize();
        let home_up = Vec3::from_array(self.props.home_upward);
        let mut right = gaze.cross(home_up);
        if right.length_squared() < DEGENERATE_EPSILON {
            right = gaze.any_orthonormal_vector();
        }
        let right = right.normalize();
        let up = right.cross(gaze).normalize();
        (gaze, right, up)
    }
}

/// Keep the elevation strictly between the poles so the view basis
/// stays well defined.
fn clamp_phi(phi: f32) -> f32 {
    let limit = std::f32::consts::FRAC_PI_2 - POLE_MARGIN;
    phi.clamp(-limit, limit)
}
