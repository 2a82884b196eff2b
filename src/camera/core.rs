use glam::{Mat4, Vec3};

use crate::options::FovOrientation;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
///
/// This is a plain value snapshot produced by the controller each time
/// it is queried; the controller owns the live pose.
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector (already roll-free).
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Which FOV angle is held constant under viewport reshaping.
    pub fov_orientation: FovOrientation,
    /// Full field-of-view angle in degrees along the fixed axis.
    pub fov_degrees: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Effective vertical field-of-view angle in radians.
    ///
    /// With a horizontal FOV the vertical angle floats with the aspect
    /// ratio; this is the conversion that keeps the horizontal angle
    /// fixed instead.
    #[must_use]
    pub fn fovy_radians(&self) -> f32 {
        let fov = self.fov_degrees.to_radians();
        match self.fov_orientation {
            FovOrientation::Vertical => fov,
            FovOrientation::Horizontal => {
                2.0 * ((fov / 2.0).tan() / self.aspect).atan()
            }
        }
    }

    /// Build the view matrix.
    #[must_use]
    pub fn build_view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Build the projection matrix.
    #[must_use]
    pub fn build_projection(&self) -> Mat4 {
        // perspective_rh already uses [0,1] depth range (wgpu/Vulkan
        // convention)
        Mat4::perspective_rh(
            self.fovy_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        )
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        self.build_projection() * self.build_view()
    }
}

#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
/// GPU uniform buffer holding the view-projection matrix and camera
/// metadata, ready for upload by the integrating renderer.
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// Viewport aspect ratio.
    pub aspect: f32,
    /// Camera forward direction for lighting.
    pub forward: [f32; 3],
    /// Effective vertical field of view in radians.
    pub fovy: f32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity view-projection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            aspect: 1.6,
            forward: [0.0, 0.0, -1.0],
            fovy: 33.0f32.to_radians(),
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_view_proj(&mut self, camera: &Camera) {
        self.view_proj = camera.build_matrix().to_cols_array_2d();
        self.position = camera.eye.to_array();
        self.aspect = camera.aspect;
        let forward = (camera.target - camera.eye).normalize();
        self.forward = forward.to_array();
        self.fovy = camera.fovy_radians();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_camera(orientation: FovOrientation) -> Camera {
        Camera {
            eye: Vec3::new(0.0, 0.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 2.0,
            fov_orientation: orientation,
            fov_degrees: 60.0,
            znear: 1.0,
            zfar: 1000.0,
        }
    }

    #[test]
    fn vertical_fov_is_used_directly() {
        let camera = test_camera(FovOrientation::Vertical);
        assert!((camera.fovy_radians() - 60.0f32.to_radians()).abs() < 1e-6);
    }

    #[test]
    fn horizontal_fov_shrinks_with_wide_aspect() {
        let camera = test_camera(FovOrientation::Horizontal);
        // tan(fovy/2) = tan(30 deg) / 2
        let expected = 2.0 * (30.0f32.to_radians().tan() / 2.0).atan();
        assert!((camera.fovy_radians() - expected).abs() < 1e-6);
        assert!(camera.fovy_radians() < 60.0f32.to_radians());
    }

    #[test]
    fn view_matrix_moves_eye_to_origin() {
        let camera = test_camera(FovOrientation::Vertical);
        let view = camera.build_view();
        let eye_in_view = view.transform_point3(camera.eye);
        assert!(eye_in_view.length() < 1e-5);
    }

    #[test]
    fn uniform_tracks_camera() {
        let camera = test_camera(FovOrientation::Vertical);
        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera);
        assert_eq!(uniform.position, [0.0, 0.0, 10.0]);
        assert_eq!(uniform.forward, [0.0, 0.0, -1.0]);
        assert_eq!(uniform.aspect, 2.0);
    }

    #[test]
    fn uniform_is_tightly_packed() {
        // 4x4 matrix + two vec3/f32 pairs, no implicit padding.
        assert_eq!(size_of::<CameraUniform>(), 96);
    }
}
