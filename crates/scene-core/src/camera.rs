//! Perspective camera with an explicitly refreshed projection.
//!
//! Changing `aspect`, `fov_degrees`, `near` or `far` has no effect on
//! [`PerspectiveCamera::projection_matrix`] until
//! [`PerspectiveCamera::update_projection_matrix`] is called. The resize
//! handler relies on this two-step update.

use glam::{Mat4, Vec3};

/// Right-handed perspective camera looking at a fixed target.
#[derive(Clone, Debug)]
pub struct PerspectiveCamera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov_degrees: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    projection: Mat4,
}

impl PerspectiveCamera {
    pub fn new(fov_degrees: f32, aspect: f32, near: f32, far: f32) -> Self {
        let mut camera = Self {
            eye: Vec3::ZERO,
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees,
            aspect,
            near,
            far,
            projection: Mat4::IDENTITY,
        };
        camera.update_projection_matrix();
        camera
    }

    /// Recompute the cached projection from the current lens parameters.
    pub fn update_projection_matrix(&mut self) {
        self.projection =
            Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far);
    }

    /// Projection as of the last [`Self::update_projection_matrix`].
    pub fn projection_matrix(&self) -> Mat4 {
        self.projection
    }

    /// World to view transform. A camera sitting on its target looks down -Z.
    pub fn view_matrix(&self) -> Mat4 {
        let forward = self.target - self.eye;
        if forward.length_squared() <= f32::EPSILON {
            return Mat4::look_to_rh(self.eye, -Vec3::Z, self.up);
        }
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view_matrix()
    }
}
