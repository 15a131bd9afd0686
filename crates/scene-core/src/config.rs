use crate::color::Color;
use crate::constants::*;
use crate::error::SceneError;
use glam::Vec3;

/// Every tunable of the scene in one place. `Default` mirrors `constants.rs`.
#[derive(Clone, Debug, PartialEq)]
pub struct SceneConfig {
    pub container_id: String,
    pub background: Color,

    pub fov_degrees: f32,
    pub near: f32,
    pub far: f32,
    pub camera_z: f32,

    pub radius: f32,
    pub edge_threshold_degrees: f32,
    pub mesh_color: Color,
    pub mesh_opacity: f32,
    pub line_color: Color,

    pub light_color: Color,
    pub light_intensity: f32,
    pub light_distance: f32,
    pub light_position: Vec3,
    pub ambient_color: Color,
    pub ambient_intensity: f32,

    /// Radians added to rotation (x, y) every frame.
    pub rotation_step: [f32; 2],
    pub parallax_scale: f32,
    pub light_swing_scale: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            container_id: CONTAINER_ID.to_string(),
            background: Color::from_hex(BACKGROUND_HEX),
            fov_degrees: CAMERA_FOV_DEGREES,
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            camera_z: CAMERA_Z,
            radius: DODECAHEDRON_RADIUS,
            edge_threshold_degrees: EDGE_THRESHOLD_DEGREES,
            mesh_color: Color::from_hex(ACCENT_HEX),
            mesh_opacity: MESH_OPACITY,
            line_color: Color::from_hex(ACCENT_HEX),
            light_color: Color::from_hex(ACCENT_HEX),
            light_intensity: POINT_LIGHT_INTENSITY,
            light_distance: POINT_LIGHT_DISTANCE,
            light_position: Vec3::from_array(POINT_LIGHT_POSITION),
            ambient_color: Color::from_hex(AMBIENT_HEX),
            ambient_intensity: AMBIENT_INTENSITY,
            rotation_step: [ROTATION_STEP_X, ROTATION_STEP_Y],
            parallax_scale: PARALLAX_SCALE,
            light_swing_scale: LIGHT_SWING_SCALE,
        }
    }
}

impl SceneConfig {
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SceneError::InvalidConfig(format!(
                "fov must be in (0, 180) degrees, got {}",
                self.fov_degrees
            )));
        }
        if !(self.near > 0.0 && self.far > self.near) {
            return Err(SceneError::InvalidConfig(format!(
                "clip planes must satisfy 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        if !(0.0..=1.0).contains(&self.mesh_opacity) {
            return Err(SceneError::InvalidConfig(format!(
                "mesh opacity must be in [0, 1], got {}",
                self.mesh_opacity
            )));
        }
        if !(self.radius > 0.0) {
            return Err(SceneError::InvalidConfig(format!(
                "radius must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}
