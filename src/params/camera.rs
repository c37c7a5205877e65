//! Camera placement and lens configuration.

use glam::Vec3;

/// Fixed camera looking at the origin from above and behind
#[derive(Debug, Clone)]
pub struct FixedCamera {
    /// Camera position (meters)
    pub eye: Vec3,

    /// Look-at target (meters)
    pub target: Vec3,

    /// Up direction
    pub up: Vec3,

    /// Vertical field of view (degrees)
    pub fov_degrees: f32,

    /// Near clipping plane (meters)
    pub near_plane_m: f32,

    /// Far clipping plane (meters)
    pub far_plane_m: f32,
}

impl Default for FixedCamera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 5.0, 10.0),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov_degrees: 45.0,
            near_plane_m: 0.1,
            far_plane_m: 100.0,
        }
    }
}
