//! Fixed look-at camera with a projection that follows the viewport size.

use glam::{Mat4, Vec3};

use crate::params::FixedCamera;

/// Camera system: constant view, projection rebuilt on resize
pub struct CameraSystem {
    params: FixedCamera,
    view: Mat4,
    projection: Mat4,
    viewport: (u32, u32),
}

impl CameraSystem {
    /// Create camera for a viewport of `width` x `height` pixels
    pub fn new(params: FixedCamera, width: u32, height: u32) -> Self {
        let view = Mat4::look_at_rh(params.eye, params.target, params.up);
        let mut camera = Self {
            params,
            view,
            projection: Mat4::IDENTITY,
            viewport: (0, 0),
        };
        camera.resize(width, height);
        camera
    }

    /// Rebuild the projection for a new viewport size
    ///
    /// A zero height is treated as one pixel.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = (width, height.max(1));
        self.projection = Mat4::perspective_rh(
            self.params.fov_degrees.to_radians(),
            self.aspect_ratio(),
            self.params.near_plane_m,
            self.params.far_plane_m,
        );
    }

    /// Width over height of the current viewport
    pub fn aspect_ratio(&self) -> f32 {
        self.viewport.0 as f32 / self.viewport.1 as f32
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }

    /// Camera position in world space
    pub fn eye(&self) -> Vec3 {
        self.params.eye
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Aspect ratio encoded in a perspective matrix (x scale vs y scale)
    fn projected_aspect(proj: &Mat4) -> f32 {
        proj.y_axis.y / proj.x_axis.x
    }

    #[test]
    fn test_view_moves_eye_to_origin() {
        let camera = CameraSystem::new(FixedCamera::default(), 800, 600);
        let eye_in_view = camera.view().transform_point3(camera.eye());
        assert!(eye_in_view.length() < 1e-5);

        // Target sits straight ahead on -Z in view space
        let target_in_view = camera.view().transform_point3(Vec3::ZERO);
        assert!(target_in_view.x.abs() < 1e-5);
        assert!(target_in_view.y.abs() < 1e-5);
        assert!(target_in_view.z < 0.0);
    }

    #[test]
    fn test_initial_projection_matches_lens() {
        let camera = CameraSystem::new(FixedCamera::default(), 800, 600);
        let expected = Mat4::perspective_rh(45.0_f32.to_radians(), 800.0 / 600.0, 0.1, 100.0);
        assert!(camera.projection().abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn test_resize_updates_aspect() {
        let mut camera = CameraSystem::new(FixedCamera::default(), 800, 600);
        camera.resize(1920, 1080);

        assert!((camera.aspect_ratio() - 1920.0 / 1080.0).abs() < 1e-6);
        assert!((projected_aspect(&camera.projection()) - 1920.0 / 1080.0).abs() < 1e-5);
    }

    #[test]
    fn test_projection_stable_without_resize() {
        let mut camera = CameraSystem::new(FixedCamera::default(), 800, 600);
        camera.resize(1024, 512);
        let first = camera.projection();
        let second = camera.projection();
        assert_eq!(first, second);
        assert!((projected_aspect(&second) - 2.0).abs() < 1e-5);
    }

    #[test]
    fn test_zero_height_is_clamped() {
        let mut camera = CameraSystem::new(FixedCamera::default(), 800, 600);
        camera.resize(640, 0);

        assert_eq!(camera.viewport(), (640, 1));
        assert_eq!(camera.aspect_ratio(), 640.0);
        assert!(camera.projection().is_finite());
    }

    #[test]
    fn test_view_unchanged_by_resize() {
        let mut camera = CameraSystem::new(FixedCamera::default(), 800, 600);
        let view = camera.view();
        camera.resize(300, 900);
        assert_eq!(camera.view(), view);
    }
}
