//! Per-frame transform derivation and the uniform blocks handed to the GPU.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

use crate::camera::CameraSystem;
use crate::params::RenderConfig;
use crate::ship::ShipState;

/// Uniform buffer for the water shader (matrices + lighting + time)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct WaterUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub light_pos: [f32; 3],
    pub time: f32,
    pub view_pos: [f32; 3],
    pub _padding: f32, // Padding for alignment
    pub color: [f32; 4],
}

/// Uniform buffer for flat-colored draws (ship, skybox)
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct FlatUniforms {
    pub model: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],
    pub color: [f32; 3],
    pub _padding: f32,
}

/// Ship model matrix: translate, then yaw (Y), pitch (X), roll (Z)
pub fn ship_model_matrix(ship: &ShipState) -> Mat4 {
    Mat4::from_translation(ship.position)
        * Mat4::from_rotation_y(ship.yaw)
        * Mat4::from_rotation_x(ship.pitch)
        * Mat4::from_rotation_z(ship.roll)
}

/// Everything the renderer needs for one frame
#[derive(Copy, Clone, Debug)]
pub struct FrameUniforms {
    pub water: WaterUniforms,
    pub ship: FlatUniforms,
    pub skybox: FlatUniforms,
}

impl FrameUniforms {
    pub fn new(
        ship: &ShipState,
        camera: &CameraSystem,
        time_s: f32,
        config: &RenderConfig,
    ) -> Self {
        let view = camera.view().to_cols_array_2d();
        let projection = camera.projection().to_cols_array_2d();
        let identity = Mat4::IDENTITY.to_cols_array_2d();

        let water = WaterUniforms {
            model: identity,
            view,
            projection,
            light_pos: config.light_position.to_array(),
            time: time_s,
            view_pos: camera.eye().to_array(),
            _padding: 0.0,
            color: config.water_color.extend(config.water_alpha).to_array(),
        };

        let ship = FlatUniforms {
            model: ship_model_matrix(ship).to_cols_array_2d(),
            view,
            projection,
            color: config.ship_color.to_array(),
            _padding: 0.0,
        };

        let skybox = FlatUniforms {
            model: identity,
            view,
            projection,
            color: config.sky_color.to_array(),
            _padding: 0.0,
        };

        Self { water, ship, skybox }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{FixedCamera, ShipPhysics};
    use glam::{Vec2, Vec3};
    use std::f32::consts::FRAC_PI_2;

    fn ship_with(yaw: f32, pitch: f32, roll: f32) -> ShipState {
        ShipState {
            position: Vec3::new(1.0, -0.1, 2.0),
            velocity: Vec2::ZERO,
            yaw,
            pitch,
            roll,
        }
    }

    #[test]
    fn test_uniform_sizes_match_wgsl_layout() {
        assert_eq!(std::mem::size_of::<WaterUniforms>(), 240);
        assert_eq!(std::mem::size_of::<FlatUniforms>(), 208);
    }

    #[test]
    fn test_level_ship_is_pure_translation() {
        let ship = ship_with(0.0, 0.0, 0.0);
        assert_eq!(
            ship_model_matrix(&ship),
            Mat4::from_translation(Vec3::new(1.0, -0.1, 2.0))
        );
    }

    #[test]
    fn test_yaw_points_bow_along_heading() {
        let ship = ship_with(FRAC_PI_2, 0.0, 0.0);
        let bow = ship_model_matrix(&ship).transform_vector3(Vec3::Z);
        assert!(bow.abs_diff_eq(Vec3::X, 1e-6));
    }

    #[test]
    fn test_rotation_order_is_yaw_pitch_roll() {
        let ship = ship_with(0.7, 0.3, -0.2);
        let m = ship_model_matrix(&ship);

        let expected = Mat4::from_translation(ship.position)
            * Mat4::from_rotation_y(0.7)
            * Mat4::from_rotation_x(0.3)
            * Mat4::from_rotation_z(-0.2);
        assert!(m.abs_diff_eq(expected, 1e-6));

        let reversed = Mat4::from_translation(ship.position)
            * Mat4::from_rotation_z(-0.2)
            * Mat4::from_rotation_x(0.3)
            * Mat4::from_rotation_y(0.7);
        assert!(!m.abs_diff_eq(reversed, 1e-3));
    }

    #[test]
    fn test_frame_uniforms() {
        let config = RenderConfig::default();
        let camera = CameraSystem::new(FixedCamera::default(), 800, 600);
        let ship = ShipState::new(&ShipPhysics::default());

        let frame = FrameUniforms::new(&ship, &camera, 2.5, &config);

        assert_eq!(frame.water.time, 2.5);
        assert_eq!(frame.water.view_pos, [0.0, 5.0, 10.0]);
        assert_eq!(frame.water.light_pos, [10.0, 10.0, 10.0]);
        assert_eq!(frame.water.color, [0.0, 0.5, 0.8, 0.8]);
        assert_eq!(frame.water.model, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(frame.skybox.model, Mat4::IDENTITY.to_cols_array_2d());
        assert_eq!(frame.ship.color, [1.0, 0.0, 0.0]);
        assert_eq!(frame.skybox.color, [0.5, 0.7, 1.0]);

        // Every draw shares the camera matrices
        let projection = camera.projection().to_cols_array_2d();
        assert_eq!(frame.water.projection, projection);
        assert_eq!(frame.ship.projection, projection);
        assert_eq!(frame.skybox.view, camera.view().to_cols_array_2d());
    }
}
