//! Window, geometry and shading configuration.

use glam::Vec3;

/// Rendering configuration
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Window width (pixels)
    pub window_width: u32,

    /// Window height (pixels)
    pub window_height: u32,

    /// Water grid resolution (cells per side)
    pub water_grid_cells: u32,

    /// Half extent of the water grid (meters, grid spans -x..x)
    pub water_half_extent_m: f32,

    /// Half extent of the skybox cube (meters)
    pub skybox_half_extent_m: f32,

    /// Point light position used for water shading (meters)
    pub light_position: Vec3,

    /// Water base color (linear RGB)
    pub water_color: Vec3,

    /// Water opacity (0 = invisible, 1 = opaque)
    pub water_alpha: f32,

    /// Flat ship color (linear RGB)
    pub ship_color: Vec3,

    /// Flat skybox color (linear RGB)
    pub sky_color: Vec3,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            window_width: 800,
            window_height: 600,
            water_grid_cells: 50,
            water_half_extent_m: 10.0,
            skybox_half_extent_m: 10.0,
            light_position: Vec3::new(10.0, 10.0, 10.0),
            water_color: Vec3::new(0.0, 0.5, 0.8),
            water_alpha: 0.8,
            ship_color: Vec3::new(1.0, 0.0, 0.0),
            sky_color: Vec3::new(0.5, 0.7, 1.0),
        }
    }
}
