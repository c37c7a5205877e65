//! Wave height field parameters.

/// Parameters of the analytic wave height field
///
/// `height = amplitude * sin(frequency_x * x + t) * cos(frequency_z * z + t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveParams {
    /// Peak wave height (meters)
    pub amplitude_m: f32,

    /// Spatial frequency along X (radians per meter)
    pub frequency_x: f32,

    /// Spatial frequency along Z (radians per meter)
    pub frequency_z: f32,
}

impl Default for WaveParams {
    fn default() -> Self {
        Self {
            amplitude_m: 0.1,
            frequency_x: 2.0,
            frequency_z: 2.0,
        }
    }
}
