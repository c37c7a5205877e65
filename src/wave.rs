//! Analytic wave height field shared by the ship physics and the water shader.
//!
//! The CPU samples [`WaveField::height`] under the hull while the GPU displaces
//! the water grid with WGSL generated by [`WaveField::wgsl_functions`] from the
//! same parameters. A hull corner computed to sit on the surface therefore sits
//! on the rendered surface too.

use glam::{Vec2, Vec3};

use crate::params::WaveParams;

/// Pure function of horizontal position and time
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WaveField {
    params: WaveParams,
}

impl WaveField {
    /// Create a wave field with the given parameters
    pub fn new(params: WaveParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &WaveParams {
        &self.params
    }

    /// Surface height at world position (x, z) and time `time_s`
    pub fn height(&self, x: f32, z: f32, time_s: f32) -> f32 {
        let p = &self.params;
        p.amplitude_m * (p.frequency_x * x + time_s).sin() * (p.frequency_z * z + time_s).cos()
    }

    /// Partial derivatives of the height: (dh/dx, dh/dz)
    pub fn gradient(&self, x: f32, z: f32, time_s: f32) -> Vec2 {
        let p = &self.params;
        let (sin_x, cos_x) = (p.frequency_x * x + time_s).sin_cos();
        let (sin_z, cos_z) = (p.frequency_z * z + time_s).sin_cos();

        Vec2::new(
            p.amplitude_m * p.frequency_x * cos_x * cos_z,
            -p.amplitude_m * p.frequency_z * sin_x * sin_z,
        )
    }

    /// Unit surface normal derived from the gradient
    pub fn normal(&self, x: f32, z: f32, time_s: f32) -> Vec3 {
        let g = self.gradient(x, z, time_s);
        Vec3::new(-g.x, 1.0, -g.y).normalize()
    }

    /// WGSL constants and functions evaluating this exact field on the GPU
    ///
    /// Emits `wave_height(x, z, t) -> f32` and `wave_normal(x, z, t) -> vec3<f32>`.
    pub fn wgsl_functions(&self) -> String {
        let p = &self.params;
        format!(
            "const WAVE_AMPLITUDE: f32 = {amplitude:?};
const WAVE_FREQUENCY_X: f32 = {frequency_x:?};
const WAVE_FREQUENCY_Z: f32 = {frequency_z:?};

fn wave_height(x: f32, z: f32, t: f32) -> f32 {{
    return WAVE_AMPLITUDE * sin(WAVE_FREQUENCY_X * x + t) * cos(WAVE_FREQUENCY_Z * z + t);
}}

fn wave_normal(x: f32, z: f32, t: f32) -> vec3<f32> {{
    let phase_x = WAVE_FREQUENCY_X * x + t;
    let phase_z = WAVE_FREQUENCY_Z * z + t;
    let dh_dx = WAVE_AMPLITUDE * WAVE_FREQUENCY_X * cos(phase_x) * cos(phase_z);
    let dh_dz = -WAVE_AMPLITUDE * WAVE_FREQUENCY_Z * sin(phase_x) * sin(phase_z);
    return normalize(vec3<f32>(-dh_dx, 1.0, -dh_dz));
}}
",
            amplitude = p.amplitude_m,
            frequency_x = p.frequency_x,
            frequency_z = p.frequency_z,
        )
    }
}
