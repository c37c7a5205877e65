//! Ship kinematics and buoyancy parameters.

use glam::Vec3;

/// Ship physics parameters
///
/// Thrust and damping are applied once per frame, not per second, so the
/// feel of the ship depends on frame rate.
#[derive(Debug, Clone)]
pub struct ShipPhysics {
    /// Velocity added per frame while a direction is held (meters per second)
    pub thrust_per_frame: f32,

    /// Velocity multiplier applied every frame (dimensionless, < 1)
    pub damping_per_frame: f32,

    /// Lateral offset of the hull sample points from the ship center (meters)
    pub hull_half_width_m: f32,

    /// Fore/aft offset of the hull sample points from the ship center (meters)
    pub hull_half_length_m: f32,

    /// How far the hull sits below the averaged water surface (meters)
    pub submersion_depth_m: f32,

    /// Relative modulation of the submersion depth over time
    /// Formula: depth * (1 + modulation * sin(t))
    pub submersion_modulation: f32,

    /// Horizontal run used for the pitch angle (meters, front-to-back span)
    pub pitch_lever_m: f32,

    /// Horizontal run used for the roll angle (meters, left-to-right span)
    pub roll_lever_m: f32,

    /// Scale applied to the raw pitch and roll angles (dimensionless)
    pub tilt_gain: f32,

    /// Fraction of the remaining heading error closed per frame
    pub yaw_smoothing: f32,

    /// Spawn position (meters)
    pub start_position: Vec3,

    /// Largest frame delta fed to the update (seconds)
    pub max_frame_dt_s: f32,
}

impl Default for ShipPhysics {
    fn default() -> Self {
        Self {
            thrust_per_frame: 0.01,
            damping_per_frame: 0.99,
            hull_half_width_m: 0.5,
            hull_half_length_m: 1.0,
            submersion_depth_m: 0.1,
            submersion_modulation: 0.2,
            pitch_lever_m: 2.0,
            roll_lever_m: 1.0,
            tilt_gain: 0.8,
            yaw_smoothing: 0.1,
            start_position: Vec3::new(0.0, 0.5, 0.0),
            max_frame_dt_s: 0.1, // Keeps a stalled frame from teleporting the ship
        }
    }
}
