//! Ship kinematics and wave buoyancy.
//!
//! The ship only moves in the horizontal plane. Its height and tilt are not
//! integrated: every frame they are read straight off the wave field at four
//! hull corners.

use glam::{FloatExt, Vec2, Vec3};

use crate::params::ShipPhysics;
use crate::wave::WaveField;

/// Wave heights under the four hull corners
///
/// Offsets are in world space and ignore the ship's heading. Front is -Z,
/// left is -X.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct HullSamples {
    pub front_left: f32,
    pub front_right: f32,
    pub back_left: f32,
    pub back_right: f32,
}

impl HullSamples {
    /// Sample the wave field around a horizontal position (x, z)
    pub fn sample(wave: &WaveField, center: Vec2, time_s: f32, physics: &ShipPhysics) -> Self {
        let w = physics.hull_half_width_m;
        let l = physics.hull_half_length_m;
        let at = |dx: f32, dz: f32| wave.height(center.x + dx, center.y + dz, time_s);

        Self {
            front_left: at(-w, -l),
            front_right: at(w, -l),
            back_left: at(-w, l),
            back_right: at(w, l),
        }
    }

    pub fn average(&self) -> f32 {
        (self.front_left + self.front_right + self.back_left + self.back_right) / 4.0
    }

    pub fn front_average(&self) -> f32 {
        (self.front_left + self.front_right) / 2.0
    }

    pub fn back_average(&self) -> f32 {
        (self.back_left + self.back_right) / 2.0
    }

    pub fn left_average(&self) -> f32 {
        (self.front_left + self.back_left) / 2.0
    }

    pub fn right_average(&self) -> f32 {
        (self.front_right + self.back_right) / 2.0
    }

    /// Fore/aft tilt (radians)
    pub fn pitch(&self, physics: &ShipPhysics) -> f32 {
        (self.front_average() - self.back_average()).atan2(physics.pitch_lever_m) * physics.tilt_gain
    }

    /// Side-to-side tilt (radians)
    pub fn roll(&self, physics: &ShipPhysics) -> f32 {
        (self.left_average() - self.right_average()).atan2(physics.roll_lever_m) * physics.tilt_gain
    }
}

/// Kinematic ship state, mutated once per frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShipState {
    /// World position (meters); `y` is derived from the waves
    pub position: Vec3,
    /// Horizontal velocity as (vx, vz) in meters per second
    pub velocity: Vec2,
    /// Heading about +Y (radians)
    pub yaw: f32,
    /// Rotation about +X (radians)
    pub pitch: f32,
    /// Rotation about +Z (radians)
    pub roll: f32,
}

impl ShipState {
    /// Ship at rest at the spawn position
    pub fn new(physics: &ShipPhysics) -> Self {
        Self {
            position: physics.start_position,
            velocity: Vec2::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
        }
    }

    /// Advance one frame
    ///
    /// `acceleration` is added to the velocity as-is (not scaled by `dt`), so
    /// thrust is per frame. `time_s` is only used to evaluate the waves.
    /// Returns the hull samples the pose was derived from.
    pub fn update(
        &mut self,
        acceleration: Vec2,
        dt: f32,
        time_s: f32,
        wave: &WaveField,
        physics: &ShipPhysics,
    ) -> HullSamples {
        self.velocity += acceleration;

        self.position.x += self.velocity.x * dt;
        self.position.z += self.velocity.y * dt;

        self.velocity *= physics.damping_per_frame;

        let center = Vec2::new(self.position.x, self.position.z);
        let samples = HullSamples::sample(wave, center, time_s, physics);

        let submersion =
            physics.submersion_depth_m * (1.0 + physics.submersion_modulation * time_s.sin());
        self.position.y = samples.average() - submersion;

        self.pitch = samples.pitch(physics);
        self.roll = samples.roll(physics);

        // Raw angle interpolation: crossing the +-PI seam swings the long way round
        let heading = self.velocity.x.atan2(self.velocity.y);
        self.yaw = self.yaw.lerp(heading, physics.yaw_smoothing);

        samples
    }
}
