//! Frame-loop state: input, ship and waves advanced together once per frame.

use std::time::Instant;

use log::{debug, info, warn};

use crate::input::InputState;
use crate::params::ShipPhysics;
use crate::ship::{HullSamples, ShipState};
use crate::wave::WaveField;

/// Wall-clock frame timer
pub struct FrameClock {
    start: Instant,
    last: Instant,
}

impl FrameClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self { start: now, last: now }
    }

    /// Returns (seconds since the previous tick, seconds since start)
    pub fn tick(&mut self) -> (f32, f32) {
        let now = Instant::now();
        let dt = (now - self.last).as_secs_f32();
        self.last = now;
        (dt, (now - self.start).as_secs_f32())
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// Simulation state owned by the frame loop
pub struct Simulation {
    pub ship: ShipState,
    pub input: InputState,
    wave: WaveField,
    physics: ShipPhysics,
    last_samples: HullSamples,
    frame: u64,
}

impl Simulation {
    pub fn new(wave: WaveField, physics: ShipPhysics) -> Self {
        Self {
            ship: ShipState::new(&physics),
            input: InputState::default(),
            wave,
            physics,
            last_samples: HullSamples::default(),
            frame: 0,
        }
    }

    pub fn wave(&self) -> &WaveField {
        &self.wave
    }

    pub fn physics(&self) -> &ShipPhysics {
        &self.physics
    }

    /// Number of completed steps
    pub fn frame_count(&self) -> u64 {
        self.frame
    }

    /// Hull samples from the most recent step
    pub fn last_samples(&self) -> &HullSamples {
        &self.last_samples
    }

    /// Limit a frame delta to `max_frame_dt_s`
    pub fn clamp_dt(&self, dt: f32) -> f32 {
        let max = self.physics.max_frame_dt_s;
        if dt > max {
            warn!("Frame took {:.3}s, clamping step to {:.3}s", dt, max);
            max
        } else {
            dt.max(0.0)
        }
    }

    /// Apply held input and advance the ship by one frame
    pub fn step(&mut self, dt: f32, time_s: f32) -> &ShipState {
        let dt = self.clamp_dt(dt);
        let acceleration = self.input.acceleration(self.physics.thrust_per_frame);

        self.last_samples = self
            .ship
            .update(acceleration, dt, time_s, &self.wave, &self.physics);
        self.frame += 1;

        let hull = &self.last_samples;
        debug!(
            "frame {}: hull=[{:.3} {:.3} {:.3} {:.3}] pos=({:.3}, {:.3}, {:.3}) vel=({:.3}, {:.3}) yaw={:.3} pitch={:.3} roll={:.3}",
            self.frame,
            hull.front_left,
            hull.front_right,
            hull.back_left,
            hull.back_right,
            self.ship.position.x,
            self.ship.position.y,
            self.ship.position.z,
            self.ship.velocity.x,
            self.ship.velocity.y,
            self.ship.yaw,
            self.ship.pitch,
            self.ship.roll,
        );

        &self.ship
    }

    /// Run `frames` fixed steps of `dt` without a window, logging once per second
    pub fn run_headless(&mut self, frames: u64, dt: f32) {
        let log_every = ((1.0 / dt).round() as u64).max(1);
        for n in 1..=frames {
            let time_s = n as f32 * dt;
            self.step(dt, time_s);
            if n % log_every == 0 || n == frames {
                let s = &self.ship;
                info!(
                    "frame {} t={:.2}s water={:.3} pos=({:.3}, {:.3}, {:.3}) yaw={:.3} pitch={:.3} roll={:.3}",
                    self.frame_count(),
                    time_s,
                    self.last_samples().average(),
                    s.position.x,
                    s.position.y,
                    s.position.z,
                    s.yaw,
                    s.pitch,
                    s.roll,
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use winit::event::ElementState;
    use winit::keyboard::KeyCode;

    const DT: f32 = 1.0 / 60.0;

    fn simulation() -> Simulation {
        Simulation::new(WaveField::default(), ShipPhysics::default())
    }

    #[test]
    fn test_clamp_dt() {
        let sim = simulation();
        assert_eq!(sim.clamp_dt(DT), DT);
        assert_eq!(sim.clamp_dt(2.0), 0.1);
        assert_eq!(sim.clamp_dt(-1.0), 0.0);
    }

    #[test]
    fn test_held_key_accelerates_ship() {
        let mut sim = simulation();
        sim.input.handle_key(KeyCode::ArrowUp, ElementState::Pressed);

        for n in 1..=30 {
            sim.step(DT, n as f32 * DT);
        }

        assert!(sim.ship.velocity.y > 0.0);
        assert_eq!(sim.ship.velocity.x, 0.0);
        assert!(sim.ship.position.z > 0.0);
        assert_eq!(sim.frame_count(), 30);

        // Heading eases toward +Z, which is yaw 0
        assert!(sim.ship.yaw.abs() < 1e-6);
    }

    #[test]
    fn test_release_lets_ship_coast_to_rest() {
        let mut sim = simulation();
        sim.input.handle_key(KeyCode::ArrowRight, ElementState::Pressed);
        for n in 1..=10 {
            sim.step(DT, n as f32 * DT);
        }
        sim.input.handle_key(KeyCode::ArrowRight, ElementState::Released);
        let peak = sim.ship.velocity.x;

        for n in 11..=500 {
            sim.step(DT, n as f32 * DT);
        }
        assert!(sim.ship.velocity.x < peak * 0.01);
        assert!(sim.ship.velocity.x > 0.0);
    }

    #[test]
    fn test_step_records_hull_samples() {
        let mut sim = simulation();
        let t = 0.9;
        sim.step(DT, t);
        let expected = HullSamples::sample(sim.wave(), Vec2::ZERO, t, sim.physics());
        assert_eq!(*sim.last_samples(), expected);
    }

    #[test]
    fn test_headless_idle_run_keeps_position() {
        let mut sim = simulation();
        sim.run_headless(200, DT);

        assert_eq!(sim.frame_count(), 200);
        assert_eq!(sim.ship.position.x, 0.0);
        assert_eq!(sim.ship.position.z, 0.0);
        assert!(sim.ship.position.y.abs() < 0.3);
    }
}
