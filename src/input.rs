//! Keyboard steering: four held directions mapped to a per-frame thrust.

use glam::Vec2;
use winit::event::ElementState;
use winit::keyboard::KeyCode;

/// Which steering directions are currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InputState {
    /// +Z (arrow up)
    pub forward: bool,
    /// -Z (arrow down)
    pub backward: bool,
    /// -X (arrow left)
    pub left: bool,
    /// +X (arrow right)
    pub right: bool,
}

impl InputState {
    /// Record a key press or release
    ///
    /// Returns `true` if the key is one of the steering keys.
    pub fn handle_key(&mut self, key: KeyCode, state: ElementState) -> bool {
        let pressed = state == ElementState::Pressed;
        let slot = match key {
            KeyCode::ArrowUp => &mut self.forward,
            KeyCode::ArrowDown => &mut self.backward,
            KeyCode::ArrowLeft => &mut self.left,
            KeyCode::ArrowRight => &mut self.right,
            _ => return false,
        };
        *slot = pressed;
        true
    }

    /// Release every direction
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Velocity impulse for this frame as (x, z)
    ///
    /// Each held direction contributes `thrust` to one axis; opposite keys cancel.
    pub fn acceleration(&self, thrust: f32) -> Vec2 {
        let mut accel = Vec2::ZERO;
        if self.forward {
            accel.y += thrust;
        }
        if self.backward {
            accel.y -= thrust;
        }
        if self.left {
            accel.x -= thrust;
        }
        if self.right {
            accel.x += thrust;
        }
        accel
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_idle_input_has_no_acceleration() {
        assert_eq!(InputState::default().acceleration(0.01), Vec2::ZERO);
    }

    #[test]
    fn test_diagonal_input_sums_both_axes() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::ArrowUp, ElementState::Pressed);
        input.handle_key(KeyCode::ArrowRight, ElementState::Pressed);
        assert_eq!(input.acceleration(0.01), Vec2::new(0.01, 0.01));
    }

    #[test]
    fn test_opposite_keys_cancel() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::ArrowLeft, ElementState::Pressed);
        input.handle_key(KeyCode::ArrowRight, ElementState::Pressed);
        assert_eq!(input.acceleration(0.01).x, 0.0);
    }

    #[test]
    fn test_release_clears_direction() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::ArrowDown, ElementState::Pressed);
        assert_eq!(input.acceleration(0.01), Vec2::new(0.0, -0.01));
        input.handle_key(KeyCode::ArrowDown, ElementState::Released);
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_clear_stops_thrust_from_held_keys() {
        let mut input = InputState::default();
        input.handle_key(KeyCode::ArrowUp, ElementState::Pressed);
        input.handle_key(KeyCode::ArrowLeft, ElementState::Pressed);
        assert_ne!(input.acceleration(0.01), Vec2::ZERO);

        input.clear();

        assert_eq!(input, InputState::default());
        assert_eq!(input.acceleration(0.01), Vec2::ZERO);
    }

    #[test]
    fn test_other_keys_are_ignored() {
        let mut input = InputState::default();
        assert!(!input.handle_key(KeyCode::KeyW, ElementState::Pressed));
        assert_eq!(input, InputState::default());
    }
}
