//! Keyboard state and its mapping onto vehicle inputs.

use std::collections::HashSet;

pub const MAX_ENGINE_FORCE: f64 = 1000.0;
pub const MAX_STEER: f64 = 0.5;
pub const GRIP_FRICTION_SLIP: f64 = 1.4;
pub const DRIFT_FRICTION_SLIP: f64 = 0.5;

pub const STEERING_WHEELS: [usize; 2] = [0, 1];
pub const DRIVE_WHEELS: [usize; 2] = [2, 3];

pub const INTERACT_KEY: &str = "e";

/// Keys currently held, stored lowercased as reported by `KeyboardEvent.key`.
#[derive(Clone, Debug, Default)]
pub struct KeyState {
    held: HashSet<String>,
}

impl KeyState {
    pub fn press(&mut self, key: &str) {
        self.held.insert(key.to_lowercase());
    }

    pub fn release(&mut self, key: &str) {
        self.held.remove(&key.to_lowercase());
    }

    pub fn is_held(&self, key: &str) -> bool {
        self.held.contains(key)
    }

    fn any_held(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.is_held(key))
    }

    pub fn interact_held(&self) -> bool {
        self.is_held(INTERACT_KEY)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DriveCommand {
    pub engine_force: f64,
    pub steering: f64,
    pub rear_friction_slip: f64,
    pub reset: bool,
}

impl DriveCommand {
    /// Reverse wins over forward and right over left when both are held.
    pub fn from_keys(keys: &KeyState) -> Self {
        let mut engine_force = 0.0;
        if keys.any_held(&["w", "arrowup"]) {
            engine_force = -MAX_ENGINE_FORCE;
        }
        if keys.any_held(&["s", "arrowdown"]) {
            engine_force = MAX_ENGINE_FORCE / 2.0;
        }

        let mut steering = 0.0;
        if keys.any_held(&["a", "arrowleft"]) {
            steering = MAX_STEER;
        }
        if keys.any_held(&["d", "arrowright"]) {
            steering = -MAX_STEER;
        }

        let rear_friction_slip = if keys.is_held("shift") {
            DRIFT_FRICTION_SLIP
        } else {
            GRIP_FRICTION_SLIP
        };

        Self {
            engine_force,
            steering,
            rear_friction_slip,
            reset: keys.is_held("r"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(pressed: &[&str]) -> KeyState {
        let mut state = KeyState::default();
        for key in pressed {
            state.press(key);
        }
        state
    }

    #[test]
    fn idle_car_coasts_with_grip() {
        let command = DriveCommand::from_keys(&KeyState::default());
        assert_eq!(command.engine_force, 0.0);
        assert_eq!(command.steering, 0.0);
        assert_eq!(command.rear_friction_slip, GRIP_FRICTION_SLIP);
        assert!(!command.reset);
    }

    #[test]
    fn forward_is_negative_force_and_reverse_is_half() {
        assert_eq!(DriveCommand::from_keys(&keys(&["w"])).engine_force, -1000.0);
        assert_eq!(DriveCommand::from_keys(&keys(&["S"])).engine_force, 500.0);
        assert_eq!(DriveCommand::from_keys(&keys(&["w", "s"])).engine_force, 500.0);
        assert_eq!(DriveCommand::from_keys(&keys(&["ArrowUp"])).engine_force, -1000.0);
    }

    #[test]
    fn steering_right_wins() {
        assert_eq!(DriveCommand::from_keys(&keys(&["a"])).steering, MAX_STEER);
        assert_eq!(DriveCommand::from_keys(&keys(&["a", "d"])).steering, -MAX_STEER);
    }

    #[test]
    fn shift_drifts_and_r_resets() {
        let command = DriveCommand::from_keys(&keys(&["Shift", "r"]));
        assert_eq!(command.rear_friction_slip, DRIFT_FRICTION_SLIP);
        assert!(command.reset);
    }

    #[test]
    fn release_is_case_insensitive() {
        let mut state = keys(&["E"]);
        assert!(state.interact_held());
        state.release("e");
        assert!(!state.interact_held());
    }
}
