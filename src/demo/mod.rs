//! Drive-around demo page.
//!
//! A car built on the physics library's raycast vehicle is driven over a
//! ground plane; four interaction zones open a content panel when the car is
//! parked inside one and the interact key is held.

pub mod camera;
pub mod content;
pub mod controls;
pub mod zones;

#[cfg(target_arch = "wasm32")]
mod bindings;
#[cfg(target_arch = "wasm32")]
mod scene;

#[cfg(target_arch = "wasm32")]
pub use scene::run;

use glam::DVec3;

pub const FIXED_TIME_STEP: f64 = 1.0 / 60.0;
pub const MAX_SUB_STEPS: u32 = 3;
pub const GRAVITY: f64 = -9.82;
pub const SOLVER_ITERATIONS: u32 = 10;

pub const ZONE_RADIUS: f64 = 15.0;
pub const ZONE_LABEL_HEIGHT: f64 = 10.0;

pub const CHASSIS_MASS: f64 = 150.0;
pub const CHASSIS_HALF_EXTENTS: DVec3 = DVec3::new(1.0, 0.4, 2.0);
pub const CHASSIS_SPAWN: DVec3 = DVec3::new(0.0, 4.0, 0.0);
pub const WHEEL_RADIUS: f64 = 0.4;
pub const WHEEL_CONNECTIONS: [DVec3; 4] = [
    DVec3::new(-1.0, 0.0, 1.5),
    DVec3::new(1.0, 0.0, 1.5),
    DVec3::new(-1.0, 0.0, -1.5),
    DVec3::new(1.0, 0.0, -1.5),
];

pub const CAMERA_OFFSET: DVec3 = DVec3::new(0.0, 5.0, 10.0);
pub const CAMERA_START: DVec3 = DVec3::new(0.0, 10.0, 20.0);
pub const CAMERA_FOLLOW: f64 = 0.1;

pub const FONT_URL: &str =
    "https://unpkg.com/three@0.158.0/examples/fonts/helvetiker_bold.typeface.json";
pub const MODEL_URL: &str = "https://bruno-simon.com/models/car-body.glb";
pub const LOADER_FADE_MS: u32 = 500;

/// Loading bar width in percent; zero items counts as complete.
pub fn loading_percent(loaded: u32, total: u32) -> f64 {
    if total == 0 {
        return 100.0;
    }
    (f64::from(loaded) / f64::from(total) * 100.0).min(100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loading_percent_tracks_items() {
        assert_eq!(loading_percent(0, 2), 0.0);
        assert_eq!(loading_percent(1, 2), 50.0);
        assert_eq!(loading_percent(2, 2), 100.0);
        assert_eq!(loading_percent(0, 0), 100.0);
    }
}
