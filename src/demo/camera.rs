//! Chase camera.

use glam::{DQuat, DVec3};

use super::{CAMERA_FOLLOW, CAMERA_OFFSET};

/// Where the camera wants to sit: behind and above the chassis, rotated with it.
pub fn chase_target(chassis_position: DVec3, chassis_orientation: DQuat) -> DVec3 {
    chassis_position + chassis_orientation * CAMERA_OFFSET
}

/// Moves the camera a fixed fraction of the way toward the chase target.
pub fn follow(camera: DVec3, chassis_position: DVec3, chassis_orientation: DQuat) -> DVec3 {
    camera.lerp(chase_target(chassis_position, chassis_orientation), CAMERA_FOLLOW)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn close(a: DVec3, b: DVec3) -> bool {
        a.abs_diff_eq(b, 1e-9)
    }

    #[test]
    fn unrotated_target_trails_behind() {
        let target = chase_target(DVec3::new(1.0, 2.0, 3.0), DQuat::IDENTITY);
        assert!(close(target, DVec3::new(1.0, 7.0, 13.0)));
    }

    #[test]
    fn target_rotates_with_chassis() {
        let half_turn = DQuat::from_rotation_y(PI);
        let target = chase_target(DVec3::ZERO, half_turn);
        assert!(close(target, DVec3::new(0.0, 5.0, -10.0)));
    }

    #[test]
    fn follow_moves_a_tenth_of_the_way() {
        let next = follow(DVec3::ZERO, DVec3::ZERO, DQuat::IDENTITY);
        assert!(close(next, DVec3::new(0.0, 0.5, 1.0)));
    }

    #[test]
    fn follow_converges_on_a_parked_car() {
        let mut camera = DVec3::new(0.0, 10.0, 20.0);
        for _ in 0..500 {
            camera = follow(camera, DVec3::ZERO, DQuat::IDENTITY);
        }
        assert!(camera.abs_diff_eq(CAMERA_OFFSET, 1e-6));
    }
}
