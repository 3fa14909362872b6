//! Per-body sleep bookkeeping
//!
//! A body moving slower than its speed limit accumulates idle time; past the
//! time limit it falls asleep and drops out of integration until woken.

use crate::systems::rigid_body::{RigidBody, SleepState};

pub fn sleep_tick(body: &mut RigidBody, dt: f32) {
    if !body.allow_sleep || !body.is_dynamic() || body.is_sleeping() {
        return;
    }

    let limit_sq = body.sleep_speed_limit * body.sleep_speed_limit;
    if body.speed_squared() >= limit_sq {
        body.idle_time = 0.0;
        body.sleep_state = SleepState::Awake;
    } else {
        body.idle_time += dt;
        body.sleep_state = SleepState::Sleepy;
    }

    if body.idle_time > body.sleep_time_limit {
        body.sleep();
    }
}

/// An awake body moving this fast wakes whatever sleeping body it touches
pub fn wakes_on_contact(body: &RigidBody) -> bool {
    !body.is_sleeping() && body.speed_squared() >= 2.0 * body.sleep_speed_limit * body.sleep_speed_limit
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::math::Vec2;

    fn sleepy_box() -> RigidBody {
        let mut body = RigidBody::new_box(Vec2::zero(), 1.0, 1.0, 1.0);
        body.allow_sleep = true;
        body.sleep_speed_limit = 0.5;
        body.sleep_time_limit = 2.0;
        body
    }

    #[test]
    fn still_body_falls_asleep_after_time_limit() {
        let mut body = sleepy_box();
        let dt = 1.0 / 45.0;
        for _ in 0..80 {
            sleep_tick(&mut body, dt);
        }
        assert_eq!(body.sleep_state, SleepState::Sleepy);
        for _ in 0..20 {
            sleep_tick(&mut body, dt);
        }
        assert!(body.is_sleeping());
    }

    #[test]
    fn moving_body_stays_awake() {
        let mut body = sleepy_box();
        body.velocity = Vec2::new(1.0, 0.0);
        for _ in 0..500 {
            sleep_tick(&mut body, 0.1);
        }
        assert_eq!(body.sleep_state, SleepState::Awake);
    }

    #[test]
    fn bodies_without_permission_never_sleep() {
        let mut body = sleepy_box();
        body.allow_sleep = false;
        for _ in 0..500 {
            sleep_tick(&mut body, 0.1);
        }
        assert!(!body.is_sleeping());
    }
}
