use crate::core::math::Vec2;
use crate::core::random::Rng;

use super::{
    BodyHandle, World, RESET_HEIGHT, RESET_SPIN_RANGE, RESET_VX_RANGE, RESET_VY_MAX, RESET_X_RANGE,
    STRAY_BOUND_X,
};

/// Only the x axis is checked; a glyph falling forever inside the bound is
/// left alone.
pub(super) fn respawn_if_stray(world: &mut World, handle: BodyHandle, rng: &mut Rng) -> bool {
    if world.torn_down {
        return false;
    }
    let Some(body) = world.bodies.get_mut(handle.0) else {
        return false;
    };
    if body.glyph.is_none() || body.pos.x.abs() <= STRAY_BOUND_X {
        return false;
    }

    let pos = Vec2::new(rng.range(-RESET_X_RANGE, RESET_X_RANGE), RESET_HEIGHT);
    let velocity = Vec2::new(rng.range(-RESET_VX_RANGE, RESET_VX_RANGE), rng.range(0.0, RESET_VY_MAX));
    let spin = rng.range(-RESET_SPIN_RANGE, RESET_SPIN_RANGE);
    body.reset_motion(pos, velocity, spin);

    if world.drag.map_or(false, |d| d.target == handle) {
        world.drag = None;
    }
    true
}
