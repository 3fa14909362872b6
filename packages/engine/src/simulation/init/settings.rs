use crate::core::math::Vec2;
use crate::domain::tunables::Tunables;

use super::World;

pub(super) fn set_tunables(world: &mut World, tunables: &Tunables) {
    if world.torn_down {
        return;
    }
    let tunables = tunables.clamped();
    world.gravity = Vec2::new(0.0, tunables.gravity);
    world.stiffness = tunables.stiffness;
    world.relaxation = tunables.relaxation;
    // sleeping glyphs would otherwise ignore the new gravity
    wake_all(world);
}

pub(super) fn set_floor_height(world: &mut World, y: f32) {
    if world.torn_down {
        return;
    }
    if let Some(floor) = world.bodies.get_mut(world.floor.0) {
        floor.pos.y = y;
    }
    wake_all(world);
}

pub(super) fn wake_all(world: &mut World) {
    for body in world.bodies.iter_mut().filter(|b| b.is_dynamic()) {
        body.wake_up();
    }
}
