use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::glyphs::GlyphBody;
use crate::systems::rigid_body::RigidBody;

use super::{BodyHandle, World, SPAWN_HEIGHT, SPAWN_SPIN_RANGE, SPAWN_X_RANGE};

pub(super) fn add_body(world: &mut World, glyph: GlyphBody, rng: &mut Rng) -> Option<BodyHandle> {
    if world.torn_down {
        return None;
    }
    let pos = Vec2::new(rng.range(-SPAWN_X_RANGE, SPAWN_X_RANGE), SPAWN_HEIGHT);
    let spin = rng.range(-SPAWN_SPIN_RANGE, SPAWN_SPIN_RANGE);
    add_body_with_motion(world, glyph, pos, Vec2::zero(), spin)
}

pub(super) fn add_body_with_motion(
    world: &mut World,
    glyph: GlyphBody,
    pos: Vec2,
    velocity: Vec2,
    angular_vel: f32,
) -> Option<BodyHandle> {
    if world.torn_down {
        return None;
    }

    let mut body = RigidBody::new_box(pos, glyph.mass, glyph.width, glyph.height);
    body.allow_sleep = glyph.allow_sleep;
    body.sleep_speed_limit = glyph.sleep_speed_limit;
    body.sleep_time_limit = glyph.sleep_time_limit;
    body.glyph = Some(glyph.visual);
    body.reset_motion(pos, velocity, angular_vel);

    world.bodies.push(body);
    Some(BodyHandle(world.bodies.len() - 1))
}

fn hits(world: &World, point: Vec2) -> impl Iterator<Item = BodyHandle> + '_ {
    world
        .bodies
        .iter()
        .enumerate()
        .filter(move |(_, b)| !world.torn_down && b.is_dynamic() && b.glyph.is_some() && b.contains_point(point))
        .map(|(idx, _)| BodyHandle(idx))
}

pub(super) fn hit_test(world: &World, point: Vec2) -> Vec<BodyHandle> {
    hits(world, point).collect()
}

pub(super) fn first_hit(world: &World, point: Vec2) -> Option<BodyHandle> {
    hits(world, point).next()
}

pub(super) fn teardown(world: &mut World) {
    if world.torn_down {
        return;
    }
    world.drag = None;
    world.bodies.clear();
    world.aabbs.clear();
    world.pairs.clear();
    world.contacts.clear();
    world.equations.clear();
    world.torn_down = true;
    console_log!("letterdrop: world torn down after {} frames", world.frame);
}
