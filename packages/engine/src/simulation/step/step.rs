use crate::core::math::Vec2;
use crate::systems::collision::{collide, sweep_and_prune};
use crate::systems::sleep::{sleep_tick, wakes_on_contact};
use crate::systems::solver::{Equation, Spook};

use super::{World, FLOOR_SLOP};

/// gravity → damping → contacts → wake → equations → solve → integrate →
/// floor correction → sleep
pub(super) fn step(world: &mut World, dt: f32) {
    if world.torn_down || !(dt > 0.0) {
        return;
    }

    apply_forces(world, dt);
    detect_contacts(world);
    wake_touched(world);
    build_equations(world);

    let spook = Spook::new(world.stiffness, world.relaxation, dt);
    world.solver.solve(&mut world.equations, &mut world.bodies, spook, dt);

    integrate(world, dt);

    world.frame += 1;
}

fn apply_forces(world: &mut World, dt: f32) {
    let gravity = world.gravity;
    for body in world.bodies.iter_mut() {
        if body.is_dynamic() && !body.is_sleeping() {
            let weight = gravity * body.mass;
            body.apply_force(weight);
            body.apply_damping(dt);
        }
    }
}

fn detect_contacts(world: &mut World) {
    sweep_and_prune(&world.bodies, &mut world.aabbs, &mut world.pairs);

    world.contacts.clear();
    for &(ia, ib) in &world.pairs {
        collide(ia, &world.bodies[ia], ib, &world.bodies[ib], &mut world.contacts);
    }
}

/// A fast awake body wakes the sleeping glyph it touches
fn wake_touched(world: &mut World) {
    for c in &world.contacts {
        let (a, b) = (&world.bodies[c.body_a], &world.bodies[c.body_b]);
        let wake_b = b.is_sleeping() && wakes_on_contact(a);
        let wake_a = a.is_sleeping() && wakes_on_contact(b);
        if wake_b {
            world.bodies[c.body_b].wake_up();
        }
        if wake_a {
            world.bodies[c.body_a].wake_up();
        }
    }
}

fn build_equations(world: &mut World) {
    world.equations.clear();
    let gravity = world.gravity.length();
    let friction = world.material.friction;

    for c in &world.contacts {
        world
            .equations
            .push(Equation::contact(c.body_a, c.body_b, c.normal, c.ra, c.rb, c.depth));

        if friction > 0.0 {
            let inv_mass_sum = world.bodies[c.body_a].inv_mass + world.bodies[c.body_b].inv_mass;
            let reduced_mass = if inv_mass_sum > 0.0 { 1.0 / inv_mass_sum } else { 0.0 };
            let slip_force = friction * gravity * reduced_mass;
            world
                .equations
                .push(Equation::friction(c.body_a, c.body_b, c.normal, c.ra, c.rb, slip_force));
        }
    }

    super::drag::push_drag_equations(world);
}

/// Integrate, then hold every awake glyph within `FLOOR_SLOP` of the floor
/// surface
fn integrate(world: &mut World, dt: f32) {
    let floor = world
        .bodies
        .get(world.floor.0)
        .map(|f| (f.pos, Vec2::new(0.0, 1.0).rotate(f.angle)));

    for body in world.bodies.iter_mut() {
        if body.is_dynamic() && !body.is_sleeping() {
            body.integrate(dt);
            if let Some((origin, normal)) = floor {
                body.push_out_of_plane(origin, normal, FLOOR_SLOP);
            }
        }
        body.clear_forces();
        sleep_tick(body, dt);
    }
}
