use crate::core::math::Vec2;
use crate::domain::glyphs::CATALOG;
use crate::systems::rigid_body::RigidBody;
use crate::systems::solver::GaussSeidel;

use super::{BodyHandle, World, WorldConfig};

pub(super) fn create_world(config: &WorldConfig) -> World {
    let mut bodies = Vec::with_capacity(CATALOG.len() + 2);
    bodies.push(RigidBody::new_plane(Vec2::new(0.0, config.floor_height)));
    bodies.push(RigidBody::new_kinematic(Vec2::zero()));

    let tunables = config.tunables.clamped();

    World {
        bodies,
        floor: BodyHandle(0),
        pointer: BodyHandle(1),
        drag: None,

        gravity: Vec2::new(0.0, tunables.gravity),
        stiffness: tunables.stiffness,
        relaxation: tunables.relaxation,
        material: config.material,
        solver: GaussSeidel::new(config.solver.iterations, config.solver.tolerance),

        aabbs: Vec::with_capacity(CATALOG.len() + 2),
        pairs: Vec::with_capacity(64),
        contacts: Vec::with_capacity(128),
        equations: Vec::with_capacity(256),

        torn_down: false,
        frame: 0,
    }
}
