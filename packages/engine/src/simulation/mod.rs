//! World - the letter simulation
//!
//! Owns every rigid body (glyphs, the floor plane, the pointer proxy) and the
//! optional drag constraint. Advances in fixed steps; the render loop is the
//! only caller of `step`.
//!
//! - init/      - construction and tunable application
//! - commands/  - inserting glyphs, hit testing, teardown
//! - drag/      - pointer proxy and the drag constraint
//! - rigid/     - soft reset of stray glyphs
//! - step/      - the fixed-step pipeline
//!
//! After `teardown` every mutating call is a silent no-op: staggered
//! insertions and input callbacks may still arrive once the component is gone.

use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::glyphs::GlyphBody;
use crate::domain::tunables::{ContactMaterial, SolverSettings, Tunables};
use crate::systems::rigid_body::{Aabb, RigidBody};
use crate::systems::collision::ContactPoint;
use crate::systems::solver::{Equation, GaussSeidel};

#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "drag/drag.rs"]
mod drag;
#[path = "rigid/rigid.rs"]
mod rigid;
#[path = "step/step.rs"]
mod step;

/// Nominal step, independent of the display refresh rate
pub const TIME_STEP: f32 = 1.0 / 45.0;

/// Deepest a glyph corner may rest below the floor surface
pub const FLOOR_SLOP: f32 = 0.05;

// === Spawn / soft reset policy ===
pub const SPAWN_HEIGHT: f32 = 8.0;
pub const SPAWN_X_RANGE: f32 = 4.0;
pub const SPAWN_SPIN_RANGE: f32 = 4.0;
pub const STRAY_BOUND_X: f32 = 10.0;
pub const RESET_HEIGHT: f32 = 10.0;
pub const RESET_X_RANGE: f32 = 5.0;
pub const RESET_VX_RANGE: f32 = 2.0;
pub const RESET_VY_MAX: f32 = 2.0;
pub const RESET_SPIN_RANGE: f32 = 5.0;

/// Index of a body inside its world
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BodyHandle(pub usize);

/// Pins the pointer proxy to a point on a glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragConstraint {
    pub proxy: BodyHandle,
    pub target: BodyHandle,
    /// Grab point in the target's local frame
    pub local_pivot: Vec2,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WorldConfig {
    pub tunables: Tunables,
    pub solver: SolverSettings,
    pub material: ContactMaterial,
    /// Floor surface height in simulation space
    pub floor_height: f32,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tunables: Tunables::default(),
            solver: SolverSettings::default(),
            material: ContactMaterial::default(),
            floor_height: 0.0,
        }
    }
}

pub struct World {
    bodies: Vec<RigidBody>,
    floor: BodyHandle,
    pointer: BodyHandle,
    drag: Option<DragConstraint>,

    // Settings
    gravity: Vec2,
    stiffness: f32,
    relaxation: f32,
    material: ContactMaterial,
    solver: GaussSeidel,

    // Per-step scratch, reused between steps
    aabbs: Vec<(usize, Aabb)>,
    pairs: Vec<(usize, usize)>,
    contacts: Vec<ContactPoint>,
    equations: Vec<Equation>,

    // State
    torn_down: bool,
    frame: u64,
}

impl World {
    /// Build the floor and pointer proxy and apply the tunables
    pub fn new(config: WorldConfig) -> Self {
        init::create_world(&config)
    }

    pub fn frame(&self) -> u64 { self.frame }

    pub fn is_torn_down(&self) -> bool { self.torn_down }

    /// All bodies, floor and proxy included
    pub fn body_count(&self) -> usize { self.bodies.len() }

    pub fn glyph_count(&self) -> usize {
        self.glyphs().count()
    }

    pub fn body(&self, handle: BodyHandle) -> Option<&RigidBody> {
        self.bodies.get(handle.0)
    }

    /// Glyph bodies in insertion order
    pub fn glyphs(&self) -> impl Iterator<Item = (BodyHandle, &RigidBody)> + '_ {
        self.bodies
            .iter()
            .enumerate()
            .filter(|(_, b)| b.glyph.is_some())
            .map(|(idx, b)| (BodyHandle(idx), b))
    }

    pub fn floor_height(&self) -> Option<f32> {
        self.bodies.get(self.floor.0).map(|b| b.pos.y)
    }

    pub fn gravity(&self) -> Vec2 { self.gravity }

    pub fn stiffness(&self) -> f32 { self.stiffness }

    pub fn relaxation(&self) -> f32 { self.relaxation }

    // === SETTINGS ===

    /// Re-apply gravity, stiffness and relaxation; takes effect next step
    pub fn set_tunables(&mut self, tunables: &Tunables) {
        settings::set_tunables(self, tunables);
    }

    /// Move the floor (viewport resized) and wake everything resting on it
    pub fn set_floor_height(&mut self, y: f32) {
        settings::set_floor_height(self, y);
    }

    pub fn wake_all(&mut self) {
        settings::wake_all(self);
    }

    // === GLYPHS ===

    /// Insert a glyph above the visible top with a random x and spin
    pub fn add_body(&mut self, glyph: GlyphBody, rng: &mut Rng) -> Option<BodyHandle> {
        commands::add_body(self, glyph, rng)
    }

    /// Insert a glyph with an explicit pose and motion
    pub fn add_body_with_motion(
        &mut self,
        glyph: GlyphBody,
        pos: Vec2,
        velocity: Vec2,
        angular_vel: f32,
    ) -> Option<BodyHandle> {
        commands::add_body_with_motion(self, glyph, pos, velocity, angular_vel)
    }

    /// Glyph bodies whose collision box contains `point`
    pub fn hit_test(&self, point: Vec2) -> Vec<BodyHandle> {
        commands::hit_test(self, point)
    }

    /// First glyph in insertion order under `point`
    pub fn first_hit(&self, point: Vec2) -> Option<BodyHandle> {
        commands::first_hit(self, point)
    }

    /// Soft reset for a glyph that drifted past the horizontal bound.
    /// Returns true when the glyph was moved.
    pub fn respawn_if_stray(&mut self, handle: BodyHandle, rng: &mut Rng) -> bool {
        rigid::respawn_if_stray(self, handle, rng)
    }

    /// Remove all bodies and constraints. Terminal.
    pub fn teardown(&mut self) {
        commands::teardown(self);
    }

    // === POINTER ===

    pub fn set_pointer_position(&mut self, point: Vec2) {
        drag::set_pointer_position(self, point);
    }

    pub fn pointer_position(&self) -> Option<Vec2> {
        self.bodies.get(self.pointer.0).map(|b| b.pos)
    }

    /// Pin the pointer proxy to `target` at `pivot` (simulation space).
    /// Fails if a drag is already active.
    pub fn begin_drag(&mut self, target: BodyHandle, pivot: Vec2) -> bool {
        drag::begin_drag(self, target, pivot)
    }

    /// Drop the active drag. Returns false when there was none.
    pub fn end_drag(&mut self) -> bool {
        drag::end_drag(self)
    }

    pub fn drag(&self) -> Option<&DragConstraint> {
        self.drag.as_ref()
    }

    pub fn has_drag(&self) -> bool {
        self.drag.is_some()
    }

    // === STEP ===

    /// Advance by one fixed step of `dt` seconds
    pub fn step(&mut self, dt: f32) {
        step::step(self, dt);
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
