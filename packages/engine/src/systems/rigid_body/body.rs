use crate::core::math::Vec2;
use crate::domain::glyphs::GlyphVisual;

use super::shape::{Aabb, Shape};

const DEFAULT_DAMPING: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyKind {
    /// Integrated, responds to forces and contacts
    Dynamic,
    /// Never moves (the floor)
    Static,
    /// Moved by assignment only (the pointer proxy)
    Kinematic,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SleepState {
    Awake,
    Sleepy,
    Sleeping,
}

/// Rigid Body - moves as a single unit
#[derive(Clone, Debug)]
pub struct RigidBody {
    // === Physics State ===
    /// World position (center of mass)
    pub pos: Vec2,
    /// Velocity (units per second)
    pub velocity: Vec2,
    /// Rotation angle (radians)
    pub angle: f32,
    /// Angular velocity (radians per second)
    pub angular_vel: f32,
    /// Force accumulated for the current step
    pub force: Vec2,
    pub torque: f32,

    // === Mass ===
    pub mass: f32,
    pub inv_mass: f32,
    pub moment_of_inertia: f32,
    pub inv_inertia: f32,

    pub kind: BodyKind,
    pub shape: Option<Shape>,

    /// Fraction of velocity lost per second
    pub damping: f32,
    pub angular_damping: f32,

    // === Sleeping ===
    pub allow_sleep: bool,
    pub sleep_state: SleepState,
    pub sleep_speed_limit: f32,
    pub sleep_time_limit: f32,
    pub idle_time: f32,

    /// Present on glyph bodies only
    pub glyph: Option<GlyphVisual>,
}

impl RigidBody {
    fn base(kind: BodyKind, pos: Vec2, shape: Option<Shape>, mass: f32) -> Self {
        let (inv_mass, moment_of_inertia) = match (kind, shape) {
            (BodyKind::Dynamic, Some(shape)) if mass > 0.0 => {
                (1.0 / mass, shape.moment_of_inertia(mass))
            }
            _ => (0.0, 0.0),
        };
        let inv_inertia = if moment_of_inertia > 0.0 { 1.0 / moment_of_inertia } else { 0.0 };

        Self {
            pos,
            velocity: Vec2::zero(),
            angle: 0.0,
            angular_vel: 0.0,
            force: Vec2::zero(),
            torque: 0.0,
            mass,
            inv_mass,
            moment_of_inertia,
            inv_inertia,
            kind,
            shape,
            damping: DEFAULT_DAMPING,
            angular_damping: DEFAULT_DAMPING,
            allow_sleep: false,
            sleep_state: SleepState::Awake,
            sleep_speed_limit: 0.2,
            sleep_time_limit: 1.0,
            idle_time: 0.0,
            glyph: None,
        }
    }

    /// Create a dynamic rectangular body
    pub fn new_box(pos: Vec2, mass: f32, width: f32, height: f32) -> Self {
        Self::base(BodyKind::Dynamic, pos, Some(Shape::Box { width, height }), mass)
    }

    /// Create a static floor plane whose surface sits at `pos`
    pub fn new_plane(pos: Vec2) -> Self {
        Self::base(BodyKind::Static, pos, Some(Shape::Plane), 0.0)
    }

    /// Create a shapeless kinematic body
    pub fn new_kinematic(pos: Vec2) -> Self {
        Self::base(BodyKind::Kinematic, pos, None, 0.0)
    }

    #[inline]
    pub fn is_dynamic(&self) -> bool {
        self.kind == BodyKind::Dynamic
    }

    #[inline]
    pub fn is_sleeping(&self) -> bool {
        self.sleep_state == SleepState::Sleeping
    }

    /// Inverse mass as seen by the solver: sleeping and non-dynamic bodies
    /// behave as immovable.
    #[inline]
    pub fn solver_inv_mass(&self) -> f32 {
        if self.is_dynamic() && !self.is_sleeping() { self.inv_mass } else { 0.0 }
    }

    #[inline]
    pub fn solver_inv_inertia(&self) -> f32 {
        if self.is_dynamic() && !self.is_sleeping() { self.inv_inertia } else { 0.0 }
    }

    pub fn speed_squared(&self) -> f32 {
        self.velocity.length_squared() + self.angular_vel * self.angular_vel
    }

    /// Transform a local point to world coordinates
    #[inline]
    pub fn local_to_world(&self, local: Vec2) -> Vec2 {
        self.pos + local.rotate(self.angle)
    }

    /// Transform a world point to local coordinates
    #[inline]
    pub fn world_to_local(&self, world: Vec2) -> Vec2 {
        (world - self.pos).rotate(-self.angle)
    }

    /// Point test against the body's shape
    pub fn contains_point(&self, world: Vec2) -> bool {
        match self.shape {
            Some(shape) => shape.contains_local(self.world_to_local(world)),
            None => false,
        }
    }

    /// Signed distance of the deepest box corner from a plane surface
    /// through `origin` (negative = below).
    pub fn lowest_corner_along(&self, origin: Vec2, normal: Vec2) -> Option<f32> {
        let half = self.shape?.half_extents()?;
        [(-1.0, -1.0), (1.0, -1.0), (1.0, 1.0), (-1.0, 1.0)]
            .into_iter()
            .map(|(sx, sy)| (self.local_to_world(Vec2::new(sx * half.x, sy * half.y)) - origin).dot(normal))
            .reduce(f32::min)
    }

    /// Lift the body until no corner lies more than `slop` below the plane,
    /// dropping any velocity into it. Returns true when the body moved.
    pub fn push_out_of_plane(&mut self, origin: Vec2, normal: Vec2, slop: f32) -> bool {
        let Some(depth) = self.lowest_corner_along(origin, normal) else {
            return false;
        };
        if depth >= -slop {
            return false;
        }
        self.pos += normal * (-depth - slop);
        let into = self.velocity.dot(normal);
        if into < 0.0 {
            self.velocity += normal * -into;
        }
        true
    }

    /// Planes span the whole x axis and everything below their surface.
    pub fn aabb(&self) -> Option<Aabb> {
        match self.shape? {
            Shape::Box { width, height } => {
                let (sin, cos) = self.angle.sin_cos();
                let hx = 0.5 * (width * cos.abs() + height * sin.abs());
                let hy = 0.5 * (width * sin.abs() + height * cos.abs());
                Some(Aabb {
                    min: Vec2::new(self.pos.x - hx, self.pos.y - hy),
                    max: Vec2::new(self.pos.x + hx, self.pos.y + hy),
                })
            }
            Shape::Plane => Some(Aabb {
                min: Vec2::new(f32::NEG_INFINITY, f32::NEG_INFINITY),
                max: Vec2::new(f32::INFINITY, self.pos.y),
            }),
        }
    }

    /// Apply force for one step
    pub fn apply_force(&mut self, force: Vec2) {
        self.force += force;
    }

    pub fn apply_damping(&mut self, dt: f32) {
        self.velocity = self.velocity * (1.0 - self.damping).powf(dt);
        self.angular_vel *= (1.0 - self.angular_damping).powf(dt);
    }

    /// Semi-implicit Euler: forces into velocity, velocity into pose
    pub fn integrate(&mut self, dt: f32) {
        self.velocity += self.force * (self.inv_mass * dt);
        self.angular_vel += self.torque * self.inv_inertia * dt;
        self.pos += self.velocity * dt;
        self.angle += self.angular_vel * dt;
    }

    pub fn clear_forces(&mut self) {
        self.force = Vec2::zero();
        self.torque = 0.0;
    }

    pub fn wake_up(&mut self) {
        self.sleep_state = SleepState::Awake;
        self.idle_time = 0.0;
    }

    pub fn sleep(&mut self) {
        self.sleep_state = SleepState::Sleeping;
        self.velocity = Vec2::zero();
        self.angular_vel = 0.0;
        self.clear_forces();
    }

    /// Teleport with fresh velocities; the current angle is kept
    pub fn reset_motion(&mut self, pos: Vec2, velocity: Vec2, angular_vel: f32) {
        self.pos = pos;
        self.velocity = velocity;
        self.angular_vel = angular_vel;
        self.clear_forces();
        self.wake_up();
    }
}
