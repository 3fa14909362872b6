use crate::core::math::Vec2;
use crate::systems::rigid_body::RigidBody;

/// SPOOK regularization terms for one step
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spook {
    pub a: f32,
    pub b: f32,
    pub eps: f32,
}

impl Spook {
    pub fn new(stiffness: f32, relaxation: f32, h: f32) -> Self {
        let d = 1.0 + 4.0 * relaxation;
        Self {
            a: 4.0 / (h * d),
            b: 4.0 * relaxation / d,
            eps: 4.0 / (h * h * stiffness * d),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Equation {
    pub body_a: usize,
    pub body_b: usize,
    /// [a.x, a.y, a.rot, b.x, b.y, b.rot]
    pub jacobian: [f32; 6],
    /// Position-level violation (0 for friction)
    pub offset: f32,
    pub min_force: f32,
    pub max_force: f32,

    // === Per-solve scratch ===
    pub(super) rhs: f32,
    pub(super) inv_c: f32,
    pub(super) eps: f32,
    pub(super) lambda: f32,
    pub(super) min_impulse: f32,
    pub(super) max_impulse: f32,
    pub(super) inv_mass_a: f32,
    pub(super) inv_inertia_a: f32,
    pub(super) inv_mass_b: f32,
    pub(super) inv_inertia_b: f32,
}

impl Equation {
    fn new(body_a: usize, body_b: usize, jacobian: [f32; 6], offset: f32, min_force: f32, max_force: f32) -> Self {
        Self {
            body_a,
            body_b,
            jacobian,
            offset,
            min_force,
            max_force,
            rhs: 0.0,
            inv_c: 0.0,
            eps: 0.0,
            lambda: 0.0,
            min_impulse: 0.0,
            max_impulse: 0.0,
            inv_mass_a: 0.0,
            inv_inertia_a: 0.0,
            inv_mass_b: 0.0,
            inv_inertia_b: 0.0,
        }
    }

    fn along(body_a: usize, body_b: usize, dir: Vec2, ra: Vec2, rb: Vec2, offset: f32, min_force: f32, max_force: f32) -> Self {
        Self::new(
            body_a,
            body_b,
            [-dir.x, -dir.y, -ra.cross(dir), dir.x, dir.y, rb.cross(dir)],
            offset,
            min_force,
            max_force,
        )
    }

    /// Non-penetration along `normal` (A toward B); pushes only
    pub fn contact(body_a: usize, body_b: usize, normal: Vec2, ra: Vec2, rb: Vec2, depth: f32) -> Self {
        Self::along(body_a, body_b, normal, ra, rb, depth, 0.0, f32::MAX)
    }

    /// Tangential friction bounded by `slip_force` either way
    pub fn friction(body_a: usize, body_b: usize, normal: Vec2, ra: Vec2, rb: Vec2, slip_force: f32) -> Self {
        Self::along(body_a, body_b, normal.perp(), ra, rb, 0.0, -slip_force, slip_force)
    }

    /// Keep `A + ra` and `B + rb` together along `axis`
    pub fn point_to_point(body_a: usize, body_b: usize, axis: Vec2, ra: Vec2, rb: Vec2, violation: f32) -> Self {
        Self::along(body_a, body_b, axis, ra, rb, violation, -f32::MAX, f32::MAX)
    }

    /// Compute the right-hand side and effective mass for this step
    pub(super) fn prepare(&mut self, bodies: &[RigidBody], spook: Spook, h: f32) {
        let a = &bodies[self.body_a];
        let b = &bodies[self.body_b];
        let j = &self.jacobian;

        self.inv_mass_a = a.solver_inv_mass();
        self.inv_inertia_a = a.solver_inv_inertia();
        self.inv_mass_b = b.solver_inv_mass();
        self.inv_inertia_b = b.solver_inv_inertia();

        let gw = j[0] * a.velocity.x + j[1] * a.velocity.y + j[2] * a.angular_vel
            + j[3] * b.velocity.x + j[4] * b.velocity.y + j[5] * b.angular_vel;

        let gimf = self.inv_mass_a * (j[0] * a.force.x + j[1] * a.force.y)
            + self.inv_inertia_a * j[2] * a.torque
            + self.inv_mass_b * (j[3] * b.force.x + j[4] * b.force.y)
            + self.inv_inertia_b * j[5] * b.torque;

        let gimgt = self.inv_mass_a * (j[0] * j[0] + j[1] * j[1])
            + self.inv_inertia_a * j[2] * j[2]
            + self.inv_mass_b * (j[3] * j[3] + j[4] * j[4])
            + self.inv_inertia_b * j[5] * j[5];

        self.rhs = -self.offset * spook.a - gw * spook.b - gimf * h;
        self.eps = spook.eps;
        self.inv_c = 1.0 / (gimgt + spook.eps);
        self.lambda = 0.0;
        self.min_impulse = self.min_force * h;
        self.max_impulse = self.max_force * h;
    }

    /// Accumulated impulse from the last solve
    pub fn impulse(&self) -> f32 {
        self.lambda
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spook_terms_follow_relaxation() {
        let h = 1.0 / 45.0;
        let spook = Spook::new(900.0, 4.0, h);
        assert!((spook.a - 4.0 / (h * 17.0)).abs() < 1e-3);
        assert!((spook.b - 16.0 / 17.0).abs() < 1e-6);
        assert!((spook.eps - 4.0 / (h * h * 900.0 * 17.0)).abs() < 1e-4);
    }

    #[test]
    fn contact_jacobian_is_equal_and_opposite() {
        let eq = Equation::contact(0, 1, Vec2::new(0.0, 1.0), Vec2::zero(), Vec2::new(0.5, -0.5), -0.1);
        assert_eq!(eq.jacobian[1], -1.0);
        assert_eq!(eq.jacobian[4], 1.0);
        assert!((eq.jacobian[5] - 0.5).abs() < 1e-6);
        assert_eq!(eq.min_force, 0.0);
    }

    #[test]
    fn infinite_bounds_survive_prepare() {
        let bodies = vec![
            RigidBody::new_kinematic(Vec2::zero()),
            RigidBody::new_box(Vec2::zero(), 1.0, 1.0, 1.0),
        ];
        let mut eq = Equation::point_to_point(0, 1, Vec2::new(1.0, 0.0), Vec2::zero(), Vec2::zero(), 0.0);
        eq.prepare(&bodies, Spook::new(900.0, 4.0, 1.0 / 45.0), 1.0 / 45.0);
        assert!(eq.max_impulse.is_finite());
        assert!(eq.min_impulse < -1e30);
    }
}
