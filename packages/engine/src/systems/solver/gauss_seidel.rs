use crate::core::math::Vec2;
use crate::systems::rigid_body::RigidBody;

use super::equation::{Equation, Spook};

/// Projected Gauss-Seidel over velocity impulses
pub struct GaussSeidel {
    pub iterations: usize,
    pub tolerance: f32,
    /// Per-body constraint velocity accumulated during a solve
    velocity_deltas: Vec<(Vec2, f32)>,
}

impl GaussSeidel {
    pub fn new(iterations: usize, tolerance: f32) -> Self {
        Self {
            iterations,
            tolerance,
            velocity_deltas: Vec::new(),
        }
    }

    /// Solve `equations` and add the resulting velocities to awake dynamic
    /// bodies. Returns the number of sweeps performed.
    pub fn solve(&mut self, equations: &mut [Equation], bodies: &mut [RigidBody], spook: Spook, h: f32) -> usize {
        if equations.is_empty() {
            return 0;
        }

        self.velocity_deltas.clear();
        self.velocity_deltas.resize(bodies.len(), (Vec2::zero(), 0.0));

        for eq in equations.iter_mut() {
            eq.prepare(bodies, spook, h);
        }

        let tolerance_sq = self.tolerance * self.tolerance;
        let mut sweeps = 0;
        for _ in 0..self.iterations {
            sweeps += 1;
            let mut total = 0.0f32;
            for eq in equations.iter_mut() {
                total += iterate(eq, &mut self.velocity_deltas).abs();
            }
            if total * total <= tolerance_sq {
                break;
            }
        }

        for (body, &(dv, dw)) in bodies.iter_mut().zip(self.velocity_deltas.iter()) {
            if body.is_dynamic() && !body.is_sleeping() {
                body.velocity += dv;
                body.angular_vel += dw;
            }
        }

        sweeps
    }
}

fn iterate(eq: &mut Equation, deltas: &mut [(Vec2, f32)]) -> f32 {
    let j = eq.jacobian;
    let (dva, dwa) = deltas[eq.body_a];
    let (dvb, dwb) = deltas[eq.body_b];

    let gw_lambda = j[0] * dva.x + j[1] * dva.y + j[2] * dwa + j[3] * dvb.x + j[4] * dvb.y + j[5] * dwb;
    let mut delta = eq.inv_c * (eq.rhs - gw_lambda - eq.eps * eq.lambda);

    if eq.lambda + delta < eq.min_impulse {
        delta = eq.min_impulse - eq.lambda;
    } else if eq.lambda + delta > eq.max_impulse {
        delta = eq.max_impulse - eq.lambda;
    }
    eq.lambda += delta;

    let a = &mut deltas[eq.body_a];
    a.0 += Vec2::new(j[0], j[1]) * (eq.inv_mass_a * delta);
    a.1 += eq.inv_inertia_a * j[2] * delta;
    let b = &mut deltas[eq.body_b];
    b.0 += Vec2::new(j[3], j[4]) * (eq.inv_mass_b * delta);
    b.1 += eq.inv_inertia_b * j[5] * delta;

    delta
}
