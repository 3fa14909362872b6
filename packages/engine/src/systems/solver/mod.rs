//! Velocity-level constraint solver
//!
//! Every contact, friction and drag relation becomes an [`Equation`] with a
//! 6-wide Jacobian. Softness comes from SPOOK: `stiffness` and `relaxation`
//! map to the `a`, `b` and `eps` terms, so low stiffness or high relaxation
//! gives a squishier, more damped response.

mod equation;
mod gauss_seidel;

pub use equation::{Equation, Spook};
pub use gauss_seidel::GaussSeidel;
