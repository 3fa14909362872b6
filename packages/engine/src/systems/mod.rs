//! Physics systems: bodies, collision detection, constraint solving, sleeping.

pub mod collision;
pub mod rigid_body;
pub mod sleep;
pub mod solver;
