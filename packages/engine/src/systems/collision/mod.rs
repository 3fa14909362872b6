//! Collision detection
//!
//! Broad-phase: sweep-and-prune along x over world AABBs.
//! Narrow-phase: plane/box corner tests and box/box SAT with incident edge
//! clipping, producing up to two contact points per pair.

mod broad_phase;
mod narrow_phase;

pub use broad_phase::{can_collide, sweep_and_prune};
pub use narrow_phase::{collide, ContactPoint};
