//! RigidBody - A solid body that moves as a unit
//!
//! The body stores its shape in local coordinates (centered on the body
//! origin) and maps points to world space through position and rotation.

mod body;
mod shape;

pub use body::{BodyKind, RigidBody, SleepState};
pub use shape::{Aabb, Shape};
