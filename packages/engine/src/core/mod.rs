//! Core building blocks shared by every layer: console logging, vector math
//! and the deterministic RNG.

#[macro_use]
pub mod utils;
pub mod math;
pub mod random;
