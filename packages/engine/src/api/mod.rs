//! Browser bindings
//!
//! Everything that touches `web_sys` lives here. The rest of the crate is
//! plain Rust and runs under native `cargo test`.

mod animation;
mod canvas;
mod dom;
mod listeners;
mod stage;
mod timers;
pub mod wasm;

pub use canvas::CanvasSurface;
