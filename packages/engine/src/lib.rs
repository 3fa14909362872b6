//! Letterdrop Engine - falling letters on a browser canvas
//!
//! Letters drop one by one onto a floor, tumble, stack and can be dragged
//! around with the pointer. The rigid-body dynamics are built in.
//!
//! Architecture:
//! - core/       - math, RNG, console logging
//! - domain/     - glyph catalog and tunables
//! - systems/    - rigid bodies, collision, constraint solver, sleeping
//! - simulation/ - the World that ties the systems together
//! - view/       - viewport breakpoints and screen ↔ simulation mapping
//! - render/     - frame drawing over an abstract 2D surface
//! - input/      - pointer → drag constraint
//! - config/     - configuration panel bridge
//! - schedule/   - staggered glyph insertion
//! - api/        - browser bindings (wasm-bindgen)

// Logging macros (must be first for macro scope!)
#[macro_use]
pub mod core;
pub mod domain;
pub mod systems;
pub mod simulation;
pub mod view;
pub mod render;
pub mod input;
pub mod config;
pub mod schedule;
pub mod api;

pub use systems::rigid_body;

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    console_log!("letterdrop engine {} initialized", env!("CARGO_PKG_VERSION"));
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Re-export main types
pub use api::wasm::LetterDrop;
pub use config::{ConfigBridge, PanelAvailability, PanelModel};
pub use domain::glyphs::{spawn, GlyphBody, CATALOG};
pub use domain::tunables::Tunables;
pub use simulation::{BodyHandle, World, WorldConfig};
pub use view::ViewTransform;
