//! Glyph Catalog
//!
//! Each entry describes one letter of the drop: its mass, the collision box
//! the physics sees, and where the glyph is painted relative to that box.
//! Several letters share dimensions, so the common ones are named once.
//!
//! `spawn` turns an entry into a fresh [`GlyphBody`] value per call. Nothing
//! here is shared or mutated between mounts.

use crate::core::math::Vec2;
use crate::core::random::Rng;

/// Speed below which a glyph starts feeling sleepy
pub const SLEEP_SPEED_LIMIT: f32 = 0.5;
/// Seconds spent sleepy before a glyph falls asleep
pub const SLEEP_TIME_LIMIT: f32 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillTone {
    Dark,
    Light,
}

impl FillTone {
    pub fn css(self) -> &'static str {
        match self {
            FillTone::Dark => "#000",
            FillTone::Light => "#fff",
        }
    }
}

/// One catalog entry
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphSpec {
    pub character: char,
    pub mass: f32,
    /// Text origin relative to the box center, in glyph (pre-scale) units
    pub draw_offset: (f32, f32),
    pub width: f32,
    pub height: f32,
}

const B_OFFSET: (f32, f32) = (-4.0, 3.5);
const B_BOX: (f32, f32) = (1.1, 1.0);
const E_OFFSET: (f32, f32) = (-3.0, 3.5);
const E_BOX: (f32, f32) = (1.2, 1.0);

const fn glyph(character: char, mass: f32, draw_offset: (f32, f32), size: (f32, f32)) -> GlyphSpec {
    GlyphSpec {
        character,
        mass,
        draw_offset,
        width: size.0,
        height: size.1,
    }
}

/// Drop order matters: letters fall in this sequence.
pub const CATALOG: &[GlyphSpec] = &[
    glyph('H', 2.0, (-4.0, 3.5), (1.2, 1.0)),
    glyph('E', 3.0, B_OFFSET, B_BOX),
    glyph('L', 3.0, B_OFFSET, B_BOX),
    glyph('I', 3.0, B_OFFSET, B_BOX),
    glyph('Z', 3.0, E_OFFSET, E_BOX),
    glyph('A', 3.0, E_OFFSET, E_BOX),
    glyph('B', 5.0, (-6.0, 3.8), (1.5, 1.0)),
    glyph('E', 4.0, (-6.0, 3.5), (1.5, 1.0)),
    glyph('T', 1.0, (-2.0, 3.5), (0.4, 1.0)),
    glyph('A', 3.0, E_OFFSET, E_BOX),
    glyph('K', 4.0, B_OFFSET, B_BOX),
    glyph('L', 3.0, E_OFFSET, E_BOX),
    glyph('M', 4.0, (-4.0, 3.5), (1.3, 1.0)),
    glyph('N', 3.0, B_OFFSET, B_BOX),
    glyph('O', 4.0, (-4.0, 3.8), (1.2, 1.0)),
    glyph('P', 3.0, B_OFFSET, B_BOX),
    glyph('Q', 4.0, (-6.0, 3.8), (1.2, 1.0)),
    glyph('R', 3.0, B_OFFSET, B_BOX),
    glyph('S', 3.0, B_OFFSET, B_BOX),
    glyph('T', 3.0, E_OFFSET, E_BOX),
    glyph('U', 3.0, (-6.0, 3.5), (1.5, 1.0)),
    glyph('V', 3.0, (-5.0, 3.5), (1.2, 1.0)),
    glyph('W', 6.0, (-4.0, 3.5), (1.2, 1.0)),
    glyph('X', 3.0, (-4.0, 3.5), (1.2, 1.0)),
    glyph('Y', 3.0, (-6.0, 3.5), (1.5, 1.0)),
    glyph('Z', 3.0, E_OFFSET, E_BOX),
];

/// Visual identity carried by a simulated glyph
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphVisual {
    pub character: char,
    pub draw_offset: Vec2,
    pub tone: FillTone,
}

/// A glyph ready to be inserted into the world
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GlyphBody {
    pub visual: GlyphVisual,
    pub mass: f32,
    pub width: f32,
    pub height: f32,
    pub sleep_speed_limit: f32,
    pub sleep_time_limit: f32,
    pub allow_sleep: bool,
}

/// Build a fresh glyph body from a catalog entry (50/50 dark or light).
pub fn spawn(spec: &GlyphSpec, rng: &mut Rng) -> GlyphBody {
    let tone = if rng.chance(0.5) { FillTone::Light } else { FillTone::Dark };

    GlyphBody {
        visual: GlyphVisual {
            character: spec.character,
            draw_offset: Vec2::new(spec.draw_offset.0, spec.draw_offset.1),
            tone,
        },
        mass: spec.mass,
        width: spec.width,
        height: spec.height,
        sleep_speed_limit: SLEEP_SPEED_LIMIT,
        sleep_time_limit: SLEEP_TIME_LIMIT,
        allow_sleep: true,
    }
}

/// Spawn the whole catalog in drop order
pub fn spawn_all(rng: &mut Rng) -> Vec<GlyphBody> {
    CATALOG.iter().map(|spec| spawn(spec, rng)).collect()
}
