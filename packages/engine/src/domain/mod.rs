//! Domain data: the glyph catalog and the user-facing tunables.

pub mod glyphs;
pub mod tunables;
