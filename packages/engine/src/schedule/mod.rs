//! Staggered glyph insertion
//!
//! Glyphs drop one at a time, `DROP_DELAY_MS` apart, first one included. The
//! queue only decides what drops next; the browser layer owns the timer.

use std::collections::VecDeque;

use crate::core::random::Rng;
use crate::domain::glyphs::{spawn_all, GlyphBody};
use crate::simulation::{BodyHandle, World};

pub const DROP_DELAY_MS: i32 = 200;

#[derive(Debug, Default)]
pub struct DropQueue {
    pending: VecDeque<GlyphBody>,
}

impl DropQueue {
    pub fn new(glyphs: Vec<GlyphBody>) -> Self {
        Self { pending: glyphs.into() }
    }

    /// Fresh glyph bodies for the whole catalog, in drop order
    pub fn from_catalog(rng: &mut Rng) -> Self {
        Self::new(spawn_all(rng))
    }

    pub fn remaining(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Drop the next glyph into `world`. A torn-down world cancels the rest
    /// of the queue.
    pub fn release_next(&mut self, world: &mut World, rng: &mut Rng) -> Option<BodyHandle> {
        if world.is_torn_down() {
            self.cancel();
            return None;
        }
        let glyph = self.pending.pop_front()?;
        world.add_body(glyph, rng)
    }

    pub fn cancel(&mut self) {
        self.pending.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::glyphs::CATALOG;
    use crate::simulation::WorldConfig;

    #[test]
    fn releases_in_catalog_order() {
        let mut rng = Rng::new(21);
        let mut queue = DropQueue::from_catalog(&mut rng);
        let mut world = World::new(WorldConfig::default());
        assert_eq!(queue.remaining(), CATALOG.len());

        let mut dropped = String::new();
        while let Some(handle) = queue.release_next(&mut world, &mut rng) {
            let body = world.body(handle).unwrap();
            dropped.push(body.glyph.unwrap().character);
        }
        assert_eq!(dropped, "HELIZABETAKLMNOPQRSTUVWXYZ");
        assert!(queue.is_empty());
        assert_eq!(world.glyph_count(), CATALOG.len());
    }

    #[test]
    fn teardown_cancels_pending_drops() {
        let mut rng = Rng::new(21);
        let mut queue = DropQueue::from_catalog(&mut rng);
        let mut world = World::new(WorldConfig::default());

        queue.release_next(&mut world, &mut rng);
        queue.release_next(&mut world, &mut rng);
        world.teardown();

        assert!(queue.release_next(&mut world, &mut rng).is_none());
        assert!(queue.is_empty());
        assert_eq!(world.body_count(), 0);
    }
}
