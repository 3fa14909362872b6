//! State shared by every browser callback of one mounted component

use web_sys::HtmlCanvasElement;

use crate::config::ConfigBridge;
use crate::core::math::Vec2;
use crate::core::random::Rng;
use crate::domain::tunables::Tunables;
use crate::input::{self, PointerButton};
use crate::render::{configure_surface, run_frame};
use crate::schedule::DropQueue;
use crate::simulation::{World, WorldConfig};
use crate::view::ViewTransform;

use super::canvas::CanvasSurface;

pub(super) struct Stage {
    pub(super) world: World,
    pub(super) view: ViewTransform,
    pub(super) config: ConfigBridge,
    pub(super) drops: DropQueue,
    rng: Rng,
    surface: CanvasSurface,
}

impl Stage {
    pub(super) fn new(surface: CanvasSurface, viewport: (f32, f32, f32), seed: u32) -> Self {
        let (width, height, dpr) = viewport;
        let view = ViewTransform::for_viewport(width, height, dpr);
        let config = ConfigBridge::new(Tunables::default());
        let mut rng = Rng::new(seed);
        let drops = DropQueue::from_catalog(&mut rng);

        let world = World::new(WorldConfig {
            tunables: config.tunables(),
            floor_height: view.floor_height(),
            ..WorldConfig::default()
        });

        let mut stage = Self {
            world,
            view,
            config,
            drops,
            rng,
            surface,
        };
        configure_surface(&mut stage.surface, &stage.view);
        stage
    }

    pub(super) fn canvas(&self) -> &HtmlCanvasElement {
        self.surface.canvas()
    }

    pub(super) fn frame(&mut self) {
        let tunables = self.config.tunables();
        run_frame(&mut self.surface, &mut self.world, &self.view, &tunables, &mut self.rng);
    }

    /// Returns true while more glyphs are waiting
    pub(super) fn drop_next(&mut self) -> bool {
        self.drops.release_next(&mut self.world, &mut self.rng);
        !self.drops.is_empty()
    }

    pub(super) fn resize(&mut self, viewport: (f32, f32, f32)) {
        if self.world.is_torn_down() {
            return;
        }
        let (width, height, dpr) = viewport;
        self.view = ViewTransform::for_viewport(width, height, dpr);
        configure_surface(&mut self.surface, &self.view);
        self.world.set_floor_height(self.view.floor_height());
        console_log!(
            "letterdrop: viewport {}x{} @{}x, floor at {:.2}",
            width,
            height,
            self.view.dpr,
            self.view.floor_height()
        );
    }

    pub(super) fn press(&mut self, screen: Vec2, button: i16) {
        input::on_press(&mut self.world, &self.view, screen, PointerButton::from_code(button));
    }

    pub(super) fn pointer_move(&mut self, screen: Vec2) {
        input::on_move(&mut self.world, &self.view, screen);
    }

    pub(super) fn release(&mut self) {
        input::on_release(&mut self.world);
    }

    pub(super) fn update_tunables(&mut self, json: &str) -> Result<Tunables, String> {
        let applied = self.config.apply_edit_json(json)?;
        self.world.set_tunables(&applied);
        Ok(applied)
    }

    pub(super) fn teardown(&mut self) {
        self.drops.cancel();
        self.world.teardown();
    }
}
