//! Frame rendering
//!
//! `draw_frame` paints the world through the `DrawingSurface` trait, which the
//! browser layer implements on a 2D canvas context. All drawing happens in
//! simulation space: the surface is translated to the canvas center and scaled
//! by the view's signed scale once per frame.

use std::f32::consts::PI;

use crate::core::random::Rng;
use crate::domain::glyphs::GlyphVisual;
use crate::domain::tunables::Tunables;
use crate::simulation::{BodyHandle, World, TIME_STEP};
use crate::systems::rigid_body::Shape;
use crate::view::ViewTransform;

/// Glyph text is scaled down to fit its hitbox
pub const GLYPH_SCALE: f32 = 0.15;
pub const LINE_WIDTH: f32 = 0.03;
pub const FONT: &str = "10px Rubik Mono One";
pub const HITBOX_STROKE: &str = "blue";

/// The subset of a 2D immediate-mode context the renderer needs
pub trait DrawingSurface {
    /// Resize the backing store, in device pixels
    fn resize(&mut self, width: f32, height: f32);
    fn clear_rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn save(&mut self);
    fn restore(&mut self);
    fn translate(&mut self, x: f32, y: f32);
    fn rotate(&mut self, angle: f32);
    fn scale(&mut self, x: f32, y: f32);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn rect(&mut self, x: f32, y: f32, width: f32, height: f32);
    fn stroke(&mut self);
    fn fill_text(&mut self, text: &str, x: f32, y: f32);
    fn set_fill_style(&mut self, css: &str);
    fn set_stroke_style(&mut self, css: &str);
    fn set_line_width(&mut self, width: f32);
    fn set_font(&mut self, font: &str);
}

/// Size the surface for `view` and reset the pen. Resizing a canvas clears
/// its context state, so this runs after every viewport change.
pub fn configure_surface<S: DrawingSurface + ?Sized>(surface: &mut S, view: &ViewTransform) {
    surface.resize(view.canvas_width, view.canvas_height);
    surface.set_line_width(LINE_WIDTH);
    surface.set_font(FONT);
}

/// Paint one frame. Glyphs past the horizontal bound are soft reset and
/// skipped until the next frame.
pub fn draw_frame<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    world: &mut World,
    view: &ViewTransform,
    tunables: &Tunables,
    rng: &mut Rng,
) {
    if world.is_torn_down() {
        return;
    }

    let (w, h) = (view.canvas_width, view.canvas_height);
    surface.clear_rect(0.0, 0.0, w, h);

    surface.save();
    surface.translate(w * 0.5, h * 0.5);
    surface.scale(view.scale, view.scale);
    surface.begin_path();

    for idx in 0..world.body_count() {
        let handle = BodyHandle(idx);
        if world.respawn_if_stray(handle, rng) {
            continue;
        }
        let Some(body) = world.body(handle) else {
            continue;
        };
        let Some(visual) = body.glyph else {
            continue;
        };

        surface.save();
        surface.translate(body.pos.x, body.pos.y);
        surface.rotate(body.angle);

        if tunables.show_hitboxes {
            if let Some(Shape::Box { width, height }) = body.shape {
                surface.rect(-width * 0.5, -height * 0.5, width, height);
            }
        }

        draw_glyph(surface, &visual);
        surface.restore();
    }

    if let Some(y) = world.floor_height() {
        surface.move_to(-w, y);
        surface.line_to(w, y);
    }

    if tunables.show_hitboxes {
        surface.set_stroke_style(HITBOX_STROKE);
        surface.stroke();
    }

    surface.restore();
}

fn draw_glyph<S: DrawingSurface + ?Sized>(surface: &mut S, visual: &GlyphVisual) {
    let mut buf = [0u8; 4];
    surface.set_fill_style(visual.tone.css());
    surface.scale(GLYPH_SCALE, GLYPH_SCALE);
    // the scene scale flips y; turn the text back upright
    surface.rotate(PI);
    surface.fill_text(visual.character.encode_utf8(&mut buf), visual.draw_offset.x, visual.draw_offset.y);
}

/// One animation frame: a fixed step, then the draw
pub fn run_frame<S: DrawingSurface + ?Sized>(
    surface: &mut S,
    world: &mut World,
    view: &ViewTransform,
    tunables: &Tunables,
    rng: &mut Rng,
) {
    world.step(TIME_STEP);
    draw_frame(surface, world, view, tunables, rng);
}

#[cfg(test)]
#[path = "tests.rs"]
mod tests;
