//! Pointer input → drag constraint
//!
//! Screen points arrive in CSS pixels relative to the canvas. They are mapped
//! through the current `ViewTransform` so the grabbed glyph tracks the pointer
//! exactly.

use crate::core::math::Vec2;
use crate::simulation::World;
use crate::view::ViewTransform;

/// `MouseEvent.button` classified for drag purposes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Auxiliary,
    Other(i16),
}

impl PointerButton {
    pub fn from_code(code: i16) -> Self {
        match code {
            0 => PointerButton::Primary,
            1 => PointerButton::Auxiliary,
            other => PointerButton::Other(other),
        }
    }

    /// Secondary, back and forward buttons never grab
    pub fn starts_drag(self) -> bool {
        matches!(self, PointerButton::Primary | PointerButton::Auxiliary)
    }
}

/// Start a drag on the first glyph under `screen`. Returns true when a drag
/// began.
pub fn on_press(world: &mut World, view: &ViewTransform, screen: Vec2, button: PointerButton) -> bool {
    if !button.starts_drag() || world.has_drag() || world.is_torn_down() {
        return false;
    }

    let point = view.screen_to_simulation(screen);
    let Some(target) = world.first_hit(point) else {
        return false;
    };

    world.set_pointer_position(point);
    world.begin_drag(target, point)
}

/// Track the pointer whether or not a drag is active
pub fn on_move(world: &mut World, view: &ViewTransform, screen: Vec2) {
    world.set_pointer_position(view.screen_to_simulation(screen));
}

pub fn on_release(world: &mut World) -> bool {
    world.end_drag()
}
