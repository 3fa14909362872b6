//! Viewport → simulation mapping
//!
//! The scene is centered on the canvas and scaled by a negative factor, which
//! flips y so simulation "up" is screen "up". Pointer input goes through
//! `screen_to_simulation`, drawing through the same transform in reverse.

use crate::core::math::Vec2;

/// Width below which the compact scale applies
pub const BREAKPOINT_MD: f32 = 900.0;
/// Width at which DPR is pinned
pub const BREAKPOINT_XL: f32 = 1600.0;
/// Width assumed before the first viewport measurement
pub const INITIAL_WIDTH: f32 = 1600.0;
pub const PINNED_DPR: f32 = 1.5;
pub const COMPACT_SCALE: f32 = -60.0;
pub const WIDE_SCALE: f32 = -90.0;
/// Trailing debounce applied to window resizes
pub const RESIZE_DEBOUNCE_MS: i32 = 1500;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub dpr: f32,
    /// Pixels per simulation unit (signed)
    pub scale: f32,
    /// Canvas size in device pixels
    pub canvas_width: f32,
    pub canvas_height: f32,
}

impl ViewTransform {
    /// Apply the breakpoint policy to a measured viewport
    pub fn for_viewport(width: f32, height: f32, device_dpr: f32) -> Self {
        let device_dpr = if device_dpr.is_finite() && device_dpr > 0.0 { device_dpr } else { 1.0 };
        let dpr = if width >= BREAKPOINT_XL { PINNED_DPR } else { device_dpr };
        let scale = if width < BREAKPOINT_MD { COMPACT_SCALE * dpr } else { WIDE_SCALE * dpr };

        Self {
            dpr,
            scale,
            canvas_width: (width * dpr).max(0.0),
            canvas_height: (height * dpr).max(0.0),
        }
    }

    /// Canvas center in device pixels
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.canvas_width * 0.5, self.canvas_height * 0.5)
    }

    /// CSS-pixel point (relative to the canvas) into simulation space
    pub fn screen_to_simulation(&self, screen: Vec2) -> Vec2 {
        let px = screen * self.dpr - self.center();
        Vec2::new(px.x / self.scale, px.y / self.scale)
    }

    /// Inverse of `screen_to_simulation`
    pub fn simulation_to_screen(&self, sim: Vec2) -> Vec2 {
        let px = sim * self.scale + self.center();
        Vec2::new(px.x / self.dpr, px.y / self.dpr)
    }

    /// Floor surface: the bottom edge of the canvas in simulation space
    pub fn floor_height(&self) -> f32 {
        (self.canvas_height * 0.5) / self.scale
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoints_pick_dpr_and_scale() {
        let narrow = ViewTransform::for_viewport(400.0, 800.0, 3.0);
        assert_eq!(narrow.dpr, 3.0);
        assert_eq!(narrow.scale, -180.0);
        assert_eq!(narrow.canvas_width, 1200.0);

        let medium = ViewTransform::for_viewport(1200.0, 800.0, 2.0);
        assert_eq!(medium.dpr, 2.0);
        assert_eq!(medium.scale, -180.0);

        let wide = ViewTransform::for_viewport(1920.0, 1080.0, 2.0);
        assert_eq!(wide.dpr, 1.5);
        assert_eq!(wide.scale, -135.0);
        assert_eq!(wide.canvas_height, 1620.0);
    }

    #[test]
    fn bad_device_dpr_falls_back_to_one() {
        let view = ViewTransform::for_viewport(800.0, 600.0, f32::NAN);
        assert_eq!(view.dpr, 1.0);
        let view = ViewTransform::for_viewport(800.0, 600.0, 0.0);
        assert_eq!(view.dpr, 1.0);
    }

    #[test]
    fn screen_round_trip_is_identity() {
        let views = [
            ViewTransform::for_viewport(375.0, 812.0, 3.0),
            ViewTransform::for_viewport(1024.0, 768.0, 1.0),
            ViewTransform::for_viewport(2560.0, 1440.0, 2.0),
        ];
        let points = [Vec2::new(0.0, 0.0), Vec2::new(187.5, 406.0), Vec2::new(2000.0, 13.0)];

        for view in views {
            for p in points {
                let back = view.simulation_to_screen(view.screen_to_simulation(p));
                assert!((back - p).length() < 1e-3, "{p:?} -> {back:?}");
            }
        }
    }

    #[test]
    fn screen_center_is_origin_and_y_points_up() {
        let view = ViewTransform::for_viewport(1000.0, 600.0, 1.0);
        let origin = view.screen_to_simulation(Vec2::new(500.0, 300.0));
        assert!(origin.length() < 1e-6);

        let above = view.screen_to_simulation(Vec2::new(500.0, 100.0));
        assert!(above.y > 0.0);
    }

    #[test]
    fn floor_sits_at_canvas_bottom() {
        let view = ViewTransform::for_viewport(1000.0, 900.0, 1.0);
        // 900px tall at -90px/unit: 450px below center
        assert!((view.floor_height() + 5.0).abs() < 1e-6);
        let bottom = view.simulation_to_screen(Vec2::new(0.0, view.floor_height()));
        assert!((bottom.y - 900.0).abs() < 1e-3);
    }
}
