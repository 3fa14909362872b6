use wasm_bindgen::prelude::*;
use web_sys::{Document, Window};

use crate::core::math::Vec2;
use crate::view::INITIAL_WIDTH;

pub(super) fn window() -> Result<Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))
}

pub(super) fn document() -> Result<Document, JsValue> {
    window()?
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))
}

/// Current viewport as `(width, height, devicePixelRatio)` in CSS pixels
pub(super) fn viewport() -> Result<(f32, f32, f32), JsValue> {
    let window = window()?;
    let width = window.inner_width()?.as_f64().unwrap_or(INITIAL_WIDTH as f64);
    let height = window.inner_height()?.as_f64().unwrap_or(0.0);
    Ok((width as f32, height as f32, window.device_pixel_ratio() as f32))
}

/// Client coordinates relative to the canvas' top-left corner
pub(super) fn canvas_point(canvas: &web_sys::HtmlCanvasElement, client_x: i32, client_y: i32) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    Vec2::new(
        (client_x as f64 - rect.left()) as f32,
        (client_y as f64 - rect.top()) as f32,
    )
}
