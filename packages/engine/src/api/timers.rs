use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::window;

/// One-shot `setTimeout`; the closure is freed by JS after it runs
pub(super) fn set_timeout(callback: impl FnOnce() + 'static, delay_ms: i32) -> Result<i32, JsValue> {
    let callback = Closure::once_into_js(callback);
    window()?.set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), delay_ms)
}

pub(super) fn clear_timeout(id: i32) {
    if let Ok(window) = window() {
        window.clear_timeout_with_handle(id);
    }
}
