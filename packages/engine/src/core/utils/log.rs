//! Console logging macros
//!
//! On wasm32 these forward to `web_sys::console`. Native builds (unit and
//! integration tests) format the message and drop it, so no JS import is ever
//! touched off the browser.
//!
//! Usage:
//! ```ignore
//! console_log!("mounted {} glyphs", count);
//! console_warn!("rejected tunables: {}", err);
//! ```

macro_rules! console_log {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::log_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}

macro_rules! console_warn {
    ($($arg:tt)*) => {{
        #[cfg(target_arch = "wasm32")]
        {
            web_sys::console::warn_1(&format!($($arg)*).into());
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = format!($($arg)*);
        }
    }};
}
