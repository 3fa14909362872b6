use std::cell::{Cell, RefCell};
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use super::dom::window;

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// `requestAnimationFrame` chain. Running until `stop` or drop.
pub(super) struct AnimationLoop {
    callback: FrameCallback,
    pending: Rc<Cell<Option<i32>>>,
}

impl AnimationLoop {
    pub(super) fn start(mut frame: impl FnMut() + 'static) -> Result<Self, JsValue> {
        let callback: FrameCallback = Rc::new(RefCell::new(None));
        let pending = Rc::new(Cell::new(None));

        let next = callback.clone();
        let next_pending = pending.clone();
        *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            // next frame is requested before this one runs
            if let Some(cb) = next.borrow().as_ref() {
                next_pending.set(request(cb).ok());
            }
            frame();
        }) as Box<dyn FnMut()>));

        if let Some(cb) = callback.borrow().as_ref() {
            pending.set(Some(request(cb)?));
        }

        Ok(Self { callback, pending })
    }

    pub(super) fn is_running(&self) -> bool {
        self.callback.borrow().is_some()
    }

    /// Cancel the pending frame and break the reschedule chain
    pub(super) fn stop(&self) {
        if let Some(id) = self.pending.take() {
            if let Ok(window) = window() {
                window.cancel_animation_frame(id).ok();
            }
        }
        self.callback.borrow_mut().take();
    }
}

impl Drop for AnimationLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request(cb: &Closure<dyn FnMut()>) -> Result<i32, JsValue> {
    window()?.request_animation_frame(cb.as_ref().unchecked_ref())
}
