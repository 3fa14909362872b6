//! `LetterDrop` - the mounted component as seen from JavaScript
//!
//! ```js
//! const drop = LetterDrop.mount(canvas);
//! // once the panel code has loaded
//! drop.panelReady();
//! const model = JSON.parse(drop.panelModel());
//! drop.updateTunables(JSON.stringify({ ...model.data, gravity: -3 }));
//! // on unmount
//! drop.unmount();
//! ```

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use web_sys::HtmlCanvasElement;

use super::animation::AnimationLoop;
use super::canvas::CanvasSurface;
use super::dom::viewport;
use super::listeners::{InputSubscription, ResizeSubscription};
use super::stage::Stage;
use super::timers::set_timeout;
use crate::schedule::DROP_DELAY_MS;

struct Mounted {
    stage: Rc<RefCell<Stage>>,
    // Dropped with the component: listeners removed, loop cancelled
    _input: InputSubscription,
    _resize: ResizeSubscription,
    animation: AnimationLoop,
}

#[wasm_bindgen]
pub struct LetterDrop {
    mounted: Option<Mounted>,
}

#[wasm_bindgen]
impl LetterDrop {
    /// Build the world on `canvas` and start dropping letters
    pub fn mount(canvas: HtmlCanvasElement) -> Result<LetterDrop, JsValue> {
        let surface = CanvasSurface::new(canvas)?;
        let seed = (js_sys::Math::random() * u32::MAX as f64) as u32;
        let stage = Rc::new(RefCell::new(Stage::new(surface, viewport()?, seed)));

        let input = InputSubscription::attach(&stage)?;
        let resize = ResizeSubscription::attach(&stage)?;

        let frame_stage = Rc::downgrade(&stage);
        let animation = AnimationLoop::start(move || {
            if let Some(stage) = frame_stage.upgrade() {
                if let Ok(mut stage) = stage.try_borrow_mut() {
                    stage.frame();
                }
            }
        })?;

        schedule_drop(Rc::downgrade(&stage));
        console_log!("letterdrop: mounted");

        Ok(LetterDrop {
            mounted: Some(Mounted {
                stage,
                _input: input,
                _resize: resize,
                animation,
            }),
        })
    }

    /// The configuration panel finished loading
    #[wasm_bindgen(js_name = panelReady)]
    pub fn panel_ready(&self) {
        if let Some(m) = &self.mounted {
            m.stage.borrow_mut().config.mark_ready();
        }
    }

    /// Panel model as JSON, or `undefined` while the panel is not available
    #[wasm_bindgen(js_name = panelModel)]
    pub fn panel_model(&self) -> Option<String> {
        let m = self.mounted.as_ref()?;
        let panel = m.stage.borrow().config.panel()?;
        Some(panel.to_json())
    }

    /// Apply a full tunables object from the panel. Returns the applied
    /// (clamped) values as JSON.
    #[wasm_bindgen(js_name = updateTunables)]
    pub fn update_tunables(&self, json: &str) -> Result<String, JsValue> {
        let Some(m) = &self.mounted else {
            return Err(JsValue::from_str("letterdrop is unmounted"));
        };
        let result = m.stage.borrow_mut().update_tunables(json);
        match result {
            Ok(applied) => Ok(applied.to_json()),
            Err(err) => {
                console_warn!("letterdrop: rejected tunables: {}", err);
                Err(JsValue::from_str(&err))
            }
        }
    }

    /// Current tunables as JSON
    pub fn tunables(&self) -> Option<String> {
        let m = self.mounted.as_ref()?;
        let json = m.stage.borrow().config.tunables().to_json();
        Some(json)
    }

    #[wasm_bindgen(getter, js_name = glyphCount)]
    pub fn glyph_count(&self) -> usize {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.stage.borrow().world.glyph_count())
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.mounted.as_ref().map_or(false, |m| m.animation.is_running())
    }

    /// Stop the loop, remove listeners and tear the world down. Terminal.
    pub fn unmount(&mut self) {
        let Some(m) = self.mounted.take() else {
            return;
        };
        m.animation.stop();
        m.stage.borrow_mut().teardown();
    }
}

/// One glyph per timeout; the chain ends when the queue empties or the
/// stage is gone.
fn schedule_drop(stage: Weak<RefCell<Stage>>) {
    let scheduled = set_timeout(
        move || {
            let Some(strong) = stage.upgrade() else {
                return;
            };
            let more = match strong.try_borrow_mut() {
                Ok(mut s) => s.drop_next(),
                Err(_) => true,
            };
            if more {
                schedule_drop(stage);
            }
        },
        DROP_DELAY_MS,
    );
    if let Err(err) = scheduled {
        console_warn!("letterdrop: could not schedule glyph drop: {:?}", err);
    }
}
