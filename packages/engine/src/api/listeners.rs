//! Scoped DOM listeners. Registration happens in `attach`, removal in `Drop`.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget, MouseEvent, TouchEvent};

use super::dom::{canvas_point, document, viewport, window};
use super::stage::Stage;
use super::timers::{clear_timeout, set_timeout};
use crate::view::RESIZE_DEBOUNCE_MS;

type Handler = Closure<dyn FnMut(Event)>;

struct Listeners {
    target: EventTarget,
    handlers: Vec<(&'static str, Handler)>,
}

impl Listeners {
    fn new(target: EventTarget) -> Self {
        Self {
            target,
            handlers: Vec::new(),
        }
    }

    /// Passive, non-capturing
    fn listen(&mut self, event: &'static str, handler: Handler) -> Result<(), JsValue> {
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        options.set_capture(false);
        self.target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            handler.as_ref().unchecked_ref(),
            &options,
        )?;
        self.handlers.push((event, handler));
        Ok(())
    }
}

impl Drop for Listeners {
    fn drop(&mut self) {
        for (event, handler) in self.handlers.drain(..) {
            self.target
                .remove_event_listener_with_callback_and_bool(event, handler.as_ref().unchecked_ref(), false)
                .ok();
        }
    }
}

fn with_stage(stage: &Weak<RefCell<Stage>>, f: impl FnOnce(&mut Stage)) {
    if let Some(stage) = stage.upgrade() {
        if let Ok(mut stage) = stage.try_borrow_mut() {
            f(&mut stage);
        }
    }
}

/// Pointer and touch listeners on `document`
pub(super) struct InputSubscription {
    _listeners: Listeners,
}

impl InputSubscription {
    pub(super) fn attach(stage: &Rc<RefCell<Stage>>) -> Result<Self, JsValue> {
        let mut listeners = Listeners::new(document()?.into());

        let weak = Rc::downgrade(stage);
        listeners.listen(
            "pointerdown",
            Closure::wrap(Box::new(move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                with_stage(&weak, |stage| {
                    let screen = canvas_point(stage.canvas(), event.client_x(), event.client_y());
                    stage.press(screen, event.button());
                });
            }) as Box<dyn FnMut(Event)>),
        )?;

        let weak = Rc::downgrade(stage);
        listeners.listen(
            "mousemove",
            Closure::wrap(Box::new(move |event: Event| {
                let Some(event) = event.dyn_ref::<MouseEvent>() else {
                    return;
                };
                with_stage(&weak, |stage| {
                    let screen = canvas_point(stage.canvas(), event.client_x(), event.client_y());
                    stage.pointer_move(screen);
                });
            }) as Box<dyn FnMut(Event)>),
        )?;

        let weak = Rc::downgrade(stage);
        listeners.listen(
            "touchmove",
            Closure::wrap(Box::new(move |event: Event| {
                let Some(touch) = event.dyn_ref::<TouchEvent>().and_then(|e| e.touches().get(0)) else {
                    return;
                };
                with_stage(&weak, |stage| {
                    let screen = canvas_point(stage.canvas(), touch.client_x(), touch.client_y());
                    stage.pointer_move(screen);
                });
            }) as Box<dyn FnMut(Event)>),
        )?;

        for event in ["mouseup", "touchend"] {
            let weak = Rc::downgrade(stage);
            listeners.listen(
                event,
                Closure::wrap(Box::new(move |_: Event| {
                    with_stage(&weak, Stage::release);
                }) as Box<dyn FnMut(Event)>),
            )?;
        }

        Ok(Self { _listeners: listeners })
    }
}

/// Window resize, debounced (trailing edge)
pub(super) struct ResizeSubscription {
    _listeners: Listeners,
    pending: Rc<Cell<Option<i32>>>,
}

impl ResizeSubscription {
    pub(super) fn attach(stage: &Rc<RefCell<Stage>>) -> Result<Self, JsValue> {
        let mut listeners = Listeners::new(window()?.into());
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

        let weak = Rc::downgrade(stage);
        let timer = pending.clone();
        listeners.listen(
            "resize",
            Closure::wrap(Box::new(move |_: Event| {
                if let Some(id) = timer.take() {
                    clear_timeout(id);
                }
                let weak = weak.clone();
                let fired = timer.clone();
                let id = set_timeout(
                    move || {
                        fired.set(None);
                        let Ok(size) = viewport() else {
                            return;
                        };
                        with_stage(&weak, |stage| stage.resize(size));
                    },
                    RESIZE_DEBOUNCE_MS,
                );
                timer.set(id.ok());
            }) as Box<dyn FnMut(Event)>),
        )?;

        Ok(Self {
            _listeners: listeners,
            pending,
        })
    }
}

impl Drop for ResizeSubscription {
    fn drop(&mut self) {
        if let Some(id) = self.pending.take() {
            clear_timeout(id);
        }
    }
}
