//! Browser smoke tests, run with `wasm-pack test --headless --chrome`.
#![cfg(target_arch = "wasm32")]

use letterdrop_engine::LetterDrop;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document.create_element("canvas").unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas.dyn_into().unwrap()
}

#[wasm_bindgen_test]
fn mount_sizes_canvas_and_runs() {
    let canvas = canvas();
    let drop = LetterDrop::mount(canvas.clone()).unwrap();
    assert!(drop.is_running());
    assert!(canvas.width() > 0);
    assert_eq!(drop.glyph_count(), 0);
}

#[wasm_bindgen_test]
fn panel_appears_after_ready() {
    let drop = LetterDrop::mount(canvas()).unwrap();
    assert!(drop.panel_model().is_none());
    drop.panel_ready();
    assert!(drop.panel_model().unwrap().contains("showHitboxes"));
}

#[wasm_bindgen_test]
fn tunables_round_trip_and_reject_garbage() {
    let drop = LetterDrop::mount(canvas()).unwrap();
    let applied = drop
        .update_tunables(r#"{"gravity":-30,"relaxation":1,"stiffness":500,"showHitboxes":true}"#)
        .unwrap();
    assert!(applied.contains("\"gravity\":-20"));
    assert!(drop.update_tunables("not json").is_err());
    assert_eq!(drop.tunables(), Some(applied));
}

#[wasm_bindgen_test]
fn unmount_is_terminal_and_idempotent() {
    let mut drop = LetterDrop::mount(canvas()).unwrap();
    drop.unmount();
    assert!(!drop.is_running());
    assert!(drop.tunables().is_none());
    drop.unmount();
    assert!(drop.update_tunables("{}").is_err());
}
