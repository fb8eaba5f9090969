//! Browser smoke tests for the capability table and loop plumbing.
//! Run with `wasm-pack test --headless --firefox modbridge-web`.

#![cfg(target_arch = "wasm32")]

use js_sys::Reflect;
use modbridge_core::contract::NAMESPACES;
use modbridge_web::capabilities::graphics::GraphicsState;
use modbridge_web::capabilities::{build_import_object, HostState};
use modbridge_web::frame::CancelToken;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::HtmlCanvasElement;

wasm_bindgen_test_configure!(run_in_browser);

fn test_canvas() -> HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .unwrap()
        .dyn_into()
        .unwrap();
    canvas.set_id("test-canvas");
    canvas
}

#[wasm_bindgen_test]
fn import_object_carries_every_namespace() {
    let host = HostState::shared();
    let graphics = GraphicsState::shared(test_canvas());
    let imports = build_import_object(&host, &graphics).unwrap();
    for key in NAMESPACES {
        assert!(
            Reflect::has(&imports, &JsValue::from_str(key)).unwrap(),
            "namespace `{key}` missing from import object"
        );
    }
}

#[wasm_bindgen_test]
fn unbound_memory_reads_and_writes_nothing() {
    let host = HostState::shared();
    assert!(host.borrow().read_bytes(0, 16).is_empty());
    assert_eq!(host.borrow().write_bytes(0, b"abc"), 0);
}

#[wasm_bindgen_test]
fn cancel_token_is_shared_across_clones() {
    let token = CancelToken::default();
    let observer = token.clone();
    assert!(!observer.is_cancelled());
    token.cancel();
    assert!(observer.is_cancelled());
}
