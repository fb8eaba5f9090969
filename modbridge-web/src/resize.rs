//! Resize handling: keep the canvas backing buffer matched to its
//! layout size × device pixel ratio, and tell the module about the new
//! geometry.

use std::rc::Rc;

use modbridge_core::viewport::{backing_size, LayoutRect, ResizeArgs};
use modbridge_core::BridgeError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Event, HtmlCanvasElement};

use crate::exports::ModuleExports;

/// Look up the render canvas. A missing (or non-canvas) element is an
/// unrecoverable startup fault; the caller crashes the boot with it.
pub fn find_canvas(id: &str) -> Result<HtmlCanvasElement, BridgeError> {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_element_by_id(id))
        .ok_or_else(|| BridgeError::MissingElement(id.to_owned()))?
        .dyn_into::<HtmlCanvasElement>()
        .map_err(|_| BridgeError::MissingElement(format!("{id} (element is not a canvas)")))
}

pub struct ResizeDriver {
    canvas: HtmlCanvasElement,
    exports: Rc<ModuleExports>,
}

impl ResizeDriver {
    pub fn new(canvas: HtmlCanvasElement, exports: Rc<ModuleExports>) -> Self {
        Self { canvas, exports }
    }

    /// Recompute the backing buffer and notify the module. Pure in its
    /// inputs: an unchanged layout produces the identical call.
    pub fn apply(&self) -> Result<(), JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
        let rect = self.canvas.get_bounding_client_rect();
        let layout = LayoutRect {
            width: rect.width(),
            height: rect.height(),
            left: rect.left(),
            top: rect.top(),
        };

        let (width, height) = backing_size(&layout, window.device_pixel_ratio());
        self.canvas.set_width(width);
        self.canvas.set_height(height);

        let inner_width = window.inner_width()?.as_f64().unwrap_or(layout.width);
        let inner_height = window.inner_height()?.as_f64().unwrap_or(layout.height);
        self.exports
            .on_window_resize(&ResizeArgs::new(inner_width, inner_height, &layout))
    }

    /// Apply once eagerly, then follow window resize events for the rest
    /// of the page's life.
    pub fn install(self) -> Result<(), JsValue> {
        self.apply()?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window object"))?;
        let callback = Closure::wrap(Box::new(move |_event: Event| {
            if let Err(err) = self.apply() {
                log::error!("resize handling failed: {err:?}");
            }
        }) as Box<dyn FnMut(Event)>);
        window.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref())?;
        callback.forget();
        Ok(())
    }
}
