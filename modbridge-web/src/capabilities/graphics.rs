//! Graphics-context namespace.
//!
//! The bridge owns context acquisition and current-context bookkeeping;
//! the binding surface itself (draw calls, buffers, shaders) belongs to
//! the module's toolchain and stays out of scope here.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Object;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlCanvasElement, WebGl2RenderingContext};

use super::{set_fn, SharedHost};

pub struct GraphicsState {
    canvas: HtmlCanvasElement,
    context: Option<WebGl2RenderingContext>,
}

pub type SharedGraphics = Rc<RefCell<GraphicsState>>;

impl GraphicsState {
    pub fn shared(canvas: HtmlCanvasElement) -> SharedGraphics {
        Rc::new(RefCell::new(Self {
            canvas,
            context: None,
        }))
    }

    /// Acquire the WebGL2 context lazily. Returns false when the canvas
    /// cannot provide one (headless test environments, blocked GPU).
    fn acquire(&mut self) -> bool {
        if self.context.is_some() {
            return true;
        }
        let context = self
            .canvas
            .get_context("webgl2")
            .ok()
            .flatten()
            .and_then(|value| value.dyn_into::<WebGl2RenderingContext>().ok());
        match context {
            Some(context) => {
                self.context = Some(context);
                true
            }
            None => {
                log::error!("webgl2 context unavailable on canvas `{}`", self.canvas.id());
                false
            }
        }
    }

    fn buffer_width(&self) -> i32 {
        self.context
            .as_ref()
            .map(|context| context.drawing_buffer_width())
            .unwrap_or(0)
    }

    fn buffer_height(&self) -> i32 {
        self.context
            .as_ref()
            .map(|context| context.drawing_buffer_height())
            .unwrap_or(0)
    }
}

pub fn build(graphics: &SharedGraphics, host: &SharedHost) -> Result<Object, JsValue> {
    let table = Object::new();

    let state = graphics.clone();
    let memory = host.clone();
    let set_current_context_by_id = Closure::wrap(Box::new(
        move |id_ptr: u32, id_len: u32| -> bool {
            let id = memory.borrow().read_string(id_ptr, id_len);
            let mut state = state.borrow_mut();
            if state.canvas.id() != id {
                log::error!("unknown canvas id `{id}` requested as graphics target");
                return false;
            }
            state.acquire()
        },
    ) as Box<dyn FnMut(u32, u32) -> bool>);
    set_fn(
        &table,
        "set_current_context_by_id",
        set_current_context_by_id.into_js_value(),
    )?;

    let state = graphics.clone();
    let drawing_buffer_width = Closure::wrap(Box::new(move || -> i32 {
        state.borrow().buffer_width()
    }) as Box<dyn FnMut() -> i32>);
    set_fn(&table, "drawing_buffer_width", drawing_buffer_width.into_js_value())?;

    let state = graphics.clone();
    let drawing_buffer_height = Closure::wrap(Box::new(move || -> i32 {
        state.borrow().buffer_height()
    }) as Box<dyn FnMut() -> i32>);
    set_fn(&table, "drawing_buffer_height", drawing_buffer_height.into_js_value())?;

    Ok(table)
}
