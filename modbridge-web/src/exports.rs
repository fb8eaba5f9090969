//! Typed wrapper over the module's export surface.
//!
//! Every required entry point is resolved once at bind time so a
//! mismatched module fails loudly before startup, not on the first
//! frame.

use js_sys::{Array, Function, Reflect, WebAssembly};
use modbridge_core::contract::{
    Ctx, EXPORT_CONTEXT, EXPORT_END, EXPORT_FRAME, EXPORT_RESIZE, EXPORT_START,
};
use modbridge_core::viewport::ResizeArgs;
use modbridge_core::BridgeError;
use wasm_bindgen::{JsCast, JsValue};

pub struct ModuleExports {
    start: Function,
    end: Function,
    context: Function,
    frame: Function,
    resize: Function,
}

fn required(exports: &JsValue, name: &'static str) -> Result<Function, BridgeError> {
    Reflect::get(exports, &JsValue::from_str(name))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok())
        .ok_or(BridgeError::MissingExport(name))
}

impl ModuleExports {
    pub fn bind(instance: &WebAssembly::Instance) -> Result<Self, BridgeError> {
        let exports = instance.exports();
        Ok(Self {
            start: required(&exports, EXPORT_START)?,
            end: required(&exports, EXPORT_END)?,
            context: required(&exports, EXPORT_CONTEXT)?,
            frame: required(&exports, EXPORT_FRAME)?,
            resize: required(&exports, EXPORT_RESIZE)?,
        })
    }

    pub fn start(&self) -> Result<(), JsValue> {
        self.start.call0(&JsValue::UNDEFINED).map(drop)
    }

    pub fn end(&self) -> Result<(), JsValue> {
        self.end.call0(&JsValue::UNDEFINED).map(drop)
    }

    /// Read the module's default execution context. The returned handle
    /// is opaque; it is only ever passed back into `frame`.
    pub fn default_context_ptr(&self) -> Result<Ctx, JsValue> {
        let value = self.context.call0(&JsValue::UNDEFINED)?;
        let raw = value
            .as_f64()
            .ok_or_else(|| JsValue::from_str("default_context_ptr returned a non-number"))?;
        Ok(Ctx(raw as u64))
    }

    pub fn frame(&self, delta: f64, ctx: Ctx) -> Result<(), JsValue> {
        self.frame
            .call2(
                &JsValue::UNDEFINED,
                &JsValue::from_f64(delta),
                &JsValue::from_f64(ctx.as_f64()),
            )
            .map(drop)
    }

    pub fn on_window_resize(&self, args: &ResizeArgs) -> Result<(), JsValue> {
        let list = Array::new();
        for value in args.values() {
            list.push(&JsValue::from_f64(value));
        }
        self.resize.apply(&JsValue::UNDEFINED, &list).map(drop)
    }
}
