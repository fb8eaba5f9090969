//! Runtime-environment namespace: console writes, clocks, math, and
//! randomness for the module.

use js_sys::Object;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;

use super::{set_fn, SharedHost};

/// Milliseconds on the monotonic performance clock, falling back to
/// wall time when the page has no Performance object.
fn tick_ms() -> f64 {
    web_sys::window()
        .and_then(|window| window.performance())
        .map(|performance| performance.now())
        .unwrap_or_else(js_sys::Date::now)
}

pub fn build(host: &SharedHost) -> Result<Object, JsValue> {
    let table = Object::new();

    let state = host.clone();
    let write = Closure::wrap(Box::new(move |fd: u32, ptr: u32, len: u32| {
        let text = state.borrow().read_string(ptr, len);
        state.borrow_mut().console_write(fd, &text);
    }) as Box<dyn FnMut(u32, u32, u32)>);
    set_fn(&table, "write", write.into_js_value())?;

    let time_now = Closure::wrap(Box::new(js_sys::Date::now) as Box<dyn FnMut() -> f64>);
    set_fn(&table, "time_now", time_now.into_js_value())?;

    let tick_now = Closure::wrap(Box::new(tick_ms) as Box<dyn FnMut() -> f64>);
    set_fn(&table, "tick_now", tick_now.into_js_value())?;

    let state = host.clone();
    let rand_bytes = Closure::wrap(Box::new(move |ptr: u32, len: u32| {
        let bytes: Vec<u8> = (0..len)
            .map(|_| (js_sys::Math::random() * 256.0) as u8)
            .collect();
        state.borrow().write_bytes(ptr, &bytes);
    }) as Box<dyn FnMut(u32, u32)>);
    set_fn(&table, "rand_bytes", rand_bytes.into_js_value())?;

    let exp = Closure::wrap(Box::new(|x: f64| x.exp()) as Box<dyn FnMut(f64) -> f64>);
    set_fn(&table, "exp", exp.into_js_value())?;

    let ln = Closure::wrap(Box::new(|x: f64| x.ln()) as Box<dyn FnMut(f64) -> f64>);
    set_fn(&table, "ln", ln.into_js_value())?;

    let pow = Closure::wrap(Box::new(|x: f64, y: f64| x.powf(y)) as Box<dyn FnMut(f64, f64) -> f64>);
    set_fn(&table, "pow", pow.into_js_value())?;

    Ok(table)
}
