//! The frame driver: an animation-frame loop that feeds `(delta, ctx)`
//! into the module every tick.
//!
//! Two deliberate departures from a bare re-registration loop:
//! a `CancelToken` gives callers a clean way to end the loop, and a
//! failed `frame` call is logged and the loop re-registered anyway, so
//! one faulty frame cannot silently kill the animation permanently.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use modbridge_core::clock::FrameClock;
use modbridge_core::Ctx;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};

use crate::exports::ModuleExports;

/// Handle to a running frame loop. Cloned freely; dropping it does not
/// stop the loop — only an explicit `cancel` does.
#[derive(Clone, Default)]
pub struct CancelToken {
    flag: Rc<Cell<bool>>,
}

impl CancelToken {
    pub fn cancel(&self) {
        self.flag.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.get()
    }
}

type FrameSlot = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn schedule(callback: &Closure<dyn FnMut(f64)>) -> Result<i32, JsValue> {
    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window object"))?
        .request_animation_frame(callback.as_ref().unchecked_ref())
}

/// Register the loop with the frame scheduler and return its cancel
/// token.
///
/// The first callback only seeds the clock with its timestamp, so the
/// first delta the module sees measures registration-to-first-frame.
/// Frames arrive strictly in scheduler order, one at a time.
pub fn drive(exports: Rc<ModuleExports>, ctx: Ctx) -> Result<CancelToken, JsValue> {
    let token = CancelToken::default();
    let cancel = token.clone();
    let slot: FrameSlot = Rc::new(RefCell::new(None));

    let bootstrap_slot = slot.clone();
    let bootstrap = Closure::once_into_js(move |registered_at: f64| {
        let mut clock = FrameClock::new(registered_at);
        let tick_slot = bootstrap_slot.clone();
        let tick = Closure::wrap(Box::new(move |now: f64| {
            if cancel.is_cancelled() {
                // Drop the closure; nothing re-registers and the loop ends.
                let _ = tick_slot.borrow_mut().take();
                return;
            }
            let delta = clock.tick(now);
            if let Err(err) = exports.frame(delta, ctx) {
                log::error!("module frame call failed: {err:?}");
            }
            if let Some(callback) = tick_slot.borrow().as_ref() {
                if let Err(err) = schedule(callback) {
                    log::error!("failed to schedule next frame: {err:?}");
                }
            }
        }) as Box<dyn FnMut(f64)>);

        *bootstrap_slot.borrow_mut() = Some(tick);
        if let Some(callback) = bootstrap_slot.borrow().as_ref() {
            if let Err(err) = schedule(callback) {
                log::error!("failed to start frame loop: {err:?}");
            }
        }
    });

    web_sys::window()
        .ok_or_else(|| JsValue::from_str("no window object"))?
        .request_animation_frame(bootstrap.unchecked_ref())?;
    Ok(token)
}
