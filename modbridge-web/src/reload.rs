//! Dev-only hot reload: the dev server pushes a message on a local
//! socket after each rebuild; the bridge reloads the page on the
//! designated signal and ignores everything else.

use modbridge_core::config::BootConfig;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{MessageEvent, WebSocket};

pub fn install(config: &BootConfig) -> Result<(), JsValue> {
    let url = config.socket_url();
    let socket = WebSocket::new(&url)?;

    let expected = config.reload_message.clone();
    let callback = Closure::wrap(Box::new(move |event: MessageEvent| {
        if event.data().as_string().as_deref() == Some(expected.as_str()) {
            log::info!("rebuild signal received, reloading");
            if let Some(window) = web_sys::window() {
                let _ = window.location().reload();
            }
        }
    }) as Box<dyn FnMut(MessageEvent)>);
    socket.set_onmessage(Some(callback.as_ref().unchecked_ref()));
    callback.forget();

    log::info!("dev reload socket listening on {url}");
    Ok(())
}
