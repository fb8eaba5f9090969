//! DOM-access namespace: custom-event dispatch and element reads.

use js_sys::Object;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CustomEvent, Element, Event};

use super::{set_fn, SharedHost};

fn element_by_id(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Dispatch a custom event named `name` on the element with `id`, or on
/// the document body when `id` is empty.
fn dispatch(id: &str, name: &str) -> bool {
    let Ok(event) = CustomEvent::new(name) else {
        return false;
    };
    let target: Option<Element> = if id.is_empty() {
        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
            .map(|body| body.unchecked_into())
    } else {
        element_by_id(id)
    };
    match target {
        Some(element) => element.dispatch_event(&event).unwrap_or(false),
        None => false,
    }
}

pub fn build(host: &SharedHost) -> Result<Object, JsValue> {
    let table = Object::new();

    let state = host.clone();
    let dispatch_custom_event = Closure::wrap(Box::new(
        move |id_ptr: u32, id_len: u32, name_ptr: u32, name_len: u32| -> bool {
            let id = state.borrow().read_string(id_ptr, id_len);
            let name = state.borrow().read_string(name_ptr, name_len);
            dispatch(&id, &name)
        },
    ) as Box<dyn FnMut(u32, u32, u32, u32) -> bool>);
    set_fn(&table, "dispatch_custom_event", dispatch_custom_event.into_js_value())?;

    // Copies the element's text content into the caller's buffer and
    // returns the byte count. Truncation happens at the buffer edge, so
    // a multi-byte character can be cut; the module tolerates this.
    let state = host.clone();
    let element_text = Closure::wrap(Box::new(
        move |id_ptr: u32, id_len: u32, buf_ptr: u32, buf_len: u32| -> u32 {
            let id = state.borrow().read_string(id_ptr, id_len);
            let text = element_by_id(&id)
                .and_then(|element| element.text_content())
                .unwrap_or_default();
            let bytes = text.as_bytes();
            let take = bytes.len().min(buf_len as usize);
            state.borrow().write_bytes(buf_ptr, &bytes[..take])
        },
    ) as Box<dyn FnMut(u32, u32, u32, u32) -> u32>);
    set_fn(&table, "element_text", element_text.into_js_value())?;

    Ok(table)
}

/// Dev helper: log whenever the named custom event reaches the body, to
/// verify the module's dispatch path end to end.
pub fn install_event_probe(name: &str) -> Result<(), JsValue> {
    let body = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.body())
        .ok_or_else(|| JsValue::from_str("no document body"))?;

    let event_name = name.to_owned();
    let callback = Closure::wrap(Box::new(move |_event: Event| {
        log::info!("custom event `{event_name}` received");
    }) as Box<dyn FnMut(Event)>);
    body.add_event_listener_with_callback(name, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
