//! Local-storage namespace. Keys and values travel through module
//! memory as UTF-8; reads are truncated to the caller's buffer.

use js_sys::Object;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::Storage;

use super::{set_fn, SharedHost};

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

pub fn build(host: &SharedHost) -> Result<Object, JsValue> {
    let table = Object::new();

    let state = host.clone();
    let get = Closure::wrap(Box::new(
        move |key_ptr: u32, key_len: u32, buf_ptr: u32, buf_len: u32| -> i32 {
            let key = state.borrow().read_string(key_ptr, key_len);
            let Some(storage) = local_storage() else { return -1 };
            match storage.get_item(&key) {
                Ok(Some(value)) => {
                    let bytes = value.as_bytes();
                    let take = bytes.len().min(buf_len as usize);
                    state.borrow().write_bytes(buf_ptr, &bytes[..take]) as i32
                }
                _ => -1,
            }
        },
    ) as Box<dyn FnMut(u32, u32, u32, u32) -> i32>);
    set_fn(&table, "get", get.into_js_value())?;

    let state = host.clone();
    let set = Closure::wrap(Box::new(
        move |key_ptr: u32, key_len: u32, val_ptr: u32, val_len: u32| -> bool {
            let key = state.borrow().read_string(key_ptr, key_len);
            let value = state.borrow().read_string(val_ptr, val_len);
            local_storage()
                .map(|storage| storage.set_item(&key, &value).is_ok())
                .unwrap_or(false)
        },
    ) as Box<dyn FnMut(u32, u32, u32, u32) -> bool>);
    set_fn(&table, "set", set.into_js_value())?;

    let state = host.clone();
    let remove = Closure::wrap(Box::new(move |key_ptr: u32, key_len: u32| {
        let key = state.borrow().read_string(key_ptr, key_len);
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(&key);
        }
    }) as Box<dyn FnMut(u32, u32)>);
    set_fn(&table, "remove", remove.into_js_value())?;

    let clear = Closure::wrap(Box::new(|| {
        if let Some(storage) = local_storage() {
            let _ = storage.clear();
        }
    }) as Box<dyn FnMut()>);
    set_fn(&table, "clear", clear.into_js_value())?;

    Ok(table)
}
