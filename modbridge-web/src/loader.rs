//! Module loading: fetch the binary asset and instantiate it against
//! the capability table.

use js_sys::{Object, Promise, Reflect, WebAssembly};
use modbridge_core::BridgeError;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Fetch `path` and instantiate it, linking against `imports`.
///
/// Any failure — network, non-OK status, compile, link — is a
/// `BridgeError::Load`, fatal to page initialization. No module entry
/// point has been called by the time this returns an error.
pub async fn instantiate(
    path: &str,
    imports: &Object,
) -> Result<WebAssembly::Instance, BridgeError> {
    let window =
        web_sys::window().ok_or_else(|| BridgeError::load(path, "no window object"))?;

    let response: Response = JsFuture::from(window.fetch_with_str(path))
        .await
        .map_err(|err| BridgeError::load(path, describe(&err)))?
        .dyn_into()
        .map_err(|_| BridgeError::load(path, "fetch did not produce a Response"))?;

    if !response.ok() {
        return Err(BridgeError::load(path, format!("HTTP {}", response.status())));
    }

    // instantiateStreaming compiles while the body downloads; it rejects
    // on a malformed binary or a missing import.
    let streaming =
        WebAssembly::instantiate_streaming(&Promise::resolve(&response.into()), imports);
    let result = JsFuture::from(streaming)
        .await
        .map_err(|err| BridgeError::load(path, describe(&err)))?;

    Reflect::get(&result, &JsValue::from_str("instance"))
        .ok()
        .and_then(|value| value.dyn_into::<WebAssembly::Instance>().ok())
        .ok_or_else(|| BridgeError::load(path, "instantiation result carried no instance"))
}

fn describe(err: &JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("{err:?}"))
}
