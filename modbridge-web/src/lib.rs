//! Browser host bridge for an externally compiled WASM module.
//!
//! Fetches and instantiates the module, links it against a table of
//! host capabilities (console, DOM, local storage, graphics context),
//! runs its two-phase startup, then drives the per-frame animation loop
//! and window-resize notifications. In dev builds it also listens on a
//! rebuild-notification socket and reloads the page on signal.

#[cfg(target_arch = "wasm32")]
pub mod bridge;
#[cfg(target_arch = "wasm32")]
pub mod capabilities;
#[cfg(target_arch = "wasm32")]
pub mod exports;
#[cfg(target_arch = "wasm32")]
pub mod frame;
#[cfg(target_arch = "wasm32")]
pub mod loader;
#[cfg(target_arch = "wasm32")]
pub mod reload;
#[cfg(target_arch = "wasm32")]
pub mod resize;

#[cfg(target_arch = "wasm32")]
use modbridge_core::config::BootConfig;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Bridge errors cross the JS boundary as plain strings.
#[cfg(target_arch = "wasm32")]
pub(crate) fn js_err(err: modbridge_core::BridgeError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Entry point — called when this glue module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).expect("Failed to init logger");
    log::info!("host bridge initialized");
}

/// Boot the page: load the module, start it, and begin driving frames.
///
/// Called from the page's loader script. Any failure before the frame
/// loop starts is fatal and leaves the page broken in a
/// developer-visible way; there are no retries.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub async fn boot(dev: bool) -> Result<(), JsValue> {
    let config = BootConfig {
        dev,
        ..BootConfig::default()
    };
    boot_with(config).await
}

#[cfg(target_arch = "wasm32")]
async fn boot_with(config: BootConfig) -> Result<(), JsValue> {
    if config.dev {
        reload::install(&config)?;
        capabilities::dom::install_event_probe("bridge-probe")?;
    }

    let bridge = bridge::Bridge::boot(&config).await?;
    // The loop has no owner to cancel it; it runs until page unload.
    let _running = bridge.run()?;
    Ok(())
}
