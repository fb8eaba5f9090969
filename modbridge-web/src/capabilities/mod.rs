//! The capability table: host-implemented functions the module imports,
//! grouped into named namespaces.
//!
//! The table is assembled once before instantiation and frozen; the
//! instantiation call is the only consumer. Shims that need the module's
//! linear memory capture a shared `HostState`, which is created empty
//! here and bound to the instance after instantiation resolves — the
//! imports have to exist before the instance does.

pub mod dom;
pub mod graphics;
pub mod runtime_env;
pub mod storage;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Object, Reflect, Uint8Array, WebAssembly};
use modbridge_core::contract::{
    EXPORT_MEMORY, NS_DOM, NS_ENV, NS_RUNTIME, NS_STORAGE, NS_WEBGL,
};
use modbridge_core::BridgeError;
use wasm_bindgen::{JsCast, JsValue};

use self::graphics::SharedGraphics;

/// Host-side state the capability shims share: the module's linear
/// memory (bound post-instantiation) and the line buffers for console
/// output.
pub struct HostState {
    memory: Option<WebAssembly::Memory>,
    stdout: String,
    stderr: String,
}

pub type SharedHost = Rc<RefCell<HostState>>;

impl HostState {
    pub fn shared() -> SharedHost {
        Rc::new(RefCell::new(Self {
            memory: None,
            stdout: String::new(),
            stderr: String::new(),
        }))
    }

    /// Bind the instance's exported linear memory. Must run before the
    /// module's startup entry point so no shim ever observes an unbound
    /// memory during a module call.
    pub fn bind_memory(&mut self, instance: &WebAssembly::Instance) -> Result<(), BridgeError> {
        let memory = Reflect::get(&instance.exports(), &JsValue::from_str(EXPORT_MEMORY))
            .ok()
            .and_then(|value| value.dyn_into::<WebAssembly::Memory>().ok())
            .ok_or(BridgeError::MissingExport(EXPORT_MEMORY))?;
        self.memory = Some(memory);
        Ok(())
    }

    pub fn read_bytes(&self, ptr: u32, len: u32) -> Vec<u8> {
        match &self.memory {
            Some(memory) => {
                Uint8Array::new_with_byte_offset_and_length(&memory.buffer(), ptr, len).to_vec()
            }
            None => Vec::new(),
        }
    }

    pub fn read_string(&self, ptr: u32, len: u32) -> String {
        String::from_utf8_lossy(&self.read_bytes(ptr, len)).into_owned()
    }

    /// Copy `data` into module memory at `ptr`. Returns the number of
    /// bytes written (zero before memory is bound).
    pub fn write_bytes(&self, ptr: u32, data: &[u8]) -> u32 {
        match &self.memory {
            Some(memory) => {
                let view = Uint8Array::new_with_byte_offset_and_length(
                    &memory.buffer(),
                    ptr,
                    data.len() as u32,
                );
                view.copy_from(data);
                data.len() as u32
            }
            None => 0,
        }
    }

    /// Line-buffered console sink. fd 1 is stdout, fd 2 is stderr;
    /// complete lines go to the log, partial lines wait for the rest.
    pub fn console_write(&mut self, fd: u32, text: &str) {
        let buffer = if fd == 2 { &mut self.stderr } else { &mut self.stdout };
        buffer.push_str(text);
        while let Some(pos) = buffer.find('\n') {
            let line: String = buffer.drain(..=pos).collect();
            let line = line.trim_end_matches('\n');
            if fd == 2 {
                log::error!("module: {line}");
            } else {
                log::info!("module: {line}");
            }
        }
    }
}

pub(crate) fn set_fn(table: &Object, name: &str, value: JsValue) -> Result<(), JsValue> {
    Reflect::set(table, &JsValue::from_str(name), &value)?;
    Ok(())
}

/// Assemble the full import object: every namespace under its key, built
/// once, frozen so nothing mutates it after construction.
pub fn build_import_object(
    host: &SharedHost,
    graphics: &SharedGraphics,
) -> Result<Object, JsValue> {
    let imports = Object::new();
    // `env` is linked by the module but deliberately left empty.
    Reflect::set(&imports, &JsValue::from_str(NS_ENV), &Object::new())?;
    Reflect::set(
        &imports,
        &JsValue::from_str(NS_RUNTIME),
        &runtime_env::build(host)?,
    )?;
    Reflect::set(
        &imports,
        &JsValue::from_str(NS_STORAGE),
        &storage::build(host)?,
    )?;
    Reflect::set(&imports, &JsValue::from_str(NS_DOM), &dom::build(host)?)?;
    Reflect::set(
        &imports,
        &JsValue::from_str(NS_WEBGL),
        &graphics::build(graphics, host)?,
    )?;
    Ok(Object::freeze(&imports))
}
