//! The bridge proper: owns the module's lifecycle and translates host
//! events into module entry-point calls with the right opaque state.

use std::rc::Rc;

use modbridge_core::config::BootConfig;
use modbridge_core::startup::{run_start_sequence, ModuleControl};
use modbridge_core::{Ctx, Phase};
use wasm_bindgen::JsValue;
use web_sys::HtmlCanvasElement;

use crate::capabilities::graphics::GraphicsState;
use crate::capabilities::{self, HostState};
use crate::exports::ModuleExports;
use crate::frame::{self, CancelToken};
use crate::js_err;
use crate::loader;
use crate::resize::{self, ResizeDriver};

struct ExportControl<'a>(&'a ModuleExports);

impl ModuleControl for ExportControl<'_> {
    type Error = JsValue;

    fn start(&mut self) -> Result<(), JsValue> {
        self.0.start()
    }

    fn default_context_ptr(&mut self) -> Result<Ctx, JsValue> {
        self.0.default_context_ptr()
    }

    fn end(&mut self) -> Result<(), JsValue> {
        self.0.end()
    }
}

pub struct Bridge {
    canvas: HtmlCanvasElement,
    exports: Rc<ModuleExports>,
    ctx: Ctx,
    phase: Phase,
}

impl Bridge {
    /// Fetch, link, and start the module.
    ///
    /// On return the startup sequence (`_start` → `default_context_ptr`
    /// → `_end`) has completed and the context handle is captured; no
    /// module entry point has been called out of that order.
    pub async fn boot(config: &BootConfig) -> Result<Bridge, JsValue> {
        let phase = Phase::Unloaded.advance(Phase::Loading).map_err(js_err)?;

        // The canvas is required before any network round trip: a page
        // without it cannot run the module at all.
        let canvas = resize::find_canvas(&config.canvas_id).map_err(js_err)?;

        let host = HostState::shared();
        let graphics = GraphicsState::shared(canvas.clone());
        let imports = capabilities::build_import_object(&host, &graphics)?;

        let instance = loader::instantiate(&config.wasm_path, &imports)
            .await
            .map_err(js_err)?;
        host.borrow_mut().bind_memory(&instance).map_err(js_err)?;
        let exports = Rc::new(ModuleExports::bind(&instance).map_err(js_err)?);

        let ctx = run_start_sequence(&mut ExportControl(&exports))?;
        let phase = phase.advance(Phase::Started).map_err(js_err)?;
        log::info!("module started, {ctx}");

        Ok(Bridge {
            canvas,
            exports,
            ctx,
            phase,
        })
    }

    /// Install the resize driver (one eager application, then the window
    /// event) and enter the frame loop.
    pub fn run(self) -> Result<CancelToken, JsValue> {
        ResizeDriver::new(self.canvas, self.exports.clone()).install()?;
        let token = frame::drive(self.exports, self.ctx)?;
        let phase = self.phase.advance(Phase::Running).map_err(js_err)?;
        log::debug!("bridge is {phase:?}");
        Ok(token)
    }

    pub fn ctx(&self) -> Ctx {
        self.ctx
    }
}
