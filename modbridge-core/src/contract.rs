//! ABI contract with the compiled module.
//!
//! Export names and capability namespace keys are fixed by the module's
//! toolchain; the bridge has to match them byte for byte or linking
//! fails with a missing-import error.

use std::fmt;

/// Startup entry point, phase one of two-phase initialization.
pub const EXPORT_START: &str = "_start";
/// End-of-startup entry point, called after the context is captured.
pub const EXPORT_END: &str = "_end";
/// Accessor for the module's default execution context.
pub const EXPORT_CONTEXT: &str = "default_context_ptr";
/// Per-frame entry point: `frame(delta, ctx)`.
pub const EXPORT_FRAME: &str = "frame";
/// Resize notification: six geometry values, see `viewport::ResizeArgs`.
pub const EXPORT_RESIZE: &str = "on_window_resize";
/// The module's exported linear memory, read by capability shims.
pub const EXPORT_MEMORY: &str = "memory";

/// Placeholder namespace the module links but never calls into.
pub const NS_ENV: &str = "env";
/// Runtime environment: console writes, clocks, math, randomness.
pub const NS_RUNTIME: &str = "odin_env";
/// Local-storage access.
pub const NS_STORAGE: &str = "odin_ls";
/// DOM access: custom events, element reads.
pub const NS_DOM: &str = "odin_dom";
/// Graphics-context shim.
pub const NS_WEBGL: &str = "webgl";

/// Every namespace key the import object must carry, in the order the
/// table is assembled.
pub const NAMESPACES: [&str; 5] = [NS_ENV, NS_RUNTIME, NS_STORAGE, NS_DOM, NS_WEBGL];

/// Opaque context handle returned by the module after startup.
///
/// An arena index into module-owned memory. The bridge never decodes it;
/// it is captured once and passed back verbatim into every `frame` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ctx(pub u64);

impl Ctx {
    /// The handle as the f64 the JS call boundary carries it in.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

impl fmt::Display for Ctx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ctx@{:#x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_keys_are_unique() {
        for (i, a) in NAMESPACES.iter().enumerate() {
            for b in &NAMESPACES[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn context_handle_is_stable_under_copy() {
        let ctx = Ctx(0x0005_4321);
        let passed_to_frame = ctx;
        assert_eq!(passed_to_frame, ctx);
        assert_eq!(passed_to_frame.as_f64(), 0x0005_4321 as f64);
    }

    #[test]
    fn context_handle_display_is_hex() {
        assert_eq!(Ctx(0xff).to_string(), "ctx@0xff");
    }
}
