//! The module's two-phase startup sequence.
//!
//! The module allocates and prepares in `_start`, hands back its default
//! execution context, then runs an explicit teardown-of-setup step in
//! `_end`. The three calls must happen in exactly that order, and no
//! frame or resize call may reach the module before the sequence
//! completes. The sequence is expressed over a trait so the ordering can
//! be verified without a live module.

use crate::contract::Ctx;

/// The three startup entry points of a loaded module.
pub trait ModuleControl {
    type Error;

    fn start(&mut self) -> Result<(), Self::Error>;
    fn default_context_ptr(&mut self) -> Result<Ctx, Self::Error>;
    fn end(&mut self) -> Result<(), Self::Error>;
}

/// Run `_start` → `default_context_ptr` → `_end` and return the captured
/// context handle. Any failure aborts the sequence immediately; no later
/// entry point is called.
pub fn run_start_sequence<M: ModuleControl>(module: &mut M) -> Result<Ctx, M::Error> {
    module.start()?;
    let ctx = module.default_context_ptr()?;
    module.end()?;
    Ok(ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Recording {
        calls: Vec<&'static str>,
        fail_on: Option<&'static str>,
    }

    impl Recording {
        fn new() -> Self {
            Self {
                calls: Vec::new(),
                fail_on: None,
            }
        }

        fn record(&mut self, name: &'static str) -> Result<(), &'static str> {
            self.calls.push(name);
            if self.fail_on == Some(name) {
                Err(name)
            } else {
                Ok(())
            }
        }
    }

    impl ModuleControl for Recording {
        type Error = &'static str;

        fn start(&mut self) -> Result<(), Self::Error> {
            self.record("_start")
        }

        fn default_context_ptr(&mut self) -> Result<Ctx, Self::Error> {
            self.record("default_context_ptr")?;
            Ok(Ctx(42))
        }

        fn end(&mut self) -> Result<(), Self::Error> {
            self.record("_end")
        }
    }

    #[test]
    fn startup_calls_run_in_exact_order() {
        let mut module = Recording::new();
        let ctx = run_start_sequence(&mut module).unwrap();
        assert_eq!(module.calls, ["_start", "default_context_ptr", "_end"]);
        assert_eq!(ctx, Ctx(42));
    }

    #[test]
    fn failed_start_stops_the_sequence() {
        let mut module = Recording::new();
        module.fail_on = Some("_start");
        assert!(run_start_sequence(&mut module).is_err());
        assert_eq!(module.calls, ["_start"]);
    }

    #[test]
    fn failed_context_read_skips_end() {
        let mut module = Recording::new();
        module.fail_on = Some("default_context_ptr");
        assert!(run_start_sequence(&mut module).is_err());
        assert_eq!(module.calls, ["_start", "default_context_ptr"]);
    }
}
