//! Portable logic for the browser host bridge.
//!
//! Everything in this crate is target-independent: the frame clock, the
//! canvas viewport math, the bridge lifecycle state machine, and the ABI
//! contract (export names, capability namespaces, the opaque context
//! handle) shared with the compiled module. The browser glue itself lives
//! in `modbridge-web`; this crate carries the parts that can be unit
//! tested natively.

pub mod clock;
pub mod config;
pub mod contract;
pub mod error;
pub mod lifecycle;
pub mod startup;
pub mod viewport;

pub use contract::Ctx;
pub use error::BridgeError;
pub use lifecycle::Phase;
