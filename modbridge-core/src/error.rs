use thiserror::Error;

use crate::lifecycle::Phase;

/// Errors the bridge can hit while bringing the module up.
///
/// Loading and element lookup are fatal with no retry: the page either
/// boots completely or stays broken in a developer-visible way. Frame
/// faults are not represented here; the frame driver logs them and keeps
/// the loop alive.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// The module asset could not be fetched, compiled, or linked.
    #[error("failed to load module from `{path}`: {reason}")]
    Load { path: String, reason: String },

    /// The instantiated module does not export a required entry point.
    #[error("module export `{0}` is missing or not callable")]
    MissingExport(&'static str),

    /// A required document element (the canvas) is absent.
    #[error("document element `{0}` not found")]
    MissingElement(String),

    /// Out-of-order lifecycle transition.
    #[error("invalid phase transition: {from:?} -> {to:?}")]
    Phase { from: Phase, to: Phase },
}

impl BridgeError {
    pub fn load(path: &str, reason: impl Into<String>) -> Self {
        BridgeError::Load {
            path: path.to_owned(),
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_error_names_the_asset() {
        let err = BridgeError::load("main.wasm", "HTTP 404");
        assert_eq!(
            err.to_string(),
            "failed to load module from `main.wasm`: HTTP 404"
        );
    }

    #[test]
    fn missing_export_names_the_entry_point() {
        let err = BridgeError::MissingExport("frame");
        assert_eq!(
            err.to_string(),
            "module export `frame` is missing or not callable"
        );
    }

    #[test]
    fn missing_element_names_the_id() {
        let err = BridgeError::MissingElement("canvas".to_owned());
        assert_eq!(err.to_string(), "document element `canvas` not found");
    }
}
