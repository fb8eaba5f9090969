use crate::error::BridgeError;

/// Bridge lifecycle.
///
/// The bridge only ever moves forward: `Unloaded → Loading → Started →
/// Running`. There is no pause and no explicit stop; the terminal state
/// is the page unloading, which the bridge never observes. Skipping a
/// phase or moving backward is a programming error and is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Unloaded,
    Loading,
    Started,
    Running,
}

impl Phase {
    fn successor(self) -> Option<Phase> {
        match self {
            Phase::Unloaded => Some(Phase::Loading),
            Phase::Loading => Some(Phase::Started),
            Phase::Started => Some(Phase::Running),
            Phase::Running => None,
        }
    }

    /// Move to `next`, which must be the immediate successor phase.
    pub fn advance(self, next: Phase) -> Result<Phase, BridgeError> {
        if self.successor() == Some(next) {
            Ok(next)
        } else {
            Err(BridgeError::Phase { from: self, to: next })
        }
    }

    /// Whether module entry points may be invoked in this phase.
    pub fn module_callable(self) -> bool {
        matches!(self, Phase::Started | Phase::Running)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phases_advance_in_order() {
        let phase = Phase::Unloaded
            .advance(Phase::Loading)
            .and_then(|p| p.advance(Phase::Started))
            .and_then(|p| p.advance(Phase::Running))
            .unwrap();
        assert_eq!(phase, Phase::Running);
    }

    #[test]
    fn skipping_a_phase_is_rejected() {
        let err = Phase::Unloaded.advance(Phase::Started).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::Phase {
                from: Phase::Unloaded,
                to: Phase::Started
            }
        ));
    }

    #[test]
    fn no_transition_out_of_running() {
        assert!(Phase::Running.advance(Phase::Unloaded).is_err());
        assert!(Phase::Running.advance(Phase::Running).is_err());
    }

    #[test]
    fn module_calls_require_completed_startup() {
        assert!(!Phase::Unloaded.module_callable());
        assert!(!Phase::Loading.module_callable());
        assert!(Phase::Started.module_callable());
        assert!(Phase::Running.module_callable());
    }
}
