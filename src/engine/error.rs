//! Runtime errors raised by `send`.

use crate::core::{EventId, HandlerError, StateId};
use thiserror::Error;

/// Errors that can occur while dispatching an event.
///
/// Unrecognized events are not errors; they are ignored.
#[derive(Debug, Error)]
pub enum MachineError {
    /// The transition handler itself failed. The state is unchanged, but any
    /// context mutation the handler made before failing stays in effect.
    #[error("Handler for '{event}' in state '{state}' failed: {source}")]
    Handler {
        state: StateId,
        event: EventId,
        source: HandlerError,
    },

    /// The handler named a state the Definition does not declare (strict mode).
    #[error("Handler for '{event}' in state '{state}' returned undeclared state '{target}'")]
    UndeclaredTarget {
        state: StateId,
        event: EventId,
        target: StateId,
    },

    /// One or more children of a composite failed on a broadcast event.
    #[error("{} child machine(s) failed on '{event}'", .failures.len())]
    Broadcast {
        event: EventId,
        failures: Vec<ChildFailure>,
    },
}

/// Failure of one named child during a broadcast.
#[derive(Debug, Error)]
#[error("Machine '{name}': {error}")]
pub struct ChildFailure {
    pub name: String,
    #[source]
    pub error: MachineError,
}

impl MachineError {
    /// Failures of the named children, if this is a broadcast error.
    pub fn failures(&self) -> &[ChildFailure] {
        match self {
            Self::Broadcast { failures, .. } => failures,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn handler_error_keeps_source() {
        let err = MachineError::Handler {
            state: "idle".into(),
            event: "load".into(),
            source: "disk full".into(),
        };

        assert_eq!(
            err.to_string(),
            "Handler for 'load' in state 'idle' failed: disk full"
        );
        assert_eq!(err.source().unwrap().to_string(), "disk full");
    }

    #[test]
    fn broadcast_error_counts_failures() {
        let err = MachineError::Broadcast {
            event: "toggle".into(),
            failures: vec![ChildFailure {
                name: "light".into(),
                error: MachineError::UndeclaredTarget {
                    state: "OFF".into(),
                    event: "toggle".into(),
                    target: "DIMMED".into(),
                },
            }],
        };

        assert_eq!(err.to_string(), "1 child machine(s) failed on 'toggle'");
        assert_eq!(err.failures().len(), 1);
        assert_eq!(err.failures()[0].name, "light");
    }
}
