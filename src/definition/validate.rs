//! Validation rules for Definitions.
//!
//! Rules are checked together and every violation is reported, using
//! stillwater's `Validation` to accumulate failures instead of stopping at
//! the first one.

use crate::core::{EventId, StateId};
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;
use thiserror::Error;

/// A single problem found in a Definition.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum DefinitionViolation {
    #[error("Initial state '{initial}' is not declared")]
    UndeclaredInitial { initial: StateId },

    #[error("State '{state}' is declared more than once")]
    DuplicateState { state: StateId },

    #[error("Event '{event}' is declared more than once in state '{state}'")]
    DuplicateEvent { state: StateId, event: EventId },

    #[error("State identifier is empty")]
    EmptyState,

    #[error("Event identifier in state '{state}' is empty")]
    EmptyEvent { state: StateId },
}

type Check = Validation<(), NonEmptyVec<DefinitionViolation>>;

/// The shape of a Definition as declared, before it is indexed.
pub(crate) struct Outline<'a> {
    pub initial: &'a StateId,
    pub states: Vec<(&'a StateId, Vec<&'a EventId>)>,
}

fn check(ok: bool, violation: impl FnOnce() -> DefinitionViolation) -> Check {
    if ok {
        Validation::success(())
    } else {
        Validation::fail(violation())
    }
}

/// Check every rule against `outline`, accumulating ALL violations.
pub(crate) fn validate(outline: &Outline<'_>) -> Check {
    let mut checks: Vec<Check> = Vec::new();
    let mut seen_states = HashSet::new();

    for (state, events) in &outline.states {
        checks.push(check(!state.is_empty(), || DefinitionViolation::EmptyState));
        checks.push(check(seen_states.insert(*state), || {
            DefinitionViolation::DuplicateState {
                state: (*state).clone(),
            }
        }));

        let mut seen_events = HashSet::new();
        for event in events {
            checks.push(check(!event.is_empty(), || DefinitionViolation::EmptyEvent {
                state: (*state).clone(),
            }));
            checks.push(check(seen_events.insert(*event), || {
                DefinitionViolation::DuplicateEvent {
                    state: (*state).clone(),
                    event: (*event).clone(),
                }
            }));
        }
    }

    checks.push(check(seen_states.contains(outline.initial), || {
        DefinitionViolation::UndeclaredInitial {
            initial: outline.initial.clone(),
        }
    }));

    Validation::all_vec(checks).map(|_| ())
}

/// Flatten a failed validation into a plain list.
pub(crate) fn violations(result: Check) -> Vec<DefinitionViolation> {
    match result {
        Validation::Success(_) => Vec::new(),
        Validation::Failure(errors) => errors.iter().cloned().collect(),
    }
}
