//! The validated description of a machine.
//!
//! A [`Definition`] is pure data: the initial state, the initial context,
//! and a two-level table mapping state identifier to event identifier to
//! transition handler. It is only obtainable through the builder, which
//! validates it, so every Definition's initial state is declared.
//!
//! # Example
//!
//! ```rust
//! use machina::definition::Definition;
//!
//! let definition = Definition::builder("OFF")
//!     .state("ON", |s| s.on("toggle", || "OFF"))
//!     .state("OFF", |s| s.on("toggle", || "ON"))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(definition.initial(), "OFF");
//! assert!(definition.accepts("ON", "toggle"));
//! assert!(!definition.accepts("ON", "load"));
//! ```

mod validate;

pub use validate::DefinitionViolation;
pub(crate) use validate::{validate, violations, Outline};

use crate::builder::DefinitionBuilder;
use crate::core::{Context, ContextHandle, EventId, HandlerError, StateId, TransitionResult};
use std::collections::HashMap;
use std::fmt;

/// A boxed transition handler, normalized to the context-bearing signature.
///
/// Memoryless handlers are stored with the same signature and simply ignore
/// the (unit) context handle.
pub(crate) type Handler<C> = Box<
    dyn Fn(&mut ContextHandle<'_, C>) -> Result<TransitionResult, HandlerError> + Send + Sync,
>;

/// Event table of one state.
pub(crate) type EventTable<C> = HashMap<EventId, Handler<C>>;

/// Static description of a machine.
pub struct Definition<C: Context = ()> {
    initial: StateId,
    context: C,
    states: HashMap<StateId, EventTable<C>>,
}

impl Definition<()> {
    /// Start building a memoryless Definition.
    pub fn builder(initial: impl Into<StateId>) -> DefinitionBuilder<()> {
        DefinitionBuilder::new(initial)
    }
}

impl<C: Context> Definition<C> {
    /// Start building a context-bearing Definition.
    pub fn with_context(initial: impl Into<StateId>, context: C) -> DefinitionBuilder<C> {
        DefinitionBuilder::with_context(initial, context)
    }

    /// Assemble an already validated Definition.
    pub(crate) fn from_parts(
        initial: StateId,
        context: C,
        states: HashMap<StateId, EventTable<C>>,
    ) -> Self {
        Self {
            initial,
            context,
            states,
        }
    }

    pub fn initial(&self) -> &StateId {
        &self.initial
    }

    /// The declared initial context. Machines work on their own copy.
    pub fn context(&self) -> &C {
        &self.context
    }

    /// All declared states, in no particular order.
    pub fn states(&self) -> impl Iterator<Item = &StateId> {
        self.states.keys()
    }

    /// Events `state` declares a handler for, or `None` if `state` is undeclared.
    pub fn events(&self, state: &str) -> Option<impl Iterator<Item = &EventId>> {
        self.states.get(state).map(|table| table.keys())
    }

    pub fn declares(&self, state: &str) -> bool {
        self.states.contains_key(state)
    }

    /// Whether `state` has a handler for `event`.
    pub fn accepts(&self, state: &str, event: &str) -> bool {
        self.handler(state, event).is_some()
    }

    pub(crate) fn handler(&self, state: &str, event: &str) -> Option<&Handler<C>> {
        self.states.get(state).and_then(|table| table.get(event))
    }
}

impl<C: Context + fmt::Debug> fmt::Debug for Definition<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut states: Vec<_> = self
            .states
            .iter()
            .map(|(state, table)| {
                let mut events: Vec<_> = table.keys().collect();
                events.sort();
                (state, events)
            })
            .collect();
        states.sort();

        f.debug_struct("Definition")
            .field("initial", &self.initial)
            .field("context", &self.context)
            .field("states", &states)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Map, Value};

    fn loader() -> Definition {
        Definition::builder("idle")
            .state("idle", |s| s.on("load", || "loading"))
            .state("loading", |s| s.on("loaded", || "idle").on("cancel", || "idle"))
            .build()
            .unwrap()
    }

    #[test]
    fn lookup_is_two_level() {
        let definition = loader();

        assert!(definition.accepts("idle", "load"));
        assert!(!definition.accepts("idle", "loaded"));
        assert!(definition.accepts("loading", "cancel"));
        assert!(!definition.accepts("missing", "load"));
    }

    #[test]
    fn events_lists_state_table() {
        let definition = loader();

        let mut events: Vec<_> = definition.events("loading").unwrap().collect();
        events.sort();
        assert_eq!(events, vec!["cancel", "loaded"]);
        assert!(definition.events("missing").is_none());
    }

    #[test]
    fn states_lists_every_declared_state() {
        let definition = loader();

        let mut states: Vec<_> = definition.states().map(StateId::as_str).collect();
        states.sort();
        assert_eq!(states, vec!["idle", "loading"]);
        assert!(definition.declares("idle"));
        assert!(!definition.declares("done"));
    }

    #[test]
    fn context_is_kept_as_declared() {
        let context: Map<String, Value> = json!({ "count": 0 }).as_object().cloned().unwrap();
        let definition = Definition::with_context("empty", context)
            .terminal("empty")
            .build()
            .unwrap();

        assert_eq!(definition.context()["count"], json!(0));
    }

    #[test]
    fn debug_lists_states_sorted() {
        let rendered = format!("{:?}", loader());
        assert_eq!(
            rendered,
            r#"Definition { initial: "idle", context: (), states: [("idle", ["load"]), ("loading", ["cancel", "loaded"])] }"#
        );
    }
}
