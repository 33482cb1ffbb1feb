//! Builders for Definitions and their states.

use crate::builder::error::BuildError;
use crate::core::{Context, ContextHandle, EventId, IntoTransition, StateId, TransitionResult};
use crate::definition::{self, Definition, EventTable, Handler, Outline};
use std::collections::HashMap;

fn boxed<C, F>(handler: F) -> Handler<C>
where
    C: Context,
    F: Fn(&mut ContextHandle<'_, C>) -> Result<TransitionResult, crate::core::HandlerError>
        + Send
        + Sync
        + 'static,
{
    Box::new(handler)
}

/// Builder for one state's event table.
pub struct StateBuilder<C: Context> {
    name: StateId,
    on: Vec<(EventId, Handler<C>)>,
}

impl<C: Context> StateBuilder<C> {
    pub fn new(name: impl Into<StateId>) -> Self {
        Self {
            name: name.into(),
            on: Vec::new(),
        }
    }

    /// Declare a memoryless handler for `event`.
    ///
    /// The handler takes no input and returns the next state, bare or as a
    /// [`Goto`](crate::core::Goto).
    pub fn on<F, R>(mut self, event: impl Into<EventId>, handler: F) -> Self
    where
        F: Fn() -> R + Send + Sync + 'static,
        R: IntoTransition,
    {
        self.on
            .push((event.into(), boxed(move |_| handler().into_transition())));
        self
    }

    /// Declare a context-bearing handler for `event`.
    pub fn on_context<F, R>(mut self, event: impl Into<EventId>, handler: F) -> Self
    where
        F: Fn(&mut ContextHandle<'_, C>) -> R + Send + Sync + 'static,
        R: IntoTransition,
    {
        self.on
            .push((event.into(), boxed(move |context| handler(context).into_transition())));
        self
    }

    /// Declare an unconditional transition from this state to `target`.
    pub fn goto(self, event: impl Into<EventId>, target: impl Into<StateId>) -> Self {
        let target = target.into();
        self.on(event, move || target.clone())
    }

    pub fn name(&self) -> &StateId {
        &self.name
    }
}

/// Builder for [`Definition`]s with a fluent API.
///
/// States are collected as declared and only indexed in [`build`](Self::build),
/// after validation, so duplicates are reported instead of silently replaced.
pub struct DefinitionBuilder<C: Context = ()> {
    initial: StateId,
    context: C,
    states: Vec<StateBuilder<C>>,
}

impl DefinitionBuilder<()> {
    /// Create a builder for a memoryless Definition.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self::with_context(initial, ())
    }
}

impl<C: Context> DefinitionBuilder<C> {
    /// Create a builder for a context-bearing Definition.
    pub fn with_context(initial: impl Into<StateId>, context: C) -> Self {
        Self {
            initial: initial.into(),
            context,
            states: Vec::new(),
        }
    }

    /// Declare a state and configure its event table.
    pub fn state<F>(self, name: impl Into<StateId>, configure: F) -> Self
    where
        F: FnOnce(StateBuilder<C>) -> StateBuilder<C>,
    {
        let state = configure(StateBuilder::new(name));
        self.add_state(state)
    }

    /// Declare a state that accepts no events.
    pub fn terminal(self, name: impl Into<StateId>) -> Self {
        self.add_state(StateBuilder::new(name))
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: StateBuilder<C>) -> Self {
        self.states.push(state);
        self
    }

    /// Validate and build the Definition.
    /// Returns every violation found if the Definition is malformed.
    pub fn build(self) -> Result<Definition<C>, BuildError> {
        let outline = Outline {
            initial: &self.initial,
            states: self
                .states
                .iter()
                .map(|state| (&state.name, state.on.iter().map(|(event, _)| event).collect()))
                .collect(),
        };

        let found = definition::violations(definition::validate(&outline));
        if !found.is_empty() {
            return Err(BuildError::new(found));
        }

        let states: HashMap<StateId, EventTable<C>> = self
            .states
            .into_iter()
            .map(|state| (state.name, state.on.into_iter().collect()))
            .collect();

        Ok(Definition::from_parts(self.initial, self.context, states))
    }
}
