//! Leaf machines built from a Definition.

use crate::core::{Context, ContextHandle, Event, MachineState, StateId, StateMachine};
use crate::definition::Definition;
use crate::engine::config::MachineConfig;
use crate::engine::error::MachineError;
use std::fmt;
use std::sync::Arc;

/// Create a machine from a Definition with the default configuration.
///
/// The machine starts in the Definition's initial state with its own copy of
/// the Definition's context. No handler runs during construction.
///
/// Accepts either an owned Definition or an `Arc` to one, so several
/// machines can share a single Definition.
pub fn create_machine<C: Context>(definition: impl Into<Arc<Definition<C>>>) -> Machine<C> {
    Machine::new(definition)
}

/// Create a machine with an explicit configuration.
pub fn create_machine_with<C: Context>(
    definition: impl Into<Arc<Definition<C>>>,
    config: MachineConfig,
) -> Machine<C> {
    Machine::with_config(definition, config)
}

/// A leaf machine: one current-state cell and one context cell.
///
/// State changes only through [`send`](Self::send).
pub struct Machine<C: Context = ()> {
    definition: Arc<Definition<C>>,
    current: StateId,
    context: C,
    config: MachineConfig,
}

impl<C: Context> Machine<C> {
    pub fn new(definition: impl Into<Arc<Definition<C>>>) -> Self {
        Self::with_config(definition, MachineConfig::default())
    }

    pub fn with_config(definition: impl Into<Arc<Definition<C>>>, config: MachineConfig) -> Self {
        let definition = definition.into();
        let current = definition.initial().clone();
        let context = definition.context().clone();

        Self {
            definition,
            current,
            context,
            config,
        }
    }

    /// Get current state (pure)
    pub fn current_state(&self) -> &StateId {
        &self.current
    }

    /// The machine's context as of the last completed transition.
    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn definition(&self) -> &Arc<Definition<C>> {
        &self.definition
    }

    pub fn config(&self) -> MachineConfig {
        self.config
    }

    /// Dispatch one event.
    ///
    /// Looks up the handler for (current state, event). Without one the event
    /// is ignored. Otherwise the handler runs with a handle to the context and
    /// its result becomes the new current state. On error the state is left
    /// unchanged.
    pub fn send(&mut self, event: impl Into<Event>) -> Result<(), MachineError> {
        self.dispatch(&event.into())
    }

    fn dispatch(&mut self, event: &Event) -> Result<(), MachineError> {
        let Some(handler) = self.definition.handler(self.current.as_str(), event.event.as_str()) else {
            tracing::debug!(state = %self.current, event = %event.event, "event ignored in current state");
            return Ok(());
        };

        tracing::trace!(state = %self.current, event = %event.event, "dispatching event");

        let result = handler(&mut ContextHandle::new(&mut self.context));
        let target = match result {
            Ok(result) => result.into_state(),
            Err(source) => {
                tracing::warn!(state = %self.current, event = %event.event, error = %source, "transition handler failed");
                return Err(MachineError::Handler {
                    state: self.current.clone(),
                    event: event.event.clone(),
                    source,
                });
            }
        };

        if !self.definition.declares(target.as_str()) {
            if self.config.is_strict() {
                return Err(MachineError::UndeclaredTarget {
                    state: self.current.clone(),
                    event: event.event.clone(),
                    target,
                });
            }
            tracing::warn!(state = %self.current, event = %event.event, to = %target, "transition to undeclared state");
        }

        tracing::debug!(from = %self.current, to = %target, event = %event.event, "transition");
        self.current = target;
        Ok(())
    }
}

impl<C: Context> StateMachine for Machine<C> {
    fn state(&self) -> MachineState {
        MachineState::Leaf(self.current.clone())
    }

    fn send(&mut self, event: &Event) -> Result<(), MachineError> {
        self.dispatch(event)
    }
}

impl<C: Context> Clone for Machine<C> {
    fn clone(&self) -> Self {
        Self {
            definition: Arc::clone(&self.definition),
            current: self.current.clone(),
            context: self.context.clone(),
            config: self.config,
        }
    }
}

impl<C: Context + fmt::Debug> fmt::Debug for Machine<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Machine")
            .field("current", &self.current)
            .field("context", &self.context)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
