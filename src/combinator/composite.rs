//! Composite machines.

use crate::builder::CombineError;
use crate::core::{Event, MachineState, StateMachine};
use crate::engine::{ChildFailure, MachineError};
use std::collections::{BTreeMap, HashSet};
use std::fmt;

/// Combine named machines into one.
///
/// `send` on the result broadcasts to every child in the order given here;
/// `state` reports each child's state under its name. Names must be unique.
pub fn combine<I, N>(machines: I) -> Result<Composite, CombineError>
where
    I: IntoIterator<Item = (N, Box<dyn StateMachine>)>,
    N: Into<String>,
{
    machines
        .into_iter()
        .fold(Composite::builder(), |builder, (name, machine)| {
            builder.with_boxed(name, machine)
        })
        .build()
}

/// Machine made of named child machines. Owns no state of its own.
pub struct Composite {
    children: Vec<(String, Box<dyn StateMachine>)>,
}

impl Composite {
    pub fn builder() -> CompositeBuilder {
        CompositeBuilder::new()
    }

    /// Child names, in broadcast order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.children.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Each child's current state under its name, read fresh on every call.
    pub fn state(&self) -> MachineState {
        MachineState::Composite(
            self.children
                .iter()
                .map(|(name, machine)| (name.clone(), machine.state()))
                .collect::<BTreeMap<_, _>>(),
        )
    }

    /// Broadcast one event to every child.
    pub fn send(&mut self, event: impl Into<Event>) -> Result<(), MachineError> {
        self.broadcast(&event.into())
    }

    /// Every child receives the event, even after an earlier child fails.
    /// Failures are reported together once the broadcast completes.
    fn broadcast(&mut self, event: &Event) -> Result<(), MachineError> {
        tracing::trace!(event = %event.event, children = self.children.len(), "broadcasting event");

        let failures: Vec<ChildFailure> = self
            .children
            .iter_mut()
            .filter_map(|(name, machine)| {
                machine.send(event).err().map(|error| ChildFailure {
                    name: name.clone(),
                    error,
                })
            })
            .collect();

        if failures.is_empty() {
            Ok(())
        } else {
            Err(MachineError::Broadcast {
                event: event.event.clone(),
                failures,
            })
        }
    }
}

impl StateMachine for Composite {
    fn state(&self) -> MachineState {
        Composite::state(self)
    }

    fn send(&mut self, event: &Event) -> Result<(), MachineError> {
        self.broadcast(event)
    }
}

impl fmt::Debug for Composite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("children", &self.names().collect::<Vec<_>>())
            .finish()
    }
}

/// Builder for [`Composite`]s with a fluent API.
#[derive(Default)]
pub struct CompositeBuilder {
    children: Vec<(String, Box<dyn StateMachine>)>,
}

impl CompositeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child machine (leaf or composite) under `name`.
    pub fn with<M>(self, name: impl Into<String>, machine: M) -> Self
    where
        M: StateMachine + 'static,
    {
        self.with_boxed(name, Box::new(machine))
    }

    pub fn with_boxed(mut self, name: impl Into<String>, machine: Box<dyn StateMachine>) -> Self {
        self.children.push((name.into(), machine));
        self
    }

    /// Build the composite.
    /// Returns an error if a name is used twice.
    pub fn build(self) -> Result<Composite, CombineError> {
        let mut seen = HashSet::new();
        for (name, _) in &self.children {
            if !seen.insert(name.as_str()) {
                return Err(CombineError::DuplicateName(name.clone()));
            }
        }

        Ok(Composite {
            children: self.children,
        })
    }
}
