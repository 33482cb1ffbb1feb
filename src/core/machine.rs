//! The capability shared by leaf and composite machines.

use super::ident::Event;
use super::snapshot::MachineState;
use crate::engine::MachineError;

/// A runnable machine: something that reports its state and accepts events.
///
/// Leaf machines and composites both implement this trait, which is what
/// makes composites nestable: a composite accepts any `StateMachine` as a
/// child, including another composite.
///
/// Events a machine does not recognize in its current state are ignored and
/// `send` returns `Ok(())`.
pub trait StateMachine {
    /// Read the current state. Never runs a handler.
    fn state(&self) -> MachineState;

    /// Dispatch one event.
    fn send(&mut self, event: &Event) -> Result<(), MachineError>;
}

impl<M: StateMachine + ?Sized> StateMachine for Box<M> {
    fn state(&self) -> MachineState {
        (**self).state()
    }

    fn send(&mut self, event: &Event) -> Result<(), MachineError> {
        (**self).send(event)
    }
}

impl<M: StateMachine + ?Sized> StateMachine for &mut M {
    fn state(&self) -> MachineState {
        (**self).state()
    }

    fn send(&mut self, event: &Event) -> Result<(), MachineError> {
        (**self).send(event)
    }
}
