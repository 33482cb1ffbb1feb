//! Combining machines.
//!
//! A [`Composite`] forwards every event to all of its children and reports
//! their states as one keyed [`MachineState`](crate::core::MachineState).
//! Because it implements [`StateMachine`](crate::core::StateMachine) itself,
//! a composite can be a child of another composite.
//!
//! Children are independent: a child ignores events it does not recognize,
//! and nothing coordinates or rolls back across children.

mod composite;

pub use composite::{combine, Composite, CompositeBuilder};
