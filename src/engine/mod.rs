//! The machine engine.
//!
//! Turns a [`Definition`](crate::definition::Definition) into a runnable
//! [`Machine`] and implements event dispatch:
//!
//! 1. Look up the handler for (current state, event). None: ignore the event.
//! 2. Run the handler, handing it the machine's context.
//! 3. Normalize the result (bare identifier or `Goto`) to a state identifier.
//! 4. Assign it to the state cell. Nothing else ever changes the state.
//!
//! Memoryless machines are `Machine<()>`; context-bearing machines carry any
//! [`Context`](crate::core::Context) type.

mod config;
mod error;
mod machine;

pub use config::{MachineConfig, Strictness};
pub use error::{ChildFailure, MachineError};
pub use machine::{create_machine, create_machine_with, Machine};
