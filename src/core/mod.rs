//! Core types shared by the engine and the combinator.
//!
//! - Identifiers for states and events, and the `Event` value passed to `send`
//! - Transition results and the `IntoTransition` conversion for handlers
//! - The context trait and the handle passed to context-bearing handlers
//! - The `StateMachine` capability and the `MachineState` snapshot it returns

mod context;
mod ident;
mod machine;
mod snapshot;
mod transition;

pub use context::{Context, ContextHandle};
pub use ident::{Event, EventId, StateId};
pub use machine::StateMachine;
pub use snapshot::MachineState;
pub use transition::{Goto, HandlerError, IntoTransition, TransitionResult};
