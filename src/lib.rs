//! Machina: a minimal finite state machine runtime
//!
//! Describe a machine declaratively (its states, the events each state
//! accepts, and the handler computing the next state), then drive it with
//! `send` and read it with `state`. Machines come in two flavors: memoryless
//! automata, and automata with a shared mutable context their handlers can
//! read and update. Independent machines can be combined into one that
//! broadcasts events to all of them.
//!
//! # Core Concepts
//!
//! - **Definition**: validated description of states, transitions and initial values
//! - **Machine**: a running instance with one current-state cell and one context cell
//! - **Composite**: named machines driven as one, nestable to any depth
//!
//! Execution is synchronous: `send` runs at most one handler per machine and
//! returns once the state cell is updated.
//!
//! # Example
//!
//! ```rust
//! use machina::{create_machine, Definition, Goto};
//! use serde_json::{json, Map, Value};
//!
//! let context: Map<String, Value> = json!({ "count": 0 }).as_object().cloned().unwrap();
//!
//! let definition = Definition::with_context("empty", context)
//!     .state("empty", |s| {
//!         s.on_context("inc", |ctx| {
//!             let count = ctx.get()["count"].as_i64().unwrap_or(0);
//!             ctx.set_field("count", count + 1);
//!             "not_empty"
//!         })
//!     })
//!     .state("not_empty", |s| {
//!         s.on_context("dec", |ctx| {
//!             let count = ctx.get()["count"].as_i64().unwrap_or(0) - 1;
//!             ctx.set_field("count", count);
//!             if count == 0 { Goto::new("empty") } else { Goto::new("not_empty") }
//!         })
//!     })
//!     .build()
//!     .unwrap();
//!
//! let mut counter = create_machine(definition);
//! counter.send("inc").unwrap();
//! assert_eq!(counter.current_state(), "not_empty");
//!
//! counter.send("dec").unwrap();
//! assert_eq!(counter.current_state(), "empty");
//! assert_eq!(counter.context()["count"], json!(0));
//! ```

pub mod builder;
pub mod combinator;
pub mod core;
pub mod definition;
pub mod engine;

// Re-export commonly used types
pub use crate::builder::{BuildError, CombineError, DefinitionBuilder};
pub use crate::combinator::{combine, Composite};
pub use crate::core::{Context, ContextHandle, Event, Goto, MachineState, StateId, StateMachine};
pub use crate::definition::Definition;
pub use crate::engine::{create_machine, create_machine_with, Machine, MachineConfig, MachineError};
