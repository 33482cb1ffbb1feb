//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring
//! Definitions, plus the errors raised while building Definitions and
//! composites.

pub mod definition;
pub mod error;
pub mod macros;

pub use definition::{DefinitionBuilder, StateBuilder};
pub use error::{BuildError, CombineError};
