//! Transition results returned by handlers.
//!
//! A handler may name its next state either as a bare identifier or as a
//! structured `{ target }` value. Both shapes are normalized into a single
//! [`StateId`] right after the handler returns, so the engine only ever
//! deals with one canonical value.

use super::ident::StateId;
use std::error::Error as StdError;

/// Boxed error raised by a transition handler.
pub type HandlerError = Box<dyn StdError + Send + Sync + 'static>;

/// Structured transition result carrying the target state.
///
/// # Example
///
/// ```rust
/// use machina::core::{Goto, TransitionResult};
///
/// let bare = TransitionResult::from("ON");
/// let structured = TransitionResult::from(Goto::new("ON"));
///
/// assert_eq!(bare.into_state(), structured.into_state());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Goto {
    pub target: StateId,
}

impl Goto {
    pub fn new(target: impl Into<StateId>) -> Self {
        Self {
            target: target.into(),
        }
    }
}

/// The two result shapes a handler may produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransitionResult {
    /// Bare state identifier
    State(StateId),

    /// Structured result with a `target` field
    Target(Goto),
}

impl TransitionResult {
    /// Normalize to the new state identifier.
    pub fn into_state(self) -> StateId {
        match self {
            Self::State(state) => state,
            Self::Target(Goto { target }) => target,
        }
    }

    pub fn state(&self) -> &StateId {
        match self {
            Self::State(state) => state,
            Self::Target(goto) => &goto.target,
        }
    }
}

impl From<StateId> for TransitionResult {
    fn from(state: StateId) -> Self {
        Self::State(state)
    }
}

impl From<&str> for TransitionResult {
    fn from(state: &str) -> Self {
        Self::State(state.into())
    }
}

impl From<String> for TransitionResult {
    fn from(state: String) -> Self {
        Self::State(state.into())
    }
}

impl From<Goto> for TransitionResult {
    fn from(goto: Goto) -> Self {
        Self::Target(goto)
    }
}

/// Conversion from a handler's return value into a transition outcome.
///
/// Implemented for every accepted result shape, and for `Result`s of those
/// shapes so fallible handlers can use `?`.
pub trait IntoTransition {
    fn into_transition(self) -> Result<TransitionResult, HandlerError>;
}

impl IntoTransition for TransitionResult {
    fn into_transition(self) -> Result<TransitionResult, HandlerError> {
        Ok(self)
    }
}

impl IntoTransition for StateId {
    fn into_transition(self) -> Result<TransitionResult, HandlerError> {
        Ok(self.into())
    }
}

impl IntoTransition for &str {
    fn into_transition(self) -> Result<TransitionResult, HandlerError> {
        Ok(self.into())
    }
}

impl IntoTransition for String {
    fn into_transition(self) -> Result<TransitionResult, HandlerError> {
        Ok(self.into())
    }
}

impl IntoTransition for Goto {
    fn into_transition(self) -> Result<TransitionResult, HandlerError> {
        Ok(self.into())
    }
}

impl<T, E> IntoTransition for Result<T, E>
where
    T: Into<TransitionResult>,
    E: Into<HandlerError>,
{
    fn into_transition(self) -> Result<TransitionResult, HandlerError> {
        self.map(Into::into).map_err(Into::into)
    }
}
