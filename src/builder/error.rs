//! Build errors for Definitions and composites.

use crate::definition::DefinitionViolation;
use thiserror::Error;

/// A Definition failed validation. Carries every violation found.
#[derive(Debug, Error)]
#[error("Invalid machine definition: {}", render(.violations))]
pub struct BuildError {
    violations: Vec<DefinitionViolation>,
}

impl BuildError {
    pub(crate) fn new(violations: Vec<DefinitionViolation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[DefinitionViolation] {
        &self.violations
    }
}

fn render(violations: &[DefinitionViolation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur when combining machines.
#[derive(Debug, Error, PartialEq)]
pub enum CombineError {
    #[error("Machine name '{0}' is used more than once")]
    DuplicateName(String),
}
