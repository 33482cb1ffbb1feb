//! Machine configuration.

use serde::{Deserialize, Serialize};

/// How `send` treats a handler result naming an undeclared state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strictness {
    /// Reject the transition: `send` fails and the state is unchanged
    #[default]
    Strict,

    /// Assign the target anyway and log a warning
    Lenient,
}

/// Options applied when creating a machine.
///
/// # Example
///
/// ```rust
/// use machina::engine::{MachineConfig, Strictness};
///
/// let config: MachineConfig = serde_json::from_str(r#"{"strictness":"lenient"}"#).unwrap();
/// assert_eq!(config.strictness, Strictness::Lenient);
///
/// let config: MachineConfig = serde_json::from_str("{}").unwrap();
/// assert_eq!(config, MachineConfig::default());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineConfig {
    pub strictness: Strictness,
}

impl MachineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn strictness(mut self, strictness: Strictness) -> Self {
        self.strictness = strictness;
        self
    }

    pub fn lenient() -> Self {
        Self::new().strictness(Strictness::Lenient)
    }

    pub fn is_strict(&self) -> bool {
        self.strictness == Strictness::Strict
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_strict() {
        assert!(MachineConfig::default().is_strict());
        assert!(!MachineConfig::lenient().is_strict());
    }

    #[test]
    fn strictness_serializes_snake_case() {
        let json = serde_json::to_string(&MachineConfig::lenient()).unwrap();
        assert_eq!(json, r#"{"strictness":"lenient"}"#);
    }

    #[test]
    fn unknown_strictness_is_rejected() {
        let result: Result<MachineConfig, _> = serde_json::from_str(r#"{"strictness":"loose"}"#);
        assert!(result.is_err());
    }
}
