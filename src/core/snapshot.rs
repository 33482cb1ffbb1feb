//! Observable state of a machine.

use super::ident::StateId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Index;

/// Result of reading a machine's state.
///
/// A leaf machine reports its current state identifier. A composite reports
/// one entry per child under the name it was combined with; nesting mirrors
/// the composition depth.
///
/// Serializes untagged, so a composite of two leaves reads as
/// `{"load":"idle","toggle":"OFF"}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MachineState {
    Leaf(StateId),
    Composite(BTreeMap<String, MachineState>),
}

impl MachineState {
    /// The state identifier, if this is a leaf.
    pub fn as_leaf(&self) -> Option<&StateId> {
        match self {
            Self::Leaf(state) => Some(state),
            Self::Composite(_) => None,
        }
    }

    /// The child entries, if this is a composite.
    pub fn as_composite(&self) -> Option<&BTreeMap<String, MachineState>> {
        match self {
            Self::Leaf(_) => None,
            Self::Composite(children) => Some(children),
        }
    }

    /// Look up a child entry by its composite key.
    pub fn get(&self, name: &str) -> Option<&MachineState> {
        self.as_composite().and_then(|children| children.get(name))
    }

    /// Follow a path of composite keys, e.g. `["betslip", "toggle"]`.
    pub fn at<'a, I>(&self, path: I) -> Option<&MachineState>
    where
        I: IntoIterator<Item = &'a str>,
    {
        path.into_iter()
            .try_fold(self, |current, name| current.get(name))
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }
}

impl From<StateId> for MachineState {
    fn from(state: StateId) -> Self {
        Self::Leaf(state)
    }
}

impl From<BTreeMap<String, MachineState>> for MachineState {
    fn from(children: BTreeMap<String, MachineState>) -> Self {
        Self::Composite(children)
    }
}

impl Index<&str> for MachineState {
    type Output = MachineState;

    /// # Panics
    ///
    /// Panics if this is a leaf or has no child named `name`.
    fn index(&self, name: &str) -> &MachineState {
        match self.get(name) {
            Some(child) => child,
            None => panic!("no child machine named '{}' in {:?}", name, self),
        }
    }
}

impl PartialEq<str> for MachineState {
    fn eq(&self, other: &str) -> bool {
        self.as_leaf().is_some_and(|state| state == other)
    }
}

impl PartialEq<&str> for MachineState {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<StateId> for MachineState {
    fn eq(&self, other: &StateId) -> bool {
        self.as_leaf() == Some(other)
    }
}
