//! State and event identifiers.
//!
//! Both are opaque string-backed names. A state identifier is only meaningful
//! relative to the Definition that declares it; an event identifier is only
//! meaningful to the states that declare a handler for it.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

macro_rules! identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create an identifier from anything string-like.
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Debug::fmt(&self.0, f)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(name: &str) -> Self {
                Self(name.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(name: String) -> Self {
                Self(name)
            }
        }

        impl From<&$name> for $name {
            fn from(name: &$name) -> Self {
                name.clone()
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }

        impl PartialEq<str> for $name {
            fn eq(&self, other: &str) -> bool {
                self.0 == other
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl PartialEq<$name> for &str {
            fn eq(&self, other: &$name) -> bool {
                *self == other.0
            }
        }
    };
}

identifier! {
    /// Name of a state declared in a Definition.
    StateId
}

identifier! {
    /// Name of an event a state may declare a handler for.
    EventId
}

/// The value passed to `send`.
///
/// Serializes as `{"event": "<name>"}`.
///
/// # Example
///
/// ```rust
/// use machina::core::Event;
///
/// let from_json: Event = serde_json::from_str(r#"{"event":"toggle"}"#).unwrap();
/// assert_eq!(from_json, Event::new("toggle"));
/// assert_eq!(from_json.event, "toggle");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Event {
    pub event: EventId,
}

impl Event {
    pub fn new(event: impl Into<EventId>) -> Self {
        Self {
            event: event.into(),
        }
    }
}

impl From<&str> for Event {
    fn from(event: &str) -> Self {
        Self::new(event)
    }
}

impl From<String> for Event {
    fn from(event: String) -> Self {
        Self::new(event)
    }
}

impl From<&Event> for Event {
    fn from(event: &Event) -> Self {
        event.clone()
    }
}

impl From<EventId> for Event {
    fn from(event: EventId) -> Self {
        Self { event }
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.event, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn identifiers_compare_with_str() {
        let state = StateId::new("OFF");
        assert_eq!(state, "OFF");
        assert_eq!("OFF", state);
        assert_ne!(state, "ON");
    }

    #[test]
    fn identifiers_serialize_transparently() {
        let json = serde_json::to_string(&StateId::from("idle")).unwrap();
        assert_eq!(json, r#""idle""#);

        let back: StateId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, "idle");
    }

    #[test]
    fn identifiers_can_be_looked_up_by_str() {
        let mut table = HashMap::new();
        table.insert(EventId::from("toggle"), 1);

        assert_eq!(table.get("toggle"), Some(&1));
        assert_eq!(table.get("load"), None);
    }

    #[test]
    fn event_deserializes_from_object() {
        let event: Event = serde_json::from_str(r#"{"event":"load"}"#).unwrap();
        assert_eq!(event.event, "load");
        assert_eq!(event.to_string(), "load");
    }

    #[test]
    fn debug_output_is_quoted_name() {
        assert_eq!(format!("{:?}", StateId::from("ON")), r#""ON""#);
    }
}
