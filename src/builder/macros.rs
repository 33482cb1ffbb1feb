//! Macros for ergonomic machine construction.

/// Generate an enum whose variants name the states of a machine.
///
/// The enum converts into [`StateId`](crate::core::StateId), parses back from
/// a state name, and compares equal to the matching `StateId` and leaf
/// [`MachineState`](crate::core::MachineState).
///
/// # Example
///
/// ```
/// use machina::{create_machine, state_enum, Definition};
///
/// state_enum! {
///     pub enum Light {
///         On,
///         Off,
///     }
/// }
///
/// let definition = Definition::builder(Light::Off)
///     .state(Light::On, |s| s.goto("toggle", Light::Off))
///     .state(Light::Off, |s| s.goto("toggle", Light::On))
///     .build()
///     .unwrap();
///
/// let mut machine = create_machine(definition);
/// machine.send("toggle").unwrap();
///
/// assert_eq!(*machine.current_state(), Light::On);
/// assert_eq!(Light::from_name("Off"), Some(Light::Off));
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $(#[$meta])*
            $vis enum $name {
                $($(#[$variant_meta])* $variant),+
            }
        }

        impl ::core::convert::From<$name> for $crate::core::StateId {
            fn from(state: $name) -> Self {
                $crate::core::StateId::new(state.as_str())
            }
        }

        impl ::core::cmp::PartialEq<$name> for $crate::core::StateId {
            fn eq(&self, other: &$name) -> bool {
                self.as_str() == other.as_str()
            }
        }

        impl ::core::cmp::PartialEq<$name> for $crate::core::MachineState {
            fn eq(&self, other: &$name) -> bool {
                *self == other.as_str()
            }
        }
    };
}

/// Generate an enum whose variants name the events a machine accepts.
///
/// The enum converts into [`EventId`](crate::core::EventId) and
/// [`Event`](crate::core::Event), so variants can be passed to `send`.
///
/// # Example
///
/// ```
/// use machina::{create_machine, event_enum, Definition};
///
/// event_enum! {
///     enum Door {
///         Open,
///         Close,
///     }
/// }
///
/// let definition = Definition::builder("closed")
///     .state("closed", |s| s.goto(Door::Open, "open"))
///     .state("open", |s| s.goto(Door::Close, "closed"))
///     .build()
///     .unwrap();
///
/// let mut machine = create_machine(definition);
/// machine.send(Door::Open).unwrap();
/// assert_eq!(machine.current_state(), "open");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+ $(,)?
        }
    ) => {
        $crate::__identifier_enum! {
            $(#[$meta])*
            $vis enum $name {
                $($(#[$variant_meta])* $variant),+
            }
        }

        impl ::core::convert::From<$name> for $crate::core::EventId {
            fn from(event: $name) -> Self {
                $crate::core::EventId::new(event.as_str())
            }
        }

        impl ::core::convert::From<$name> for $crate::core::Event {
            fn from(event: $name) -> Self {
                $crate::core::Event::new(event)
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __identifier_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$name] = &[$(Self::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),+
                }
            }

            pub fn from_name(name: &str) -> ::core::option::Option<Self> {
                match name {
                    $(stringify!($variant) => ::core::option::Option::Some(Self::$variant),)+
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Combine machines under the names given, as [`combine`](crate::combine) does.
///
/// Evaluates to `Result<Composite, CombineError>`; names must be unique.
///
/// # Example
///
/// ```
/// use machina::{combine, create_machine, Definition};
///
/// let toggle = create_machine(
///     Definition::builder("OFF")
///         .state("ON", |s| s.goto("toggle", "OFF"))
///         .state("OFF", |s| s.goto("toggle", "ON"))
///         .build()
///         .unwrap(),
/// );
/// let load = create_machine(
///     Definition::builder("idle")
///         .state("idle", |s| s.goto("load", "loading"))
///         .state("loading", |s| s.goto("loaded", "idle"))
///         .build()
///         .unwrap(),
/// );
///
/// let mut machine = combine! { load: load, toggle: toggle }.unwrap();
/// machine.send("toggle").unwrap();
///
/// assert_eq!(machine.state()["toggle"], "ON");
/// assert_eq!(machine.state()["load"], "idle");
/// ```
#[macro_export]
macro_rules! combine {
    ($($name:ident : $machine:expr),* $(,)?) => {
        $crate::combinator::Composite::builder()
            $(.with(stringify!($name), $machine))*
            .build()
    };
}
