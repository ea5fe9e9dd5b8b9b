//! Macros for declaring event and command enums.

/// Generate an [`Event`](crate::core::Event) enum.
///
/// Derives every trait the engine needs and implements `name()` from the
/// variant identifiers.
///
/// # Example
///
/// ```
/// use reflex::core::Event;
/// use reflex::event_enum;
///
/// event_enum! {
///     pub enum Sensor {
///         Bump,
///         Clear,
///     }
/// }
///
/// assert_eq!(Sensor::Bump.name(), "Bump");
/// ```
#[macro_export]
macro_rules! event_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Event for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}

/// Generate a [`Command`](crate::core::Command) enum.
///
/// # Example
///
/// ```
/// use reflex::command_enum;
/// use reflex::core::Command;
///
/// command_enum! {
///     pub enum Wheel {
///         Spin,
///     }
/// }
///
/// assert_eq!(Wheel::Spin.name(), "Spin");
/// ```
#[macro_export]
macro_rules! command_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize,
        )]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::Command for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }
        }
    };
}
