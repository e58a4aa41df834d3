//! Macros for ergonomic state machine construction.

/// Generate State trait implementation for simple enums.
///
/// The enum gets the derives the transition graph needs (`Clone`, `Copy`,
/// `Eq`, `Hash`, serde) and a `State` impl whose `name()` is the variant
/// identifier.
///
/// # Example
///
/// ```
/// use switchyard::state_enum;
/// use switchyard::core::State;
///
/// state_enum! {
///     pub enum Turnstile {
///         Locked,
///         Unlocked,
///         Broken,
///     }
///     final: [Broken]
/// }
///
/// assert_eq!(Turnstile::Unlocked.name(), "Unlocked");
/// assert!(Turnstile::Broken.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    _ => false,
                }
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{State, Table};
    use crate::engine::Fsm;

    state_enum! {
        enum Light {
            Red,
            Green,
            Yellow,
            Off,
        }
        final: [Off]
    }

    #[test]
    fn state_enum_macro_generates_trait() {
        assert_eq!(Light::Red.name(), "Red");
        assert!(!Light::Green.is_final());
        assert!(Light::Off.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum Minimal {
                One,
                Two,
            }
        }

        assert!(!Minimal::One.is_final());
        assert_eq!(Minimal::Two.name(), "Two");
    }

    #[test]
    fn generated_enum_drives_a_machine() {
        let table = Table::new()
            .with("next", Light::Red, Light::Green)
            .with("next", Light::Green, Light::Yellow)
            .with("next", Light::Yellow, Light::Red)
            .with("shutdown", Light::Red, Light::Off);
        let fsm = Fsm::new(false, Light::Red, &table);

        for _ in 0..3 {
            fsm.trigger("next").unwrap();
        }
        assert_eq!(fsm.state(), Light::Red);

        fsm.trigger("shutdown").unwrap();
        assert!(fsm.is_final());
    }
}
