//! Declarative macro for state tag enums.

/// Generate a field-less state enum and its `State` implementation.
///
/// The enum derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `Debug`,
/// `Serialize` and `Deserialize`. Variant order defines the dense index.
///
/// # Example
///
/// ```
/// use layered_fsm::core::State;
/// use layered_fsm::state_enum;
///
/// state_enum! {
///     pub enum Gait {
///         Still,
///         Walking,
///         Dead,
///     }
///     final: [Dead]
/// }
///
/// assert_eq!(Gait::ALL, &[Gait::Still, Gait::Walking, Gait::Dead]);
/// assert_eq!(Gait::Walking.index(), 1);
/// assert!(Gait::Dead.is_final());
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
            const ALL: &'static [Self] = &[$(Self::$variant),*];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn index(&self) -> usize {
                *self as usize
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
    use crate::core::State;

    state_enum! {
        enum TestState {
            Standing,
            Jumping,
            Falling,
            Dead,
        }
        final: [Dead]
    }

    #[test]
    fn generates_names_and_ordinals() {
        assert_eq!(TestState::Jumping.name(), "Jumping");
        assert!(!TestState::Standing.is_final());
        assert!(TestState::Dead.is_final());
    }

    #[test]
    fn indices_are_dense_and_ordered() {
        assert_eq!(TestState::ALL.len(), 4);
        for (position, state) in TestState::ALL.iter().enumerate() {
            assert_eq!(state.index(), position);
        }
    }

    #[test]
    fn accepts_visibility_modifier() {
        state_enum! {
            pub enum PublicState {
                A,
                B,
            }
            final: [B]
        }

        assert!(PublicState::B.is_final());
        assert!(!PublicState::A.is_final());
    }

    #[test]
    fn state_enum_works_without_final() {
        state_enum! {
            enum MinimalState {
                One,
                Two,
            }
        }

        assert!(MinimalState::ALL.iter().all(|s| !s.is_final()));
    }
}
