//! Tiny hand-rolled bitset macro used to build `TokenFlags` (per-node flags
//! live in side tables instead of a bitset — see DESIGN.md, "Node flags on
//! an immutable tree").
//!
//! `TokenFlags` is a handful of bits; apollo-parser's own codebase reaches
//! for plain bit tricks rather than a dependency whenever the flag set is
//! this small, so this crate does the same instead of pulling in `bitflags`.

macro_rules! bitflags_lite {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: $repr:ty {
            $(const $variant:ident = $value:expr;)*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
        pub struct $name($repr);

        impl $name {
            $(pub const $variant: $name = $name($value);)*

            pub fn contains(self, other: $name) -> bool {
                (self.0 & other.0) == other.0
            }

            pub fn insert(&mut self, other: $name) {
                self.0 |= other.0;
            }
        }

        impl std::ops::BitOr for $name {
            type Output = $name;
            fn bitor(self, rhs: $name) -> $name {
                $name(self.0 | rhs.0)
            }
        }
    };
}

pub(crate) use bitflags_lite;
