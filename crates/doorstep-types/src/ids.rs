//! Type-safe index wrappers for entity addressing.
//!
//! The world is a tree of fixed ordered lists: neighborhoods own locations,
//! locations own NPCs, and membership never changes after generation. There
//! is therefore no need for globally unique identifiers -- an entity is
//! addressed by its zero-based position within its parent list. These
//! newtypes exist so that the three kinds of position cannot be mixed up at
//! compile time.
//!
//! The presentation layer constructs indices from player menu selections;
//! range validation happens in `doorstep-core` before any index touches
//! world state.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around a zero-based `usize` position.
macro_rules! define_index {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub usize);

        impl $name {
            /// Return the wrapped zero-based position.
            pub const fn into_inner(self) -> usize {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(index: usize) -> Self {
                Self(index)
            }
        }

        impl From<$name> for usize {
            fn from(index: $name) -> Self {
                index.0
            }
        }
    };
}

define_index! {
    /// Position of a neighborhood within the world's neighborhood list.
    NeighborhoodIndex
}

define_index! {
    /// Position of a location within its neighborhood's location list.
    LocationIndex
}

define_index! {
    /// Position of an NPC within its location's NPC list.
    NpcIndex
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_are_distinct_types() {
        let neighborhood = NeighborhoodIndex(0);
        let location = LocationIndex(0);
        // These are different types -- the compiler enforces no mixing.
        assert_eq!(neighborhood.into_inner(), location.into_inner());
    }

    #[test]
    fn index_display_shows_position() {
        assert_eq!(NpcIndex(7).to_string(), "7");
    }

    #[test]
    fn index_round_trips_through_usize() {
        let index: LocationIndex = 3_usize.into();
        assert_eq!(usize::from(index), 3);
    }
}
