//! Type-safe identifier wrappers around the protocol's raw integers.
//!
//! The game protocol addresses items, NPC kinds, and animations by small
//! fixed integers taken from the released data files. Each identifier
//! class gets its own newtype so item ids, NPC ids, and animation ids
//! cannot be mixed at compile time. Identifiers are never generated at
//! runtime -- they come from static definition tables or the session
//! layer.

use serde::{Deserialize, Serialize};

/// Generates a newtype wrapper around `u32` with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl $name {
            /// Wrap a raw protocol integer.
            pub const fn new(raw: u32) -> Self {
                Self(raw)
            }

            /// Return the raw protocol integer.
            pub const fn get(self) -> u32 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Identifier of an item definition (fish, tools, bait).
    ItemId
}

define_id! {
    /// Identifier of an NPC definition (fishing spots are NPCs).
    NpcId
}

define_id! {
    /// Identifier of a client-side animation sequence.
    AnimationId
}

define_id! {
    /// Identifier of a connected player within the world.
    PlayerId
}

define_id! {
    /// Slot index of a spawned entity in the world's entity list.
    ///
    /// Interaction events address entities by their slot index, not by
    /// their definition id; the index is resolved through the entity
    /// directory.
    EntityIndex
}
