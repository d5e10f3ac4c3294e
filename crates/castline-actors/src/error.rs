//! Error types for the castline-actors crate.
//!
//! All operations that can fail return typed errors rather than panicking.
//! Inventory and skill arithmetic is fully checked; what cannot be
//! represented comes back as an error instead of wrapping silently.

use castline_types::{ItemId, Skill};

/// Errors that can occur during actor state operations.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// Attempted to add an item the inventory has no room for.
    #[error("inventory full: item {item} needs {needed} slot(s) but only {free} free")]
    InventoryFull {
        /// The item being added.
        item: ItemId,
        /// Slots the addition would have required.
        needed: u32,
        /// Slots actually free.
        free: u32,
    },

    /// Attempted to remove more of an item than the actor holds.
    #[error("item not held: wanted {requested} of item {item} but only have {held}")]
    ItemNotHeld {
        /// The item being removed.
        item: ItemId,
        /// The quantity the caller attempted to remove.
        requested: u32,
        /// The quantity the actor actually holds.
        held: u32,
    },

    /// A stack count would exceed its storage range.
    #[error("stack count overflow for item {item}")]
    StackOverflow {
        /// The item whose stack overflowed.
        item: ItemId,
    },

    /// Accumulated experience would exceed the representable range.
    #[error("experience overflow in skill {skill}")]
    ExperienceOverflow {
        /// The skill whose experience total overflowed.
        skill: Skill,
    },
}
