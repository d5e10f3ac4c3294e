//! Player actor state: identity, position, skills, and carried items.
//!
//! The [`Player`] bundles the mutable per-actor state the fishing system
//! operates on. Session plumbing (connection, client protocol) stays
//! outside this crate; a player here is already authenticated and placed
//! on the map.

use castline_types::{PlayerId, Position};
use serde::{Deserialize, Serialize};

use crate::inventory::SlotInventory;
use crate::skills::SkillSheet;

/// One connected player actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// The player's identifier.
    pub id: PlayerId,
    /// Tile the player stands on.
    pub position: Position,
    /// Skill levels and experience totals.
    pub skills: SkillSheet,
    /// Carried items.
    pub inventory: SlotInventory,
}

impl Player {
    /// Create a player at a position with fresh skills and an empty
    /// inventory of the given slot capacity.
    pub const fn new(id: PlayerId, position: Position, inventory_capacity: u32) -> Self {
        Self {
            id,
            position,
            skills: SkillSheet::new(),
            inventory: SlotInventory::new(inventory_capacity),
        }
    }
}
