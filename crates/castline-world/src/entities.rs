//! Placed world entities, addressed by slot index.
//!
//! Interaction events carry an [`EntityIndex`], not an npc id. The
//! [`EntityDirectory`] resolves that index to the npc id and map position
//! of whatever is standing in the slot.

use std::collections::BTreeMap;

use castline_types::{EntityIndex, NpcId, Position};
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// One placed npc: its slot index, what it is, and where it stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorldEntity {
    /// Slot index the entity occupies.
    pub index: EntityIndex,
    /// Npc id of the entity.
    pub npc: NpcId,
    /// Tile the entity stands on.
    pub position: Position,
}

/// Lookup table from slot index to placed entity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityDirectory {
    entries: BTreeMap<EntityIndex, WorldEntity>,
}

impl EntityDirectory {
    /// Create an empty directory.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Place an entity in its slot.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateEntity`] if the slot is occupied.
    pub fn register(&mut self, entity: WorldEntity) -> Result<(), WorldError> {
        if self.entries.contains_key(&entity.index) {
            return Err(WorldError::DuplicateEntity(entity.index));
        }
        self.entries.insert(entity.index, entity);
        Ok(())
    }

    /// Resolve a slot index to its entity, if the slot is occupied.
    pub fn by_index(&self, index: EntityIndex) -> Option<&WorldEntity> {
        self.entries.get(&index)
    }

    /// Iterate over all placed entities in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &WorldEntity> {
        self.entries.values()
    }

    /// Number of placed entities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
