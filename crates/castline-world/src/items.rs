//! Item catalogue: display names and stack behavior for item ids.
//!
//! The full item-definition registry lives outside this workspace; the
//! fishing system only needs the handful of entries its messages and
//! inventory handling touch. [`ItemCatalogue::standard`] seeds exactly
//! those.

use std::collections::BTreeMap;

use castline_types::ItemId;
use serde::{Deserialize, Serialize};

use crate::error::WorldError;

/// Display metadata for one item id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDefinition {
    /// The item id.
    pub item: ItemId,
    /// Singular display name, lowercase, as used in chat messages.
    pub name: String,
    /// Whether units of this item share one inventory slot.
    pub stackable: bool,
}

/// Read-only lookup table of item definitions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemCatalogue {
    entries: BTreeMap<ItemId, ItemDefinition>,
}

impl ItemCatalogue {
    /// Create an empty catalogue.
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Insert a definition, keyed by its own item id.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateItem`] if the id is already present.
    pub fn insert(&mut self, definition: ItemDefinition) -> Result<(), WorldError> {
        let id = definition.item;
        if self.entries.contains_key(&id) {
            return Err(WorldError::DuplicateItem(id));
        }
        self.entries.insert(id, definition);
        Ok(())
    }

    /// Look up a definition by item id.
    pub fn get(&self, item: ItemId) -> Option<&ItemDefinition> {
        self.entries.get(&item)
    }

    /// Look up an item's display name.
    pub fn name(&self, item: ItemId) -> Option<&str> {
        self.entries.get(&item).map(|def| def.name.as_str())
    }

    /// Whether an item stacks. Unknown items are treated as unstackable.
    pub fn stackable(&self, item: ItemId) -> bool {
        self.entries.get(&item).is_some_and(|def| def.stackable)
    }

    /// Item ids of every stackable entry.
    pub fn stackable_items(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.entries
            .values()
            .filter(|def| def.stackable)
            .map(|def| def.item)
    }

    /// Number of catalogued items.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalogue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The catalogue entries the fishing system relies on: the fourteen
    /// catchable fish, the six tools, and the two bait items.
    pub fn standard() -> Self {
        let mut catalogue = Self::new();
        let entries = [
            // Catches.
            (317, "shrimp", false),
            (321, "anchovy", false),
            (327, "sardine", false),
            (331, "salmon", false),
            (335, "trout", false),
            (341, "cod", false),
            (345, "herring", false),
            (349, "pike", false),
            (353, "mackerel", false),
            (359, "tuna", false),
            (363, "bass", false),
            (371, "swordfish", false),
            (377, "lobster", false),
            (383, "shark", false),
            // Tools.
            (301, "lobster cage", false),
            (303, "small net", false),
            (305, "big net", false),
            (307, "fishing rod", false),
            (309, "fishing rod", false),
            (311, "harpoon", false),
            // Bait.
            (313, "fishing bait", true),
            (314, "feather", true),
        ];
        for (item, name, stackable) in entries {
            // Ids above are distinct literals, so insertion cannot collide.
            let _ = catalogue.insert(ItemDefinition {
                item: ItemId::new(item),
                name: name.to_owned(),
                stackable,
            });
        }
        catalogue
    }
}
