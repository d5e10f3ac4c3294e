//! Slot-based inventory for player actors.
//!
//! Items occupy slots rather than weight: every unit of an unstackable
//! item takes a slot of its own, while all units of a stackable item share
//! one slot. All arithmetic is checked or saturating -- no silent
//! overflows, no panics.

use std::collections::{BTreeMap, BTreeSet};

use castline_types::ItemId;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ActorError;

/// Slot capacity of a standard player backpack.
pub const DEFAULT_CAPACITY: u32 = 28;

/// A fixed-capacity slot container.
///
/// Stackability is a property of the item id, registered up front via
/// [`SlotInventory::mark_stackable`]; unknown ids do not stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotInventory {
    /// Total slot capacity.
    capacity: u32,
    /// Item ids whose units share one slot.
    stackable: BTreeSet<ItemId>,
    /// Held items and unit counts. Zero-count entries are never stored.
    items: BTreeMap<ItemId, u32>,
    /// Times the capacity-exceeded notice has fired.
    capacity_notices: u32,
}

impl SlotInventory {
    /// Create an empty inventory with the given slot capacity.
    pub const fn new(capacity: u32) -> Self {
        Self {
            capacity,
            stackable: BTreeSet::new(),
            items: BTreeMap::new(),
            capacity_notices: 0,
        }
    }

    /// Register an item id as stackable.
    pub fn mark_stackable(&mut self, item: ItemId) {
        self.stackable.insert(item);
    }

    /// The total slot capacity.
    pub const fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Whether the actor holds at least one unit of the item.
    pub fn contains(&self, item: ItemId) -> bool {
        self.count(item) > 0
    }

    /// Units of the item currently held.
    pub fn count(&self, item: ItemId) -> u32 {
        self.items.get(&item).copied().unwrap_or(0)
    }

    /// Slots currently occupied.
    pub fn used_slots(&self) -> u32 {
        let mut used: u64 = 0;
        for (item, count) in &self.items {
            let slots = if self.stackable.contains(item) {
                1
            } else {
                u64::from(*count)
            };
            used = used.saturating_add(slots);
        }
        u32::try_from(used).unwrap_or(u32::MAX)
    }

    /// Slots currently free.
    pub fn free_slots(&self) -> u32 {
        self.capacity.saturating_sub(self.used_slots())
    }

    /// Add `count` units of `item`.
    ///
    /// Adding to an existing stack of a stackable item needs no free slot;
    /// everything else needs one slot per unit.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::InventoryFull`] if the addition needs more
    /// slots than are free, or [`ActorError::StackOverflow`] if the unit
    /// count would exceed its storage range.
    pub fn add(&mut self, item: ItemId, count: u32) -> Result<(), ActorError> {
        if count == 0 {
            return Ok(());
        }
        let held = self.count(item);
        let needed = if self.stackable.contains(&item) {
            u32::from(held == 0)
        } else {
            count
        };
        let free = self.free_slots();
        if needed > free {
            return Err(ActorError::InventoryFull { item, needed, free });
        }
        let total = held
            .checked_add(count)
            .ok_or(ActorError::StackOverflow { item })?;
        self.items.insert(item, total);
        Ok(())
    }

    /// Remove `count` units of `item`.
    ///
    /// Removes the key entirely when the count reaches zero.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ItemNotHeld`] if the actor holds fewer than
    /// `count` units.
    pub fn remove(&mut self, item: ItemId, count: u32) -> Result<(), ActorError> {
        let held = self.count(item);
        if held < count {
            return Err(ActorError::ItemNotHeld {
                item,
                requested: count,
                held,
            });
        }
        let remaining = held.saturating_sub(count);
        if remaining == 0 {
            self.items.remove(&item);
        } else {
            self.items.insert(item, remaining);
        }
        Ok(())
    }

    /// Fire the capacity-exceeded notice.
    ///
    /// The notice itself (interface flash, client sound) belongs to the
    /// presentation layer of the full server; here it is observable as a
    /// counter.
    pub fn force_capacity_exceeded(&mut self) {
        self.capacity_notices = self.capacity_notices.saturating_add(1);
        debug!(notices = self.capacity_notices, "Capacity notice fired");
    }

    /// Times the capacity-exceeded notice has fired.
    pub const fn capacity_notices(&self) -> u32 {
        self.capacity_notices
    }

    /// Iterate over held items and unit counts in id order.
    pub fn iter(&self) -> impl Iterator<Item = (ItemId, u32)> + '_ {
        self.items.iter().map(|(item, count)| (*item, *count))
    }

    /// Whether no items are held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
