//! Error types for the `castline-world` crate.
//!
//! Everything here is a configuration-category failure: it fires while the
//! static tables are being constructed and validated at startup, or when a
//! lookup that the validation should have guaranteed comes back empty.
//! Nothing in this enum represents a gameplay outcome.

use castline_types::{EntityIndex, ItemId, NpcId, ToolOption};

/// Errors raised by registry construction and static-table lookups.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A spot tier references a species id missing from the species table.
    #[error("spot {spot} references unknown species {species}")]
    UnknownSpecies {
        /// The referencing spot.
        spot: NpcId,
        /// The unresolved species item id.
        species: ItemId,
    },

    /// A spot references a tool id missing from the tool table.
    #[error("spot {spot} references unknown tool {tool}")]
    UnknownTool {
        /// The referencing spot.
        spot: NpcId,
        /// The unresolved tool item id.
        tool: ItemId,
    },

    /// A tool requires a bait item missing from the item catalogue.
    #[error("tool {tool} requires unknown bait item {bait}")]
    UnknownBait {
        /// The referencing tool.
        tool: ItemId,
        /// The unresolved bait item id.
        bait: ItemId,
    },

    /// A spot tier has an empty species list.
    #[error("spot {spot} has an empty {option} tier")]
    EmptyTier {
        /// The offending spot.
        spot: NpcId,
        /// Which tier is empty.
        option: ToolOption,
    },

    /// Two species definitions share the same catch item id.
    #[error("duplicate species definition: {0}")]
    DuplicateSpecies(ItemId),

    /// Two tool definitions share the same item id.
    #[error("duplicate tool definition: {0}")]
    DuplicateTool(ItemId),

    /// Two spot definitions share the same NPC id.
    #[error("duplicate spot definition: {0}")]
    DuplicateSpot(NpcId),

    /// Two catalogue entries share the same item id.
    #[error("duplicate item definition: {0}")]
    DuplicateItem(ItemId),

    /// Two world entities were registered at the same slot index.
    #[error("duplicate entity at slot {0}")]
    DuplicateEntity(EntityIndex),

    /// A species lookup failed after validation promised it would not.
    #[error("species not found: {0}")]
    SpeciesNotFound(ItemId),

    /// A tool lookup failed after validation promised it would not.
    #[error("tool not found: {0}")]
    ToolNotFound(ItemId),

    /// An item-catalogue lookup failed after validation promised it
    /// would not.
    #[error("item not found: {0}")]
    ItemNotFound(ItemId),
}
