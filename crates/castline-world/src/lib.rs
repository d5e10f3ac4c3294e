//! Static world data for the Castline fishing server.
//!
//! This crate holds everything that is fixed at load time: the item
//! catalogue, the fishing tables (species, tools, spots), and the
//! directory of placed world entities. All tables validate their cross
//! references at construction and are immutable afterwards.
//!
//! # Modules
//!
//! - [`entities`] -- Placed npcs addressed by slot index, resolved to an
//!   npc id and map position.
//! - [`error`] -- Error types for table construction and lookups.
//! - [`items`] -- Display names and stack behavior per item id.
//! - [`registry`] -- The species/tool/spot tables with referential
//!   validation and the standard data set.

pub mod entities;
pub mod error;
pub mod items;
pub mod registry;

// Re-export primary types at crate root.
pub use entities::{EntityDirectory, WorldEntity};
pub use error::WorldError;
pub use items::{ItemCatalogue, ItemDefinition};
pub use registry::{FishingRegistry, SpeciesDefinition, SpotDefinition, ToolDefinition};
