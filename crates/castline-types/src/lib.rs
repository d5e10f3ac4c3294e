//! Shared type definitions for the Castline game server.
//!
//! This crate is the single source of truth for the identifier, enum, and
//! plain-data types used across the workspace. It carries no behavior
//! beyond small helpers, so every other crate can depend on it without
//! pulling in game logic.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe integer wrappers for protocol identifiers
//! - [`enums`] -- Enumeration types (skills, tool options, action phases,
//!   halt reasons)
//! - [`structs`] -- Tile positions and decoded interaction events

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{ActionPhase, HaltReason, Skill, ToolOption};
pub use ids::{AnimationId, EntityIndex, ItemId, NpcId, PlayerId};
pub use structs::{Position, SpotInteraction};
