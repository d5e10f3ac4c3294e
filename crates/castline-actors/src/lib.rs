//! Player actor state and output channel for the Castline fishing server.
//!
//! This crate contains everything mutable about an actor that game logic
//! touches: carried items, skill numbers, position, and the presentation
//! channel events flow out through. It sits between `castline-types`
//! (which defines the identifiers) and the core crate (which runs actions
//! against this state).
//!
//! # Modules
//!
//! - [`error`] -- Error types for all actor operations ([`ActorError`])
//! - [`inventory`] -- Slot-based item container with per-id stackability
//! - [`player`] -- The [`Player`] actor bundle
//! - [`presentation`] -- The [`Presentation`] output trait and its
//!   recording and tracing implementations
//! - [`skills`] -- Skill levels and exact experience totals

pub mod error;
pub mod inventory;
pub mod player;
pub mod presentation;
pub mod skills;

// Re-export primary types at crate root.
pub use error::ActorError;
pub use inventory::{DEFAULT_CAPACITY, SlotInventory};
pub use player::Player;
pub use presentation::{
    Presentation, PresentationEvent, RecordingPresentation, TracePresentation,
};
pub use skills::{BASE_LEVEL, SkillSheet};
