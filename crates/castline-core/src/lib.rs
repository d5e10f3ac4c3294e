//! Action engine, fishing skill, and tick cycle for the Castline server.
//!
//! This crate owns the gameplay loop: a generic distance-gated repeating
//! action engine, the fishing action built on top of it, interaction
//! dispatch, and the two-phase tick cycle that drives every session.
//!
//! # Modules
//!
//! - [`action`] -- [`ScheduledAction`] lifecycle (approach, repeat, stop)
//!   and the per-actor [`ActionScheduler`].
//! - [`dispatch`] -- Routing of spot interaction events into scheduled
//!   fishing sessions.
//! - [`fishing`] -- [`FishingAction`]: per-tick gates, candidate
//!   selection, and the catch roll.
//! - [`tick`] -- [`GameState`] and the dispatch-then-advance tick cycle.
//!
//! [`ScheduledAction`]: action::ScheduledAction
//! [`ActionScheduler`]: action::ActionScheduler
//! [`FishingAction`]: fishing::FishingAction
//! [`GameState`]: tick::GameState

pub mod action;
pub mod dispatch;
pub mod fishing;
pub mod tick;

// Re-export primary types at crate root.
pub use action::{
    ActionScheduler, ActionSignal, AdvanceOutcome, DistancedAction, ScheduledAction, StepContext,
};
pub use dispatch::{DispatchOutcome, handle_spot_interaction};
pub use fishing::{CATCH_INTERVAL_TICKS, FishingAction, SPOT_REACH_TILES};
pub use tick::{GameState, HaltRecord, TickError, TickSummary};
