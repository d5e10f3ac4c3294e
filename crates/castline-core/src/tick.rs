//! Tick cycle: the per-tick loop that drives every running session.
//!
//! Each tick runs two phases in a fixed order:
//!
//! 1. **Dispatch** -- the tick's queued interaction events are handled,
//!    installing or replacing actions in the scheduler.
//! 2. **Advance** -- every owned action advances once, in actor-id order.
//!
//! Both phases walk `BTreeMap`s, so a tick is deterministic given the
//! same state, events, and randomness source. Nothing in a tick blocks
//! or performs I/O; each tick completes before the next begins.

use std::collections::BTreeMap;

use castline_actors::{ActorError, Player, Presentation};
use castline_types::{HaltReason, PlayerId, SpotInteraction};
use castline_world::{EntityDirectory, FishingRegistry, ItemCatalogue, WorldError};
use rand::Rng;
use tracing::debug;

use crate::action::{ActionScheduler, AdvanceOutcome, StepContext};
use crate::dispatch::{self, DispatchOutcome};
use crate::fishing::FishingAction;

/// Errors that can occur during tick execution.
#[derive(Debug, thiserror::Error)]
pub enum TickError {
    /// A world lookup or action construction failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },

    /// An actor state operation failed.
    #[error("actor error for {actor}: {source}")]
    Actor {
        /// The actor whose state operation failed.
        actor: PlayerId,
        /// The underlying actor error.
        source: ActorError,
    },

    /// An event or action referenced an actor with no session.
    #[error("unknown actor: {0}")]
    UnknownActor(PlayerId),

    /// A session already exists for this actor.
    #[error("duplicate actor: {0}")]
    DuplicateActor(PlayerId),
}

/// One actor halt observed during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HaltRecord {
    /// The actor whose action halted.
    pub actor: PlayerId,
    /// Why it halted.
    pub reason: HaltReason,
}

/// Summary of a single tick's execution.
#[derive(Debug, Clone)]
pub struct TickSummary {
    /// The tick number that was executed.
    pub tick: u64,
    /// Interaction events claimed by dispatch.
    pub consumed: u32,
    /// Interaction events left for other handlers.
    pub ignored: u32,
    /// Actors that moved one tile toward their target.
    pub movements: u32,
    /// Action steps that ran and continued.
    pub steps: u32,
    /// Actions that halted this tick, with their reasons.
    pub halts: Vec<HaltRecord>,
    /// Actions still running at end of tick.
    pub actions_running: usize,
}

/// One connected player and their output channel.
#[derive(Debug)]
struct Session<P> {
    player: Player,
    presentation: P,
}

/// Everything a running server shard owns: static tables, sessions, and
/// the action scheduler.
#[derive(Debug)]
pub struct GameState<P> {
    registry: FishingRegistry,
    items: ItemCatalogue,
    entities: EntityDirectory,
    sessions: BTreeMap<PlayerId, Session<P>>,
    scheduler: ActionScheduler<FishingAction>,
}

impl<P> GameState<P> {
    /// Create a game state over validated static tables, with no
    /// sessions yet.
    pub const fn new(
        registry: FishingRegistry,
        items: ItemCatalogue,
        entities: EntityDirectory,
    ) -> Self {
        Self {
            registry,
            items,
            entities,
            sessions: BTreeMap::new(),
            scheduler: ActionScheduler::new(),
        }
    }

    /// Register a player session.
    ///
    /// # Errors
    ///
    /// Returns [`TickError::DuplicateActor`] if the player id already has
    /// a session.
    pub fn add_player(&mut self, player: Player, presentation: P) -> Result<(), TickError> {
        let id = player.id;
        if self.sessions.contains_key(&id) {
            return Err(TickError::DuplicateActor(id));
        }
        self.sessions.insert(
            id,
            Session {
                player,
                presentation,
            },
        );
        Ok(())
    }

    /// A registered player's state.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.sessions.get(&id).map(|session| &session.player)
    }

    /// A registered player's presentation channel.
    pub fn presentation(&self, id: PlayerId) -> Option<&P> {
        self.sessions.get(&id).map(|session| &session.presentation)
    }

    /// Iterate over all registered players in id order.
    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.sessions.values().map(|session| &session.player)
    }

    /// The static fishing tables.
    pub const fn registry(&self) -> &FishingRegistry {
        &self.registry
    }

    /// The item catalogue.
    pub const fn items(&self) -> &ItemCatalogue {
        &self.items
    }

    /// The placed world entities.
    pub const fn entities(&self) -> &EntityDirectory {
        &self.entities
    }

    /// The action scheduler, for lifecycle observation.
    pub const fn scheduler(&self) -> &ActionScheduler<FishingAction> {
        &self.scheduler
    }
}

impl<P: Presentation> GameState<P> {
    /// Execute one tick: dispatch the queued interaction events, then
    /// advance every owned action once.
    ///
    /// # Errors
    ///
    /// Returns [`TickError`] if an event names an unknown actor, a spot
    /// fails to resolve against the tables, or an actor state operation
    /// faults. Gameplay halts are not errors; they land in the summary.
    pub fn run_tick(
        &mut self,
        tick: u64,
        interactions: &[SpotInteraction],
        rng: &mut impl Rng,
    ) -> Result<TickSummary, TickError> {
        let mut summary = TickSummary {
            tick,
            consumed: 0,
            ignored: 0,
            movements: 0,
            steps: 0,
            halts: Vec::new(),
            actions_running: 0,
        };

        for &event in interactions {
            let session = self
                .sessions
                .get_mut(&event.actor)
                .ok_or(TickError::UnknownActor(event.actor))?;
            let mut ctx = StepContext {
                actor: session.player.id,
                position: &mut session.player.position,
                skills: &mut session.player.skills,
                inventory: &mut session.player.inventory,
                presentation: &mut session.presentation,
                rng: &mut *rng,
            };
            let outcome = dispatch::handle_spot_interaction(
                &self.registry,
                &self.items,
                &self.entities,
                &mut self.scheduler,
                event,
                &mut ctx,
            )?;
            match outcome {
                DispatchOutcome::Consumed => {
                    summary.consumed = summary.consumed.saturating_add(1);
                }
                DispatchOutcome::Ignored => {
                    summary.ignored = summary.ignored.saturating_add(1);
                }
            }
        }

        for actor in self.scheduler.actors() {
            let session = self
                .sessions
                .get_mut(&actor)
                .ok_or(TickError::UnknownActor(actor))?;
            let mut ctx = StepContext {
                actor: session.player.id,
                position: &mut session.player.position,
                skills: &mut session.player.skills,
                inventory: &mut session.player.inventory,
                presentation: &mut session.presentation,
                rng: &mut *rng,
            };
            let outcome = self
                .scheduler
                .advance(actor, tick, &mut ctx)
                .map_err(|source| TickError::Actor { actor, source })?;
            match outcome {
                Some(AdvanceOutcome::Moved) => {
                    summary.movements = summary.movements.saturating_add(1);
                }
                Some(AdvanceOutcome::Stepped) => {
                    summary.steps = summary.steps.saturating_add(1);
                }
                Some(AdvanceOutcome::Stopped(reason)) => {
                    summary.halts.push(HaltRecord { actor, reason });
                }
                Some(AdvanceOutcome::Waiting | AdvanceOutcome::Finished) | None => {}
            }
        }

        summary.actions_running = self.scheduler.len();
        debug!(
            tick,
            consumed = summary.consumed,
            movements = summary.movements,
            steps = summary.steps,
            halts = summary.halts.len(),
            running = summary.actions_running,
            "Tick complete"
        );
        Ok(summary)
    }
}
