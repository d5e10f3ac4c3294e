//! Distance-gated repeating actions: approach, cadence, and ownership.
//!
//! Many interactions share one shape: walk the actor to within some range
//! of a target tile, then run an action step on a fixed tick cadence until
//! the step says stop or something else claims the actor. This module owns
//! that shape so individual actions only implement the step itself.
//!
//! # Lifecycle
//!
//! `Idle -> Approaching -> Active -> Stopped`. `Stopped` is terminal and
//! reachable from every other phase; no transition leaves it. The first
//! step runs on the tick the actor is found within range, then once every
//! `tick_interval` ticks.
//!
//! # Ownership
//!
//! An actor owns at most one scheduled action. Starting a new one through
//! the [`ActionScheduler`] stops the old one first, cleanup hook included,
//! so two actions can never drive the same actor at once.

use std::collections::BTreeMap;

use castline_actors::{ActorError, Presentation, SkillSheet, SlotInventory};
use castline_types::{ActionPhase, HaltReason, PlayerId, Position};
use rand::RngCore;
use tracing::debug;

// ---------------------------------------------------------------------------
// Step contract
// ---------------------------------------------------------------------------

/// Mutable actor state handed to each action step.
///
/// The caller assembles this from the acting player, their presentation
/// channel, and the tick's randomness source.
pub struct StepContext<'a> {
    /// The acting player's id.
    pub actor: PlayerId,
    /// The actor's map position. The engine moves it during approach.
    pub position: &'a mut Position,
    /// The actor's skill sheet.
    pub skills: &'a mut SkillSheet,
    /// The actor's inventory.
    pub inventory: &'a mut SlotInventory,
    /// The actor's output channel.
    pub presentation: &'a mut dyn Presentation,
    /// Randomness source for the step.
    pub rng: &'a mut dyn RngCore,
}

impl core::fmt::Debug for StepContext<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StepContext")
            .field("actor", &self.actor)
            .field("position", &self.position)
            .finish_non_exhaustive()
    }
}

/// What an action step tells the engine to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionSignal {
    /// Keep the cadence running.
    Continue,
    /// Halt the action for the given reason. The engine performs the
    /// stop transition and runs the cleanup hook.
    Stop(HaltReason),
}

/// A repeating action executed near a target position.
///
/// Implementations hold whatever per-action state they need; the engine
/// owns phase, cadence, and cleanup ordering.
pub trait DistancedAction {
    /// Run one step of the action.
    ///
    /// Called only while the actor is within range of `target`. Returning
    /// [`ActionSignal::Stop`] ends the action; returning an error aborts
    /// the tick without a phase change.
    ///
    /// # Errors
    ///
    /// Implementations surface actor-state faults (never gameplay
    /// outcomes) as [`ActorError`].
    fn step(
        &mut self,
        target: Position,
        ctx: &mut StepContext<'_>,
    ) -> Result<ActionSignal, ActorError>;

    /// Cleanup hook, invoked exactly once when the action stops.
    fn on_stop(&mut self, ctx: &mut StepContext<'_>);
}

// ---------------------------------------------------------------------------
// Scheduled action
// ---------------------------------------------------------------------------

/// What one advance call did to a scheduled action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// The actor moved one tile toward the target.
    Moved,
    /// The actor is in range but the next step is not due yet.
    Waiting,
    /// The step ran and the action continues.
    Stepped,
    /// The step ran and halted the action; cleanup has run.
    Stopped(HaltReason),
    /// The action was already in its terminal phase.
    Finished,
}

/// One action bound to a target position and a tick cadence.
#[derive(Debug)]
pub struct ScheduledAction<A> {
    phase: ActionPhase,
    target: Position,
    min_distance: u32,
    tick_interval: u64,
    next_step_at: u64,
    action: A,
}

impl<A> ScheduledAction<A> {
    /// Bind an action to a target, range, and cadence. The action starts
    /// in [`ActionPhase::Idle`] and owns no side effects yet.
    pub const fn new(action: A, target: Position, min_distance: u32, tick_interval: u64) -> Self {
        Self {
            phase: ActionPhase::Idle,
            target,
            min_distance,
            tick_interval,
            next_step_at: 0,
            action,
        }
    }

    /// The current lifecycle phase.
    pub const fn phase(&self) -> ActionPhase {
        self.phase
    }

    /// The target position the actor is driven toward.
    pub const fn target(&self) -> Position {
        self.target
    }

    /// The wrapped action value.
    pub const fn action(&self) -> &A {
        &self.action
    }
}

impl<A: DistancedAction> ScheduledAction<A> {
    /// Advance the action by one tick.
    ///
    /// Out of range: the actor moves one tile toward the target. In
    /// range: the step runs if due, immediately on the arrival tick and
    /// then once per `tick_interval`.
    ///
    /// # Errors
    ///
    /// Propagates step errors; the action stays in its current phase so
    /// the caller decides whether to retry or stop it.
    pub fn advance(
        &mut self,
        tick: u64,
        ctx: &mut StepContext<'_>,
    ) -> Result<AdvanceOutcome, ActorError> {
        if self.phase.is_terminal() {
            return Ok(AdvanceOutcome::Finished);
        }
        if self.phase == ActionPhase::Idle {
            self.phase = ActionPhase::Approaching;
        }
        if !ctx.position.within(self.target, self.min_distance) {
            *ctx.position = ctx.position.step_toward(self.target);
            return Ok(AdvanceOutcome::Moved);
        }
        if self.phase == ActionPhase::Approaching {
            self.phase = ActionPhase::Active;
            self.next_step_at = tick;
        }
        if tick < self.next_step_at {
            return Ok(AdvanceOutcome::Waiting);
        }
        self.next_step_at = tick.saturating_add(self.tick_interval);
        match self.action.step(self.target, ctx)? {
            ActionSignal::Continue => Ok(AdvanceOutcome::Stepped),
            ActionSignal::Stop(reason) => {
                self.phase = ActionPhase::Stopped;
                self.action.on_stop(ctx);
                Ok(AdvanceOutcome::Stopped(reason))
            }
        }
    }

    /// Stop the action.
    ///
    /// Idempotent: the first call transitions to [`ActionPhase::Stopped`]
    /// and runs the cleanup hook; later calls do nothing.
    pub fn stop(&mut self, ctx: &mut StepContext<'_>) {
        if self.phase.is_terminal() {
            return;
        }
        self.phase = ActionPhase::Stopped;
        self.action.on_stop(ctx);
    }
}

// ---------------------------------------------------------------------------
// Scheduler
// ---------------------------------------------------------------------------

/// Exclusive per-actor action slots.
#[derive(Debug)]
pub struct ActionScheduler<A> {
    slots: BTreeMap<PlayerId, ScheduledAction<A>>,
}

impl<A> ActionScheduler<A> {
    /// Create a scheduler with no running actions.
    pub const fn new() -> Self {
        Self {
            slots: BTreeMap::new(),
        }
    }

    /// The running action owned by an actor, if any.
    pub fn current(&self, actor: PlayerId) -> Option<&ScheduledAction<A>> {
        self.slots.get(&actor)
    }

    /// Actors that currently own an action, in id order.
    pub fn actors(&self) -> Vec<PlayerId> {
        self.slots.keys().copied().collect()
    }

    /// Number of running actions.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no actions are running.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl<A: DistancedAction> ActionScheduler<A> {
    /// Install an action in the actor's slot.
    ///
    /// Any action the actor already owns is stopped first, cleanup hook
    /// included, before the replacement goes in.
    pub fn start(
        &mut self,
        actor: PlayerId,
        action: A,
        target: Position,
        min_distance: u32,
        tick_interval: u64,
        ctx: &mut StepContext<'_>,
    ) {
        if let Some(previous) = self.slots.get_mut(&actor) {
            previous.stop(ctx);
            debug!(actor = %actor, "Replaced running action");
        }
        self.slots.insert(
            actor,
            ScheduledAction::new(action, target, min_distance, tick_interval),
        );
    }

    /// Stop and remove the actor's action, if any. Idempotent.
    pub fn stop(&mut self, actor: PlayerId, ctx: &mut StepContext<'_>) {
        if let Some(mut slot) = self.slots.remove(&actor) {
            slot.stop(ctx);
        }
    }

    /// Advance the actor's action by one tick.
    ///
    /// Returns `None` if the actor owns no action. Actions that halt
    /// themselves are removed from their slot after cleanup.
    ///
    /// # Errors
    ///
    /// Propagates step errors; the slot is kept so the caller can stop it
    /// explicitly.
    pub fn advance(
        &mut self,
        actor: PlayerId,
        tick: u64,
        ctx: &mut StepContext<'_>,
    ) -> Result<Option<AdvanceOutcome>, ActorError> {
        let Some(slot) = self.slots.get_mut(&actor) else {
            return Ok(None);
        };
        let outcome = slot.advance(tick, ctx)?;
        if slot.phase().is_terminal() {
            self.slots.remove(&actor);
        }
        Ok(Some(outcome))
    }
}

impl<A> Default for ActionScheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use castline_actors::RecordingPresentation;
    use castline_types::Skill;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    use super::*;

    /// Scripted action: continues for a fixed number of steps, then
    /// halts, while counting every step and cleanup call.
    struct CountingAction {
        steps_before_halt: u32,
        steps: u32,
        stops: u32,
    }

    impl CountingAction {
        const fn new(steps_before_halt: u32) -> Self {
            Self {
                steps_before_halt,
                steps: 0,
                stops: 0,
            }
        }
    }

    impl DistancedAction for CountingAction {
        fn step(
            &mut self,
            _target: Position,
            _ctx: &mut StepContext<'_>,
        ) -> Result<ActionSignal, ActorError> {
            self.steps = self.steps.saturating_add(1);
            if self.steps >= self.steps_before_halt {
                Ok(ActionSignal::Stop(HaltReason::InventoryFull))
            } else {
                Ok(ActionSignal::Continue)
            }
        }

        fn on_stop(&mut self, ctx: &mut StepContext<'_>) {
            self.stops = self.stops.saturating_add(1);
            ctx.presentation.stop_animation();
        }
    }

    struct Rig {
        position: Position,
        skills: SkillSheet,
        inventory: SlotInventory,
        presentation: RecordingPresentation,
        rng: SmallRng,
    }

    impl Rig {
        fn at(position: Position) -> Self {
            let mut skills = SkillSheet::new();
            skills.set_level(Skill::Fishing, 1);
            Self {
                position,
                skills,
                inventory: SlotInventory::new(28),
                presentation: RecordingPresentation::new(),
                rng: SmallRng::seed_from_u64(7),
            }
        }

        fn ctx(&mut self) -> StepContext<'_> {
            StepContext {
                actor: PlayerId::new(1),
                position: &mut self.position,
                skills: &mut self.skills,
                inventory: &mut self.inventory,
                presentation: &mut self.presentation,
                rng: &mut self.rng,
            }
        }
    }

    #[test]
    fn approach_moves_one_tile_per_tick_then_steps_immediately() {
        let mut rig = Rig::at(Position::new(0, 0));
        let target = Position::new(5, 0);
        let mut scheduled = ScheduledAction::new(CountingAction::new(u32::MAX), target, 1, 4);

        for tick in 0..4 {
            let outcome = scheduled.advance(tick, &mut rig.ctx()).unwrap();
            assert_eq!(outcome, AdvanceOutcome::Moved, "tick {tick}");
        }
        assert_eq!(rig.position, Position::new(4, 0));
        // Arrival tick: the step runs at once instead of waiting a full
        // interval.
        let outcome = scheduled.advance(4, &mut rig.ctx()).unwrap();
        assert_eq!(outcome, AdvanceOutcome::Stepped);
        assert_eq!(scheduled.phase(), ActionPhase::Active);
    }

    #[test]
    fn steps_repeat_on_the_tick_interval() {
        let mut rig = Rig::at(Position::new(1, 0));
        let target = Position::new(0, 0);
        let mut scheduled = ScheduledAction::new(CountingAction::new(u32::MAX), target, 1, 4);

        let mut stepped_at = Vec::new();
        for tick in 0..13 {
            if scheduled.advance(tick, &mut rig.ctx()).unwrap() == AdvanceOutcome::Stepped {
                stepped_at.push(tick);
            }
        }
        assert_eq!(stepped_at, vec![0, 4, 8, 12]);
        assert_eq!(scheduled.action().steps, 4);
    }

    #[test]
    fn starting_in_range_steps_on_the_first_tick() {
        let mut rig = Rig::at(Position::new(3, 3));
        let mut scheduled =
            ScheduledAction::new(CountingAction::new(u32::MAX), Position::new(3, 4), 1, 4);
        let outcome = scheduled.advance(0, &mut rig.ctx()).unwrap();
        assert_eq!(outcome, AdvanceOutcome::Stepped);
    }

    #[test]
    fn halt_signal_stops_and_runs_cleanup_once() {
        let mut rig = Rig::at(Position::new(0, 0));
        let mut scheduled =
            ScheduledAction::new(CountingAction::new(2), Position::new(0, 1), 1, 4);

        assert_eq!(
            scheduled.advance(0, &mut rig.ctx()).unwrap(),
            AdvanceOutcome::Stepped
        );
        assert_eq!(
            scheduled.advance(4, &mut rig.ctx()).unwrap(),
            AdvanceOutcome::Stopped(HaltReason::InventoryFull)
        );
        assert_eq!(scheduled.phase(), ActionPhase::Stopped);
        assert_eq!(scheduled.action().stops, 1);
        // Terminal phase: further advances do nothing.
        assert_eq!(
            scheduled.advance(8, &mut rig.ctx()).unwrap(),
            AdvanceOutcome::Finished
        );
        assert_eq!(scheduled.action().steps, 2);
    }

    #[test]
    fn stop_twice_runs_cleanup_once() {
        let mut rig = Rig::at(Position::new(0, 0));
        let mut scheduled =
            ScheduledAction::new(CountingAction::new(u32::MAX), Position::new(0, 1), 1, 4);
        assert_eq!(
            scheduled.advance(0, &mut rig.ctx()).unwrap(),
            AdvanceOutcome::Stepped
        );

        scheduled.stop(&mut rig.ctx());
        scheduled.stop(&mut rig.ctx());
        assert_eq!(scheduled.phase(), ActionPhase::Stopped);
        assert_eq!(scheduled.action().stops, 1);
        // Exactly one animation halt reached the actor.
        let halts = rig
            .presentation
            .events
            .iter()
            .filter(|event| {
                matches!(event, castline_actors::PresentationEvent::AnimationStopped)
            })
            .count();
        assert_eq!(halts, 1);
    }

    #[test]
    fn stop_before_first_step_still_cleans_up() {
        let mut rig = Rig::at(Position::new(9, 9));
        let mut scheduled =
            ScheduledAction::new(CountingAction::new(u32::MAX), Position::new(0, 0), 1, 4);
        assert_eq!(
            scheduled.advance(0, &mut rig.ctx()).unwrap(),
            AdvanceOutcome::Moved
        );
        scheduled.stop(&mut rig.ctx());
        assert_eq!(scheduled.phase(), ActionPhase::Stopped);
        assert_eq!(scheduled.action().stops, 1);
        assert_eq!(scheduled.action().steps, 0);
    }

    #[test]
    fn scheduler_replacement_stops_the_old_action() {
        let mut rig = Rig::at(Position::new(0, 0));
        let actor = PlayerId::new(1);
        let mut scheduler: ActionScheduler<CountingAction> = ActionScheduler::new();

        scheduler.start(
            actor,
            CountingAction::new(u32::MAX),
            Position::new(0, 1),
            1,
            4,
            &mut rig.ctx(),
        );
        assert_eq!(
            scheduler.advance(actor, 0, &mut rig.ctx()).unwrap(),
            Some(AdvanceOutcome::Stepped)
        );

        // Replacing runs the old cleanup before the new action installs.
        scheduler.start(
            actor,
            CountingAction::new(u32::MAX),
            Position::new(0, 1),
            1,
            4,
            &mut rig.ctx(),
        );
        assert_eq!(scheduler.len(), 1);
        let halts = rig
            .presentation
            .events
            .iter()
            .filter(|event| {
                matches!(event, castline_actors::PresentationEvent::AnimationStopped)
            })
            .count();
        assert_eq!(halts, 1);
        // The replacement starts from scratch.
        assert_eq!(scheduler.current(actor).unwrap().action().steps, 0);
    }

    #[test]
    fn scheduler_removes_self_halted_actions() {
        let mut rig = Rig::at(Position::new(0, 0));
        let actor = PlayerId::new(1);
        let mut scheduler: ActionScheduler<CountingAction> = ActionScheduler::new();

        scheduler.start(
            actor,
            CountingAction::new(1),
            Position::new(0, 1),
            1,
            4,
            &mut rig.ctx(),
        );
        assert_eq!(
            scheduler.advance(actor, 0, &mut rig.ctx()).unwrap(),
            Some(AdvanceOutcome::Stopped(HaltReason::InventoryFull))
        );
        assert!(scheduler.current(actor).is_none());
        assert!(scheduler.is_empty());
    }

    #[test]
    fn scheduler_advance_without_action_is_none() {
        let mut rig = Rig::at(Position::new(0, 0));
        let mut scheduler: ActionScheduler<CountingAction> = ActionScheduler::new();
        assert_eq!(
            scheduler
                .advance(PlayerId::new(1), 0, &mut rig.ctx())
                .unwrap(),
            None
        );
    }

    #[test]
    fn scheduler_stop_is_idempotent() {
        let mut rig = Rig::at(Position::new(0, 0));
        let actor = PlayerId::new(1);
        let mut scheduler: ActionScheduler<CountingAction> = ActionScheduler::new();

        scheduler.start(
            actor,
            CountingAction::new(u32::MAX),
            Position::new(0, 1),
            1,
            4,
            &mut rig.ctx(),
        );
        scheduler.stop(actor, &mut rig.ctx());
        scheduler.stop(actor, &mut rig.ctx());
        assert!(scheduler.is_empty());
        let halts = rig
            .presentation
            .events
            .iter()
            .filter(|event| {
                matches!(event, castline_actors::PresentationEvent::AnimationStopped)
            })
            .count();
        assert_eq!(halts, 1);
    }
}
