//! The fishing action: per-tick gates, candidate selection, and catch
//! resolution.
//!
//! A fishing session is a [`DistancedAction`] bound to a spot entity.
//! Every catch tick re-checks level, inventory space, and bait before
//! anything else happens, so a session that was valid when it started
//! still halts the moment one of those runs out.
//!
//! # Catch resolution
//!
//! The tier behind the chosen tool lists species in a fixed order. Every
//! species whose required level is at or below the actor's level is a
//! candidate. With two candidates a roll in `[0, 99]` picks the
//! first-listed on 71..=99 (29 outcomes) and the second on the rest (71
//! outcomes); the asymmetric split is deliberate and load-bearing for the
//! catch-rate balance. The success roll gives
//! `chance = min(level - required + 5, 30)` out of 40, so the catch rate
//! runs from 0.125 at the requirement floor to a 0.75 cap.

use castline_actors::ActorError;
use castline_types::{HaltReason, ItemId, Position, Skill, ToolOption};
use castline_world::{
    FishingRegistry, ItemCatalogue, SpeciesDefinition, SpotDefinition, ToolDefinition, WorldError,
};
use rand::{Rng, RngCore};
use tracing::debug;

use crate::action::{ActionSignal, DistancedAction, StepContext};

/// Ticks between catch attempts.
pub const CATCH_INTERVAL_TICKS: u64 = 4;

/// How close the actor must be to the spot, in tiles.
pub const SPOT_REACH_TILES: u32 = 1;

/// A bait requirement resolved to its display name.
#[derive(Debug, Clone)]
struct BaitRequirement {
    item: ItemId,
    name: String,
}

/// One actor's fishing session at one spot, with one tool.
///
/// Everything the session needs from the static tables is resolved at
/// construction; the per-tick step touches only actor state.
#[derive(Debug, Clone)]
pub struct FishingAction {
    tool: ToolDefinition,
    /// Tier species in their listed order. Order decides which side of
    /// the two-candidate split each one sits on.
    candidates: Vec<SpeciesDefinition>,
    bait: Option<BaitRequirement>,
    min_level: u32,
    started: bool,
}

impl FishingAction {
    /// Resolve a spot and tool option against the static tables.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::ToolNotFound`] or
    /// [`WorldError::SpeciesNotFound`] if the spot references table
    /// entries that do not exist, [`WorldError::ItemNotFound`] if the
    /// tool's bait has no catalogue name, and [`WorldError::EmptyTier`]
    /// if the chosen tier lists no species.
    pub fn new(
        registry: &FishingRegistry,
        items: &ItemCatalogue,
        spot: &SpotDefinition,
        option: ToolOption,
    ) -> Result<Self, WorldError> {
        let tool_id = spot.tool_for(option);
        let tool = registry
            .tool(tool_id)
            .ok_or(WorldError::ToolNotFound(tool_id))?
            .clone();

        let mut candidates = Vec::new();
        for &species_id in spot.tier_for(option) {
            let species = registry
                .species(species_id)
                .ok_or(WorldError::SpeciesNotFound(species_id))?;
            candidates.push(species.clone());
        }
        if candidates.is_empty() {
            return Err(WorldError::EmptyTier {
                spot: spot.npc,
                option,
            });
        }
        let min_level = candidates
            .iter()
            .map(|species| species.level)
            .min()
            .unwrap_or(0);

        let bait = tool
            .bait
            .map(|item| -> Result<BaitRequirement, WorldError> {
                let name = items
                    .name(item)
                    .ok_or(WorldError::ItemNotFound(item))?
                    .to_owned();
                Ok(BaitRequirement { item, name })
            })
            .transpose()?;

        Ok(Self {
            tool,
            candidates,
            bait,
            min_level,
            started: false,
        })
    }

    /// The lowest required level across the session's candidates.
    pub const fn min_level(&self) -> u32 {
        self.min_level
    }

    /// Pick the species this attempt goes for, or `None` if the actor's
    /// level reaches nothing in the tier.
    fn select_candidate(&self, level: u32, rng: &mut dyn RngCore) -> Option<&SpeciesDefinition> {
        let eligible: Vec<&SpeciesDefinition> = self
            .candidates
            .iter()
            .filter(|species| species.level <= level)
            .collect();
        match eligible.as_slice() {
            [] => None,
            [only] => Some(only),
            [first, .., last] => {
                let roll: u32 = rng.random_range(0..100);
                if roll > 70 { Some(first) } else { Some(last) }
            }
        }
    }

    /// Roll the catch attempt for a species with the given requirement.
    fn roll_success(level: u32, required: u32, rng: &mut dyn RngCore) -> bool {
        let chance = level.saturating_sub(required).saturating_add(5).min(30);
        let roll: u32 = rng.random_range(0..40);
        chance > roll
    }

    /// Run one catch attempt and apply its consequences.
    ///
    /// Returns `Some` only when the session must halt (bait exhausted by
    /// this catch); a plain miss or catch returns `None` and the tick
    /// carries on to the animation.
    fn resolve_catch(
        &self,
        level: u32,
        ctx: &mut StepContext<'_>,
    ) -> Result<Option<ActionSignal>, ActorError> {
        let Some(catch) = self.select_candidate(level, ctx.rng) else {
            return Ok(None);
        };
        if !Self::roll_success(level, catch.level, ctx.rng) {
            return Ok(None);
        }

        if let Some(bait) = &self.bait {
            ctx.inventory.remove(bait.item, 1)?;
        }
        ctx.inventory.add(catch.item, 1)?;
        let message = if catch.name.ends_with('s') {
            format!("You catch some {}.", catch.name)
        } else {
            format!("You catch a {}.", catch.name)
        };
        ctx.presentation.send_message(&message);
        ctx.skills.add_experience(Skill::Fishing, catch.experience)?;
        debug!(actor = %ctx.actor, species = %catch.item, "Catch landed");

        if let Some(bait) = &self.bait {
            if !ctx.inventory.contains(bait.item) {
                let text = format!("You need more {}s to fish at this spot.", bait.name);
                ctx.presentation.send_message(&text);
                return Ok(Some(ActionSignal::Stop(HaltReason::BaitExhausted {
                    bait: bait.item,
                })));
            }
        }
        Ok(None)
    }
}

impl DistancedAction for FishingAction {
    fn step(
        &mut self,
        target: Position,
        ctx: &mut StepContext<'_>,
    ) -> Result<ActionSignal, ActorError> {
        ctx.presentation.turn_toward(target);

        let level = ctx.skills.current_level(Skill::Fishing);
        if level < self.min_level {
            let required = self.min_level;
            ctx.presentation.send_message(&format!(
                "You need a fishing level of {required} to fish at this spot."
            ));
            return Ok(ActionSignal::Stop(HaltReason::InsufficientLevel {
                required,
            }));
        }

        if ctx.inventory.free_slots() == 0 {
            ctx.inventory.force_capacity_exceeded();
            return Ok(ActionSignal::Stop(HaltReason::InventoryFull));
        }

        if let Some(bait) = &self.bait {
            if !ctx.inventory.contains(bait.item) {
                let text = format!("You need {}s to fish at this spot.", bait.name);
                ctx.presentation.send_message(&text);
                return Ok(ActionSignal::Stop(HaltReason::MissingBait { bait: bait.item }));
            }
        }

        if self.started {
            if let Some(halt) = self.resolve_catch(level, ctx)? {
                return Ok(halt);
            }
        } else {
            // First gated tick announces the session instead of rolling.
            self.started = true;
            ctx.presentation.send_message(&self.tool.start_message);
        }

        ctx.presentation.play_animation(self.tool.animation);
        Ok(ActionSignal::Continue)
    }

    fn on_stop(&mut self, ctx: &mut StepContext<'_>) {
        ctx.presentation.stop_animation();
    }
}
