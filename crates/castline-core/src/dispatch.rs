//! Interaction dispatch: turning spot clicks into running actions.
//!
//! The front end decodes a click on a world entity into a
//! [`SpotInteraction`]. Dispatch resolves the entity, and if it is a
//! registered fishing spot, installs a [`FishingAction`] in the actor's
//! scheduler slot. Events on entities this system does not own are
//! reported as ignored so another handler can take them.

use castline_types::SpotInteraction;
use castline_world::{EntityDirectory, FishingRegistry, ItemCatalogue, WorldError};
use tracing::debug;

use crate::action::{ActionScheduler, StepContext};
use crate::fishing::{CATCH_INTERVAL_TICKS, FishingAction, SPOT_REACH_TILES};

/// Whether dispatch claimed an interaction event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// The event targeted a fishing spot and an action was started.
    Consumed,
    /// The event is not this system's to handle.
    Ignored,
}

/// Handle one spot interaction for the acting player.
///
/// The context must belong to `event.actor`; the caller assembles it from
/// that player's session.
///
/// # Errors
///
/// Returns [`WorldError`] if the spot references table entries that fail
/// to resolve. Unknown entities and non-spot npcs are not errors; they
/// come back [`DispatchOutcome::Ignored`].
pub fn handle_spot_interaction(
    registry: &FishingRegistry,
    items: &ItemCatalogue,
    entities: &EntityDirectory,
    scheduler: &mut ActionScheduler<FishingAction>,
    event: SpotInteraction,
    ctx: &mut StepContext<'_>,
) -> Result<DispatchOutcome, WorldError> {
    let Some(entity) = entities.by_index(event.entity_index) else {
        debug!(actor = %event.actor, index = %event.entity_index, "Interaction on empty slot");
        return Ok(DispatchOutcome::Ignored);
    };
    let Some(spot) = registry.spot(entity.npc) else {
        return Ok(DispatchOutcome::Ignored);
    };

    let action = FishingAction::new(registry, items, spot, event.option)?;
    debug!(
        actor = %event.actor,
        npc = %entity.npc,
        option = ?event.option,
        "Fishing session started"
    );
    scheduler.start(
        event.actor,
        action,
        entity.position,
        SPOT_REACH_TILES,
        CATCH_INTERVAL_TICKS,
        ctx,
    );
    Ok(DispatchOutcome::Consumed)
}
