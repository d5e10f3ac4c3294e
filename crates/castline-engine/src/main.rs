//! Scenario runner binary for the Castline fishing server.
//!
//! This is the entry point that wires the standard fishing tables, a
//! small demo world, and a roster of scripted anglers into the tick
//! cycle, then runs a bounded number of ticks and reports each angler's
//! haul. Chat messages and animations surface live through
//! [`TracePresentation`] in the structured log.
//!
//! # Startup Sequence
//!
//! 1. Initialize structured logging (tracing)
//! 2. Load scenario configuration from `castline-config.yaml`
//! 3. Build the item catalogue and fishing registry
//! 4. Place the demo fishing spots
//! 5. Spawn the angler roster and queue their opening casts
//! 6. Run the tick loop
//! 7. Report the haul

mod config;
mod error;

use std::path::Path;
use std::time::Duration;

use castline_actors::{DEFAULT_CAPACITY, Player, TracePresentation};
use castline_core::GameState;
use castline_types::{EntityIndex, NpcId, PlayerId, Position, Skill, SpotInteraction};
use castline_world::{EntityDirectory, FishingRegistry, ItemCatalogue, WorldEntity, WorldError};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::{AnglerConfig, ScenarioConfig};
use crate::error::EngineError;

/// Application entry point for the scenario runner.
///
/// Initializes all subsystems and runs the tick loop. Returns an error
/// code on failure.
///
/// # Errors
///
/// Returns an error if configuration, table construction, or the tick
/// loop itself fails. Gameplay halts are not errors; they end sessions
/// and show up in the haul report.
fn main() -> Result<(), EngineError> {
    // 1. Initialize structured logging.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    info!("castline-engine starting");

    // 2. Load configuration.
    let scenario = load_config()?;
    info!(
        world_name = scenario.world.name,
        seed = scenario.world.seed,
        ticks = scenario.world.ticks,
        tick_interval_ms = scenario.world.tick_interval_ms,
        anglers = scenario.anglers.len(),
        "Configuration loaded"
    );

    // 3. Build the static tables.
    let items = ItemCatalogue::standard();
    let registry = FishingRegistry::standard(&items)?;

    // 4. Place the demo fishing spots.
    let entities = place_spots()?;
    info!(spots = entities.len(), "Demo spots placed");

    // 5. Spawn the roster and queue the opening casts.
    let mut roster = Vec::new();
    let mut players = Vec::new();
    let mut casts = Vec::new();
    for (slot, angler) in scenario.anglers.iter().enumerate() {
        let id = PlayerId::new(u32::try_from(slot).unwrap_or(u32::MAX).saturating_add(1));
        let target = entities
            .iter()
            .find(|entity| entity.npc == angler.spot)
            .map(|entity| entity.index)
            .ok_or_else(|| EngineError::Scenario {
                message: format!("no placed spot for npc {}", angler.spot),
            })?;
        casts.push(SpotInteraction {
            actor: id,
            entity_index: target,
            option: angler.option,
        });
        players.push(spawn_angler(id, angler, &registry, &items)?);
        roster.push((id, angler.name.clone()));
    }

    // 6. Assemble game state and register sessions.
    let mut state = GameState::new(registry, items, entities);
    for player in players {
        let presentation = TracePresentation::new(player.id);
        state.add_player(player, presentation)?;
    }
    info!(sessions = roster.len(), "Sessions registered, entering tick loop");

    // 7. Run the tick loop.
    let mut rng = SmallRng::seed_from_u64(scenario.world.seed);
    let interval = Duration::from_millis(scenario.world.tick_interval_ms);
    let mut pending = casts;
    let mut ticks_run = 0;
    for tick in 0..scenario.world.ticks {
        let events = std::mem::take(&mut pending);
        let summary = state.run_tick(tick, &events, &mut rng)?;
        ticks_run = tick.saturating_add(1);
        if summary.actions_running == 0 {
            info!(tick, "All sessions idle, ending early");
            break;
        }
        if !interval.is_zero() {
            std::thread::sleep(interval);
        }
    }

    // 8. Report the haul.
    info!(ticks_run, "Scenario complete");
    for (id, name) in &roster {
        report_haul(&state, *id, name);
    }

    info!("castline-engine shutdown complete");

    Ok(())
}

/// Load the scenario configuration from `castline-config.yaml`.
///
/// Looks for the config file relative to the current working directory.
fn load_config() -> Result<ScenarioConfig, EngineError> {
    let config_path = Path::new("castline-config.yaml");
    if config_path.exists() {
        let config = ScenarioConfig::from_file(config_path)?;
        Ok(config)
    } else {
        info!("Config file not found, using defaults");
        Ok(ScenarioConfig::default())
    }
}

/// Place one entity for each standard spot kind at a fixed demo site.
fn place_spots() -> Result<EntityDirectory, WorldError> {
    let mut entities = EntityDirectory::new();
    let sites: [(u32, u32, Position); 4] = [
        (1, 309, Position::new(3239, 3244)),
        (2, 312, Position::new(2924, 3178)),
        (3, 313, Position::new(2845, 3429)),
        (4, 316, Position::new(3222, 3222)),
    ];
    for (index, npc, position) in sites {
        entities.register(WorldEntity {
            index: EntityIndex::new(index),
            npc: NpcId::new(npc),
            position,
        })?;
    }
    Ok(entities)
}

/// Build one configured angler: level, stackability flags, and any bait
/// grant their chosen tool can use.
fn spawn_angler(
    id: PlayerId,
    angler: &AnglerConfig,
    registry: &FishingRegistry,
    items: &ItemCatalogue,
) -> Result<Player, EngineError> {
    let mut player = Player::new(id, angler.position, DEFAULT_CAPACITY);
    player.skills.set_level(Skill::Fishing, angler.level);
    for item in items.stackable_items() {
        player.inventory.mark_stackable(item);
    }

    if angler.bait > 0 {
        let spot = registry
            .spot(angler.spot)
            .ok_or_else(|| EngineError::Scenario {
                message: format!("unknown spot npc {} for {}", angler.spot, angler.name),
            })?;
        let tool = registry
            .tool(spot.tool_for(angler.option))
            .ok_or_else(|| EngineError::Scenario {
                message: format!("unresolved tool for spot {}", angler.spot),
            })?;
        if let Some(bait) = tool.bait {
            player.inventory.add(bait, angler.bait)?;
        }
    }
    Ok(player)
}

/// Log one angler's final level, experience, and held items.
fn report_haul(state: &GameState<TracePresentation>, id: PlayerId, name: &str) {
    let Some(player) = state.player(id) else {
        return;
    };
    info!(
        angler = name,
        level = player.skills.current_level(Skill::Fishing),
        experience = %player.skills.experience(Skill::Fishing),
        free_slots = player.inventory.free_slots(),
        "Final haul"
    );
    for (item, count) in player.inventory.iter() {
        let label = state.items().name(item).unwrap_or("unknown");
        info!(angler = name, item = label, count, "Held");
    }
}
