//! Static fishing tables: catchable species, tools, and spot layouts.
//!
//! The [`FishingRegistry`] is built once at startup and never mutated.
//! Construction validates referential integrity up front, so a spot that
//! names a missing tool or species fails the load instead of surfacing as
//! a broken interaction later.

use std::collections::BTreeMap;

use castline_types::{AnimationId, ItemId, NpcId, ToolOption};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::WorldError;
use crate::items::ItemCatalogue;

// ---------------------------------------------------------------------------
// Definitions
// ---------------------------------------------------------------------------

/// One catchable species: the item it yields and the skill numbers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeciesDefinition {
    /// Item id awarded on a successful catch.
    pub item: ItemId,
    /// Minimum fishing level required to catch this species.
    pub level: u32,
    /// Experience awarded per catch.
    pub experience: Decimal,
    /// Singular display name, lowercase, as used in catch messages.
    pub name: String,
}

/// One fishing tool: the held item, its animation, and its bait needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDefinition {
    /// Item id the actor must hold to use this tool.
    pub item: ItemId,
    /// Animation played on each cast.
    pub animation: AnimationId,
    /// Message sent once when the action begins.
    pub start_message: String,
    /// Item consumed per catch, if the tool needs bait.
    pub bait: Option<ItemId>,
    /// Display name of the tool.
    pub name: String,
}

/// One fishing spot: the npc id it appears as, its two tool choices, and
/// the species tier behind each choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotDefinition {
    /// Npc id of the spot entity.
    pub npc: NpcId,
    /// Tool item ids, indexed by [`ToolOption`]: primary then secondary.
    pub tools: [ItemId; 2],
    /// Species item ids reachable through the primary tool.
    pub tier_one: Vec<ItemId>,
    /// Species item ids reachable through the secondary tool.
    pub tier_two: Vec<ItemId>,
}

impl SpotDefinition {
    /// The tool item id behind a menu option.
    pub const fn tool_for(&self, option: ToolOption) -> ItemId {
        let [primary, secondary] = self.tools;
        match option {
            ToolOption::Primary => primary,
            ToolOption::Secondary => secondary,
        }
    }

    /// The species tier behind a menu option.
    pub fn tier_for(&self, option: ToolOption) -> &[ItemId] {
        match option {
            ToolOption::Primary => &self.tier_one,
            ToolOption::Secondary => &self.tier_two,
        }
    }
}

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Immutable lookup tables for species, tools, and spots.
///
/// Keys are derived from the definitions themselves, so a definition can
/// never be filed under the wrong id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FishingRegistry {
    species: BTreeMap<ItemId, SpeciesDefinition>,
    tools: BTreeMap<ItemId, ToolDefinition>,
    spots: BTreeMap<NpcId, SpotDefinition>,
}

impl FishingRegistry {
    /// Build a registry from definition lists, validating every cross
    /// reference.
    ///
    /// # Errors
    ///
    /// Returns a duplicate-definition error if two entries share an id,
    /// [`WorldError::UnknownBait`] if a tool's bait is absent from the item
    /// catalogue, [`WorldError::UnknownTool`] / [`WorldError::UnknownSpecies`]
    /// if a spot references an undefined tool or species, and
    /// [`WorldError::EmptyTier`] if a spot has a tier with no species.
    pub fn new(
        species: Vec<SpeciesDefinition>,
        tools: Vec<ToolDefinition>,
        spots: Vec<SpotDefinition>,
        items: &ItemCatalogue,
    ) -> Result<Self, WorldError> {
        let mut species_map = BTreeMap::new();
        for def in species {
            if species_map.contains_key(&def.item) {
                return Err(WorldError::DuplicateSpecies(def.item));
            }
            species_map.insert(def.item, def);
        }

        let mut tool_map = BTreeMap::new();
        for def in tools {
            if tool_map.contains_key(&def.item) {
                return Err(WorldError::DuplicateTool(def.item));
            }
            if let Some(bait) = def.bait {
                if items.get(bait).is_none() {
                    return Err(WorldError::UnknownBait {
                        tool: def.item,
                        bait,
                    });
                }
            }
            tool_map.insert(def.item, def);
        }

        let mut spot_map: BTreeMap<NpcId, SpotDefinition> = BTreeMap::new();
        for def in spots {
            if spot_map.contains_key(&def.npc) {
                return Err(WorldError::DuplicateSpot(def.npc));
            }
            for tool in def.tools {
                if !tool_map.contains_key(&tool) {
                    return Err(WorldError::UnknownTool {
                        spot: def.npc,
                        tool,
                    });
                }
            }
            for option in [ToolOption::Primary, ToolOption::Secondary] {
                let tier = def.tier_for(option);
                if tier.is_empty() {
                    return Err(WorldError::EmptyTier {
                        spot: def.npc,
                        option,
                    });
                }
                for &item in tier {
                    if !species_map.contains_key(&item) {
                        return Err(WorldError::UnknownSpecies {
                            spot: def.npc,
                            species: item,
                        });
                    }
                }
            }
            spot_map.insert(def.npc, def);
        }

        info!(
            species = species_map.len(),
            tools = tool_map.len(),
            spots = spot_map.len(),
            "Fishing registry loaded"
        );

        Ok(Self {
            species: species_map,
            tools: tool_map,
            spots: spot_map,
        })
    }

    /// Look up a species by the item id it yields.
    pub fn species(&self, item: ItemId) -> Option<&SpeciesDefinition> {
        self.species.get(&item)
    }

    /// Look up a tool by its held item id.
    pub fn tool(&self, item: ItemId) -> Option<&ToolDefinition> {
        self.tools.get(&item)
    }

    /// Look up a spot by its npc id.
    pub fn spot(&self, npc: NpcId) -> Option<&SpotDefinition> {
        self.spots.get(&npc)
    }

    /// Npc ids of every registered spot.
    pub fn spot_ids(&self) -> impl Iterator<Item = NpcId> + '_ {
        self.spots.keys().copied()
    }

    /// Number of registered species.
    pub fn species_count(&self) -> usize {
        self.species.len()
    }

    /// Number of registered tools.
    pub fn tool_count(&self) -> usize {
        self.tools.len()
    }

    /// Number of registered spots.
    pub fn spot_count(&self) -> usize {
        self.spots.len()
    }

    /// The standard fishing tables: fourteen species, six tools, four
    /// spots.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError`] if the catalogue is missing an item the
    /// tables reference, which cannot happen with
    /// [`ItemCatalogue::standard`].
    pub fn standard(items: &ItemCatalogue) -> Result<Self, WorldError> {
        Self::new(
            standard_species(),
            standard_tools(),
            standard_spots(),
            items,
        )
    }
}

// ---------------------------------------------------------------------------
// Standard tables
// ---------------------------------------------------------------------------

/// Helper to build a [`SpeciesDefinition`].
fn fish(item: u32, level: u32, experience: u32, name: &str) -> SpeciesDefinition {
    SpeciesDefinition {
        item: ItemId::new(item),
        level,
        experience: Decimal::from(experience),
        name: name.to_owned(),
    }
}

/// Helper to build a [`ToolDefinition`].
fn tool(
    item: u32,
    animation: u32,
    start_message: &str,
    bait: Option<u32>,
    name: &str,
) -> ToolDefinition {
    ToolDefinition {
        item: ItemId::new(item),
        animation: AnimationId::new(animation),
        start_message: start_message.to_owned(),
        bait: bait.map(ItemId::new),
        name: name.to_owned(),
    }
}

/// Helper to build a [`SpotDefinition`].
fn spot(npc: u32, tools: [u32; 2], tier_one: &[u32], tier_two: &[u32]) -> SpotDefinition {
    let [primary, secondary] = tools;
    SpotDefinition {
        npc: NpcId::new(npc),
        tools: [ItemId::new(primary), ItemId::new(secondary)],
        tier_one: tier_one.iter().copied().map(ItemId::new).collect(),
        tier_two: tier_two.iter().copied().map(ItemId::new).collect(),
    }
}

fn standard_species() -> Vec<SpeciesDefinition> {
    vec![
        fish(317, 1, 10, "shrimp"),
        fish(321, 15, 40, "anchovy"),
        fish(327, 5, 20, "sardine"),
        fish(331, 30, 70, "salmon"),
        fish(335, 20, 50, "trout"),
        fish(341, 23, 45, "cod"),
        fish(345, 10, 30, "herring"),
        fish(349, 25, 60, "pike"),
        fish(353, 16, 20, "mackerel"),
        fish(359, 35, 80, "tuna"),
        fish(363, 46, 100, "bass"),
        fish(371, 50, 100, "swordfish"),
        fish(377, 40, 90, "lobster"),
        fish(383, 76, 110, "shark"),
    ]
}

fn standard_tools() -> Vec<ToolDefinition> {
    vec![
        tool(
            301,
            619,
            "You attempt to catch a lobster...",
            None,
            "lobster cage",
        ),
        tool(303, 620, "You cast out your net...", None, "small net"),
        tool(305, 620, "You cast out your net...", None, "big net"),
        tool(
            307,
            622,
            "You attempt to catch a fish...",
            Some(313),
            "fishing rod",
        ),
        tool(
            309,
            622,
            "You attempt to catch a fish...",
            Some(314),
            "fishing rod",
        ),
        tool(311, 618, "You start harpooning fish...", None, "harpoon"),
    ]
}

fn standard_spots() -> Vec<SpotDefinition> {
    vec![
        spot(309, [307, 309], &[335, 331], &[349]),
        spot(312, [301, 311], &[377], &[359, 371]),
        spot(313, [305, 311], &[353, 341], &[363, 383]),
        spot(316, [303, 307], &[317, 321], &[327, 345]),
    ]
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    fn standard() -> FishingRegistry {
        FishingRegistry::standard(&ItemCatalogue::standard()).unwrap()
    }

    #[test]
    fn standard_tables_load() {
        let registry = standard();
        assert_eq!(registry.species_count(), 14);
        assert_eq!(registry.tool_count(), 6);
        assert_eq!(registry.spot_count(), 4);
    }

    #[test]
    fn species_levels_and_experience_match_the_data_files() {
        let registry = standard();
        let shrimp = registry.species(ItemId::new(317)).unwrap();
        assert_eq!(shrimp.level, 1);
        assert_eq!(shrimp.experience, dec!(10));
        let bass = registry.species(ItemId::new(363)).unwrap();
        assert_eq!(bass.level, 46);
        assert_eq!(bass.experience, dec!(100));
        let shark = registry.species(ItemId::new(383)).unwrap();
        assert_eq!(shark.level, 76);
        assert_eq!(shark.experience, dec!(110));
    }

    #[test]
    fn standard_spot_tools_match_layout() {
        let registry = standard();
        let spot = registry.spot(NpcId::new(316)).unwrap();
        assert_eq!(spot.tool_for(ToolOption::Primary), ItemId::new(303));
        assert_eq!(spot.tool_for(ToolOption::Secondary), ItemId::new(307));
        assert_eq!(
            spot.tier_for(ToolOption::Primary),
            &[ItemId::new(317), ItemId::new(321)]
        );
        assert_eq!(
            spot.tier_for(ToolOption::Secondary),
            &[ItemId::new(327), ItemId::new(345)]
        );
    }

    #[test]
    fn rods_require_their_bait() {
        let registry = standard();
        assert_eq!(
            registry.tool(ItemId::new(307)).unwrap().bait,
            Some(ItemId::new(313))
        );
        assert_eq!(
            registry.tool(ItemId::new(309)).unwrap().bait,
            Some(ItemId::new(314))
        );
        assert_eq!(registry.tool(ItemId::new(311)).unwrap().bait, None);
    }

    #[test]
    fn duplicate_species_rejected() {
        let items = ItemCatalogue::standard();
        let result = FishingRegistry::new(
            vec![fish(317, 1, 10, "shrimp"), fish(317, 1, 10, "shrimp")],
            vec![],
            vec![],
            &items,
        );
        assert!(matches!(
            result,
            Err(WorldError::DuplicateSpecies(id)) if id == ItemId::new(317)
        ));
    }

    #[test]
    fn unknown_bait_rejected() {
        let items = ItemCatalogue::standard();
        let result = FishingRegistry::new(
            vec![],
            vec![tool(307, 622, "...", Some(990), "fishing rod")],
            vec![],
            &items,
        );
        assert!(matches!(
            result,
            Err(WorldError::UnknownBait { tool, bait })
                if tool == ItemId::new(307) && bait == ItemId::new(990)
        ));
    }

    #[test]
    fn spot_with_undefined_tool_rejected() {
        let items = ItemCatalogue::standard();
        let result = FishingRegistry::new(
            vec![fish(317, 1, 10, "shrimp")],
            vec![tool(303, 620, "...", None, "small net")],
            vec![spot(316, [303, 999], &[317], &[317])],
            &items,
        );
        assert!(matches!(
            result,
            Err(WorldError::UnknownTool { spot, tool })
                if spot == NpcId::new(316) && tool == ItemId::new(999)
        ));
    }

    #[test]
    fn spot_with_undefined_species_rejected() {
        let items = ItemCatalogue::standard();
        let result = FishingRegistry::new(
            vec![fish(317, 1, 10, "shrimp")],
            vec![tool(303, 620, "...", None, "small net")],
            vec![spot(316, [303, 303], &[317], &[999])],
            &items,
        );
        assert!(matches!(
            result,
            Err(WorldError::UnknownSpecies { spot, species })
                if spot == NpcId::new(316) && species == ItemId::new(999)
        ));
    }

    #[test]
    fn spot_with_empty_tier_rejected() {
        let items = ItemCatalogue::standard();
        let result = FishingRegistry::new(
            vec![fish(317, 1, 10, "shrimp")],
            vec![tool(303, 620, "...", None, "small net")],
            vec![spot(316, [303, 303], &[317], &[])],
            &items,
        );
        assert!(matches!(
            result,
            Err(WorldError::EmptyTier { spot, option })
                if spot == NpcId::new(316) && option == ToolOption::Secondary
        ));
    }

    #[test]
    fn lookups_miss_cleanly() {
        let registry = standard();
        assert!(registry.species(ItemId::new(1)).is_none());
        assert!(registry.tool(ItemId::new(1)).is_none());
        assert!(registry.spot(NpcId::new(1)).is_none());
    }
}
