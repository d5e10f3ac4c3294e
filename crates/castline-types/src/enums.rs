//! Enumeration types shared across the Castline workspace.

use serde::{Deserialize, Serialize};

use crate::ids::ItemId;

// ---------------------------------------------------------------------------
// Skills
// ---------------------------------------------------------------------------

/// A trainable player skill.
///
/// Only fishing has mechanics in this workspace; the other kinds exist so
/// the skill sheet models the full stat block a session carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Skill {
    /// Melee accuracy.
    Attack,
    /// Melee damage mitigation.
    Defence,
    /// Melee damage.
    Strength,
    /// Life points.
    Hitpoints,
    /// Preparing caught food.
    Cooking,
    /// Felling trees.
    Woodcutting,
    /// Catching fish at resource spots.
    Fishing,
    /// Lighting fires.
    Firemaking,
    /// Extracting ore.
    Mining,
    /// Working metal.
    Smithing,
}

impl Skill {
    /// Every skill kind, in display order.
    pub const ALL: [Self; 10] = [
        Self::Attack,
        Self::Defence,
        Self::Strength,
        Self::Hitpoints,
        Self::Cooking,
        Self::Woodcutting,
        Self::Fishing,
        Self::Firemaking,
        Self::Mining,
        Self::Smithing,
    ];

    /// Lowercase display name, as used in client messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Attack => "attack",
            Self::Defence => "defence",
            Self::Strength => "strength",
            Self::Hitpoints => "hitpoints",
            Self::Cooking => "cooking",
            Self::Woodcutting => "woodcutting",
            Self::Fishing => "fishing",
            Self::Firemaking => "firemaking",
            Self::Mining => "mining",
            Self::Smithing => "smithing",
        }
    }
}

impl core::fmt::Display for Skill {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ---------------------------------------------------------------------------
// Tool options
// ---------------------------------------------------------------------------

/// Which of a spot's two tool/tier pairings an interaction selects.
///
/// Fishing spots expose two context-menu actions; the chosen action picks
/// both the tool and the candidate species tier. Menu indices outside
/// `1..=2` are rejected at the decode boundary, so dispatch never sees an
/// out-of-range option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ToolOption {
    /// The spot's first tool and tier-1 species list.
    Primary,
    /// The spot's second tool and tier-2 species list.
    Secondary,
}

impl ToolOption {
    /// Decode a 1-based context-menu index.
    pub const fn from_menu_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(Self::Primary),
            2 => Some(Self::Secondary),
            _ => None,
        }
    }

    /// The 1-based context-menu index this option decodes from.
    pub const fn menu_index(self) -> u32 {
        match self {
            Self::Primary => 1,
            Self::Secondary => 2,
        }
    }
}

impl core::fmt::Display for ToolOption {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Primary => write!(f, "primary"),
            Self::Secondary => write!(f, "secondary"),
        }
    }
}

// ---------------------------------------------------------------------------
// Action lifecycle
// ---------------------------------------------------------------------------

/// Lifecycle phase of a scheduled distanced action.
///
/// Transitions run `Idle -> Approaching -> Active -> Stopped`. `Stopped`
/// is terminal and reachable from every other phase; no transition leaves
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActionPhase {
    /// Created but not yet advanced.
    Idle,
    /// Walking toward the target position.
    Approaching,
    /// Within range; the step function runs on its cadence.
    Active,
    /// Cancelled or self-terminated. Terminal.
    Stopped,
}

impl ActionPhase {
    /// Whether this phase admits no further transitions.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Stopped)
    }
}

impl core::fmt::Display for ActionPhase {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Approaching => write!(f, "approaching"),
            Self::Active => write!(f, "active"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

// ---------------------------------------------------------------------------
// Halt reasons
// ---------------------------------------------------------------------------

/// Why a fishing session halted itself.
///
/// Every variant is a soft failure: the action stops and the player is
/// told why, but nothing propagates as an error out of the tick loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HaltReason {
    /// The actor's skill level is below the spot tier's minimum.
    InsufficientLevel {
        /// The minimum level the tier requires.
        required: u32,
    },
    /// The actor's inventory has no free slot for a catch.
    InventoryFull,
    /// The tool requires bait the actor does not hold.
    MissingBait {
        /// The required bait item.
        bait: ItemId,
    },
    /// The last bait unit was consumed by a successful catch.
    BaitExhausted {
        /// The required bait item.
        bait: ItemId,
    },
}

impl core::fmt::Display for HaltReason {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::InsufficientLevel { .. } => write!(f, "insufficient_level"),
            Self::InventoryFull => write!(f, "inventory_full"),
            Self::MissingBait { .. } => write!(f, "missing_bait"),
            Self::BaitExhausted { .. } => write!(f, "bait_exhausted"),
        }
    }
}
