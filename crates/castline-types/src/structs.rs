//! Core data structs: tile positions and interaction events.

use serde::{Deserialize, Serialize};

use crate::enums::ToolOption;
use crate::ids::{EntityIndex, PlayerId};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A tile coordinate on the world grid.
///
/// Interaction range uses Chebyshev distance (the larger of the axis
/// deltas), matching how the client measures reach: a tile diagonally
/// adjacent is distance 1, the same as an orthogonal neighbor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    /// West-to-east coordinate.
    pub x: i32,
    /// South-to-north coordinate.
    pub y: i32,
}

impl Position {
    /// Create a position from tile coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Chebyshev distance to another tile.
    pub fn chebyshev(self, other: Self) -> u64 {
        let dx = i64::from(self.x).saturating_sub(i64::from(other.x)).unsigned_abs();
        let dy = i64::from(self.y).saturating_sub(i64::from(other.y)).unsigned_abs();
        dx.max(dy)
    }

    /// Whether `other` lies within `range` tiles of this position.
    pub fn within(self, other: Self, range: u32) -> bool {
        self.chebyshev(other) <= u64::from(range)
    }

    /// The position after one walking step toward `target`.
    ///
    /// Moves at most one tile per axis, so diagonal approach covers one
    /// Chebyshev unit per step. Returns `self` unchanged when already on
    /// the target tile.
    pub const fn step_toward(self, target: Self) -> Self {
        Self {
            x: step_axis(self.x, target.x),
            y: step_axis(self.y, target.y),
        }
    }
}

impl core::fmt::Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Move one coordinate a single tile toward a target coordinate.
const fn step_axis(from: i32, to: i32) -> i32 {
    if to > from {
        from.saturating_add(1)
    } else if to < from {
        from.saturating_sub(1)
    } else {
        from
    }
}

// ---------------------------------------------------------------------------
// Interaction events
// ---------------------------------------------------------------------------

/// A decoded world-interaction event targeting a spawned entity.
///
/// Produced by the session layer when a player clicks an NPC context-menu
/// action. The entity is addressed by slot index; the menu option has
/// already been decoded into a [`ToolOption`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotInteraction {
    /// The acting player.
    pub actor: PlayerId,
    /// Slot index of the clicked entity.
    pub entity_index: EntityIndex,
    /// Which tool/tier pairing the menu action selected.
    pub option: ToolOption,
}

#[cfg(test)]
#[allow(clippy::arithmetic_side_effects)]
mod tests {
    use super::*;

    #[test]
    fn chebyshev_counts_diagonals_once() {
        let a = Position::new(0, 0);
        let b = Position::new(3, 3);
        assert_eq!(a.chebyshev(b), 3);
        assert_eq!(b.chebyshev(a), 3);
    }

    #[test]
    fn chebyshev_takes_larger_axis() {
        let a = Position::new(10, 10);
        let b = Position::new(12, 17);
        assert_eq!(a.chebyshev(b), 7);
    }

    #[test]
    fn within_is_inclusive() {
        let a = Position::new(0, 0);
        assert!(a.within(Position::new(1, 1), 1));
        assert!(a.within(Position::new(0, 1), 1));
        assert!(!a.within(Position::new(2, 0), 1));
        assert!(a.within(a, 0));
    }

    #[test]
    fn step_toward_closes_distance_each_tick() {
        let target = Position::new(5, 2);
        let mut at = Position::new(0, 0);
        let mut steps = 0;
        while at != target {
            let next = at.step_toward(target);
            assert!(next.chebyshev(target) < at.chebyshev(target));
            at = next;
            steps += 1;
        }
        // Chebyshev distance was 5, so 5 diagonal-capable steps.
        assert_eq!(steps, 5);
    }

    #[test]
    fn step_toward_on_target_is_identity() {
        let at = Position::new(4, 4);
        assert_eq!(at.step_toward(at), at);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = Position::new(i32::MIN, 0);
        let b = Position::new(i32::MAX, 0);
        assert!(a.chebyshev(b) >= u64::from(u32::MAX));
    }
}
