//! Skill levels and accumulated experience for player actors.
//!
//! Levels are authoritative values set from outside; the mapping from
//! experience totals to levels lives in the progression service, not
//! here. This sheet only stores both numbers and keeps the experience
//! arithmetic exact via [`rust_decimal::Decimal`].

use std::collections::BTreeMap;

use castline_types::Skill;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ActorError;

/// Level every skill starts at.
pub const BASE_LEVEL: u32 = 1;

/// Per-actor skill levels and experience totals.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillSheet {
    /// Skill to current level. Absent skills are at [`BASE_LEVEL`].
    levels: BTreeMap<Skill, u32>,
    /// Skill to accumulated experience. Absent skills are at zero.
    experience: BTreeMap<Skill, Decimal>,
}

impl SkillSheet {
    /// Create a sheet with every skill at [`BASE_LEVEL`] and zero
    /// experience.
    pub const fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
            experience: BTreeMap::new(),
        }
    }

    /// The current level in a skill.
    pub fn current_level(&self, skill: Skill) -> u32 {
        self.levels.get(&skill).copied().unwrap_or(BASE_LEVEL)
    }

    /// Set the current level in a skill.
    pub fn set_level(&mut self, skill: Skill, level: u32) {
        self.levels.insert(skill, level);
    }

    /// The accumulated experience in a skill.
    pub fn experience(&self, skill: Skill) -> Decimal {
        self.experience.get(&skill).copied().unwrap_or(Decimal::ZERO)
    }

    /// Add experience to a skill, returning the new total.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ExperienceOverflow`] if the total would leave
    /// the representable range.
    pub fn add_experience(&mut self, skill: Skill, amount: Decimal) -> Result<Decimal, ActorError> {
        let total = self
            .experience(skill)
            .checked_add(amount)
            .ok_or(ActorError::ExperienceOverflow { skill })?;
        self.experience.insert(skill, total);
        Ok(total)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn skills_default_to_base_level() {
        let sheet = SkillSheet::new();
        assert_eq!(sheet.current_level(Skill::Fishing), BASE_LEVEL);
        assert_eq!(sheet.experience(Skill::Fishing), Decimal::ZERO);
    }

    #[test]
    fn set_level_overrides_default() {
        let mut sheet = SkillSheet::new();
        sheet.set_level(Skill::Fishing, 40);
        assert_eq!(sheet.current_level(Skill::Fishing), 40);
        // Other skills keep their default.
        assert_eq!(sheet.current_level(Skill::Cooking), BASE_LEVEL);
    }

    #[test]
    fn experience_accumulates_exactly() {
        let mut sheet = SkillSheet::new();
        let first = sheet.add_experience(Skill::Fishing, Decimal::from(10)).unwrap();
        assert_eq!(first, Decimal::from(10));
        let second = sheet.add_experience(Skill::Fishing, Decimal::from(40)).unwrap();
        assert_eq!(second, Decimal::from(50));
        assert_eq!(sheet.experience(Skill::Fishing), Decimal::from(50));
    }

    #[test]
    fn experience_is_tracked_per_skill() {
        let mut sheet = SkillSheet::new();
        sheet.add_experience(Skill::Fishing, Decimal::from(30)).unwrap();
        sheet.add_experience(Skill::Cooking, Decimal::from(7)).unwrap();
        assert_eq!(sheet.experience(Skill::Fishing), Decimal::from(30));
        assert_eq!(sheet.experience(Skill::Cooking), Decimal::from(7));
    }

    #[test]
    fn experience_overflow_is_rejected() {
        let mut sheet = SkillSheet::new();
        sheet.add_experience(Skill::Fishing, Decimal::MAX).unwrap();
        let result = sheet.add_experience(Skill::Fishing, Decimal::from(1));
        assert!(matches!(
            result,
            Err(ActorError::ExperienceOverflow { skill: Skill::Fishing })
        ));
        // The stored total is unchanged on failure.
        assert_eq!(sheet.experience(Skill::Fishing), Decimal::MAX);
    }
}
