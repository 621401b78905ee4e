//! The save record: one character profile per user.
//!
//! A `Profile` is created with default values on first access and mutated
//! only through the progression operations in [`crate::engine`]. The engine
//! never deletes a profile; storage management owns that.

use serde::{Deserialize, Serialize};

use crate::attribute::Attributes;
use crate::quest::Quest;

/// Experience needed per level: `level * LEVEL_BASE_XP`.
pub const LEVEL_BASE_XP: u32 = 100;
/// Experience awarded for completing a quest.
pub const XP_PER_QUEST: u32 = 20;
/// Attribute points gained per completed quest.
pub const ATTRIBUTE_GAIN: u32 = 1;
/// Hit points healed per completed quest.
pub const HEAL_PER_QUEST: u32 = 5;
/// Hit points lost per quest missed at the day boundary.
pub const DAMAGE_PER_MISSED_QUEST: u32 = 10;
/// Hit point ceiling.
pub const MAX_HIT_POINTS: u32 = 100;

/// One character's complete save state.
///
/// Invariants (outside the instant of a level-up or defeat transition):
/// - `experience < level * LEVEL_BASE_XP`
/// - `hit_points <= max_hit_points`
/// - `level >= 1`
/// - quest ids are unique
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub display_name: String,
    pub level: u32,
    pub experience: u32,
    pub hit_points: u32,
    pub max_hit_points: u32,
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default)]
    pub quests: Vec<Quest>,
}

impl Profile {
    /// Fresh level-1 profile with full hit points and base attributes.
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            level: 1,
            experience: 0,
            hit_points: MAX_HIT_POINTS,
            max_hit_points: MAX_HIT_POINTS,
            attributes: Attributes::default(),
            quests: Vec::new(),
        }
    }

    /// Experience needed to reach the next level from the current one.
    pub fn xp_to_next_level(&self) -> u32 {
        self.level * LEVEL_BASE_XP
    }

    pub fn quest(&self, id: uuid::Uuid) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }
}

impl Default for Profile {
    fn default() -> Self {
        Self::new("Player 1")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attribute::ATTRIBUTE_BASE;

    #[test]
    fn new_profile_has_default_values() {
        let profile = Profile::default();
        assert_eq!(profile.display_name, "Player 1");
        assert_eq!(profile.level, 1);
        assert_eq!(profile.experience, 0);
        assert_eq!(profile.hit_points, MAX_HIT_POINTS);
        assert_eq!(profile.max_hit_points, MAX_HIT_POINTS);
        assert_eq!(profile.attributes.strength, ATTRIBUTE_BASE);
        assert!(profile.quests.is_empty());
    }

    #[test]
    fn xp_threshold_scales_with_level() {
        let mut profile = Profile::default();
        assert_eq!(profile.xp_to_next_level(), 100);
        profile.level = 3;
        assert_eq!(profile.xp_to_next_level(), 300);
    }

    #[test]
    fn serde_roundtrip_preserves_record() {
        let mut profile = Profile::new("Tester");
        profile.level = 4;
        profile.experience = 250;
        let json = serde_json::to_string(&profile).unwrap();
        let back: Profile = serde_json::from_str(&json).unwrap();
        assert_eq!(back, profile);
    }
}
