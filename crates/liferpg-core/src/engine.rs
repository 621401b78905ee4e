//! Progression engine.
//!
//! The engine is the only code that mutates a [`Profile`]. Every operation
//! is a synchronous method from (current record, parameters) to outcome;
//! there is no I/O, no suspension point, and no shared state. Callers
//! persist the updated record and present the returned outcome (level-up
//! signal, end-of-day classification) however they like.
//!
//! ## Rules
//!
//! - Completing a quest awards [`XP_PER_QUEST`] experience, bumps the
//!   quest's attribute by [`ATTRIBUTE_GAIN`], heals [`HEAL_PER_QUEST`] hit
//!   points, and increments the quest streak. Completing the same quest
//!   twice in one day is a no-op.
//! - Level-up runs as a loop: while `experience >= level * LEVEL_BASE_XP`,
//!   the threshold is subtracted and the level incremented. With the current
//!   constants at most one iteration fires, but the loop keeps the rule
//!   correct if the constants ever change.
//! - Ending the day deals [`DAMAGE_PER_MISSED_QUEST`] damage per incomplete
//!   quest. Dropping to 0 or below is a defeat: hit points refill, the
//!   experience bar empties, and the level drops by one (floor 1). A day
//!   with nothing missed is perfect and refills hit points. Either way all
//!   completion flags clear, and missed quests lose their streak.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::attribute::Attribute;
use crate::error::ValidationError;
use crate::profile::{
    Profile, ATTRIBUTE_GAIN, DAMAGE_PER_MISSED_QUEST, HEAL_PER_QUEST, LEVEL_BASE_XP, XP_PER_QUEST,
};
use crate::quest::Quest;

/// What happened when a quest was completed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Completion {
    pub quest_id: Uuid,
    pub attribute: Attribute,
    pub xp_gained: u32,
    /// Streak value after this completion.
    pub streak: u32,
    /// `Some(new_level)` if this completion crossed a level threshold.
    /// The caller owns notifying the user; the engine only reports it.
    pub leveled_up_to: Option<u32>,
}

/// Classification of an end-of-day reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayOutcome {
    /// Damage brought hit points to 0 or below: level lost, bar reset.
    Defeated,
    /// Some quests were missed but the character survived.
    Damaged,
    /// Every quest was completed: full heal.
    Perfect,
}

/// Summary of an end-of-day reset, for the caller to present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayReport {
    pub outcome: DayOutcome,
    /// Quests that were not completed before the boundary.
    pub missed: u32,
    pub damage: u32,
    /// Level after the reset.
    pub level: u32,
    /// Hit points after the reset.
    pub hit_points: u32,
}

impl Profile {
    // ── Quest list management ────────────────────────────────────────

    /// Append a new quest with a fresh unique id.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyQuestText`] without mutating the
    /// record if `text` is empty or whitespace-only.
    pub fn add_quest(
        &mut self,
        text: &str,
        attribute: Attribute,
    ) -> Result<Uuid, ValidationError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ValidationError::EmptyQuestText);
        }
        let quest = Quest::new(text, attribute);
        let id = quest.id;
        self.quests.push(quest);
        Ok(id)
    }

    /// Delete the quest with the given id. Returns `false` (no-op) if no
    /// such quest exists.
    pub fn remove_quest(&mut self, id: Uuid) -> bool {
        let before = self.quests.len();
        self.quests.retain(|q| q.id != id);
        self.quests.len() != before
    }

    // ── Progression operations ───────────────────────────────────────

    /// Complete a quest for today.
    ///
    /// Returns `None` and leaves the record untouched if the id is unknown
    /// or the quest is already completed today -- completing the same quest
    /// twice in one day has no further effect.
    pub fn complete_quest(&mut self, id: Uuid) -> Option<Completion> {
        let quest = self.quests.iter_mut().find(|q| q.id == id)?;
        if quest.completed_today {
            return None;
        }

        quest.completed_today = true;
        quest.streak += 1;
        let streak = quest.streak;
        let attribute = quest.attribute;

        self.experience += XP_PER_QUEST;
        self.attributes.bump(attribute, ATTRIBUTE_GAIN);
        self.hit_points = (self.hit_points + HEAL_PER_QUEST).min(self.max_hit_points);

        // Loop, not a single if: stays correct if the reward ever exceeds
        // one threshold.
        let mut leveled_up_to = None;
        while self.experience >= self.level * LEVEL_BASE_XP {
            self.experience -= self.level * LEVEL_BASE_XP;
            self.level += 1;
            leveled_up_to = Some(self.level);
        }

        Some(Completion {
            quest_id: id,
            attribute,
            xp_gained: XP_PER_QUEST,
            streak,
            leveled_up_to,
        })
    }

    /// Apply the day boundary: penalize missed quests and reset flags.
    pub fn end_day(&mut self) -> DayReport {
        let missed = self.quests.iter().filter(|q| !q.completed_today).count() as u32;
        let damage = missed * DAMAGE_PER_MISSED_QUEST;

        let remaining = self.hit_points as i64 - damage as i64;
        let outcome = if remaining <= 0 {
            // Defeat: refill, empty the bar, drop a level (floor 1).
            self.hit_points = self.max_hit_points;
            self.experience = 0;
            self.level = self.level.saturating_sub(1).max(1);
            DayOutcome::Defeated
        } else if missed == 0 {
            self.hit_points = self.max_hit_points;
            DayOutcome::Perfect
        } else {
            self.hit_points = remaining as u32;
            DayOutcome::Damaged
        };

        for quest in &mut self.quests {
            if !quest.completed_today {
                quest.streak = 0;
            }
            quest.completed_today = false;
        }

        DayReport {
            outcome,
            missed,
            damage,
            level: self.level,
            hit_points: self.hit_points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::MAX_HIT_POINTS;
    use proptest::prelude::*;

    fn profile_with_quest(attribute: Attribute) -> (Profile, Uuid) {
        let mut profile = Profile::default();
        let id = profile.add_quest("10 Pushups", attribute).unwrap();
        (profile, id)
    }

    #[test]
    fn complete_awards_xp_attribute_and_heal() {
        let (mut profile, id) = profile_with_quest(Attribute::Strength);
        profile.hit_points = 80;

        let completion = profile.complete_quest(id).unwrap();
        assert_eq!(completion.xp_gained, XP_PER_QUEST);
        assert_eq!(completion.attribute, Attribute::Strength);
        assert_eq!(completion.streak, 1);
        assert_eq!(completion.leveled_up_to, None);

        assert_eq!(profile.experience, 20);
        assert_eq!(profile.attributes.strength, 6);
        assert_eq!(profile.hit_points, 85);
        assert!(profile.quest(id).unwrap().completed_today);
    }

    #[test]
    fn complete_is_idempotent_within_a_day() {
        let (mut profile, id) = profile_with_quest(Attribute::Intellect);
        assert!(profile.complete_quest(id).is_some());
        let snapshot = profile.clone();

        assert!(profile.complete_quest(id).is_none());
        assert_eq!(profile, snapshot);
    }

    #[test]
    fn complete_unknown_id_is_a_noop() {
        let (mut profile, _) = profile_with_quest(Attribute::Charisma);
        let snapshot = profile.clone();
        assert!(profile.complete_quest(Uuid::new_v4()).is_none());
        assert_eq!(profile, snapshot);
    }

    #[test]
    fn level_up_carries_excess_xp() {
        // Level 1 at 90 XP, +20 -> level 2 with 10 XP.
        let (mut profile, id) = profile_with_quest(Attribute::Dexterity);
        profile.experience = 90;

        let completion = profile.complete_quest(id).unwrap();
        assert_eq!(completion.leveled_up_to, Some(2));
        assert_eq!(profile.level, 2);
        assert_eq!(profile.experience, 10);
    }

    #[test]
    fn heal_caps_at_max_hit_points() {
        let (mut profile, id) = profile_with_quest(Attribute::Strength);
        profile.hit_points = 98;
        profile.complete_quest(id).unwrap();
        assert_eq!(profile.hit_points, MAX_HIT_POINTS);
    }

    #[test]
    fn attribute_growth_is_isolated() {
        let (mut profile, id) = profile_with_quest(Attribute::Charisma);
        let before = profile.attributes.clone();
        profile.complete_quest(id).unwrap();
        assert_eq!(profile.attributes.charisma, before.charisma + 1);
        assert_eq!(profile.attributes.strength, before.strength);
        assert_eq!(profile.attributes.intellect, before.intellect);
        assert_eq!(profile.attributes.dexterity, before.dexterity);
    }

    #[test]
    fn end_day_damages_survivor() {
        let mut profile = Profile::default();
        profile.add_quest("Read", Attribute::Intellect).unwrap();
        profile.add_quest("Run", Attribute::Strength).unwrap();

        let report = profile.end_day();
        assert_eq!(report.outcome, DayOutcome::Damaged);
        assert_eq!(report.missed, 2);
        assert_eq!(report.damage, 20);
        assert_eq!(profile.hit_points, 80);
        assert_eq!(profile.level, 1);
    }

    #[test]
    fn end_day_defeat_resets_and_drops_level() {
        // Level 3, 5 HP, two missed quests: damage 20 would leave -15.
        let mut profile = Profile::default();
        profile.level = 3;
        profile.experience = 150;
        profile.hit_points = 5;
        profile.add_quest("Read", Attribute::Intellect).unwrap();
        profile.add_quest("Run", Attribute::Strength).unwrap();

        let report = profile.end_day();
        assert_eq!(report.outcome, DayOutcome::Defeated);
        assert_eq!(report.damage, 20);
        assert_eq!(profile.level, 2);
        assert_eq!(profile.hit_points, MAX_HIT_POINTS);
        assert_eq!(profile.experience, 0);
    }

    #[test]
    fn end_day_defeat_at_exactly_zero_hp() {
        let mut profile = Profile::default();
        profile.hit_points = 10;
        profile.add_quest("Read", Attribute::Intellect).unwrap();

        let report = profile.end_day();
        assert_eq!(report.outcome, DayOutcome::Defeated);
    }

    #[test]
    fn defeat_level_floors_at_one() {
        let mut profile = Profile::default();
        profile.hit_points = 5;
        profile.add_quest("Read", Attribute::Intellect).unwrap();

        profile.end_day();
        assert_eq!(profile.level, 1);
    }

    #[test]
    fn perfect_day_fully_heals() {
        let mut profile = Profile::default();
        profile.hit_points = 40;
        let id = profile.add_quest("Read", Attribute::Intellect).unwrap();
        profile.complete_quest(id);

        let report = profile.end_day();
        assert_eq!(report.outcome, DayOutcome::Perfect);
        assert_eq!(report.missed, 0);
        assert_eq!(profile.hit_points, MAX_HIT_POINTS);
    }

    #[test]
    fn end_day_with_no_quests_is_perfect() {
        let mut profile = Profile::default();
        profile.hit_points = 30;
        let report = profile.end_day();
        assert_eq!(report.outcome, DayOutcome::Perfect);
        assert_eq!(profile.hit_points, MAX_HIT_POINTS);
    }

    #[test]
    fn end_day_clears_flags_and_resets_missed_streaks() {
        let mut profile = Profile::default();
        let done = profile.add_quest("Read", Attribute::Intellect).unwrap();
        let missed = profile.add_quest("Run", Attribute::Strength).unwrap();
        profile.complete_quest(done);
        profile.quests.iter_mut().find(|q| q.id == missed).unwrap().streak = 4;

        profile.end_day();
        let done = profile.quest(done).unwrap();
        let missed = profile.quest(missed).unwrap();
        assert!(!done.completed_today);
        assert!(!missed.completed_today);
        // Completed quests keep their streak; missed ones lose it.
        assert_eq!(done.streak, 1);
        assert_eq!(missed.streak, 0);
    }

    #[test]
    fn add_quest_rejects_empty_text() {
        let mut profile = Profile::default();
        assert_eq!(
            profile.add_quest("", Attribute::Strength),
            Err(ValidationError::EmptyQuestText)
        );
        assert_eq!(
            profile.add_quest("   ", Attribute::Strength),
            Err(ValidationError::EmptyQuestText)
        );
        assert!(profile.quests.is_empty());
    }

    #[test]
    fn add_quest_ids_stay_unique_under_rapid_creation() {
        let mut profile = Profile::default();
        for i in 0..200 {
            profile
                .add_quest(&format!("Quest {i}"), Attribute::Dexterity)
                .unwrap();
        }
        let mut ids: Vec<_> = profile.quests.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), 200);
    }

    #[test]
    fn remove_quest_deletes_or_noops() {
        let (mut profile, id) = profile_with_quest(Attribute::Strength);
        assert!(!profile.remove_quest(Uuid::new_v4()));
        assert_eq!(profile.quests.len(), 1);
        assert!(profile.remove_quest(id));
        assert!(profile.quests.is_empty());
    }

    // Random operation sequences never break the core invariants.
    proptest! {
        #[test]
        fn invariants_hold_over_any_operation_sequence(ops in prop::collection::vec(0u8..4, 1..200)) {
            let mut profile = Profile::default();
            let mut next_quest = 0u32;

            for op in ops {
                match op {
                    0 => {
                        next_quest += 1;
                        profile
                            .add_quest(&format!("Quest {next_quest}"), Attribute::Strength)
                            .unwrap();
                    }
                    1 => {
                        if let Some(id) = profile.quests.first().map(|q| q.id) {
                            profile.complete_quest(id);
                        }
                    }
                    2 => {
                        if let Some(id) = profile.quests.last().map(|q| q.id) {
                            profile.remove_quest(id);
                        }
                    }
                    _ => {
                        profile.end_day();
                    }
                }

                prop_assert!(profile.level >= 1);
                prop_assert!(profile.experience < profile.level * LEVEL_BASE_XP);
                prop_assert!(profile.hit_points <= profile.max_hit_points);
            }
        }
    }
}
