//! Quest Log
//!
//! State of the gamified widget: the quests plus the player's progress.
//! Completing a quest feeds the streak, XP and achievement rules.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::achievement::{self, Achievement};
use super::clock::Clock;
use super::entity::{DomainError, DomainResult};
use super::filter::Filter;
use super::item_list::ItemList;
use super::player::PlayerState;
use super::quest::{Difficulty, Quest};
use super::streak;

/// What a toggle did to the player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestOutcome {
    /// New completion state of the quest
    pub completed: bool,
    /// XP paid out by this toggle (0 for re-completions and reopenings)
    pub xp_awarded: u32,
    pub levels_gained: u32,
    pub level: u32,
    pub streak: u32,
    /// Achievements unlocked by this toggle
    pub unlocked: Vec<Achievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "QuestLogRecord")]
pub struct QuestLog {
    quests: ItemList<Quest>,
    player: PlayerState,
}

/// Stored shape, cleaned up before use
#[derive(Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct QuestLogRecord {
    quests: ItemList<Quest>,
    player: PlayerState,
}

impl From<QuestLogRecord> for QuestLog {
    fn from(mut record: QuestLogRecord) -> Self {
        record.quests.dedup_ids();
        record.player.normalize();
        Self {
            quests: record.quests,
            player: record.player,
        }
    }
}

impl QuestLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn quests(&self) -> &ItemList<Quest> {
        &self.quests
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Add a quest (text trimmed, must not be empty)
    pub fn add(&mut self, text: &str, difficulty: Difficulty, clock: &impl Clock) -> DomainResult<&Quest> {
        let text = text.trim();
        if text.is_empty() {
            return Err(DomainError::InvalidInput("quest text is empty".to_string()));
        }
        let now = clock.now_millis();
        let id = self.quests.next_id(now);
        self.quests.insert(Quest::new(id, text.to_string(), difficulty, now))
    }

    /// Flip a quest's completion and apply the progress rules.
    ///
    /// Every completion updates the streak. XP and the completed count only
    /// move the first time a quest is completed; reopening never takes
    /// anything back. Unknown ids return `None` and change nothing.
    pub fn toggle(&mut self, id: &str, clock: &impl Clock) -> Option<QuestOutcome> {
        let completed = self.quests.toggle(id, clock.now_millis())?.completed;

        let mut xp_awarded = 0;
        let mut levels_gained = 0;
        let mut unlocked = Vec::new();

        if completed {
            self.player.record_completion_day(clock.today());

            let quest = self.quests.get_mut(id)?;
            if !quest.rewarded {
                quest.rewarded = true;
                xp_awarded = quest.xp.xp();
                self.player.quests_completed = self.player.quests_completed.saturating_add(1);
                levels_gained = self.player.gain_xp(u64::from(xp_awarded));
                log::info!(
                    "Quest {} completed: +{} XP, level {}",
                    id,
                    xp_awarded,
                    self.player.level
                );
            }

            unlocked = achievement::unlock_new(&mut self.player);
            for a in &unlocked {
                log::info!("Achievement unlocked: {}", a.name());
            }
        }

        Some(QuestOutcome {
            completed,
            xp_awarded,
            levels_gained,
            level: self.player.level,
            streak: self.player.streak,
            unlocked,
        })
    }

    /// Remove a quest. Player progress is unaffected.
    pub fn delete(&mut self, id: &str) -> Option<Quest> {
        self.quests.remove(id)
    }

    pub fn clear_completed(&mut self) -> usize {
        self.quests.clear_completed()
    }

    pub fn filtered(&self, filter: Filter) -> Vec<&Quest> {
        self.quests.filtered(filter)
    }

    /// Zero the streak if a whole day went by without a completion.
    /// Returns whether anything changed.
    pub fn check_missed_day(&mut self, today: NaiveDate) -> bool {
        if self.player.streak > 0 && streak::missed_day(self.player.last_completion_date, today) {
            log::info!(
                "Streak of {} lost, last completion {:?}",
                self.player.streak,
                self.player.last_completion_date
            );
            self.player.streak = 0;
            return true;
        }
        false
    }

    /// Unlock anything the current state already qualifies for
    pub fn check_achievements(&mut self) -> Vec<Achievement> {
        achievement::unlock_new(&mut self.player)
    }

    /// The quest shown in focus mode: the `skip`-th active quest, cycling
    pub fn focus(&self, skip: usize) -> Option<&Quest> {
        let active = self.quests.filtered(Filter::Active);
        if active.is_empty() {
            return None;
        }
        Some(active[skip % active.len()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FixedClock;

    fn clock() -> FixedClock {
        FixedClock::new(1_000, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
    }

    fn log_with(quests: &[(&str, Difficulty)]) -> (QuestLog, Vec<String>) {
        let mut log = QuestLog::new();
        let ids = quests
            .iter()
            .map(|(text, d)| log.add(text, *d, &clock()).unwrap().id.clone())
            .collect();
        (log, ids)
    }

    #[test]
    fn test_add_validates_text() {
        let mut log = QuestLog::new();
        assert!(log.add("", Difficulty::Easy, &clock()).is_err());
        let quest = log.add(" Defeat dragon ", Difficulty::Hard, &clock()).unwrap();
        assert_eq!(quest.text, "Defeat dragon");
        assert_eq!(quest.xp.xp(), 50);
    }

    #[test]
    fn test_first_completion_awards_everything() {
        let (mut log, ids) = log_with(&[("Read", Difficulty::Medium)]);
        let outcome = log.toggle(&ids[0], &clock()).unwrap();

        assert!(outcome.completed);
        assert_eq!(outcome.xp_awarded, 25);
        assert_eq!(outcome.streak, 1);
        assert_eq!(outcome.unlocked, vec![Achievement::FirstQuest]);
        assert_eq!(log.player().quests_completed, 1);
        assert_eq!(log.player().current_xp, 25);
        assert_eq!(log.player().last_completion_date, Some(clock().date));
    }

    #[test]
    fn test_recompletion_same_day_is_neutral() {
        let (mut log, ids) = log_with(&[("Read", Difficulty::Hard)]);
        log.toggle(&ids[0], &clock());
        let after_first = log.player().clone();

        let reopened = log.toggle(&ids[0], &clock()).unwrap();
        assert!(!reopened.completed);
        assert_eq!(reopened.xp_awarded, 0);

        let again = log.toggle(&ids[0], &clock()).unwrap();
        assert_eq!(again.xp_awarded, 0);
        assert!(again.unlocked.is_empty());
        assert_eq!(log.player(), &after_first);
    }

    #[test]
    fn test_streak_over_consecutive_days() {
        let (mut log, ids) = log_with(&[
            ("a", Difficulty::Easy),
            ("b", Difficulty::Easy),
            ("c", Difficulty::Easy),
        ]);
        log.toggle(&ids[0], &clock());
        log.toggle(&ids[1], &clock().advance_days(1));
        let outcome = log.toggle(&ids[2], &clock().advance_days(2)).unwrap();

        assert_eq!(outcome.streak, 3);
        assert!(outcome.unlocked.contains(&Achievement::StreakThree));
    }

    #[test]
    fn test_level_up_reported() {
        let mut log = QuestLog::new();
        let mut last = None;
        for i in 0..2 {
            let id = log.add(&format!("q{}", i), Difficulty::Hard, &clock()).unwrap().id.clone();
            last = log.toggle(&id, &clock());
        }
        let outcome = last.unwrap();
        assert_eq!(outcome.levels_gained, 1);
        assert_eq!(outcome.level, 2);
        assert_eq!(log.player().current_xp, 0);
    }

    #[test]
    fn test_delete_keeps_progress() {
        let (mut log, ids) = log_with(&[("a", Difficulty::Medium)]);
        log.toggle(&ids[0], &clock());
        let player = log.player().clone();

        assert!(log.delete(&ids[0]).is_some());
        assert!(log.delete("nope").is_none());
        assert_eq!(log.player(), &player);
        assert!(log.quests().is_empty());
    }

    #[test]
    fn test_unknown_toggle_changes_nothing() {
        let (mut log, _) = log_with(&[("a", Difficulty::Easy)]);
        let before = log.clone();
        assert!(log.toggle("ghost", &clock()).is_none());
        assert_eq!(log, before);
    }

    #[test]
    fn test_missed_day_zeroes_streak() {
        let (mut log, ids) = log_with(&[("a", Difficulty::Easy)]);
        log.toggle(&ids[0], &clock());

        assert!(!log.check_missed_day(clock().advance_days(1).date));
        assert_eq!(log.player().streak, 1);

        assert!(log.check_missed_day(clock().advance_days(2).date));
        assert_eq!(log.player().streak, 0);
        assert!(!log.check_missed_day(clock().advance_days(3).date));
    }

    #[test]
    fn test_streak_achievement_survives_reset() {
        let (mut log, ids) = log_with(&[
            ("a", Difficulty::Easy),
            ("b", Difficulty::Easy),
            ("c", Difficulty::Easy),
        ]);
        for (offset, id) in ids.iter().enumerate() {
            log.toggle(id, &clock().advance_days(offset as i64));
        }
        log.check_missed_day(clock().advance_days(10).date);

        assert_eq!(log.player().streak, 0);
        assert!(log.player().has_achievement(Achievement::StreakThree));
    }

    #[test]
    fn test_focus_cycles_active_quests() {
        let (mut log, ids) = log_with(&[
            ("a", Difficulty::Easy),
            ("b", Difficulty::Easy),
            ("c", Difficulty::Easy),
        ]);
        log.toggle(&ids[1], &clock());

        assert_eq!(log.focus(0).unwrap().text, "a");
        assert_eq!(log.focus(1).unwrap().text, "c");
        assert_eq!(log.focus(2).unwrap().text, "a");

        log.toggle(&ids[0], &clock());
        log.toggle(&ids[2], &clock());
        assert!(log.focus(0).is_none());
    }

    #[test]
    fn test_completed_count_saturates() {
        let json = r#"{"player":{"questsCompleted":4294967295}}"#;
        let mut log: QuestLog = serde_json::from_str(json).unwrap();
        let id = log.add("one more", Difficulty::Easy, &clock()).unwrap().id.clone();
        log.toggle(&id, &clock());
        assert_eq!(log.player().quests_completed, u32::MAX);
    }

    #[test]
    fn test_catch_up_unlocks_once() {
        let json = r#"{"player":{"questsCompleted":10,"achievements":[]}}"#;
        let mut log: QuestLog = serde_json::from_str(json).unwrap();

        assert_eq!(
            log.check_achievements(),
            vec![Achievement::FirstQuest, Achievement::QuestApprentice]
        );
        assert!(log.check_achievements().is_empty());
        assert_eq!(
            log.player().achievements,
            vec![Achievement::FirstQuest, Achievement::QuestApprentice]
        );
    }

    #[test]
    fn test_overfull_stored_xp_is_settled_on_load() {
        let json = r#"{"player":{"level":1,"currentXp":250}}"#;
        let log: QuestLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.player().level, 3);
        assert_eq!(log.player().current_xp, 0);
    }

    #[test]
    fn test_stored_record_is_normalized() {
        let json = r#"{"player":{"level":0,"streak":4,"bestStreak":1}}"#;
        let log: QuestLog = serde_json::from_str(json).unwrap();
        assert_eq!(log.player().level, 1);
        assert_eq!(log.player().best_streak, 4);
        assert!(log.quests().is_empty());
    }
}
