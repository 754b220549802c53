//! Player State
//!
//! Progress of the gamified widget: level, XP, streak and achievements.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::achievement::{self, Achievement};
use super::leveling;

/// Persisted player progress
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlayerState {
    /// Current level, starting at 1
    pub level: u32,
    /// XP earned within the current level
    pub current_xp: u64,
    /// XP earned overall
    pub total_xp: u64,
    pub quests_completed: u32,
    /// Consecutive days with at least one completion
    pub streak: u32,
    pub best_streak: u32,
    pub last_completion_date: Option<NaiveDate>,
    /// Unlocked achievements, in unlock order
    #[serde(deserialize_with = "achievement::deserialize_lenient")]
    pub achievements: Vec<Achievement>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            level: 1,
            current_xp: 0,
            total_xp: 0,
            quests_completed: 0,
            streak: 0,
            best_streak: 0,
            last_completion_date: None,
            achievements: Vec::new(),
        }
    }
}

impl PlayerState {
    pub fn has_achievement(&self, achievement: Achievement) -> bool {
        self.achievements.contains(&achievement)
    }

    /// XP needed to finish the current level
    pub fn xp_to_next(&self) -> u64 {
        leveling::xp_required(self.level)
    }

    pub fn title(&self) -> &'static str {
        leveling::level_title(self.level)
    }

    pub fn progress_percent(&self) -> u8 {
        leveling::progress_percent(self.level, self.current_xp)
    }

    /// Add XP, returning the number of levels gained
    pub fn gain_xp(&mut self, amount: u64) -> u32 {
        let result = leveling::award_xp(self.level, self.current_xp, amount);
        self.level = result.level;
        self.current_xp = result.current_xp;
        self.total_xp = self.total_xp.saturating_add(amount);
        result.levels_gained
    }

    /// Record a completion on `today` for streak purposes
    pub fn record_completion_day(&mut self, today: NaiveDate) {
        self.streak = super::streak::advance_streak(self.streak, self.last_completion_date, today);
        self.best_streak = self.best_streak.max(self.streak);
        self.last_completion_date = Some(today);
    }

    /// Fix up values a hand-edited or stale record may carry
    pub(crate) fn normalize(&mut self) {
        if self.level == 0 {
            log::warn!("Player level 0 in stored state, using 1");
            self.level = 1;
        }
        if self.current_xp >= self.xp_to_next() {
            let settled = leveling::award_xp(self.level, 0, self.current_xp);
            log::warn!(
                "Stored XP {} exceeds level {}, settling at level {}",
                self.current_xp,
                self.level,
                settled.level
            );
            self.level = settled.level;
            self.current_xp = settled.current_xp;
        }
        self.best_streak = self.best_streak.max(self.streak);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_player() {
        let player = PlayerState::default();
        assert_eq!(player.level, 1);
        assert_eq!(player.xp_to_next(), 100);
        assert_eq!(player.title(), "Novice");
    }

    #[test]
    fn test_gain_xp_tracks_total() {
        let mut player = PlayerState::default();
        assert_eq!(player.gain_xp(250), 2);
        assert_eq!(player.level, 3);
        assert_eq!(player.current_xp, 0);
        assert_eq!(player.total_xp, 250);
    }

    #[test]
    fn test_best_streak_follows_peak() {
        let mut player = PlayerState::default();
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        for offset in 0..4 {
            player.record_completion_day(start + chrono::Duration::days(offset));
        }
        assert_eq!(player.streak, 4);
        player.record_completion_day(start + chrono::Duration::days(10));
        assert_eq!(player.streak, 1);
        assert_eq!(player.best_streak, 4);
    }

    #[test]
    fn test_partial_record_uses_defaults() {
        let player: PlayerState = serde_json::from_str(r#"{"totalXp":40}"#).unwrap();
        assert_eq!(player.level, 1);
        assert_eq!(player.total_xp, 40);
        assert!(player.achievements.is_empty());
    }

    #[test]
    fn test_overfull_level_is_settled() {
        let mut player: PlayerState =
            serde_json::from_str(r#"{"level":1,"currentXp":5000}"#).unwrap();
        player.normalize();
        assert!(player.level > 1);
        assert!(player.current_xp < player.xp_to_next());
    }

    #[test]
    fn test_huge_stored_values_do_not_overflow() {
        let mut player: PlayerState =
            serde_json::from_str(r#"{"level":200,"currentXp":1000000000000000000}"#).unwrap();
        player.normalize();
        assert_eq!(player.level, 200);
        assert!(player.progress_percent() <= 100);
    }

    #[test]
    fn test_unknown_achievement_keys_dropped() {
        let json = r#"{"achievements":["first_quest","retired_badge","first_quest"]}"#;
        let player: PlayerState = serde_json::from_str(json).unwrap();
        assert_eq!(player.achievements, vec![Achievement::FirstQuest]);
    }
}
