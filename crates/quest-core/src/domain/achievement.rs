//! Achievements
//!
//! Each variant carries its own unlock predicate. Unlocks are one-way:
//! a predicate turning false later never revokes an achievement.

use serde::{Deserialize, Deserializer, Serialize};
use super::player::PlayerState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Achievement {
    #[serde(rename = "first_quest")]
    FirstQuest,
    #[serde(rename = "quest_apprentice")]
    QuestApprentice,
    #[serde(rename = "quest_master")]
    QuestMaster,
    #[serde(rename = "streak_3")]
    StreakThree,
    #[serde(rename = "streak_7")]
    StreakSeven,
    #[serde(rename = "level_5")]
    LevelFive,
    #[serde(rename = "level_10")]
    LevelTen,
    #[serde(rename = "xp_1000")]
    XpThousand,
}

impl Achievement {
    /// Every achievement, in display order
    pub const ALL: [Achievement; 8] = [
        Achievement::FirstQuest,
        Achievement::QuestApprentice,
        Achievement::QuestMaster,
        Achievement::StreakThree,
        Achievement::StreakSeven,
        Achievement::LevelFive,
        Achievement::LevelTen,
        Achievement::XpThousand,
    ];

    /// Stable key used in persisted state
    pub fn key(self) -> &'static str {
        match self {
            Achievement::FirstQuest => "first_quest",
            Achievement::QuestApprentice => "quest_apprentice",
            Achievement::QuestMaster => "quest_master",
            Achievement::StreakThree => "streak_3",
            Achievement::StreakSeven => "streak_7",
            Achievement::LevelFive => "level_5",
            Achievement::LevelTen => "level_10",
            Achievement::XpThousand => "xp_1000",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == key)
    }

    pub fn name(self) -> &'static str {
        match self {
            Achievement::FirstQuest => "First Steps",
            Achievement::QuestApprentice => "Quest Apprentice",
            Achievement::QuestMaster => "Quest Master",
            Achievement::StreakThree => "On Fire",
            Achievement::StreakSeven => "Unstoppable",
            Achievement::LevelFive => "Rising Star",
            Achievement::LevelTen => "Seasoned",
            Achievement::XpThousand => "XP Hoarder",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Achievement::FirstQuest => "Complete your first quest",
            Achievement::QuestApprentice => "Complete 10 quests",
            Achievement::QuestMaster => "Complete 50 quests",
            Achievement::StreakThree => "Reach a 3 day streak",
            Achievement::StreakSeven => "Reach a 7 day streak",
            Achievement::LevelFive => "Reach level 5",
            Achievement::LevelTen => "Reach level 10",
            Achievement::XpThousand => "Earn 1000 XP in total",
        }
    }

    /// Whether `player` currently meets the unlock condition
    pub fn is_met(self, player: &PlayerState) -> bool {
        match self {
            Achievement::FirstQuest => player.quests_completed >= 1,
            Achievement::QuestApprentice => player.quests_completed >= 10,
            Achievement::QuestMaster => player.quests_completed >= 50,
            Achievement::StreakThree => player.streak >= 3,
            Achievement::StreakSeven => player.streak >= 7,
            Achievement::LevelFive => player.level >= 5,
            Achievement::LevelTen => player.level >= 10,
            Achievement::XpThousand => player.total_xp >= 1000,
        }
    }
}

/// Unlock every locked achievement whose condition now holds.
///
/// Returns only the achievements unlocked by this call.
pub fn unlock_new(player: &mut PlayerState) -> Vec<Achievement> {
    let unlocked: Vec<Achievement> = Achievement::ALL
        .into_iter()
        .filter(|a| !player.has_achievement(*a) && a.is_met(player))
        .collect();
    player.achievements.extend(unlocked.iter().copied());
    unlocked
}

/// Reads a list of keys, dropping (and logging) ones no longer known.
pub(crate) fn deserialize_lenient<'de, D>(deserializer: D) -> Result<Vec<Achievement>, D::Error>
where
    D: Deserializer<'de>,
{
    let keys = Vec::<String>::deserialize(deserializer)?;
    let mut out = Vec::with_capacity(keys.len());
    for key in keys {
        match Achievement::from_key(&key) {
            Some(a) if !out.contains(&a) => out.push(a),
            Some(_) => {}
            None => log::warn!("Dropping unknown achievement key {:?}", key),
        }
    }
    Ok(out)
}
