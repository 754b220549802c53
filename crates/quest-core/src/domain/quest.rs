//! Quest Entity
//!
//! A task in the gamified widget, carrying an XP reward.

use serde::{Deserialize, Serialize};
use super::entity::Entity;

/// Difficulty tier; determines the XP reward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// XP granted when a quest of this tier is completed
    pub fn xp(self) -> u32 {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Medium => 25,
            Difficulty::Hard => 50,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn from_xp(xp: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.xp() == xp)
    }
}

impl TryFrom<u32> for Difficulty {
    type Error = String;

    fn try_from(xp: u32) -> Result<Self, Self::Error> {
        Difficulty::from_xp(xp).ok_or_else(|| format!("{} is not a valid XP reward", xp))
    }
}

impl From<Difficulty> for u32 {
    fn from(d: Difficulty) -> u32 {
        d.xp()
    }
}

/// A quest: a task with an XP reward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: i64,
    #[serde(default)]
    pub completed_at: Option<i64>,
    /// Reward tier, stored as its XP value
    pub xp: Difficulty,
    /// Set once the reward has been paid out
    #[serde(default)]
    pub rewarded: bool,
}

impl Quest {
    pub fn new(id: String, text: String, xp: Difficulty, now: i64) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: now,
            completed_at: None,
            xp,
            rewarded: false,
        }
    }
}

impl Entity for Quest {
    fn id(&self) -> &str {
        &self.id
    }

    fn is_completed(&self) -> bool {
        self.completed
    }

    fn set_completed(&mut self, completed: bool, now: i64) {
        self.completed = completed;
        self.completed_at = completed.then_some(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_rewards() {
        assert_eq!(Difficulty::Easy.xp(), 10);
        assert_eq!(Difficulty::Medium.xp(), 25);
        assert_eq!(Difficulty::Hard.xp(), 50);
        assert_eq!(Difficulty::from_xp(25), Some(Difficulty::Medium));
        assert_eq!(Difficulty::from_xp(30), None);
    }

    #[test]
    fn test_difficulty_persists_as_number() {
        let q = Quest::new("q1".to_string(), "Slay".to_string(), Difficulty::Hard, 0);
        let json = serde_json::to_value(&q).unwrap();
        assert_eq!(json["xp"], 50);
    }

    #[test]
    fn test_unknown_reward_is_rejected() {
        let json = r#"{"id":"q","text":"x","completed":false,"createdAt":0,"xp":42}"#;
        assert!(serde_json::from_str::<Quest>(json).is_err());
    }
}
