//! Display Text
//!
//! Labels and messages shown by the widgets.

use quest_core::domain::leveling::level_title;
use quest_core::{Achievement, PlayerState};

pub fn items_left_label(count: usize) -> String {
    if count == 1 {
        "1 item left".to_string()
    } else {
        format!("{} items left", count)
    }
}

pub fn level_label(player: &PlayerState) -> String {
    format!("Level {} · {}", player.level, player.title())
}

pub fn xp_label(player: &PlayerState) -> String {
    format!("{} / {} XP", player.current_xp, player.xp_to_next())
}

pub fn streak_label(streak: u32, best: u32) -> String {
    match streak {
        0 if best == 0 => "No streak yet".to_string(),
        0 => format!("Streak lost (best {})", best),
        1 => format!("1 day streak (best {})", best),
        n => format!("{} day streak (best {})", n, best),
    }
}

pub fn level_up_message(level: u32) -> String {
    format!("Level up! You reached level {} ({})", level, level_title(level))
}

pub fn achievement_message(achievement: Achievement) -> String {
    format!("Achievement unlocked: {} - {}", achievement.name(), achievement.description())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_items_left_label() {
        assert_eq!(items_left_label(0), "0 items left");
        assert_eq!(items_left_label(1), "1 item left");
        assert_eq!(items_left_label(7), "7 items left");
    }

    #[test]
    fn test_player_labels() {
        let player = PlayerState {
            level: 3,
            current_xp: 40,
            ..Default::default()
        };
        assert_eq!(level_label(&player), "Level 3 · Apprentice");
        assert_eq!(xp_label(&player), "40 / 225 XP");
    }

    #[test]
    fn test_streak_label() {
        assert_eq!(streak_label(0, 0), "No streak yet");
        assert_eq!(streak_label(0, 4), "Streak lost (best 4)");
        assert_eq!(streak_label(1, 1), "1 day streak (best 1)");
        assert_eq!(streak_label(5, 9), "5 day streak (best 9)");
    }

    #[test]
    fn test_messages() {
        assert_eq!(level_up_message(5), "Level up! You reached level 5 (Adventurer)");
        assert!(achievement_message(Achievement::FirstQuest).contains("First Steps"));
    }
}
