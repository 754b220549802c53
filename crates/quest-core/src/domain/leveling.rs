//! XP and Level Rules

use crate::config::{XP_BASE, XP_MULTIPLIER};

/// Level title thresholds, ascending
const LEVEL_TITLES: &[(u32, &str)] = &[
    (1, "Novice"),
    (3, "Apprentice"),
    (5, "Adventurer"),
    (8, "Veteran"),
    (12, "Hero"),
    (16, "Champion"),
    (20, "Legend"),
];

/// Result of awarding XP
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUp {
    pub level: u32,
    pub current_xp: u64,
    pub levels_gained: u32,
}

/// XP needed to advance from `level` to the next one.
///
/// `trunc(XP_BASE * XP_MULTIPLIER^(level-1))`. Levels below 1 are treated as 1.
pub fn xp_required(level: u32) -> u64 {
    let exponent = level.max(1) - 1;
    // `as` saturates, so absurd levels clamp to u64::MAX instead of wrapping
    (XP_BASE * XP_MULTIPLIER.powi(exponent.min(i32::MAX as u32) as i32)) as u64
}

/// Add `amount` to the XP within `level`, levelling up as many times as
/// the total allows.
pub fn award_xp(level: u32, current_xp: u64, amount: u64) -> LevelUp {
    let start = level.max(1);
    let mut level = start;
    let mut current_xp = current_xp.saturating_add(amount);

    while current_xp >= xp_required(level) {
        current_xp -= xp_required(level);
        level += 1;
    }

    LevelUp {
        level,
        current_xp,
        levels_gained: level - start,
    }
}

/// Display title for a level
pub fn level_title(level: u32) -> &'static str {
    LEVEL_TITLES
        .iter()
        .rev()
        .find(|(min, _)| level >= *min)
        .map(|(_, title)| *title)
        .unwrap_or(LEVEL_TITLES[0].1)
}

/// Fill of the XP bar, 0..=100
pub fn progress_percent(level: u32, current_xp: u64) -> u8 {
    let required = xp_required(level);
    if required == 0 {
        return 100;
    }
    (u128::from(current_xp.min(required)) * 100 / u128::from(required)) as u8
}
