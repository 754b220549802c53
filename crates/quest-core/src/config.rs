//! Compile-time configuration.

/// Local storage key for the basic task list
pub const TASKS_KEY: &str = "quest-todo.tasks";

/// Local storage key for the quest log and player state
pub const QUESTS_KEY: &str = "quest-todo.quests";

/// XP needed to leave level 1
pub const XP_BASE: f64 = 100.0;

/// Growth factor of the XP requirement per level
pub const XP_MULTIPLIER: f64 = 1.5;

/// How long a toast stays on screen
pub const TOAST_DURATION_MS: u32 = 3_000;
