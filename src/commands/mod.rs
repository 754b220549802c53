//! Frontend Commands
//!
//! Every state change goes through here: apply the rule, persist the
//! affected widget, then surface any notifications.

mod task;
mod quest;
mod toast;

use quest_core::config::{QUESTS_KEY, TASKS_KEY};
use quest_core::{load_or_default, Clock, QuestLog, TaskList};

use crate::clock::BrowserClock;
use crate::storage::LocalStore;
use crate::store::AppState;

pub use task::*;
pub use quest::*;
pub use toast::*;

/// Build the startup state from local storage.
///
/// Runs the missed-day check and catches up on achievements, writing the
/// quest log back if either changed it.
pub fn load_app_state() -> AppState {
    let tasks: TaskList = load_or_default(&LocalStore, TASKS_KEY);
    let mut quests: QuestLog = load_or_default(&LocalStore, QUESTS_KEY);

    let streak_lost = quests.check_missed_day(BrowserClock.today());
    let caught_up = quests.check_achievements();
    if streak_lost || !caught_up.is_empty() {
        quest_core::save(&LocalStore, QUESTS_KEY, &quests);
    }

    log::info!(
        "Loaded {} tasks, {} quests (level {})",
        tasks.tasks().len(),
        quests.quests().len(),
        quests.player().level
    );

    AppState {
        tasks,
        quests,
        ..Default::default()
    }
}
