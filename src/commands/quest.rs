//! Quest Commands

use leptos::prelude::*;
use quest_core::config::QUESTS_KEY;
use quest_core::Difficulty;

use super::toast::push_toast;
use crate::clock::BrowserClock;
use crate::format;
use crate::storage::LocalStore;
use crate::store::{AppStateStoreFields, AppStore, ToastKind};

fn persist_quests(store: AppStore) {
    store
        .quests()
        .with_untracked(|quests| quest_core::save(&LocalStore, QUESTS_KEY, quests));
}

/// Add a quest; returns false for blank input
pub fn add_quest(store: AppStore, text: &str, difficulty: Difficulty) -> bool {
    let added = store.quests().write().add(text, difficulty, &BrowserClock).is_ok();
    if added {
        persist_quests(store);
    }
    added
}

/// Toggle a quest, announcing level-ups and unlocked achievements
pub fn toggle_quest(store: AppStore, id: &str) {
    let Some(outcome) = store.quests().write().toggle(id, &BrowserClock) else {
        return;
    };
    persist_quests(store);

    if outcome.levels_gained > 0 {
        push_toast(store, ToastKind::LevelUp, format::level_up_message(outcome.level));
    }
    for achievement in outcome.unlocked {
        push_toast(store, ToastKind::Achievement, format::achievement_message(achievement));
    }
}

pub fn delete_quest(store: AppStore, id: &str) {
    let removed = store.quests().write().delete(id).is_some();
    if removed {
        persist_quests(store);
    }
}

pub fn clear_completed_quests(store: AppStore) {
    let cleared = store.quests().write().clear_completed();
    if cleared > 0 {
        persist_quests(store);
    }
}
