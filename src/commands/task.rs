//! Task Commands

use leptos::prelude::*;
use quest_core::config::TASKS_KEY;

use crate::clock::BrowserClock;
use crate::storage::LocalStore;
use crate::store::{AppStateStoreFields, AppStore};

fn persist_tasks(store: AppStore) {
    store
        .tasks()
        .with_untracked(|tasks| quest_core::save(&LocalStore, TASKS_KEY, tasks));
}

/// Add a task; returns false for blank input
pub fn add_task(store: AppStore, text: &str) -> bool {
    let added = match store.tasks().write().add(text, &BrowserClock) {
        Ok(task) => {
            log::debug!("Added task {}", task.id);
            true
        }
        Err(e) => {
            log::debug!("Task not added: {}", e);
            false
        }
    };
    if added {
        persist_tasks(store);
    }
    added
}

pub fn toggle_task(store: AppStore, id: &str) {
    let toggled = store.tasks().write().toggle(id, &BrowserClock).is_some();
    if toggled {
        persist_tasks(store);
    }
}

pub fn delete_task(store: AppStore, id: &str) {
    let removed = store.tasks().write().delete(id).is_some();
    if removed {
        persist_tasks(store);
    }
}

pub fn clear_completed_tasks(store: AppStore) {
    let cleared = store.tasks().write().clear_completed();
    if cleared > 0 {
        persist_tasks(store);
    }
}
