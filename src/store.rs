//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use quest_core::{Filter, QuestLog, TaskList};

/// Which widget is on screen
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Tasks,
    Quests,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Tasks, Mode::Quests];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Tasks => "Tasks",
            Mode::Quests => "Quests",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastKind {
    LevelUp,
    Achievement,
}

impl ToastKind {
    pub fn class(self) -> &'static str {
        match self {
            ToastKind::LevelUp => "toast level-up",
            ToastKind::Achievement => "toast achievement",
        }
    }
}

/// A short-lived notification
#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    pub mode: Mode,
    /// Basic widget state
    pub tasks: TaskList,
    pub task_filter: Filter,
    /// Gamified widget state
    pub quests: QuestLog,
    pub quest_filter: Filter,
    /// Focus view (one quest at a time) enabled
    pub focus: bool,
    pub toasts: Vec<Toast>,
    pub next_toast_id: u32,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}
