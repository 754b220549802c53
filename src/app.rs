//! Quest Todo Frontend App
//!
//! Mode tabs over the task widget and the quest widget.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::commands;
use crate::components::{ModeTabs, QuestBoard, TaskListView, ToastStack};
use crate::store::{AppStateStoreFields, Mode};

#[component]
pub fn App() -> impl IntoView {
    // State is loaded once at startup; every command persists after mutating
    let store = Store::new(commands::load_app_state());
    provide_context(store);

    let quests_shown = move || store.mode().get() == Mode::Quests;

    view! {
        <div class="app-layout">
            <main class="main-content">
                <h1>"Quest Todo"</h1>

                <ModeTabs />

                <Show when=quests_shown fallback=|| view! { <TaskListView /> }>
                    <QuestBoard />
                </Show>
            </main>

            <ToastStack />
        </div>
    }
}
