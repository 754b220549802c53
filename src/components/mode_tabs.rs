//! Mode Tab Bar Component
//!
//! Switches between the basic task list and the quest board.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields, Mode};

#[component]
pub fn ModeTabs() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="mode-tab-bar">
            {Mode::ALL.iter().map(|&mode| {
                let is_active = move || store.mode().get() == mode;
                view! {
                    <button
                        class=move || if is_active() { "mode-tab active" } else { "mode-tab" }
                        on:click=move |_| *store.mode().write() = mode
                    >
                        {mode.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
