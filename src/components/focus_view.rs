//! Focus View Component
//!
//! Shows a single active quest at a time.

use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn FocusView() -> impl IntoView {
    let store = use_app_store();
    let (skip, set_skip) = signal(0usize);

    let current = move || store.quests().with(|q| q.focus(skip.get()).cloned());

    view! {
        <div class="focus-view">
            {move || match current() {
                Some(quest) => {
                    let id = quest.id.clone();
                    view! {
                        <div class="focus-card">
                            <p class="focus-text">{quest.text.clone()}</p>
                            <span class="xp-badge">{format!("+{} XP", quest.xp.xp())}</span>
                            <div class="focus-actions">
                                <button
                                    class="complete-btn"
                                    on:click=move |_| commands::toggle_quest(store, &id)
                                >
                                    "Complete"
                                </button>
                                <button class="skip-btn" on:click=move |_| set_skip.update(|s| *s += 1)>
                                    "Skip"
                                </button>
                            </div>
                        </div>
                    }
                    .into_any()
                }
                None => view! {
                    <p class="focus-empty">"No active quests. Add one to get started!"</p>
                }
                .into_any(),
            }}
        </div>
    }
}
