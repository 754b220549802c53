//! Quest Board Component
//!
//! The gamified widget: player progress, quest list and focus mode.

use leptos::prelude::*;
use quest_core::{Difficulty, Filter, Quest};

use crate::commands;
use crate::components::{DifficultySelector, FilterBar, FocusView, ItemRow, NewItemForm, PlayerPanel};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn QuestBoard() -> impl IntoView {
    let store = use_app_store();
    let (difficulty, set_difficulty) = signal(Difficulty::default());

    let focus = move || store.focus().get();

    view! {
        <section class="quest-widget">
            <PlayerPanel />

            <div class="quest-toolbar">
                <button
                    class=move || if focus() { "focus-btn active" } else { "focus-btn" }
                    on:click=move |_| {
                        let binding = store.focus();
                        let mut enabled = binding.write();
                        *enabled = !*enabled;
                    }
                >
                    {move || if focus() { "Show all quests" } else { "Focus" }}
                </button>
            </div>

            <Show when=focus fallback=move || view! { <QuestList difficulty=difficulty set_difficulty=set_difficulty /> }>
                <FocusView />
            </Show>
        </section>
    }
}

#[component]
fn QuestList(
    difficulty: ReadSignal<Difficulty>,
    set_difficulty: WriteSignal<Difficulty>,
) -> impl IntoView {
    let store = use_app_store();

    let visible_quests = move || {
        let filter = store.quest_filter().get();
        store
            .quests()
            .with(|log| log.filtered(filter).into_iter().cloned().collect::<Vec<Quest>>())
    };
    let active_count = Signal::derive(move || store.quests().with(|q| q.quests().active_count()));
    let completed_count = Signal::derive(move || store.quests().with(|q| q.quests().completed_count()));

    view! {
        <NewItemForm
            placeholder="Name your next quest..."
            on_add=Callback::new(move |text: String| {
                commands::add_quest(store, &text, difficulty.get_untracked())
            })
        >
            <DifficultySelector current=difficulty on_change=set_difficulty />
        </NewItemForm>

        <div class="item-list">
            <For
                each=visible_quests
                key=|quest| (quest.id.clone(), quest.completed, quest.text.clone())
                children=move |quest| {
                    view! {
                        <ItemRow
                            id=quest.id
                            text=quest.text
                            completed=quest.completed
                            badge=format!("+{} XP", quest.xp.xp())
                            on_toggle=Callback::new(move |id: String| commands::toggle_quest(store, &id))
                            on_delete=Callback::new(move |id: String| commands::delete_quest(store, &id))
                        />
                    }
                }
            />
        </div>

        <FilterBar
            current=Signal::derive(move || store.quest_filter().get())
            on_change=Callback::new(move |filter: Filter| *store.quest_filter().write() = filter)
            active_count=active_count
            completed_count=completed_count
            on_clear=Callback::new(move |_: ()| commands::clear_completed_quests(store))
        />
    }
}
