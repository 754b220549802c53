//! Difficulty Selector Component
//!
//! Buttons for picking a quest's XP tier.

use leptos::prelude::*;
use quest_core::Difficulty;

#[component]
pub fn DifficultySelector(
    current: ReadSignal<Difficulty>,
    on_change: WriteSignal<Difficulty>,
) -> impl IntoView {
    view! {
        <div class="difficulty-selector">
            {Difficulty::ALL.iter().map(|&difficulty| {
                let is_selected = move || current.get() == difficulty;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "type-btn small active" } else { "type-btn small" }
                        on:click=move |_| on_change.set(difficulty)
                    >
                        {format!("{} +{}", difficulty.label(), difficulty.xp())}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
