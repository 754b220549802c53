//! Filter Bar Component
//!
//! All / Active / Completed switch, item counts and clear-completed.

use leptos::prelude::*;
use quest_core::Filter;

use crate::format;

#[component]
pub fn FilterBar(
    current: Signal<Filter>,
    #[prop(into)] on_change: Callback<Filter>,
    active_count: Signal<usize>,
    completed_count: Signal<usize>,
    #[prop(into)] on_clear: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            <span class="item-count">{move || format::items_left_label(active_count.get())}</span>
            <div class="filter-buttons">
                {Filter::ALL.iter().map(|&filter| {
                    let is_selected = move || current.get() == filter;
                    view! {
                        <button
                            class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                            on:click=move |_| on_change.run(filter)
                        >
                            {filter.label()}
                        </button>
                    }
                }).collect_view()}
            </div>
            <Show when=move || { completed_count.get() > 0 }>
                <button class="clear-btn" on:click=move |_| on_clear.run(())>
                    "Clear completed"
                </button>
            </Show>
        </div>
    }
}
