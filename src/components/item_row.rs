//! Item Row Component
//!
//! One task or quest with its toggle and delete controls.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;

#[component]
pub fn ItemRow(
    id: String,
    text: String,
    completed: bool,
    /// Extra label shown after the text, e.g. the XP reward
    #[prop(optional, into)]
    badge: Option<String>,
    #[prop(into)] on_toggle: Callback<String>,
    #[prop(into)] on_delete: Callback<String>,
) -> impl IntoView {
    let toggle_id = id.clone();
    let delete_id = id;

    view! {
        <div class=if completed { "item-row completed" } else { "item-row" }>
            // Checkbox
            <input
                type="checkbox"
                checked=completed
                on:change=move |_| on_toggle.run(toggle_id.clone())
            />

            <span class="item-text">{text}</span>

            {badge.map(|badge| view! { <span class="xp-badge">{badge}</span> })}

            <DeleteConfirmButton
                button_class="delete-btn"
                on_confirm=Callback::new(move |_: ()| on_delete.run(delete_id.clone()))
            />
        </div>
    }
}
