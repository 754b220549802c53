//! New Item Form Component
//!
//! Text input for adding a task or quest. Extra controls (such as the
//! difficulty selector) can be passed as children.

use leptos::prelude::*;

/// Form for creating new items
///
/// `on_add` receives the typed text and returns whether it was accepted;
/// the input is cleared only on success.
#[component]
pub fn NewItemForm(
    #[prop(into)] placeholder: String,
    #[prop(into)] on_add: Callback<String, bool>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let (new_text, set_new_text) = signal(String::new());

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() {
            return;
        }
        if on_add.run(text) {
            set_new_text.set(String::new());
        }
    };

    view! {
        <form class="new-item-form" on:submit=submit>
            <div class="new-item-row">
                <input
                    type="text"
                    placeholder=placeholder
                    prop:value=move || new_text.get()
                    on:input=move |ev| set_new_text.set(event_target_value(&ev))
                />
                <button type="submit">"Add"</button>
            </div>
            {children.map(|children| children())}
        </form>
    }
}
