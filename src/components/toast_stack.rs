//! Toast Stack Component

use leptos::prelude::*;

use crate::commands;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ToastStack() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="toast-stack">
            <For
                each=move || store.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class=toast.kind.class() on:click=move |_| commands::dismiss_toast(store, id)>
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
