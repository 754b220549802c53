//! Toast Notifications

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use quest_core::config::TOAST_DURATION_MS;

use crate::store::{AppStateStoreFields, AppStore, Toast, ToastKind};

/// Show a toast; it removes itself after `TOAST_DURATION_MS`
pub fn push_toast(store: AppStore, kind: ToastKind, message: String) {
    let id = {
        let binding = store.next_toast_id();
        let mut next = binding.write();
        *next = next.wrapping_add(1);
        *next
    };
    store.toasts().write().push(Toast { id, kind, message });

    Timeout::new(TOAST_DURATION_MS, move || dismiss_toast(store, id)).forget();
}

pub fn dismiss_toast(store: AppStore, id: u32) {
    store.toasts().write().retain(|toast| toast.id != id);
}
