//! Task List View Component
//!
//! The basic widget: add, toggle, delete and filter tasks.

use leptos::prelude::*;
use quest_core::{Filter, Task};

use crate::commands;
use crate::components::{FilterBar, ItemRow, NewItemForm};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn TaskListView() -> impl IntoView {
    let store = use_app_store();

    let visible_tasks = move || {
        let filter = store.task_filter().get();
        store
            .tasks()
            .with(|tasks| tasks.filtered(filter).into_iter().cloned().collect::<Vec<Task>>())
    };
    let active_count = Signal::derive(move || store.tasks().with(|t| t.tasks().active_count()));
    let completed_count = Signal::derive(move || store.tasks().with(|t| t.tasks().completed_count()));

    view! {
        <section class="task-widget">
            <NewItemForm
                placeholder="What needs to be done?"
                on_add=Callback::new(move |text: String| commands::add_task(store, &text))
            />

            <div class="item-list">
                <For
                    each=visible_tasks
                    key=|task| (task.id.clone(), task.completed, task.text.clone())
                    children=move |task| {
                        view! {
                            <ItemRow
                                id=task.id
                                text=task.text
                                completed=task.completed
                                on_toggle=Callback::new(move |id: String| commands::toggle_task(store, &id))
                                on_delete=Callback::new(move |id: String| commands::delete_task(store, &id))
                            />
                        }
                    }
                />
            </div>

            <FilterBar
                current=Signal::derive(move || store.task_filter().get())
                on_change=Callback::new(move |filter: Filter| *store.task_filter().write() = filter)
                active_count=active_count
                completed_count=completed_count
                on_clear=Callback::new(move |_: ()| commands::clear_completed_tasks(store))
            />
        </section>
    }
}
