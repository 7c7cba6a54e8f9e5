use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::features::kanban::hooks::TaskStore;
use crate::features::kanban::services::read_drag_payload;

/// Drop zone that deletes whatever card lands on it.
#[component]
pub fn BurnBarrel(store: TaskStore) -> impl IntoView {
    let (armed, set_armed) = signal(false);

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        if let Some(task_id) = read_drag_payload(&ev) {
            store.delete(&task_id);
        }
        set_armed.set(false);
    };

    view! {
        <div
            class="burn-barrel"
            class:armed=move || armed.get()
            on:dragover=move |ev: DragEvent| {
                ev.prevent_default();
                set_armed.set(true);
            }
            on:dragleave=move |_: DragEvent| set_armed.set(false)
            on:drop=handle_drop
        >
            {move || if armed.get() { "🔥" } else { "🗑" }}
        </div>
    }
}
