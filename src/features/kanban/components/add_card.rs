use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;

use crate::core::models::TaskColumn;
use crate::features::kanban::hooks::TaskStore;

#[component]
pub fn AddCard(column: TaskColumn, store: TaskStore) -> impl IntoView {
    let (text, set_text) = signal(String::new());
    let (adding, set_adding) = signal(false);

    // Blank input keeps the form open
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if store.create(&text.get_untracked(), column) {
            set_text.set(String::new());
            set_adding.set(false);
        }
    };

    let close = move |_: MouseEvent| {
        set_text.set(String::new());
        set_adding.set(false);
    };

    view! {
        <Show
            when=move || adding.get()
            fallback=move || view! {
                <button class="add-card-btn" on:click=move |_| set_adding.set(true)>
                    <span>"Add task"</span>
                    <span>"+"</span>
                </button>
            }
        >
            <form class="add-card-form" on:submit=handle_submit>
                <textarea
                    autofocus
                    placeholder="Add new task..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                ></textarea>
                <div class="add-card-actions">
                    <button type="button" class="btn-secondary" on:click=close>"Close"</button>
                    <button type="submit" class="btn-primary">
                        <span>"Add"</span>
                        <span>"+"</span>
                    </button>
                </div>
            </form>
        </Show>
    }
}
