use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::core::models::TaskColumn;
use crate::features::kanban::components::{BurnBarrel, KanbanColumn};
use crate::features::kanban::hooks::use_tasks;

#[component]
pub fn KanbanBoard() -> impl IntoView {
    let config = use_context::<BoardConfig>().unwrap_or_default();
    let store = use_tasks(&config);
    let loading = store.loading();

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div class="board-loading">
                    <span>"Loading..."</span>
                </div>
            }
        >
            <div class="kanban-board">
                {TaskColumn::all()
                    .into_iter()
                    .map(|column| view! { <KanbanColumn column=column store=store /> })
                    .collect::<Vec<_>>()}
                <BurnBarrel store=store />
            </div>
        </Show>
    }
}
