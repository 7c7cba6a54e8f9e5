use leptos::ev::DragEvent;
use leptos::prelude::*;

use crate::core::models::Task;
use crate::features::kanban::services::write_drag_payload;

#[component]
pub fn TaskCard(#[prop(into)] task: Task) -> impl IntoView {
    let task_id = task.id.clone();
    view! {
        <div
            class="task-card"
            draggable="true"
            on:dragstart=move |ev: DragEvent| write_drag_payload(&ev, &task_id)
        >
            <p class="task-title">{task.title}</p>
        </div>
    }
}
