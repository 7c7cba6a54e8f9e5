use leptos::ev::DragEvent;
use leptos::logging::warn;
use leptos::prelude::*;

use crate::config::BoardConfig;
use crate::core::models::TaskColumn;
use crate::features::kanban::components::{AddCard, DropIndicator, TaskCard};
use crate::features::kanban::hooks::TaskStore;
use crate::features::kanban::services::{
    column_indicators, nearest_indicator, read_drag_payload, DropTarget,
};

#[component]
pub fn KanbanColumn(column: TaskColumn, store: TaskStore) -> impl IntoView {
    let drop_band = use_context::<BoardConfig>().unwrap_or_default().drop_band;
    let (active, set_active) = signal(false);
    // Indicator currently shown; None while nothing hovers this column
    let highlighted = RwSignal::new(None::<DropTarget>);

    // The trailing indicator always exists, so End is only a safety net
    let nearest_target = move |ev: &DragEvent| {
        let indicators = column_indicators(column);
        nearest_indicator(f64::from(ev.client_y()), &indicators, drop_band)
            .map(|indicator| indicator.target.clone())
            .unwrap_or(DropTarget::End)
    };

    let handle_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        highlighted.set(Some(nearest_target(&ev)));
        set_active.set(true);
    };

    let handle_drag_leave = move |_: DragEvent| {
        highlighted.set(None);
        set_active.set(false);
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_active.set(false);
        highlighted.set(None);

        let target = nearest_target(&ev);
        match read_drag_payload(&ev) {
            Some(task_id) => store.move_to(&task_id, column, &target),
            None => warn!("Drop on {} carried no task id", column),
        }
    };

    view! {
        <div class="kanban-column">
            <div class="column-header">
                <h3 class=column.heading_class()>{column.title()}</h3>
                <span class="task-count">{move || store.count(column)}</span>
            </div>
            <div
                class="column-content"
                class:active=move || active.get()
                on:dragover=handle_drag_over
                on:dragleave=handle_drag_leave
                on:drop=handle_drop
            >
                {move || {
                    store
                        .in_column(column)
                        .into_iter()
                        .map(|task| {
                            let target = DropTarget::Before(task.id.clone());
                            view! {
                                <DropIndicator column=column target=target highlighted=highlighted.read_only() />
                                <TaskCard task=task />
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <DropIndicator column=column target=DropTarget::End highlighted=highlighted.read_only() />
                <AddCard column=column store=store />
            </div>
        </div>
    }
}
