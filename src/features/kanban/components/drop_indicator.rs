use leptos::prelude::*;

use crate::core::models::TaskColumn;
use crate::features::kanban::services::DropTarget;

// Zero-height insertion marker; located by its data-column attribute during a drag
#[component]
pub fn DropIndicator(
    column: TaskColumn,
    target: DropTarget,
    highlighted: ReadSignal<Option<DropTarget>>,
) -> impl IntoView {
    let before = target.to_attr();
    view! {
        <div
            class="drop-indicator"
            data-before=before
            data-column=column.tag()
            style:opacity=move || {
                if highlighted.with(|current| current.as_ref() == Some(&target)) { "1" } else { "0" }
            }
        ></div>
    }
}
