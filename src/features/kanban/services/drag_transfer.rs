use leptos::logging::warn;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, Element};

use crate::core::models::TaskColumn;
use crate::features::kanban::services::{DropTarget, IndicatorBox};

/// DataTransfer format under which a dragged card carries its task id.
pub const DRAG_PAYLOAD_KEY: &str = "cardId";

pub fn write_drag_payload(ev: &DragEvent, task_id: &str) {
    match ev.data_transfer() {
        Some(transfer) => {
            if let Err(e) = transfer.set_data(DRAG_PAYLOAD_KEY, task_id) {
                warn!("Failed to set drag payload for task {}: {:?}", task_id, e);
            }
        }
        None => warn!("Drag event for task {} has no DataTransfer", task_id),
    }
}

// Dragged task id, or None when the drag did not start on a card
pub fn read_drag_payload(ev: &DragEvent) -> Option<String> {
    ev.data_transfer()
        .and_then(|transfer| transfer.get_data(DRAG_PAYLOAD_KEY).ok())
        .filter(|id| !id.is_empty())
}

/// Every drop indicator rendered for `column`, in document order, with its
/// current viewport position.
pub fn column_indicators(column: TaskColumn) -> Vec<IndicatorBox> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let selector = format!("[data-column=\"{}\"]", column.tag());
    let Ok(nodes) = document.query_selector_all(&selector) else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .map(|el| IndicatorBox {
            top: el.get_bounding_client_rect().top(),
            target: DropTarget::from_attr(&el.get_attribute("data-before").unwrap_or_default()),
        })
        .collect()
}
