use leptos::logging::{error, log, warn};
use web_sys::Storage;

use crate::core::error::StorageError;
use crate::core::models::Task;

/// Sequence used when nothing usable is stored yet.
pub fn default_tasks() -> Vec<Task> {
    Vec::new()
}

// Serialize every task, refusing to produce a partial array
pub fn serialize_tasks_safely(tasks: &[Task]) -> Result<String, StorageError> {
    let json_tasks: Vec<serde_json::Value> = tasks
        .iter()
        .filter_map(|t| match serde_json::to_value(t) {
            Ok(value) if value.as_object().is_some_and(|o| !o.is_empty()) => Some(value),
            Ok(_) => {
                error!("Task serialization produced empty object for task ID: {}", t.id);
                None
            }
            Err(e) => {
                error!("Failed to serialize task ID {}: {}", t.id, e);
                None
            }
        })
        .collect();

    if json_tasks.len() != tasks.len() {
        return Err(StorageError::Serialize {
            lost: tasks.len() - json_tasks.len(),
            total: tasks.len(),
        });
    }

    Ok(serde_json::Value::Array(json_tasks).to_string())
}

/// Decode a stored task array.
///
/// The payload must be a JSON array. Records inside it that do not decode
/// as a [`Task`] are skipped so one bad record does not cost the whole board.
pub fn decode_tasks(raw: &str) -> Result<Vec<Task>, StorageError> {
    let values: Vec<serde_json::Value> = serde_json::from_str(raw)?;
    let total = values.len();
    let tasks: Vec<Task> = values
        .into_iter()
        .filter_map(|v| match serde_json::from_value::<Task>(v) {
            Ok(task) => Some(task),
            Err(e) => {
                warn!("Dropping unreadable stored task: {}", e);
                None
            }
        })
        .collect();

    if tasks.len() != total {
        warn!("Recovered {} of {} stored tasks", tasks.len(), total);
    }
    Ok(tasks)
}

fn local_storage() -> Result<Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}

// Load tasks from localStorage; Ok(None) means nothing was stored under the key
pub fn load_tasks(key: &str) -> Result<Option<Vec<Task>>, StorageError> {
    let storage = local_storage()?;
    let raw = storage.get_item(key).map_err(|e| StorageError::Read {
        key: key.to_string(),
        reason: format!("{:?}", e),
    })?;

    match raw {
        Some(raw) => {
            let tasks = decode_tasks(&raw)?;
            log!("Loaded {} tasks from {}", tasks.len(), key);
            Ok(Some(tasks))
        }
        None => Ok(None),
    }
}

// Replace the whole stored array
pub fn save_tasks(key: &str, tasks: &[Task]) -> Result<(), StorageError> {
    let payload = serialize_tasks_safely(tasks)?;
    local_storage()?
        .set_item(key, &payload)
        .map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
}

/// Load the stored sequence, falling back to [`default_tasks`] when the key
/// is absent or its content is unusable.
pub fn load_tasks_or_default(key: &str) -> Vec<Task> {
    match load_tasks(key) {
        Ok(Some(tasks)) => tasks,
        Ok(None) => default_tasks(),
        Err(e) => {
            warn!("Failed to load tasks, starting empty: {}", e);
            default_tasks()
        }
    }
}
