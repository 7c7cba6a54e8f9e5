use thiserror::Error;

/// Failures of the localStorage-backed task store.
///
/// None of these reach the user; callers log them and fall back to a safe
/// default.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("failed to read key {key}: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write key {key}: {reason}")]
    Write { key: String, reason: String },
    #[error("stored tasks are not a JSON array: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("lost {lost} of {total} tasks during serialization")]
    Serialize { lost: usize, total: usize },
}
