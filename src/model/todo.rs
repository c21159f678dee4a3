use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single todo record.
///
/// Field names in the serialized snapshot use camelCase with `createdAt`
/// as epoch milliseconds (the on-disk format).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Opaque unique identifier, assigned at creation, immutable
    pub id: String,
    /// Non-empty trimmed title
    pub title: String,
    /// Optional free text, may be empty
    #[serde(default)]
    pub notes: String,
    /// Completion flag
    pub completed: bool,
    /// Creation timestamp, immutable
    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Todo {
    /// Create a new todo with a fresh id and the current timestamp.
    /// Callers are expected to pass already-trimmed text.
    pub fn new(title: String, notes: String) -> Self {
        // Truncate to millisecond precision so a todo compares equal to
        // its snapshot round trip.
        let now = DateTime::from_timestamp_millis(Utc::now().timestamp_millis())
            .unwrap_or_default();
        Todo {
            id: Uuid::new_v4().to_string(),
            title,
            notes,
            completed: false,
            created_at: now,
        }
    }
}

/// A partial update to a todo. Absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TodoPatch {
    pub title: Option<String>,
    pub notes: Option<String>,
}

impl TodoPatch {
    /// Patch that changes only the title
    pub fn title(title: impl Into<String>) -> Self {
        TodoPatch {
            title: Some(title.into()),
            notes: None,
        }
    }
}
