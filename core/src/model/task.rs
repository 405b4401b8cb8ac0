use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Ids are assigned by the store from a counter that only moves forward,
/// so they double as creation order.
pub type TaskId = u64;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,

    // Absent until the first update or toggle; omitted from JSON while unset
    // so freshly created tasks serialize without the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: TaskId, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Partial update for a task. Only the fields present are applied; unknown
/// JSON fields are ignored on deserialization.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct TaskPatch {
    pub text: Option<String>,
    pub completed: Option<bool>,
}
