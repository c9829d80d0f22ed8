use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskComment {
    pub id: u64,
    pub task_id: u64,
    pub text: String,
    pub revision: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub local_created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}
