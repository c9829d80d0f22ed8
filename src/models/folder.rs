use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Named group of lists. Deleting a folder leaves its lists in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub list_ids: Vec<u64>,
    pub revision: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FolderRevision {
    pub id: u64,
    pub revision: u64,
}
