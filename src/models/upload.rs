use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Server-side lifecycle of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UploadState {
    Pending,
    Finished,
}

/// Pre-signed destination for the upload bytes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadPart {
    pub url: String,
    pub date: String,
    pub authorization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upload {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state: Option<UploadState>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part: Option<UploadPart>,
}

impl Upload {
    pub fn is_finished(&self) -> bool {
        self.state == Some(UploadState::Finished)
    }
}
