use serde::{Deserialize, Serialize};

/// Callback registered on a list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Webhook {
    pub id: u64,
    pub list_id: u64,
    pub url: String,
    #[serde(default)]
    pub processor_type: String,
    #[serde(default)]
    pub configuration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<u64>,
}
