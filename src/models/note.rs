use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: u64,
    pub task_id: u64,
    #[serde(default)]
    pub content: String,
    pub revision: u64,
}
