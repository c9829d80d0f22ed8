use crate::client::{endpoint, require_id, require_text, revisioned, Client};
use crate::core::error::Result;
use crate::core::types::Parent;
use crate::models::TaskComment;
use serde::Serialize;

#[derive(Serialize)]
struct NewTaskComment<'a> {
    task_id: u64,
    text: &'a str,
}

impl Client {
    pub async fn task_comments_for(&self, parent: Parent) -> Result<Vec<TaskComment>> {
        let (key, id) = parent.query();
        require_id(key, id)?;
        self.get(&endpoint("task_comments", &[(key, id.to_string())]))
            .await
    }

    pub async fn task_comment(&self, comment_id: u64) -> Result<TaskComment> {
        require_id("task_comment_id", comment_id)?;
        self.get(&format!("task_comments/{}", comment_id)).await
    }

    pub async fn create_task_comment(&self, task_id: u64, text: &str) -> Result<TaskComment> {
        require_id("task_id", task_id)?;
        require_text("text", text)?;
        self.post("task_comments", &NewTaskComment { task_id, text })
            .await
    }

    pub async fn delete_task_comment(&self, comment: &TaskComment) -> Result<()> {
        require_id("task_comment.id", comment.id)?;
        self.delete(&revisioned("task_comments", comment.id, comment.revision))
            .await
    }
}
