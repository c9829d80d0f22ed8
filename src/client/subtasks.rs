use crate::client::{endpoint, require_id, require_text, revisioned, Client};
use crate::core::error::Result;
use crate::core::types::Parent;
use crate::models::Subtask;
use serde::Serialize;

#[derive(Serialize)]
struct NewSubtask<'a> {
    task_id: u64,
    title: &'a str,
    #[serde(skip_serializing_if = "crate::models::is_false")]
    completed: bool,
}

#[derive(Serialize)]
struct SubtaskUpdate<'a> {
    title: &'a str,
    completed: bool,
    revision: u64,
}

impl Client {
    /// Subtasks under a list or a task. `completed` is only sent when given.
    pub async fn subtasks_for(
        &self,
        parent: Parent,
        completed: Option<bool>,
    ) -> Result<Vec<Subtask>> {
        let (key, id) = parent.query();
        require_id(key, id)?;
        let mut params = vec![(key, id.to_string())];
        if let Some(completed) = completed {
            params.push(("completed", completed.to_string()));
        }
        self.get(&endpoint("subtasks", &params)).await
    }

    pub async fn subtask(&self, subtask_id: u64) -> Result<Subtask> {
        require_id("subtask_id", subtask_id)?;
        self.get(&format!("subtasks/{}", subtask_id)).await
    }

    pub async fn create_subtask(
        &self,
        task_id: u64,
        title: &str,
        completed: bool,
    ) -> Result<Subtask> {
        require_id("task_id", task_id)?;
        require_text("title", title)?;
        self.post(
            "subtasks",
            &NewSubtask {
                task_id,
                title,
                completed,
            },
        )
        .await
    }

    pub async fn update_subtask(&self, subtask: &Subtask) -> Result<Subtask> {
        require_id("subtask.id", subtask.id)?;
        require_text("title", &subtask.title)?;
        let body = SubtaskUpdate {
            title: &subtask.title,
            completed: subtask.completed,
            revision: subtask.revision,
        };
        self.patch(&format!("subtasks/{}", subtask.id), &body).await
    }

    pub async fn delete_subtask(&self, subtask: &Subtask) -> Result<()> {
        require_id("subtask.id", subtask.id)?;
        self.delete(&revisioned("subtasks", subtask.id, subtask.revision))
            .await
    }
}
