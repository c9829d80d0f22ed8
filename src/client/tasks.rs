use crate::client::{endpoint, require_id, require_text, revisioned, Client};
use crate::core::error::Result;
use crate::models::task::check_recurrence;
use crate::models::{NewTask, Task};

impl Client {
    /// Tasks of one list. `completed` is only sent when given.
    pub async fn tasks_for_list(&self, list_id: u64, completed: Option<bool>) -> Result<Vec<Task>> {
        require_id("list_id", list_id)?;
        let mut params = vec![("list_id", list_id.to_string())];
        if let Some(completed) = completed {
            params.push(("completed", completed.to_string()));
        }
        self.get(&endpoint("tasks", &params)).await
    }

    pub async fn task(&self, task_id: u64) -> Result<Task> {
        require_id("task_id", task_id)?;
        self.get(&format!("tasks/{}", task_id)).await
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        require_id("list_id", task.list_id)?;
        require_text("title", &task.title)?;
        check_recurrence(&task.recurrence_type, task.recurrence_count)?;
        self.post("tasks", task).await
    }

    pub async fn delete_task(&self, task: &Task) -> Result<()> {
        require_id("task.id", task.id)?;
        self.delete(&revisioned("tasks", task.id, task.revision))
            .await
    }
}
