use crate::client::{endpoint, require_id, require_text, revisioned, Client};
use crate::core::error::{ClientError, Result};
use crate::models::{List, ListTaskCount};
use serde::Serialize;

#[derive(Serialize)]
struct NewList<'a> {
    title: &'a str,
}

impl Client {
    pub async fn lists(&self) -> Result<Vec<List>> {
        self.get("lists").await
    }

    pub async fn list(&self, list_id: u64) -> Result<List> {
        require_id("list_id", list_id)?;
        self.get(&format!("lists/{}", list_id)).await
    }

    pub async fn create_list(&self, title: &str) -> Result<List> {
        require_text("title", title)?;
        self.post("lists", &NewList { title }).await
    }

    /// PATCH the list as given; `revision` must match the server's.
    pub async fn update_list(&self, list: &List) -> Result<List> {
        require_id("list.id", list.id)?;
        require_text("title", &list.title)?;
        self.patch(&format!("lists/{}", list.id), list).await
    }

    /// Delete a list at its current revision. The inbox cannot be deleted.
    pub async fn delete_list(&self, list: &List) -> Result<()> {
        require_id("list.id", list.id)?;
        if list.is_inbox() {
            return Err(ClientError::invalid_argument("the inbox list cannot be deleted"));
        }
        self.delete(&revisioned("lists", list.id, list.revision))
            .await
    }

    /// Completed and uncompleted task totals for a list.
    pub async fn list_task_count(&self, list_id: u64) -> Result<ListTaskCount> {
        require_id("list_id", list_id)?;
        self.get(&endpoint(
            "lists/tasks_count",
            &[("list_id", list_id.to_string())],
        ))
        .await
    }
}
