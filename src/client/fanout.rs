//! "Across all lists" aggregators.
//!
//! Each aggregator fetches `/lists`, issues one request per list concurrently
//! and joins on all of them. Items are appended in completion order. Failed
//! lists are collected into a [`CompositeError`] keyed by list id while the
//! successful lists still contribute their items.

use crate::client::Client;
use crate::core::error::{ClientError, CompositeError, Result};
use crate::core::types::Parent;
use crate::models::{File, Note, Position, Reminder, Subtask, Task, TaskComment};
use futures::stream::{FuturesUnordered, StreamExt};
use std::future::Future;
use tracing::{debug, warn};

/// Items gathered from every list that answered, plus the failures.
#[derive(Debug)]
pub struct PartialResult<T> {
    pub items: Vec<T>,
    pub error: Option<CompositeError>,
}

impl<T> PartialResult<T> {
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Discard partial items when any list failed.
    pub fn into_result(self) -> Result<Vec<T>> {
        match self.error {
            None => Ok(self.items),
            Some(error) => Err(ClientError::Composite(error)),
        }
    }
}

impl Client {
    /// Run `fetch` for every list concurrently.
    ///
    /// The outer error is reserved for failing to enumerate the lists.
    async fn gather<T, F, Fut>(&self, resource: &'static str, fetch: F) -> Result<PartialResult<T>>
    where
        F: Fn(Client, u64) -> Fut,
        Fut: Future<Output = Result<Vec<T>>>,
    {
        let lists = self.lists().await?;
        debug!(source = "fanout", resource, lists = lists.len(), "fanning out");

        let mut pending: FuturesUnordered<_> = lists
            .iter()
            .map(|list| {
                let list_id = list.id;
                let request = fetch(self.clone(), list_id);
                async move { (list_id, request.await) }
            })
            .collect();

        let mut items = Vec::new();
        let mut failures = CompositeError::new();
        while let Some((list_id, outcome)) = pending.next().await {
            match outcome {
                Ok(mut batch) => items.append(&mut batch),
                Err(err) => {
                    warn!(source = "fanout", resource, list_id, error = %err, "list request failed");
                    failures.push("list", list_id, err);
                }
            }
        }

        debug!(
            source = "fanout",
            resource,
            items = items.len(),
            failed = failures.len(),
            "fan-out complete"
        );
        Ok(PartialResult {
            items,
            error: (!failures.is_empty()).then_some(failures),
        })
    }

    pub async fn all_reminders(&self) -> Result<PartialResult<Reminder>> {
        self.gather("reminders", |client, list_id| async move {
            client.reminders_for(Parent::List(list_id)).await
        })
        .await
    }

    pub async fn all_task_comments(&self) -> Result<PartialResult<TaskComment>> {
        self.gather("task_comments", |client, list_id| async move {
            client.task_comments_for(Parent::List(list_id)).await
        })
        .await
    }

    pub async fn all_subtask_positions(&self) -> Result<PartialResult<Position>> {
        self.gather("subtask_positions", |client, list_id| async move {
            client.subtask_positions_for(Parent::List(list_id)).await
        })
        .await
    }

    pub async fn all_task_positions(&self) -> Result<PartialResult<Position>> {
        self.gather("task_positions", |client, list_id| async move {
            client.task_positions_for_list(list_id).await
        })
        .await
    }

    /// Tasks of every list; `completed` is forwarded to each per-list query.
    pub async fn all_tasks(&self, completed: Option<bool>) -> Result<PartialResult<Task>> {
        self.gather("tasks", |client, list_id| async move {
            client.tasks_for_list(list_id, completed).await
        })
        .await
    }

    pub async fn all_subtasks(&self, completed: Option<bool>) -> Result<PartialResult<Subtask>> {
        self.gather("subtasks", |client, list_id| async move {
            client.subtasks_for(Parent::List(list_id), completed).await
        })
        .await
    }

    pub async fn all_notes(&self) -> Result<PartialResult<Note>> {
        self.gather("notes", |client, list_id| async move {
            client.notes_for(Parent::List(list_id)).await
        })
        .await
    }

    pub async fn all_files(&self) -> Result<PartialResult<File>> {
        self.gather("files", |client, list_id| async move {
            client.files_for(Parent::List(list_id)).await
        })
        .await
    }
}
