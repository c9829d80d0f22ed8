//! Task updates that distinguish "leave as is" from "clear".
//!
//! The service ignores absent fields, so clearing the assignee, due date or
//! recurrence must be requested by naming the field in `remove`. The caller's
//! task is diffed against the server's current copy to build that payload.

use crate::client::{require_id, Client};
use crate::core::error::Result;
use crate::models::{date, Task};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// PATCH body for `/tasks/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskUpdate {
    pub title: String,
    pub revision: u64,
    pub completed: bool,
    pub starred: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    #[serde(with = "date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_count: Option<u32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub remove: Vec<&'static str>,
}

/// Build the update payload turning `original` into `supplied`.
pub fn reconcile(original: &Task, supplied: &Task) -> TaskUpdate {
    let mut update = TaskUpdate {
        title: supplied.title.clone(),
        revision: supplied.revision,
        completed: supplied.completed,
        starred: supplied.starred,
        assignee_id: None,
        due_date: None,
        recurrence_type: None,
        recurrence_count: None,
        remove: Vec::new(),
    };

    match settle(original.assignee(), supplied.assignee()) {
        Field::Set(assignee) => update.assignee_id = assignee,
        Field::Remove => update.remove.push("assignee_id"),
    }

    match settle(original.due_date, supplied.due_date) {
        Field::Set(due_date) => update.due_date = due_date,
        Field::Remove => update.remove.push("due_date"),
    }

    match settle(original.recurrence(), supplied.recurrence()) {
        Field::Set(recurrence) => {
            if let Some((kind, count)) = recurrence {
                update.recurrence_type = Some(kind.to_string());
                update.recurrence_count = Some(count);
            }
        }
        Field::Remove => {
            update.remove.push("recurrence_type");
            update.remove.push("recurrence_count");
        }
    }

    update
}

enum Field<T> {
    Set(Option<T>),
    Remove,
}

fn settle<T: PartialEq>(original: Option<T>, supplied: Option<T>) -> Field<T> {
    if original == supplied {
        Field::Set(original)
    } else if supplied.is_none() {
        Field::Remove
    } else {
        Field::Set(supplied)
    }
}

impl Client {
    /// Update a task, clearing fields that were unset on `task`.
    ///
    /// Fetches the current task first; a failed fetch aborts without writing.
    pub async fn update_task(&self, task: &Task) -> Result<Task> {
        require_id("task.id", task.id)?;
        task.check_recurrence()?;

        let original = self.task(task.id).await?;
        let update = reconcile(&original, task);
        debug!(
            source = "reconcile",
            task_id = task.id,
            revision = update.revision,
            remove = ?update.remove,
            "patching task"
        );
        self.patch(&format!("tasks/{}", task.id), &update).await
    }
}
