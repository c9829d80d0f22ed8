use crate::core::error::{ClientError, Result};
use crate::models::{date, is_false};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    #[serde(default)]
    pub list_id: u64,
    pub title: String,
    pub revision: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigner_id: Option<u64>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_by_id: Option<u64>,
    #[serde(default, with = "date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub recurrence_type: String,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub recurrence_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_by_id: Option<u64>,
}

fn is_zero(value: &u32) -> bool {
    *value == 0
}

impl Task {
    /// Assignee, treating a zero id as unassigned.
    pub fn assignee(&self) -> Option<u64> {
        self.assignee_id.filter(|id| *id > 0)
    }

    /// Recurrence pair, `None` when the task does not repeat.
    pub fn recurrence(&self) -> Option<(&str, u32)> {
        if self.recurrence_type.is_empty() && self.recurrence_count == 0 {
            None
        } else {
            Some((self.recurrence_type.as_str(), self.recurrence_count))
        }
    }

    /// A recurrence type is set exactly when the count is positive.
    pub fn check_recurrence(&self) -> Result<()> {
        check_recurrence(&self.recurrence_type, self.recurrence_count)
    }
}

pub(crate) fn check_recurrence(recurrence_type: &str, recurrence_count: u32) -> Result<()> {
    if recurrence_type.is_empty() != (recurrence_count == 0) {
        return Err(ClientError::invalid_argument(format!(
            "recurrence type and count must be set together (type='{}', count={})",
            recurrence_type, recurrence_count
        )));
    }
    Ok(())
}

/// Body for creating a task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NewTask {
    pub list_id: u64,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<u64>,
    #[serde(skip_serializing_if = "is_false")]
    pub completed: bool,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub recurrence_type: String,
    #[serde(skip_serializing_if = "is_zero")]
    pub recurrence_count: u32,
    #[serde(with = "date", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "is_false")]
    pub starred: bool,
}

impl NewTask {
    pub fn new<T: Into<String>>(list_id: u64, title: T) -> Self {
        NewTask {
            list_id,
            title: title.into(),
            ..NewTask::default()
        }
    }

    pub fn assignee(mut self, assignee_id: u64) -> Self {
        self.assignee_id = Some(assignee_id).filter(|id| *id > 0);
        self
    }

    pub fn due(mut self, due_date: NaiveDate) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn recurring<T: Into<String>>(mut self, recurrence_type: T, recurrence_count: u32) -> Self {
        self.recurrence_type = recurrence_type.into();
        self.recurrence_count = recurrence_count;
        self
    }

    pub fn starred(mut self, starred: bool) -> Self {
        self.starred = starred;
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
