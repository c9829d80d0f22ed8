use crate::client::{endpoint, require_id, revisioned, Client};
use crate::core::error::Result;
use crate::core::types::Parent;
use crate::models::Reminder;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::Serialize;

#[derive(Serialize)]
struct ReminderBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<u64>,
    date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    created_by_device_udid: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    revision: Option<u64>,
}

fn wire_instant(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

impl Client {
    pub async fn reminders_for(&self, parent: Parent) -> Result<Vec<Reminder>> {
        let (key, id) = parent.query();
        require_id(key, id)?;
        self.get(&endpoint("reminders", &[(key, id.to_string())]))
            .await
    }

    pub async fn reminder(&self, reminder_id: u64) -> Result<Reminder> {
        require_id("reminder_id", reminder_id)?;
        self.get(&format!("reminders/{}", reminder_id)).await
    }

    /// Create a reminder firing at `date`, optionally tagged with the device that set it.
    pub async fn create_reminder(
        &self,
        task_id: u64,
        date: DateTime<Utc>,
        device_udid: Option<&str>,
    ) -> Result<Reminder> {
        require_id("task_id", task_id)?;
        let body = ReminderBody {
            task_id: Some(task_id),
            date: wire_instant(&date),
            created_by_device_udid: device_udid.filter(|udid| !udid.is_empty()),
            revision: None,
        };
        self.post("reminders", &body).await
    }

    pub async fn update_reminder(&self, reminder: &Reminder) -> Result<Reminder> {
        require_id("reminder.id", reminder.id)?;
        let body = ReminderBody {
            task_id: None,
            date: wire_instant(&reminder.date),
            created_by_device_udid: None,
            revision: Some(reminder.revision),
        };
        self.patch(&format!("reminders/{}", reminder.id), &body)
            .await
    }

    pub async fn delete_reminder(&self, reminder: &Reminder) -> Result<()> {
        require_id("reminder.id", reminder.id)?;
        self.delete(&revisioned("reminders", reminder.id, reminder.revision))
            .await
    }
}
