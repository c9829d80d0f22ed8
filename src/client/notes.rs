use crate::client::{endpoint, require_id, require_text, revisioned, Client};
use crate::core::error::Result;
use crate::core::types::Parent;
use crate::models::Note;
use serde::Serialize;

#[derive(Serialize)]
struct NoteBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    task_id: Option<u64>,
    content: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    revision: Option<u64>,
}

impl Client {
    pub async fn notes_for(&self, parent: Parent) -> Result<Vec<Note>> {
        let (key, id) = parent.query();
        require_id(key, id)?;
        self.get(&endpoint("notes", &[(key, id.to_string())])).await
    }

    pub async fn note(&self, note_id: u64) -> Result<Note> {
        require_id("note_id", note_id)?;
        self.get(&format!("notes/{}", note_id)).await
    }

    pub async fn create_note(&self, task_id: u64, content: &str) -> Result<Note> {
        require_id("task_id", task_id)?;
        require_text("content", content)?;
        let body = NoteBody {
            task_id: Some(task_id),
            content,
            revision: None,
        };
        self.post("notes", &body).await
    }

    pub async fn update_note(&self, note: &Note) -> Result<Note> {
        require_id("note.id", note.id)?;
        let body = NoteBody {
            task_id: None,
            content: &note.content,
            revision: Some(note.revision),
        };
        self.patch(&format!("notes/{}", note.id), &body).await
    }

    pub async fn delete_note(&self, note: &Note) -> Result<()> {
        require_id("note.id", note.id)?;
        self.delete(&revisioned("notes", note.id, note.revision))
            .await
    }
}
