use crate::client::{endpoint, require_id, revisioned, Client};
use crate::core::error::Result;
use crate::core::types::Parent;
use crate::models::{File, FilePreview};
use serde::Serialize;

#[derive(Serialize)]
struct NewFile {
    upload_id: u64,
    task_id: u64,
}

impl Client {
    pub async fn files_for(&self, parent: Parent) -> Result<Vec<File>> {
        let (key, id) = parent.query();
        require_id(key, id)?;
        self.get(&endpoint("files", &[(key, id.to_string())])).await
    }

    pub async fn file(&self, file_id: u64) -> Result<File> {
        require_id("file_id", file_id)?;
        self.get(&format!("files/{}", file_id)).await
    }

    /// Bind a finished upload to a task.
    pub async fn create_file(&self, upload_id: u64, task_id: u64) -> Result<File> {
        require_id("upload_id", upload_id)?;
        require_id("task_id", task_id)?;
        self.post("files", &NewFile { upload_id, task_id }).await
    }

    pub async fn destroy_file(&self, file: &File) -> Result<()> {
        require_id("file.id", file.id)?;
        self.delete(&revisioned("files", file.id, file.revision))
            .await
    }

    /// Thumbnail for a file. Empty `platform`/`size` are left off the query.
    pub async fn file_preview(
        &self,
        file_id: u64,
        platform: Option<&str>,
        size: Option<&str>,
    ) -> Result<FilePreview> {
        require_id("file_id", file_id)?;
        let mut params = vec![("file_id", file_id.to_string())];
        if let Some(platform) = platform.filter(|p| !p.is_empty()) {
            params.push(("platform", platform.to_string()));
        }
        if let Some(size) = size.filter(|s| !s.is_empty()) {
            params.push(("size", size.to_string()));
        }
        self.get(&endpoint("previews", &params)).await
    }
}
