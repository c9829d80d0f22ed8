use crate::client::{require_id, require_text, revisioned, Client};
use crate::core::error::Result;
use crate::models::{Folder, FolderRevision};
use serde::Serialize;

#[derive(Serialize)]
struct FolderBody<'a> {
    title: &'a str,
    list_ids: &'a [u64],
    #[serde(skip_serializing_if = "Option::is_none")]
    revision: Option<u64>,
}

impl Client {
    pub async fn folders(&self) -> Result<Vec<Folder>> {
        self.get("folders").await
    }

    pub async fn folder(&self, folder_id: u64) -> Result<Folder> {
        require_id("folder_id", folder_id)?;
        self.get(&format!("folders/{}", folder_id)).await
    }

    pub async fn create_folder(&self, title: &str, list_ids: &[u64]) -> Result<Folder> {
        require_text("title", title)?;
        for list_id in list_ids {
            require_id("list_id", *list_id)?;
        }
        let body = FolderBody {
            title,
            list_ids,
            revision: None,
        };
        self.post("folders", &body).await
    }

    pub async fn update_folder(&self, folder: &Folder) -> Result<Folder> {
        require_id("folder.id", folder.id)?;
        require_text("title", &folder.title)?;
        let body = FolderBody {
            title: &folder.title,
            list_ids: &folder.list_ids,
            revision: Some(folder.revision),
        };
        self.patch(&format!("folders/{}", folder.id), &body).await
    }

    /// Delete a folder; its lists survive.
    pub async fn delete_folder(&self, folder: &Folder) -> Result<()> {
        require_id("folder.id", folder.id)?;
        self.delete(&revisioned("folders", folder.id, folder.revision))
            .await
    }

    pub async fn folder_revisions(&self) -> Result<Vec<FolderRevision>> {
        self.get("folder_revisions").await
    }
}
