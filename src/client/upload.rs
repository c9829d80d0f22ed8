//! Single-part uploads: reserve a slot, PUT the bytes, mark it finished.

use crate::client::{codec, require_id, require_text, Client};
use crate::core::error::{ClientError, Result};
use crate::models::{Upload, UploadPart, UploadState};
use reqwest::StatusCode;
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::{debug, warn};

/// Client-side progress of an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadPhase {
    Reserved,
    Transferred,
    Finished,
    Failed,
}

impl fmt::Display for UploadPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UploadPhase::Reserved => "reserved",
            UploadPhase::Transferred => "transferred",
            UploadPhase::Finished => "finished",
            UploadPhase::Failed => "failed",
        };
        f.write_str(name)
    }
}

#[derive(Serialize)]
struct Reservation<'a> {
    content_type: &'a str,
    file_name: &'a str,
    file_size: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    md5sum: Option<&'a str>,
}

#[derive(Serialize)]
struct FinishBody {
    state: UploadState,
}

/// A reserved upload and the phase it has reached.
///
/// Transitions only move forward; calling a step out of order is an
/// `InvalidArgument`. Any failed step leaves the session in `Failed` and the
/// server-side upload is not cleaned up.
#[derive(Clone)]
pub struct UploadSession {
    client: Client,
    upload: Upload,
    phase: UploadPhase,
}

impl fmt::Debug for UploadSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadSession")
            .field("upload_id", &self.upload.id)
            .field("phase", &self.phase)
            .finish()
    }
}

impl UploadSession {
    pub fn upload(&self) -> &Upload {
        &self.upload
    }

    pub fn phase(&self) -> UploadPhase {
        self.phase
    }

    fn require_phase(&self, expected: UploadPhase, step: &str) -> Result<()> {
        if self.phase != expected {
            return Err(ClientError::invalid_argument(format!(
                "cannot {} upload {} in phase {}",
                step, self.upload.id, self.phase
            )));
        }
        Ok(())
    }

    fn part(&self) -> Result<&UploadPart> {
        self.upload.part.as_ref().ok_or_else(|| {
            ClientError::Decode(format!("upload {} reservation carries no part", self.upload.id))
        })
    }

    /// PUT the bytes to the pre-signed part URL; expects 200.
    pub async fn transfer(&mut self, bytes: Vec<u8>) -> Result<()> {
        self.require_phase(UploadPhase::Reserved, "transfer")?;
        let result = self.put_bytes(bytes).await;
        self.advance(result, UploadPhase::Transferred)
    }

    async fn put_bytes(&self, bytes: Vec<u8>) -> Result<()> {
        let part = self.part()?;
        debug!(
            source = "upload",
            upload_id = self.upload.id,
            size = bytes.len(),
            "transferring upload part"
        );
        let response = self.client.transport().put_part(part, bytes).await?;
        codec::expect_status(&response, &[StatusCode::OK])
    }

    /// PATCH the upload to `finished` and return the server's view of it.
    pub async fn finish(&mut self) -> Result<Upload> {
        self.require_phase(UploadPhase::Transferred, "finish")?;
        let path = format!("uploads/{}", self.upload.id);
        let body = FinishBody {
            state: UploadState::Finished,
        };
        let result: Result<Upload> = self.client.patch(&path, &body).await;
        let finished = self.advance(result, UploadPhase::Finished)?;
        self.upload = finished.clone();
        Ok(finished)
    }

    fn advance<T>(&mut self, result: Result<T>, next: UploadPhase) -> Result<T> {
        match result {
            Ok(value) => {
                self.phase = next;
                Ok(value)
            }
            Err(err) => {
                warn!(
                    source = "upload",
                    upload_id = self.upload.id,
                    phase = %self.phase,
                    error = %err,
                    "upload step failed"
                );
                self.phase = UploadPhase::Failed;
                Err(err)
            }
        }
    }
}

impl Client {
    /// Reserve an upload slot for `file_size` bytes; expects 201.
    pub async fn reserve_upload(
        &self,
        file_name: &str,
        content_type: &str,
        file_size: u64,
        md5sum: Option<&str>,
    ) -> Result<UploadSession> {
        require_text("file_name", file_name)?;
        let body = Reservation {
            content_type,
            file_name,
            file_size,
            md5sum: md5sum.filter(|sum| !sum.is_empty()),
        };
        let upload: Upload = self.post("uploads", &body).await?;
        debug!(source = "upload", upload_id = upload.id, "reserved upload");
        Ok(UploadSession {
            client: self.clone(),
            upload,
            phase: UploadPhase::Reserved,
        })
    }

    /// Run reserve, transfer and finish over an in-memory payload.
    pub async fn upload_bytes(
        &self,
        bytes: Vec<u8>,
        remote_file_name: &str,
        content_type: &str,
        md5sum: Option<&str>,
    ) -> Result<Upload> {
        let mut session = self
            .reserve_upload(remote_file_name, content_type, bytes.len() as u64, md5sum)
            .await?;
        require_id("upload.id", session.upload.id)?;
        session.transfer(bytes).await?;
        session.finish().await
    }

    /// Upload a local file under `remote_file_name`.
    pub async fn upload_file(
        &self,
        local_path: impl AsRef<Path>,
        remote_file_name: &str,
        content_type: &str,
        md5sum: Option<&str>,
    ) -> Result<Upload> {
        require_text("remote_file_name", remote_file_name)?;
        let bytes = tokio::fs::read(local_path.as_ref()).await?;
        self.upload_bytes(bytes, remote_file_name, content_type, md5sum)
            .await
    }
}
