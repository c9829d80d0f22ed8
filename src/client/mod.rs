//! Typed client for the to-do service REST API.
//!
//! One method per `(resource, verb)` pair lives in the per-resource modules;
//! all of them funnel through [`Client::call`] so that credential headers,
//! status checks and decoding behave identically everywhere.

pub mod avatar;
pub mod codec;
pub mod curl;
pub mod fanout;
pub mod files;
pub mod folders;
pub mod lists;
pub mod memberships;
pub mod notes;
pub mod positions;
pub mod reconcile;
pub mod reminders;
pub mod subtasks;
pub mod task_comments;
pub mod tasks;
pub mod transport;
pub mod upload;
pub mod user;
pub mod webhooks;

pub use avatar::AVATAR_SIZES;
pub use fanout::PartialResult;
pub use reconcile::{reconcile, TaskUpdate};
pub use transport::{HttpResponse, HttpTransport};
pub use upload::{UploadPhase, UploadSession};

use crate::core::config::ClientConfig;
use crate::core::error::{ClientError, Result};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::form_urlencoded;

/// Stateless handle on the service. Cheap to clone; safe to share across tasks.
#[derive(Clone)]
pub struct Client {
    transport: HttpTransport,
}

impl Client {
    pub fn new(config: ClientConfig) -> Result<Self> {
        Ok(Client {
            transport: HttpTransport::new(&config)?,
        })
    }

    pub fn transport(&self) -> &HttpTransport {
        &self.transport
    }

    /// Issue a request, require `expected`, and decode the body.
    pub(crate) async fn call<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        expected: StatusCode,
    ) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let bytes = body.map(codec::encode).transpose()?;
        let response = self.transport.send(method, path, bytes).await?;
        codec::expect_status(&response, &[expected])?;
        codec::decode(&response)
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.call::<(), T>(Method::GET, path, None, StatusCode::OK)
            .await
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::POST, path, Some(body), StatusCode::CREATED)
            .await
    }

    pub(crate) async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.call(Method::PATCH, path, Some(body), StatusCode::OK)
            .await
    }

    /// DELETE expecting `204 No Content`; the body is ignored.
    pub(crate) async fn delete(&self, path: &str) -> Result<()> {
        let response = self.transport.send(Method::DELETE, path, None).await?;
        codec::expect_status(&response, &[StatusCode::NO_CONTENT])
    }
}

/// Append an encoded query string to `path`.
pub(crate) fn endpoint(path: &str, params: &[(&str, String)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }
    let query = form_urlencoded::Serializer::new(String::new())
        .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())))
        .finish();
    format!("{}?{}", path, query)
}

/// Path of a revisioned entity delete, e.g. `lists/3?revision=7`.
pub(crate) fn revisioned(path: &str, id: u64, revision: u64) -> String {
    endpoint(
        &format!("{}/{}", path, id),
        &[("revision", revision.to_string())],
    )
}

/// Ids naming an existing entity must be strictly positive.
pub(crate) fn require_id(name: &str, id: u64) -> Result<()> {
    if id == 0 {
        return Err(ClientError::invalid_argument(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(())
}

pub(crate) fn require_text(name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ClientError::invalid_argument(format!(
            "{} must not be empty",
            name
        )));
    }
    Ok(())
}
