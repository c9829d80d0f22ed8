use crate::client::{Client, HttpResponse};
use crate::core::error::{ClientError, Result};
use reqwest::Method;

impl Client {
    /// Send an arbitrary authenticated request under the API URL and return
    /// the response as is.
    ///
    /// Leading slashes on `path` are stripped; no status check is applied.
    /// Absolute URLs are refused so credentials stay with the configured host.
    pub async fn curl(
        &self,
        method: Method,
        path: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let path = path.trim_start_matches('/');
        if url::Url::parse(path).is_ok() {
            return Err(ClientError::invalid_argument(format!(
                "curl takes a path relative to the API URL, got {}",
                path
            )));
        }
        self.transport().send(method, path, body).await
    }
}
