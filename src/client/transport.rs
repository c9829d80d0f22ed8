//! Authenticated HTTP round-trips with redacted debug transcripts.

use crate::core::config::{ClientConfig, ConfigValidator};
use crate::core::error::{ClientError, Result};
use crate::logging::redact::{render_headers, scrub_password};
use crate::models::UploadPart;
use reqwest::header::{HeaderMap, AUTHORIZATION, CONTENT_TYPE, LOCATION};
use reqwest::{redirect, Method, Request, StatusCode};
use std::borrow::Cow;
use tracing::{debug, error, warn};
use url::Url;

pub const ACCESS_TOKEN_HEADER: &str = "X-Access-Token";
pub const CLIENT_ID_HEADER: &str = "X-Client-ID";
pub const AMZ_DATE_HEADER: &str = "x-amz-date";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Status, headers and fully-read body of a response.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|value| value.to_str().ok())
    }

    pub fn location(&self) -> Option<&str> {
        self.header(LOCATION.as_str())
    }

    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }
}

/// Request builder bound to a base URL and a credential pair.
#[derive(Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base_url: String,
    access_token: String,
    client_id: String,
}

impl HttpTransport {
    /// Build a transport. Redirects are never followed so callers can observe 3xx codes.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        ConfigValidator::validate(config)?;
        let http = reqwest::Client::builder()
            .redirect(redirect::Policy::none())
            .timeout(config.timeout)
            .build()?;
        Ok(HttpTransport {
            http,
            base_url: config.api_url.trim_end_matches('/').to_string(),
            access_token: config.access_token.clone(),
            client_id: config.client_id.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Join `target` onto the base URL. The result never leaves the base origin.
    pub fn resolve(&self, target: &str) -> Result<Url> {
        let raw = format!("{}/{}", self.base_url, target.trim_start_matches('/'));
        let url = Url::parse(&raw).map_err(|source| ClientError::InvalidUrl {
            url: raw.clone(),
            source,
        })?;
        let base = Url::parse(&self.base_url).map_err(|source| ClientError::InvalidUrl {
            url: self.base_url.clone(),
            source,
        })?;
        if url.origin() != base.origin() {
            return Err(ClientError::invalid_argument(format!(
                "{} is outside the configured API URL",
                target
            )));
        }
        Ok(url)
    }

    /// Send a request carrying both credential headers and an optional JSON body.
    pub async fn send(
        &self,
        method: Method,
        target: &str,
        body: Option<Vec<u8>>,
    ) -> Result<HttpResponse> {
        let url = self.resolve(target)?;
        let mut builder = self
            .http
            .request(method, url)
            .header(ACCESS_TOKEN_HEADER, self.access_token.as_str())
            .header(CLIENT_ID_HEADER, self.client_id.as_str());
        if let Some(body) = body {
            builder = builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(body);
        }
        self.round_trip(builder.build()?).await
    }

    /// PUT raw bytes to a pre-signed upload part.
    ///
    /// The part carries its own `Authorization`; service credentials are not
    /// attached because the destination is a different host.
    pub async fn put_part(&self, part: &UploadPart, bytes: Vec<u8>) -> Result<HttpResponse> {
        let url = Url::parse(&part.url).map_err(|source| ClientError::InvalidUrl {
            url: part.url.clone(),
            source,
        })?;
        let request = self
            .http
            .put(url)
            .header(AMZ_DATE_HEADER, part.date.as_str())
            .header(AUTHORIZATION, part.authorization.as_str())
            .header(CONTENT_TYPE, "")
            .body(bytes)
            .build()?;
        self.round_trip(request).await
    }

    async fn round_trip(&self, request: Request) -> Result<HttpResponse> {
        let method = request.method().clone();
        let url = request.url().clone();
        debug!(
            source = "transport",
            method = %method,
            url = %url,
            dump = %dump_request(&request),
            "sending request"
        );

        let response = self.http.execute(request).await.map_err(|err| {
            warn!(source = "transport", method = %method, url = %url, error = %err, "request failed");
            ClientError::Transport(err)
        })?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = match response.bytes().await {
            Ok(bytes) => bytes.to_vec(),
            Err(err) => {
                error!(
                    source = "transport",
                    status = status.as_u16(),
                    url = %url,
                    error = %err,
                    "failed to dump response"
                );
                return Err(ClientError::Transport(err));
            }
        };

        let response = HttpResponse {
            status,
            headers,
            body,
        };
        debug!(
            source = "transport",
            method = %method,
            url = %url,
            status = status.as_u16(),
            dump = %dump_response(&response),
            "received response"
        );
        Ok(response)
    }
}

/// Credential-free transcript of an outgoing request.
pub fn dump_request(request: &Request) -> String {
    let body = request
        .body()
        .and_then(|body| body.as_bytes())
        .map(String::from_utf8_lossy)
        .unwrap_or_default();
    let transcript = format!(
        "{} {}\n{}\n\n{}",
        request.method(),
        request.url(),
        render_headers(request.headers()),
        body
    );
    scrub_password(&transcript).into_owned()
}

/// Credential-free transcript of a received response.
pub fn dump_response(response: &HttpResponse) -> String {
    let transcript = format!(
        "HTTP {}\n{}\n\n{}",
        response.status,
        render_headers(&response.headers),
        response.text()
    );
    scrub_password(&transcript).into_owned()
}
