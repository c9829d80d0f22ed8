use crate::client::{endpoint, require_id, require_text, Client};
use crate::core::error::{ClientError, Result};
use crate::models::{Root, User};
use reqwest::{Method, StatusCode};
use serde::Serialize;
use tracing::debug;

#[derive(Serialize)]
struct UserUpdate<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    revision: Option<u64>,
}

impl Client {
    /// The user the access token belongs to.
    pub async fn user(&self) -> Result<User> {
        self.get("user").await
    }

    /// Rename the current user.
    pub async fn update_user(&self, user: &User) -> Result<User> {
        require_text("name", &user.name)?;
        let body = UserUpdate {
            name: &user.name,
            revision: user.revision,
        };
        self.call(Method::PUT, "user", Some(&body), StatusCode::OK)
            .await
    }

    /// Users sharing any list with the current user, or one list when `list_id` is given.
    pub async fn users(&self, list_id: Option<u64>) -> Result<Vec<User>> {
        let mut params = Vec::new();
        if let Some(list_id) = list_id {
            require_id("list_id", list_id)?;
            params.push(("list_id", list_id.to_string()));
        }
        self.get(&endpoint("users", &params)).await
    }

    pub async fn root(&self) -> Result<Root> {
        self.get("root").await
    }

    /// Whether the configured credentials are accepted.
    ///
    /// 401 and 403 answer `false`; any other non-200 status is an error.
    pub async fn authed(&self) -> Result<bool> {
        let response = self.transport().send(Method::GET, "user", None).await?;
        match response.status {
            StatusCode::OK => Ok(true),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                debug!(
                    source = "transport",
                    status = response.status.as_u16(),
                    "credentials rejected"
                );
                Ok(false)
            }
            other => Err(ClientError::UnexpectedStatus {
                observed: other.as_u16(),
                expected: vec![StatusCode::OK.as_u16()],
            }),
        }
    }
}
