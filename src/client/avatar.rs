use crate::client::{codec, endpoint, require_id, Client};
use crate::core::error::{ClientError, Result};
use reqwest::{Method, StatusCode};

/// Pixel sizes the avatar endpoint serves.
pub const AVATAR_SIZES: [u32; 15] = [25, 28, 30, 32, 50, 54, 56, 60, 64, 108, 128, 135, 256, 270, 512];

impl Client {
    /// Resolve a user's avatar image URL from the redirect `Location`.
    ///
    /// `size == 0` lets the server choose. With `fallback` the server always
    /// redirects (to a placeholder if needed); without it a user with no
    /// avatar yields `204` and an empty string.
    pub async fn avatar_url(&self, user_id: u64, size: u32, fallback: bool) -> Result<String> {
        require_id("user_id", user_id)?;
        if size != 0 && !AVATAR_SIZES.contains(&size) {
            return Err(ClientError::invalid_argument(format!(
                "avatar size {} is not one of {:?}",
                size, AVATAR_SIZES
            )));
        }

        let mut params = vec![("user_id", user_id.to_string())];
        if size != 0 {
            params.push(("size", size.to_string()));
        }
        let expected: &[StatusCode] = if fallback {
            &[StatusCode::FOUND]
        } else {
            params.push(("fallback", "false".to_string()));
            &[StatusCode::NO_CONTENT, StatusCode::FOUND]
        };

        let response = self
            .transport()
            .send(Method::GET, &endpoint("avatar", &params), None)
            .await?;
        codec::expect_status(&response, expected)?;

        if response.status == StatusCode::NO_CONTENT {
            return Ok(String::new());
        }
        response
            .location()
            .map(str::to_string)
            .ok_or_else(|| ClientError::Decode("avatar redirect without Location header".to_string()))
    }
}
