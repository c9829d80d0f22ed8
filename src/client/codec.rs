//! Status classification and JSON encoding/decoding.

use crate::client::transport::HttpResponse;
use crate::core::error::{ClientError, Result};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Succeed only when the response status is one of `expected`.
pub fn expect_status(response: &HttpResponse, expected: &[StatusCode]) -> Result<()> {
    if expected.contains(&response.status) {
        return Ok(());
    }
    Err(ClientError::UnexpectedStatus {
        observed: response.status.as_u16(),
        expected: expected.iter().map(StatusCode::as_u16).collect(),
    })
}

pub fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>> {
    serde_json::to_vec(value).map_err(ClientError::Encode)
}

/// Decode the body, treating an empty body as an error.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    if response.body.iter().all(u8::is_ascii_whitespace) {
        return Err(ClientError::Decode(format!(
            "empty response body (status {})",
            response.status.as_u16()
        )));
    }
    serde_json::from_slice(&response.body).map_err(|err| {
        ClientError::Decode(format!(
            "invalid {} payload: {}",
            short_type_name::<T>(),
            err
        ))
    })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    head.rsplit("::").next().unwrap_or(head)
}
