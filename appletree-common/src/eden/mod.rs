//! Client for Eden, the HTTP JSON service that stores quotes, user profiles
//! and card inventories.
//!
//! Every endpoint is a POST of a JSON body under `/db/`. Eden answers with a
//! JSON object whose string `status` field carries the real outcome
//! ("200", "403", "404", "500").

pub mod card;
pub mod quote;
pub mod user;

use crate::error::EdenError;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

pub const STATUS_OK: &str = "200";
pub const STATUS_FORBIDDEN: &str = "403";
pub const STATUS_NOT_FOUND: &str = "404";

#[derive(Clone)]
pub struct EdenClient {
    http: Client,
    base_url: String,
}

impl EdenClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<EdenClient, EdenError> {
        let http = Client::builder().timeout(timeout).build()?;
        Ok(EdenClient {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn post<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, EdenError> {
        let url = format!("{}{}", self.base_url, path);
        debug!("[Eden] {} <-- {}", path, serde_json::to_string(body)?);
        let text = self.http.post(url).json(body).send().await?.text().await?;
        let value: Value = serde_json::from_str(&text)?;
        debug!("[Eden] {} --> {}", path, value);
        Ok(value)
    }

    /// POST and fail unless Eden reports success.
    async fn post_ok<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<Value, EdenError> {
        let value = self.post(path, body).await?;
        ensure_ok(path, &value)?;
        Ok(value)
    }
}

pub fn status_of(value: &Value) -> Option<&str> {
    value.get("status").and_then(Value::as_str)
}

pub fn ensure_ok(path: &str, value: &Value) -> Result<(), EdenError> {
    match status_of(value) {
        Some(STATUS_OK) => Ok(()),
        status => Err(EdenError::Status {
            path: path.to_string(),
            status: status.unwrap_or("missing").to_string(),
        }),
    }
}

/// Decode a response body into a record, ignoring the status field.
pub fn decode<T: DeserializeOwned>(value: Value) -> Result<T, EdenError> {
    Ok(serde_json::from_value(value)?)
}
