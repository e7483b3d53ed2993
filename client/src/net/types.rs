//! Wire types for the remote API's JSON bodies.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// User-entered identifier/secret pair. Sent as `{ username, password }`.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct Credential {
    #[serde(rename = "username")]
    pub identifier: String,
    #[serde(rename = "password")]
    pub secret: String,
}

impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credential")
            .field("identifier", &self.identifier)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// Successful `/login` or `/register` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// `GET /posts` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct PostsResponse {
    #[serde(default)]
    pub posts: Vec<String>,
}

/// Body for `POST /posts` and `POST /config/webhook`, and the echo `POST /posts`
/// returns.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlBody {
    pub url: String,
}

/// `GET`/`POST /config/webhook` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct WebhookResponse {
    pub webhook: String,
}

/// Error body. The API answers with `{ "error": ... }`; FastAPI's own
/// exceptions use `{ "detail": ... }`, where `detail` may also be a list of
/// validation errors.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ErrorBody {
    pub error: Option<serde_json::Value>,
    pub detail: Option<serde_json::Value>,
}

impl ErrorBody {
    /// First non-blank human-readable message in the body.
    pub fn message(&self) -> Option<String> {
        [&self.error, &self.detail]
            .into_iter()
            .flatten()
            .find_map(readable)
    }
}

fn readable(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        serde_json::Value::Array(items) => items.iter().find_map(|item| item.get("msg").and_then(readable)),
        _ => None,
    }
}
