//! REST client for the remote auth/monitor API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): [`ApiError::Unavailable`], since these endpoints are
//! only called from browser event handlers.
//!
//! Each public call is one attempt: build an [`Outgoing`] request, exchange it,
//! decode the status/body pair. Building and decoding are pure so they can be
//! tested without a browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::types::{Credential, PostsResponse, TokenResponse, UrlBody, WebhookResponse};
use crate::config::ApiConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully described request, ready to send.
#[derive(Clone, Debug, PartialEq)]
pub struct Outgoing {
    pub method: Method,
    pub url: String,
    pub bearer: Option<String>,
    pub body: Option<serde_json::Value>,
}

impl Outgoing {
    fn get(config: &ApiConfig, path: &str) -> Self {
        Self { method: Method::Get, url: config.url(path), bearer: None, body: None }
    }

    fn post<T: Serialize>(config: &ApiConfig, path: &str, body: &T) -> Result<Self, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Malformed(e.to_string()))?;
        Ok(Self { method: Method::Post, url: config.url(path), bearer: None, body: Some(body) })
    }

    fn authorized(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_owned());
        self
    }

    /// Value of the `Authorization` header, if any.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|t| format!("Bearer {t}"))
    }
}

pub(crate) fn register_request(config: &ApiConfig, credential: &Credential) -> Result<Outgoing, ApiError> {
    Outgoing::post(config, "/register", credential)
}

pub(crate) fn login_request(config: &ApiConfig, credential: &Credential) -> Result<Outgoing, ApiError> {
    Outgoing::post(config, "/login", credential)
}

pub(crate) fn list_posts_request(config: &ApiConfig, token: &str) -> Outgoing {
    Outgoing::get(config, "/posts").authorized(token)
}

pub(crate) fn add_post_request(config: &ApiConfig, token: &str, url: &str) -> Result<Outgoing, ApiError> {
    Ok(Outgoing::post(config, "/posts", &UrlBody { url: url.to_owned() })?.authorized(token))
}

pub(crate) fn fetch_webhook_request(config: &ApiConfig, token: &str) -> Outgoing {
    Outgoing::get(config, "/config/webhook").authorized(token)
}

pub(crate) fn set_webhook_request(config: &ApiConfig, token: &str, url: &str) -> Result<Outgoing, ApiError> {
    Ok(Outgoing::post(config, "/config/webhook", &UrlBody { url: url.to_owned() })?.authorized(token))
}

/// Decode a 2xx body as `T`, or classify the failure.
pub(crate) fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::from_status(status, body));
    }
    serde_json::from_str(body).map_err(|e| ApiError::Malformed(e.to_string()))
}

/// `GET /config/webhook` answers 404 when nothing is configured.
pub(crate) fn decode_webhook(status: u16, body: &str) -> Result<Option<String>, ApiError> {
    if status == 404 {
        return Ok(None);
    }
    decode::<WebhookResponse>(status, body).map(|r| Some(r.webhook))
}

/// Send a request and collect its status and body text.
async fn exchange(request: &Outgoing) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "hydrate")]
    {
        use gloo_net::http::Request;

        let transport = |e: gloo_net::Error| ApiError::Transport(e.to_string());
        let mut builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
        };
        if let Some(auth) = request.authorization() {
            builder = builder.header("Authorization", &auth);
        }
        let response = match &request.body {
            Some(body) => builder.json(body).map_err(transport)?.send().await,
            None => builder.send().await,
        }
        .map_err(transport)?;
        let status = response.status();
        let text = response.text().await.map_err(transport)?;
        Ok((status, text))
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        Err(ApiError::Unavailable)
    }
}

fn log_failure(request: &Outgoing, error: &ApiError) {
    leptos::logging::warn!("{} {} failed: {error}", request.method.as_str(), request.url);
}

async fn call<T: DeserializeOwned>(request: Outgoing) -> Result<T, ApiError> {
    let result = match exchange(&request).await {
        Ok((status, body)) => decode(status, &body),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        log_failure(&request, e);
    }
    result
}

/// Create an account via `POST /register`.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure, a non-2xx response, or a body
/// without `access_token`.
pub async fn register(config: &ApiConfig, credential: &Credential) -> Result<TokenResponse, ApiError> {
    call(register_request(config, credential)?).await
}

/// Sign in via `POST /login`.
///
/// # Errors
///
/// Same as [`register`].
pub async fn login(config: &ApiConfig, credential: &Credential) -> Result<TokenResponse, ApiError> {
    call(login_request(config, credential)?).await
}

/// List monitored post URLs via `GET /posts`.
///
/// # Errors
///
/// Returns [`ApiError::Unauthorized`] when the token is rejected.
pub async fn list_posts(config: &ApiConfig, token: &str) -> Result<Vec<String>, ApiError> {
    call::<PostsResponse>(list_posts_request(config, token)).await.map(|r| r.posts)
}

/// Start monitoring a post via `POST /posts`. Returns the URL the server stored.
///
/// # Errors
///
/// The server rejects inactive posts (400), duplicates (409) and unparsable
/// URLs (422); those arrive as [`ApiError::Rejected`] with its message.
pub async fn add_post(config: &ApiConfig, token: &str, url: &str) -> Result<String, ApiError> {
    call::<UrlBody>(add_post_request(config, token, url)?).await.map(|r| r.url)
}

/// Fetch the configured webhook via `GET /config/webhook`; `None` if unset.
///
/// # Errors
///
/// Returns an [`ApiError`] for any failure other than "not configured".
pub async fn fetch_webhook(config: &ApiConfig, token: &str) -> Result<Option<String>, ApiError> {
    let request = fetch_webhook_request(config, token);
    let result = match exchange(&request).await {
        Ok((status, body)) => decode_webhook(status, &body),
        Err(e) => Err(e),
    };
    if let Err(e) = &result {
        log_failure(&request, e);
    }
    result
}

/// Set the webhook via `POST /config/webhook`. Returns the stored URL.
///
/// # Errors
///
/// Returns an [`ApiError`] on transport failure or rejection.
pub async fn set_webhook(config: &ApiConfig, token: &str, url: &str) -> Result<String, ApiError> {
    call::<WebhookResponse>(set_webhook_request(config, token, url)?).await.map(|r| r.webhook)
}
