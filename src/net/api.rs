//! HTTP client for the dealership backend.
//!
//! Client-side (hydrate): real requests via `gloo-net`, with the bearer
//! token and session id attached from localStorage, one silent retry against
//! the fallback base address on transient network failure, and a forced
//! logout + redirect on 401.
//!
//! Server-side (SSR): stubs returning [`ApiError::Network`] since these
//! endpoints are only meaningful in the browser.
//!
//! The client is an explicitly constructed value passed through Leptos
//! context, never a global; tests substitute their own transport at the
//! `ChatTransport` seam instead of stubbing HTTP.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Failure taxonomy surfaced to callers.
///
/// `Network` is already post-retry when it reaches a caller; `Auth` means
/// the session was cleared and a redirect to the login boundary was issued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    Network(String),
    Auth,
    Server(u16),
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Auth => write!(f, "unauthorized"),
            ApiError::Server(status) => write!(f, "server error: status {status}"),
            ApiError::Parse(msg) => write!(f, "malformed response: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Backend API client with a primary and a fallback base address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base_url: String,
    fallback_url: String,
}

impl Default for ApiClient {
    /// Same-origin `/api` first, the local development server as fallback.
    fn default() -> Self {
        Self::new("/api", "http://localhost:5000/api")
    }
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, fallback_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            fallback_url: fallback_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Join a base address and a path without doubling the separator.
fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(feature = "hydrate")]
impl ApiClient {
    /// `GET path`, decoding the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] after the retry policy has been exhausted.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.with_retry(path, None).await
    }

    /// `POST path` with a JSON body, decoding the JSON response into `T`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] after the retry policy has been exhausted.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let body = serde_json::to_value(body).map_err(|e| ApiError::Parse(e.to_string()))?;
        self.with_retry(path, Some(body)).await
    }

    /// One attempt against the primary address, then exactly one more
    /// against the fallback if the first failed at the network layer.
    /// Non-network failures (auth, server, parse) are never retried.
    async fn with_retry<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        match self.attempt(&self.base_url, path, body.as_ref()).await {
            Err(ApiError::Network(first)) => {
                log::warn!("request to {path} failed ({first}), retrying against fallback");
                self.attempt(&self.fallback_url, path, body.as_ref()).await
            }
            other => other,
        }
    }

    async fn attempt<T: DeserializeOwned>(
        &self,
        base: &str,
        path: &str,
        body: Option<&serde_json::Value>,
    ) -> Result<T, ApiError> {
        use gloo_net::http::Request;

        let url = join_url(base, path);
        let mut builder = match body {
            Some(_) => Request::post(&url),
            None => Request::get(&url),
        };

        if let Some(token) = crate::util::session::read_token() {
            builder = builder.header("Authorization", &format!("Bearer {token}"));
        }
        if let Some(session_id) = crate::util::session::read_session_id() {
            builder = builder.header("userUUID", &session_id);
        }

        let sent = match body {
            Some(json) => {
                builder
                    .json(json)
                    .map_err(|e| ApiError::Parse(e.to_string()))?
                    .send()
                    .await
            }
            None => builder.send().await,
        };
        let resp = sent.map_err(|e| ApiError::Network(e.to_string()))?;

        match resp.status() {
            200..=299 => resp
                .json::<T>()
                .await
                .map_err(|e| ApiError::Parse(e.to_string())),
            401 => {
                log::warn!("unauthorized response from {path}, clearing session");
                crate::util::session::clear();
                crate::util::session::redirect_to_login();
                Err(ApiError::Auth)
            }
            status => Err(ApiError::Server(status)),
        }
    }
}

#[cfg(not(feature = "hydrate"))]
impl ApiClient {
    /// SSR stub; real requests only happen in the browser.
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let _ = path;
        Err(ApiError::Network("not available on server".to_owned()))
    }

    /// SSR stub; real requests only happen in the browser.
    pub async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let _ = (path, body);
        Err(ApiError::Network("not available on server".to_owned()))
    }
}
