//! Typed client for the dashboard backend's REST surface.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::{debug, warn};

use crate::http::{HttpClient, HttpRequest};
use crate::model::{NewsPayload, PredictionView, SearchMatch, StockView};
use crate::{Symbol, ValidationError};

/// Local backend address used when no override is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base address.
pub const BASE_URL_ENV: &str = "TICKERDECK_API_URL";

/// Failure classification for a single endpoint call.
///
/// All three kinds are transport-level failures from the aggregator's point
/// of view; soft application errors travel inside successfully decoded
/// payloads instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// Network-level failure (connect, timeout, body read).
    Transport,
    /// Upstream answered with a non-2xx status.
    Status,
    /// Payload could not be decoded into the expected shape.
    Malformed,
}

/// Structured error for one backend endpoint call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    kind: ApiErrorKind,
    message: String,
}

impl ApiError {
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: message.into(),
        }
    }

    pub fn status(endpoint: &str, status: u16) -> Self {
        Self {
            kind: ApiErrorKind::Status,
            message: format!("{endpoint} returned status {status}"),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self {
            kind: ApiErrorKind::Malformed,
            message: message.into(),
        }
    }

    pub const fn kind(&self) -> ApiErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Client for the four dashboard endpoints.
///
/// No caching, no retries: each call issues exactly one request, and a
/// failed call is terminal until the caller re-invokes it.
#[derive(Clone)]
pub struct ApiClient {
    http: Arc<dyn HttpClient>,
    base_url: String,
    timeout_ms: u64,
}

impl ApiClient {
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_owned(),
            timeout_ms: 3_000,
        }
    }

    /// Build a client from `TICKERDECK_API_URL`, defaulting to the local
    /// backend address.
    pub fn from_env(http: Arc<dyn HttpClient>) -> Self {
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| String::from(DEFAULT_BASE_URL));
        Self::new(http, base_url)
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /api/stock/{symbol}` — prices, fundamentals, and rating.
    pub async fn stock(&self, symbol: &Symbol) -> Result<StockView, ApiError> {
        let path = format!("/api/stock/{}", urlencoding::encode(symbol.as_str()));
        self.fetch_json(&path).await
    }

    /// `GET /api/predict/{symbol}` — recommendation payload.
    pub async fn predict(&self, symbol: &Symbol) -> Result<PredictionView, ApiError> {
        let path = format!("/api/predict/{}", urlencoding::encode(symbol.as_str()));
        self.fetch_json(&path).await
    }

    /// `GET /api/news/{symbol}` — headline payload.
    pub async fn news(&self, symbol: &Symbol) -> Result<NewsPayload, ApiError> {
        let path = format!("/api/news/{}", urlencoding::encode(symbol.as_str()));
        self.fetch_json(&path).await
    }

    /// `GET /api/stock/search?query=` — symbol suggestions. At least one
    /// character is required.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchMatch>, ApiError> {
        if query.trim().is_empty() {
            return Err(ApiError::malformed(ValidationError::EmptyQuery.to_string()));
        }

        let path = format!("/api/stock/search?query={}", urlencoding::encode(query));
        self.fetch_json(&path).await
    }

    async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "dashboard api request");

        let request = HttpRequest::get(&url).with_timeout_ms(self.timeout_ms);
        let response = self.http.execute(request).await.map_err(|error| {
            warn!(%url, error = %error, "dashboard api transport failure");
            ApiError::transport(format!("{path}: {}", error.message()))
        })?;

        if !response.is_success() {
            warn!(%url, status = response.status, "dashboard api status failure");
            return Err(ApiError::status(path, response.status));
        }

        serde_json::from_str(&response.body).map_err(|error| {
            warn!(%url, error = %error, "dashboard api payload failure");
            ApiError::malformed(format!("{path}: undecodable payload: {error}"))
        })
    }
}
