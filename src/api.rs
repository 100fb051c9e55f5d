/// HTTP client for the airline-management API
///
/// Thin wrapper around reqwest: one request per call, no retries, no
/// caching. Procedure calls only care about success or failure; view and
/// health fetches hand the JSON back to the screen untouched.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use crate::catalog::Method;

/// Base URL used when AIRLINE_API_URL is not set
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000/api";

/// One row of a backend view, kept exactly as the server sent it
pub type Record = serde_json::Map<String, Value>;

/// What went wrong with a single API call
///
/// Display is the bare message; screens decide how to present it.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// The request never completed (connection refused, DNS, timeout)
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("{0}")]
    Api(String),
}

/// Error payload the backend sends alongside a non-2xx status
#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

/// Client for the backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Build a client from AIRLINE_API_URL, falling back to the local default
    pub fn from_env() -> Self {
        let base =
            std::env::var("AIRLINE_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Invoke one stored procedure
    ///
    /// Any 2xx response is success and its body is ignored. A non-2xx
    /// response yields the server's `error` string when it sent one,
    /// otherwise the HTTP status line.
    pub async fn submit(&self, method: Method, path: &str, body: Value) -> Result<(), ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let request = match method {
            Method::Post => self.http.post(&url),
            Method::Delete => self.http.delete(&url),
        };
        let response = request
            .json(&body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.error,
            Err(_) => status.to_string(),
        };
        Err(ApiError::Api(message))
    }

    /// Fetch all rows of a named view
    pub async fn fetch_view(&self, name: &str) -> Result<Vec<Record>, ApiError> {
        let url = format!("{}/views/{}", self.base_url, name);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = match response.json::<ErrorBody>().await {
                Ok(body) => body.error,
                Err(_) => status.to_string(),
            };
            return Err(ApiError::Api(message));
        }
        response
            .json::<Vec<Record>>()
            .await
            .map_err(|e| ApiError::Api(e.to_string()))
    }

    /// Fetch the health endpoint's status object
    ///
    /// The backend reports database trouble as JSON with a non-2xx status,
    /// so any parseable body comes back as data. Only transport and parse
    /// failures are errors here.
    pub async fn fetch_health(&self) -> Result<Value, ApiError> {
        let url = format!("{}/health", self.base_url);
        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ApiError::Api(e.to_string()))
    }
}
