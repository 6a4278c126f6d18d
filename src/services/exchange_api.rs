use crate::config::Config;
use crate::models::{error::AppError, exchange::ExchangeSnapshot};

const FALLBACK_ORIGIN: &str = "http://localhost:8080";

// API CONFIGURATION
/// Location of the exchange-rate endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    origin: String,
    endpoint: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Constructs the absolute URL of the exchange-rate endpoint.
    pub fn endpoint_url(&self) -> String {
        format!(
            "{}/{}",
            self.origin.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    origin: Option<String>,
    endpoint: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets the origin the endpoint is served from (primarily for testing).
    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    /// Sets the endpoint path.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Builds the `ApiConfig`, defaulting to the current page's origin.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            origin: self.origin.unwrap_or_else(page_origin),
            endpoint: self
                .endpoint
                .unwrap_or_else(|| Config::EXCHANGE_ENDPOINT.to_string()),
        }
    }
}

/// Origin of the page the app is served from. reqwest needs absolute URLs.
fn page_origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| FALLBACK_ORIGIN.to_string())
}

// EXCHANGE CLIENT
/// HTTP client for the exchange-rate endpoint.
pub struct ExchangeClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ExchangeClient {
    /// Creates a new client pointed at the page's own endpoint.
    pub fn new() -> Result<Self, AppError> {
        Self::with_config(ApiConfig::builder().build())
    }

    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Returns a reference to the client's configuration.
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Fetches the latest snapshot. Single attempt, no parameters.
    pub async fn fetch_snapshot(&self) -> Result<ExchangeSnapshot, AppError> {
        let response = self
            .http
            .get(self.config.endpoint_url())
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(self.error_for_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse response: {e}")))
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }

    /// Creates an error based on HTTP status code.
    fn error_for_status(&self, status: reqwest::StatusCode, body: &str) -> AppError {
        match status.as_u16() {
            404 => AppError::NotFound(format!("Exchange endpoint not found: {body}")),
            400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
            500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
            _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
        }
    }
}

// CONVENIENCE FUNCTIONS
/// Fetches a snapshot from the page's own exchange endpoint.
pub async fn fetch_exchange_snapshot() -> Result<ExchangeSnapshot, AppError> {
    ExchangeClient::new()?.fetch_snapshot().await
}
