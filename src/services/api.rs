use crate::config::WidgetConfig;
use crate::models::{
    apod::{ApodRecord, ApodResponse},
    error::AppError,
};
use url::Url;

// CONSTANTS
const BASE_URL: &str = "https://api.nasa.gov/";
const APOD_ENDPOINT: &str = "planetary/apod";

// API CONFIGURATION
/// Configuration for the APOD API client.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    base_url: String,
    endpoint: String,
    api_key: String,
}

impl ApiConfig {
    /// Creates a builder for constructing an `ApiConfig`.
    pub fn builder() -> ApiConfigBuilder {
        ApiConfigBuilder::default()
    }

    /// Builds the API configuration from the widget options.
    pub fn from_widget(config: &WidgetConfig) -> Self {
        Self::builder()
            .base_url(&config.api_base)
            .endpoint(&config.apod_endpoint)
            .api_key(config.appid.trim())
            .build()
    }

    /// Constructs the full request URL, `{base}{endpoint}?api_key={key}`.
    pub fn apod_url(&self) -> Result<Url, AppError> {
        if self.api_key.is_empty() {
            return Err(AppError::ConfigError("APPID not set".to_string()));
        }

        Url::parse_with_params(
            &format!("{}{}", self.base_url, self.endpoint),
            &[("api_key", &self.api_key)],
        )
        .map_err(|e| AppError::ConfigError(format!("Invalid API url: {e}")))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfigBuilder::default().build()
    }
}

// API CONFIGURATION BUILDER
/// Builder for constructing an `ApiConfig` with custom settings.
#[derive(Debug, Default)]
pub struct ApiConfigBuilder {
    base_url: Option<String>,
    endpoint: Option<String>,
    api_key: Option<String>,
}

impl ApiConfigBuilder {
    /// Sets a custom base URL (primarily for testing).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the endpoint path appended to the base URL.
    pub fn endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Sets the api.nasa.gov key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Builds the `ApiConfig`.
    pub fn build(self) -> ApiConfig {
        ApiConfig {
            base_url: self.base_url.unwrap_or_else(|| BASE_URL.to_string()),
            endpoint: self.endpoint.unwrap_or_else(|| APOD_ENDPOINT.to_string()),
            api_key: self.api_key.unwrap_or_default(),
        }
    }
}

// APOD CLIENT
/// HTTP client for the APOD endpoint.
pub struct ApodClient {
    http: reqwest::Client,
    config: ApiConfig,
}

impl ApodClient {
    /// Creates a new client with the specified configuration.
    pub fn with_config(config: ApiConfig) -> Result<Self, AppError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::ConfigError(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { http, config })
    }

    /// Executes a single fetch attempt and normalizes the body.
    pub async fn fetch_apod(&self) -> Result<ApodRecord, AppError> {
        let url = self.config.apod_url()?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| self.classify_error(e))?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            return Err(error_for_status(status.as_u16(), &body));
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.classify_error(e))?;

        decode_apod(&body)
    }

    /// Converts a reqwest error into an appropriate AppError.
    fn classify_error(&self, error: reqwest::Error) -> AppError {
        if error.is_timeout() {
            AppError::ApiError(format!("Request timeout: {error}"))
        } else if error.is_request() {
            AppError::ApiError(format!("Request error: {error}"))
        } else {
            AppError::ApiError(format!("Network error: {error}"))
        }
    }
}

/// Decodes and normalizes a 200 response body.
pub fn decode_apod(body: &str) -> Result<ApodRecord, AppError> {
    let data: ApodResponse = serde_json::from_str(body)
        .map_err(|e| AppError::DataError(format!("Failed to parse response: {e}")))?;

    ApodRecord::try_from(data)
}

/// Creates an error for any status other than 200.
///
/// Only 403 (bad key) and 429 (quota) are terminal; everything else is retried,
/// including other 2xx codes.
pub fn error_for_status(status: u16, body: &str) -> AppError {
    match status {
        403 => AppError::AuthError("Incorrect APPID".to_string()),
        429 => AppError::RateLimited,
        400..=499 => AppError::ApiError(format!("Client error {status}: {body}")),
        500..=599 => AppError::ApiError(format!("Server error {status}: {body}")),
        _ => AppError::ApiError(format!("Unexpected status {status}: {body}")),
    }
}
