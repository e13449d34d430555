//! Gemini generate-content client.
//!
//! Serializes a [`GenerationRequest`] into the REST payload, maps HTTP
//! failures onto [`LLMError`] and returns the raw reply for normalization.

mod request;
mod response;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, SecretString};

use crate::{
    chat::{ChatProvider, ChatResponse},
    error::LLMError,
    request::GenerationRequest,
};

pub use response::GoogleGenerateResponse;

use request::GoogleGenerateRequest;
use response::extract_error_message;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/";
const API_KEY_HEADER: &str = "x-goog-api-key";

/// Configuration for the Gemini client.
#[derive(Debug)]
pub struct GoogleConfig {
    /// API key for authentication.
    pub api_key: SecretString,
    /// Base URL ending in `/`.
    pub base_url: Url,
    /// Request timeout in seconds.
    pub timeout_seconds: Option<u64>,
}

/// Client for the Gemini generate-content endpoint.
///
/// Cloning is cheap; configuration lives behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Google {
    config: Arc<GoogleConfig>,
    client: Client,
}

impl Google {
    pub fn new(
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, LLMError> {
        let mut builder = Client::builder();
        if let Some(sec) = timeout_seconds {
            builder = builder.timeout(Duration::from_secs(sec));
        }
        Self::with_client(builder.build()?, api_key, base_url, timeout_seconds)
    }

    /// Creates a client around an existing HTTP client.
    pub fn with_client(
        client: Client,
        api_key: impl Into<String>,
        base_url: Option<String>,
        timeout_seconds: Option<u64>,
    ) -> Result<Self, LLMError> {
        let base_url = parse_base_url(base_url.as_deref().unwrap_or(DEFAULT_BASE_URL))?;
        Ok(Self {
            config: Arc::new(GoogleConfig {
                api_key: SecretString::new(api_key.into()),
                base_url,
                timeout_seconds,
            }),
            client,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.config.timeout_seconds
    }

    fn endpoint(&self, model: &str) -> Result<Url, LLMError> {
        self.config
            .base_url
            .join(&format!("models/{model}:generateContent"))
            .map_err(|e| LLMError::InvalidRequest(format!("invalid model endpoint: {e}")))
    }

    async fn ensure_success_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, LLMError> {
        let status = response.status();
        log::debug!("Google HTTP status: {status}");
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body).unwrap_or_else(|| status.to_string());
        Err(match status.as_u16() {
            401 | 403 => LLMError::AuthError(message),
            429 => LLMError::RateLimited(message),
            code => LLMError::ProviderError {
                status: code,
                message,
            },
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url, LLMError> {
    let normalized = if raw.ends_with('/') {
        raw.to_string()
    } else {
        format!("{raw}/")
    };
    Url::parse(&normalized)
        .map_err(|e| LLMError::InvalidRequest(format!("invalid base URL {raw}: {e}")))
}

#[async_trait]
impl ChatProvider for Google {
    async fn generate_content(
        &self,
        request: &GenerationRequest,
    ) -> Result<Box<dyn ChatResponse>, LLMError> {
        if self.config.api_key.expose_secret().is_empty() {
            return Err(LLMError::AuthError("Missing Google API key".to_string()));
        }

        let body = GoogleGenerateRequest::from_request(request);
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("Google request payload: {json}");
            }
        }

        let mut http = self
            .client
            .post(self.endpoint(request.model())?)
            .header(API_KEY_HEADER, self.config.api_key.expose_secret().as_str())
            .json(&body);
        if let Some(timeout) = self.config.timeout_seconds {
            http = http.timeout(Duration::from_secs(timeout));
        }

        let response = http.send().await?;
        let response = self.ensure_success_response(response).await?;
        let raw = response.text().await?;
        let parsed: GoogleGenerateResponse =
            serde_json::from_str(&raw).map_err(|e| LLMError::ResponseFormatError {
                message: format!("Failed to decode Google response: {e}"),
                raw_response: raw.clone(),
            })?;
        if let Some(reason) = parsed.block_reason() {
            log::warn!("Google blocked the prompt: {reason}");
        }
        Ok(Box::new(parsed))
    }
}
