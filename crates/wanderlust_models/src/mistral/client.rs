//! HTTP client for a Mistral-compatible chat-completions endpoint.

use super::dto::{ChatCompletionRequest, ChatCompletionResponse};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, error, instrument};
use wanderlust_config::ProviderConfig;
use wanderlust_core::{GenerateRequest, GenerateResponse};
use wanderlust_error::{MistralError, MistralErrorKind, MistralResult, WanderlustResult};
use wanderlust_interface::WanderlustDriver;

/// Mistral chat-completions client.
#[derive(Debug, Clone)]
pub struct MistralClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
}

impl MistralClient {
    /// Creates a client, reading the API key from the environment variable
    /// named by `config.api_key_env`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The API key variable is unset or empty
    /// - The HTTP client cannot be initialized
    #[instrument(skip_all, fields(model = %config.model, api_key_env = %config.api_key_env))]
    pub fn from_config(config: &ProviderConfig) -> MistralResult<Self> {
        let api_key = std::env::var(&config.api_key_env)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| {
                MistralError::new(MistralErrorKind::MissingApiKey(config.api_key_env.clone()))
            })?;

        Self::with_api_key(api_key, config)
    }

    /// Creates a client with an explicit API key.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip(api_key, config), fields(model = %config.model))]
    pub fn with_api_key(api_key: impl Into<String>, config: &ProviderConfig) -> MistralResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| MistralError::new(MistralErrorKind::ClientCreation(e.to_string())))?;

        debug!(base_url = %config.base_url, "Created Mistral client");

        Ok(Self {
            client,
            api_key: api_key.into(),
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Sends one chat-completions request and returns the first choice's text.
    async fn complete(&self, req: &GenerateRequest) -> MistralResult<String> {
        let body = ChatCompletionRequest {
            model: req.model.as_deref().unwrap_or(&self.model),
            messages: &req.messages,
            max_tokens: req.max_tokens,
            temperature: req.temperature,
        };

        debug!(url = %self.base_url, messages = req.messages.len(), "Sending Mistral request");

        let response = self
            .client
            .post(&self.base_url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, "Failed to send request to Mistral");
                if e.is_timeout() {
                    MistralError::new(MistralErrorKind::Timeout(e.to_string()))
                } else {
                    MistralError::new(MistralErrorKind::Transport(e.to_string()))
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!(status = %status, body = %message, "Mistral returned error");
            return Err(MistralError::new(MistralErrorKind::Http {
                status_code: status.as_u16(),
                message,
            }));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            error!(error = ?e, "Failed to parse Mistral response");
            MistralError::new(MistralErrorKind::ResponseParsing(e.to_string()))
        })?;

        let text = parsed.into_text();
        debug!(chars = text.len(), "Received Mistral response");
        Ok(text)
    }
}

#[async_trait]
impl WanderlustDriver for MistralClient {
    #[instrument(skip(self, req), fields(provider = "mistral", model = %self.model))]
    async fn generate(&self, req: &GenerateRequest) -> WanderlustResult<GenerateResponse> {
        let text = self.complete(req).await?;
        Ok(GenerateResponse::new(text))
    }

    fn provider_name(&self) -> &'static str {
        "mistral"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
