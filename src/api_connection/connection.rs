use reqwest::Client;
use thiserror::Error;
use tracing::debug;

use super::endpoints::{ChatCompletionRequest, ChatCompletionResponse, ChatMessage};
use crate::config::GenerationConfig;

#[derive(Debug, Error)]
pub enum ApiConnectionError {
    #[error("API key is empty")]
    MissingApiKey,
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("API error {status}: {error_body}")]
    ApiError {
        status: reqwest::StatusCode,
        error_body: String,
    },
    #[error("API returned no completion choices")]
    EmptyResponse,
}

/// Chat-completions client bound to one service configuration.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    config: GenerationConfig,
}

impl ChatClient {
    pub fn new(config: GenerationConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Builds the request body for a system + user exchange using the configured model settings.
    pub fn build_request(&self, system_prompt: &str, user_prompt: &str) -> ChatCompletionRequest {
        ChatCompletionRequest {
            model: self.config.model.clone(),
            messages: vec![
                ChatMessage::system(system_prompt),
                ChatMessage::user(user_prompt),
            ],
            temperature: Some(self.config.temperature),
            max_tokens: Some(self.config.max_tokens),
        }
    }

    pub async fn call_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, ApiConnectionError> {
        if self.config.api_key.trim().is_empty() {
            return Err(ApiConnectionError::MissingApiKey);
        }

        debug!(url = %self.config.base_url, model = %request.model, "sending chat completion");

        let response = self
            .http
            .post(&self.config.base_url)
            .bearer_auth(&self.config.api_key)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        if response.status().is_success() {
            let chat_response = response.json::<ChatCompletionResponse>().await?;
            Ok(chat_response)
        } else {
            let status = response.status();
            let error_body = response
                .text()
                .await
                .unwrap_or_else(|_| "Failed to read error body".to_string());
            Err(ApiConnectionError::ApiError { status, error_body })
        }
    }

    /// Sends one exchange and returns the first choice's text.
    pub async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, ApiConnectionError> {
        let request = self.build_request(system_prompt, user_prompt);
        let response = self.call_chat_completion(&request).await?;
        response
            .first_content()
            .map(|content| content.trim().to_string())
            .ok_or(ApiConnectionError::EmptyResponse)
    }
}
