//! services/api/src/adapters/openai_llm.rs
//!
//! This module contains the OpenAI adapter for flashcard word generation.
//! It implements the `TextGenerationService` port from the `core` crate.

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::ExponentialBackoff;
use flashcard_core::ports::{PortError, PortResult, TextGenerationService};
use std::time::Duration;

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` using OpenAI chat completions.
#[derive(Clone)]
pub struct OpenAiGenerationAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerationAdapter {
    /// Creates a new `OpenAiGenerationAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }

    /// Builds the adapter and its client from a bare API key.
    pub fn with_api_key(api_key: &str, model: String) -> Self {
        Self::from_config(OpenAIConfig::new().with_api_key(api_key), model)
    }

    /// Builds a client that sends each request exactly once.
    ///
    /// The SDK retries 429 and 5xx answers by default; a failed generation is
    /// reported to the caller instead.
    pub fn from_config(config: OpenAIConfig, model: String) -> Self {
        let no_retry = ExponentialBackoff {
            max_elapsed_time: Some(Duration::ZERO),
            ..Default::default()
        };
        Self::new(Client::with_config(config).with_backoff(no_retry), model)
    }
}

/// Transport problems mean the provider is unreachable; a rejected key is
/// reported separately so it is visible in logs.
fn map_openai_error(err: OpenAIError) -> PortError {
    match err {
        OpenAIError::Reqwest(e) => PortError::Unavailable(e.to_string()),
        OpenAIError::ApiError(api_err) if api_err.code.as_deref() == Some("invalid_api_key") => {
            PortError::Unauthorized(api_err.message)
        }
        other => PortError::Unexpected(other.to_string()),
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for OpenAiGenerationAdapter {
    /// Sends the prompt as a single user message and returns the first choice's text.
    async fn generate(&self, prompt: &str) -> PortResult<String> {
        let message = ChatCompletionRequestUserMessageArgs::default()
            .content(prompt)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        let messages: Vec<ChatCompletionRequestMessage> = vec![message.into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .n(1)
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(map_openai_error)?;

        // Extract the text content from the first choice in the response.
        let choice = response.choices.into_iter().next().ok_or_else(|| {
            PortError::Unexpected("OpenAI returned no choices in its response.".to_string())
        })?;
        match choice.message.content {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(PortError::Unexpected(
                "OpenAI response contained no text content.".to_string(),
            )),
        }
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::test_server;
    use async_openai::error::ApiError;
    use std::sync::atomic::Ordering;

    fn adapter(base_url: &str) -> OpenAiGenerationAdapter {
        let config = OpenAIConfig::new()
            .with_api_key("sk-test")
            .with_api_base(format!("{base_url}/v1"));
        OpenAiGenerationAdapter::from_config(config, "gpt-4o-mini".to_string())
    }

    fn api_error(code: Option<&str>) -> OpenAIError {
        OpenAIError::ApiError(ApiError {
            message: "request rejected".to_string(),
            r#type: Some("invalid_request_error".to_string()),
            param: None,
            code: code.map(str::to_string),
        })
    }

    #[test]
    fn invalid_api_key_code_is_unauthorized() {
        match map_openai_error(api_error(Some("invalid_api_key"))) {
            PortError::Unauthorized(msg) => assert_eq!(msg, "request rejected"),
            other => panic!("unexpected mapping: {other:?}"),
        }
    }

    #[test]
    fn other_api_error_codes_are_unexpected() {
        for code in [None, Some("model_not_found"), Some("context_length_exceeded")] {
            assert!(matches!(
                map_openai_error(api_error(code)),
                PortError::Unexpected(_)
            ));
        }
    }

    #[tokio::test]
    async fn returns_text_of_first_choice() {
        let (base_url, hits) = test_server::spawn(
            "200 OK",
            r#"{"id":"chatcmpl-1","object":"chat.completion","created":1700000000,"model":"gpt-4o-mini",
               "choices":[{"index":0,"message":{"role":"assistant","content":"1:sun\n2:moon"},"finish_reason":"stop","logprobs":null}],
               "usage":{"prompt_tokens":10,"completion_tokens":5,"total_tokens":15}}"#,
        )
        .await;

        let text = adapter(&base_url).generate("prompt").await.unwrap();
        assert_eq!(text, "1:sun\n2:moon");
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn server_error_is_reported_once_without_retrying() {
        let (base_url, hits) = test_server::spawn(
            "500 Internal Server Error",
            r#"{"error":{"message":"upstream exploded","type":"server_error","param":null,"code":null}}"#,
        )
        .await;

        let result = tokio::time::timeout(Duration::from_secs(5), adapter(&base_url).generate("p"))
            .await
            .expect("adapter kept retrying");
        assert!(matches!(result, Err(PortError::Unexpected(_))));
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn rejected_key_is_unauthorized() {
        let (base_url, _) = test_server::spawn(
            "401 Unauthorized",
            r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error","param":null,"code":"invalid_api_key"}}"#,
        )
        .await;

        let err = adapter(&base_url).generate("p").await.unwrap_err();
        assert!(matches!(err, PortError::Unauthorized(_)));
    }

    #[tokio::test]
    async fn unreachable_host_is_unavailable() {
        let base_url = test_server::closed_address().await;
        let err = adapter(&base_url).generate("p").await.unwrap_err();
        assert!(matches!(err, PortError::Unavailable(_)));
    }
}
