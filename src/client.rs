use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::{LlmSettings, SamplingSettings};

/// Seam between the orchestrator and the remote endpoint so plan generation
/// is testable with scripted replies.
#[async_trait]
pub trait ChatGateway: Send + Sync {
    /// Append `message` as a user turn after `history` and return the
    /// assistant's reply.
    async fn query(&self, message: &str, history: &[ChatMessage]) -> Result<ChatMessage>;
}

/// Client for an OpenAI-compatible chat-completion endpoint. The model id is
/// resolved once at construction by listing the endpoint's available models
/// and selecting the first.
#[derive(Debug, Clone)]
pub struct LlmClient {
    http: Client,
    base_url: String,
    api_key: String,
    user_agent: String,
    model: String,
    sampling: SamplingSettings,
}

impl LlmClient {
    pub async fn connect(llm: &LlmSettings, sampling: &SamplingSettings) -> Result<Self> {
        let base_url = format!("http://{}:{}/v1", llm.host, llm.port);
        Self::connect_with_base_url(llm, sampling, base_url).await
    }

    pub async fn connect_with_base_url(
        llm: &LlmSettings,
        sampling: &SamplingSettings,
        base_url: impl Into<String>,
    ) -> Result<Self> {
        let sanitized_base = base_url.into().trim_end_matches('/').to_string();
        if sanitized_base.is_empty() {
            return Err(anyhow!("Base URL cannot be empty"));
        }

        let timeout = Duration::from_secs(llm.timeout_secs);
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build HTTP client")?;

        let model = resolve_model(&http, &sanitized_base, &llm.api_key, &llm.user_agent).await?;

        Ok(Self {
            http,
            base_url: sanitized_base,
            api_key: llm.api_key.clone(),
            user_agent: llm.user_agent.clone(),
            model,
            sampling: *sampling,
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub async fn chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let url = format!("{}/chat/completions", self.base_url);

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.api_key)
            .header("User-Agent", &self.user_agent)
            .json(&request)
            .send()
            .await
            .context("Failed to send request to chat completions endpoint")?;

        match response.status() {
            reqwest::StatusCode::OK => response
                .json::<ChatCompletionResponse>()
                .await
                .context("Failed to parse chat completion response JSON"),
            reqwest::StatusCode::TOO_MANY_REQUESTS => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!(
                    "Too many requests. Please wait before trying again. (API response: {})",
                    error_text
                ))
            }
            reqwest::StatusCode::UNAUTHORIZED => Err(anyhow!(
                "Invalid API key. Please check your LLM_API_KEY configuration."
            )),
            reqwest::StatusCode::BAD_REQUEST => {
                let error_text = response.text().await.unwrap_or_default();
                Err(anyhow!("Invalid request: {}", error_text))
            }
            reqwest::StatusCode::INTERNAL_SERVER_ERROR
            | reqwest::StatusCode::SERVICE_UNAVAILABLE => Err(anyhow!(
                "Model endpoint is temporarily unavailable. Please try again later."
            )),
            status => {
                let error_text = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(anyhow!("API error (status {}): {}", status, error_text))
            }
        }
    }
}

#[async_trait]
impl ChatGateway for LlmClient {
    async fn query(&self, message: &str, history: &[ChatMessage]) -> Result<ChatMessage> {
        let mut messages = history.to_vec();
        messages.push(ChatMessage {
            role: ChatMessageRole::User,
            content: message.to_string(),
        });

        let response = self
            .chat_completion(ChatCompletionRequest {
                model: self.model.clone(),
                messages,
                temperature: Some(self.sampling.temperature),
                top_p: Some(self.sampling.top_p),
            })
            .await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("Endpoint returned no choices"))?;

        Ok(choice.message)
    }
}

async fn resolve_model(
    http: &Client,
    base_url: &str,
    api_key: &str,
    user_agent: &str,
) -> Result<String> {
    let url = format!("{base_url}/models");

    let response = http
        .get(url)
        .bearer_auth(api_key)
        .header("User-Agent", user_agent)
        .send()
        .await
        .context("Failed to list models from endpoint")?;

    if !response.status().is_success() {
        let status = response.status();
        let error_text = response.text().await.unwrap_or_default();
        return Err(anyhow!(
            "Model listing failed (status {}): {}",
            status,
            error_text
        ));
    }

    let listing = response
        .json::<ModelListResponse>()
        .await
        .context("Failed to parse model list JSON")?;

    listing
        .data
        .into_iter()
        .next()
        .map(|entry| entry.id)
        .ok_or_else(|| anyhow!("Endpoint reported no available models"))
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatMessageRole,
    pub content: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMessageRole {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatChoice {
    pub message: ChatMessage,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelListResponse {
    data: Vec<ModelEntry>,
}

#[derive(Debug, Deserialize)]
struct ModelEntry {
    id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::config::{LlmSettings, SamplingSettings};

    fn sample_llm_settings() -> LlmSettings {
        LlmSettings {
            host: "localhost".to_string(),
            port: 8000,
            api_key: "test-key".to_string(),
            timeout_secs: 30,
            user_agent: "advisor/test".to_string(),
        }
    }

    async fn mock_model_listing(server: &MockServer) -> httpmock::Mock<'_> {
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/v1/models")
                    .header("Authorization", "Bearer test-key");
                then.status(200).json_body(json!({
                    "object": "list",
                    "data": [
                        {"id": "local-llama-8b", "object": "model"},
                        {"id": "local-llama-70b", "object": "model"}
                    ]
                }));
            })
            .await
    }

    #[tokio::test]
    async fn connect_selects_first_available_model() {
        let server = MockServer::start_async().await;
        let models_mock = mock_model_listing(&server).await;

        let client = LlmClient::connect_with_base_url(
            &sample_llm_settings(),
            &SamplingSettings::default(),
            format!("{}/v1", server.base_url()),
        )
        .await
        .unwrap();

        assert_eq!(client.model(), "local-llama-8b");
        models_mock.assert_async().await;
    }

    #[tokio::test]
    async fn connect_fails_when_no_models_listed() {
        let server = MockServer::start_async().await;
        let _mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/v1/models");
                then.status(200)
                    .json_body(json!({"object": "list", "data": []}));
            })
            .await;

        let err = LlmClient::connect_with_base_url(
            &sample_llm_settings(),
            &SamplingSettings::default(),
            format!("{}/v1", server.base_url()),
        )
        .await
        .unwrap_err();

        assert!(err.to_string().contains("no available models"));
    }

    #[tokio::test]
    async fn query_sends_sampling_parameters_and_returns_reply() {
        let server = MockServer::start_async().await;
        let _models = mock_model_listing(&server).await;

        let completion_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .header("Authorization", "Bearer test-key")
                    .json_body(json!({
                        "model": "local-llama-8b",
                        "messages": [
                            {"role": "user", "content": "Assess this student."}
                        ],
                        "temperature": 0.6,
                        "top_p": 0.95
                    }));
                then.status(200).json_body(json!({
                    "choices": [
                        {
                            "index": 0,
                            "finish_reason": "stop",
                            "message": {"role": "assistant", "content": "The student knows Python."}
                        }
                    ]
                }));
            })
            .await;

        let client = LlmClient::connect_with_base_url(
            &sample_llm_settings(),
            &SamplingSettings::default(),
            format!("{}/v1", server.base_url()),
        )
        .await
        .unwrap();

        let reply = client.query("Assess this student.", &[]).await.unwrap();
        assert_eq!(reply.role, ChatMessageRole::Assistant);
        assert_eq!(reply.content, "The student knows Python.");
        completion_mock.assert_async().await;
    }

    #[tokio::test]
    async fn query_prepends_history_turns() {
        let server = MockServer::start_async().await;
        let _models = mock_model_listing(&server).await;

        let completion_mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/v1/chat/completions")
                    .json_body_partial(
                        r#"{
                            "messages": [
                                {"role": "user", "content": "Earlier question"},
                                {"role": "assistant", "content": "Earlier answer"},
                                {"role": "user", "content": "Follow-up"}
                            ]
                        }"#,
                    );
                then.status(200).json_body(json!({
                    "choices": [
                        {
                            "index": 0,
                            "finish_reason": "stop",
                            "message": {"role": "assistant", "content": "Noted."}
                        }
                    ]
                }));
            })
            .await;

        let client = LlmClient::connect_with_base_url(
            &sample_llm_settings(),
            &SamplingSettings::default(),
            format!("{}/v1", server.base_url()),
        )
        .await
        .unwrap();

        let history = vec![
            ChatMessage {
                role: ChatMessageRole::User,
                content: "Earlier question".to_string(),
            },
            ChatMessage {
                role: ChatMessageRole::Assistant,
                content: "Earlier answer".to_string(),
            },
        ];

        let reply = client.query("Follow-up", &history).await.unwrap();
        assert_eq!(reply.content, "Noted.");
        completion_mock.assert_async().await;
    }

    #[tokio::test]
    async fn query_maps_unauthorized_to_actionable_error() {
        let server = MockServer::start_async().await;
        let _models = mock_model_listing(&server).await;

        let _completion = server
            .mock_async(|when, then| {
                when.method(POST).path("/v1/chat/completions");
                then.status(401)
                    .header("Content-Type", "application/json")
                    .body(r#"{"error":"invalid_api_key"}"#);
            })
            .await;

        let client = LlmClient::connect_with_base_url(
            &sample_llm_settings(),
            &SamplingSettings::default(),
            format!("{}/v1", server.base_url()),
        )
        .await
        .unwrap();

        let err = client.query("hello", &[]).await.unwrap_err();
        assert!(err.to_string().contains("Invalid API key"));
    }
}
