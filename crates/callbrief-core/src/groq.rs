//! Groq chat-completion client (OpenAI-compatible API).

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::AnalyzerConfig;
use crate::llm::{CompletionProvider, LlmError};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

pub struct GroqClient {
    http: reqwest::Client,
    api_key: String,
    api_base: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl GroqClient {
    pub fn new(api_key: String, config: &AnalyzerConfig) -> Result<Self, LlmError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            api_key,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    fn request_url(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    async fn complete_inner(&self, prompt: &str) -> Result<String, LlmError> {
        let body = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        let resp = self
            .http
            .post(self.request_url())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(LlmError::Status(status.as_u16()));
        }

        let payload: ChatCompletionResponse = resp.json().await?;
        extract_completion_text(payload)
    }
}

impl CompletionProvider for GroqClient {
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        Box::pin(self.complete_inner(prompt))
    }
}

/// Pull the first choice's message content out of a completion response.
fn extract_completion_text(payload: ChatCompletionResponse) -> Result<String, LlmError> {
    let text = payload
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse("no choices in response".into()))?
        .message
        .content;

    Ok(text.trim().to_string())
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageResponse,
}

#[derive(Debug, Deserialize)]
struct ChatMessageResponse {
    content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_first_choice_trimmed() {
        let payload: ChatCompletionResponse = serde_json::from_str(
            r#"{
                "choices": [
                    {"message": {"role": "assistant", "content": "  EARNINGS CALL SUMMARY\n...\n  "}},
                    {"message": {"role": "assistant", "content": "second choice"}}
                ]
            }"#,
        )
        .unwrap();
        let text = extract_completion_text(payload).unwrap();
        assert_eq!(text, "EARNINGS CALL SUMMARY\n...");
    }

    #[test]
    fn test_empty_choices_is_malformed() {
        let payload: ChatCompletionResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        let err = extract_completion_text(payload).unwrap_err();
        assert!(matches!(err, LlmError::MalformedResponse(_)));
    }

    #[test]
    fn test_request_serialization() {
        let body = ChatCompletionRequest {
            model: "llama-3.1-8b-instant",
            messages: vec![ChatMessage {
                role: "user",
                content: "hi",
            }],
            temperature: 0.1,
            max_tokens: 1500,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "llama-3.1-8b-instant");
        assert_eq!(json["messages"][0]["role"], "user");
        assert_eq!(json["max_tokens"], 1500);
    }
}
