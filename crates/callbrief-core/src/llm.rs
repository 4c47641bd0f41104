//! Completion provider trait and test doubles.

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LlmError {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned HTTP {0}")]
    Status(u16),
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

/// A chat-completion provider that turns a prompt into summary text.
///
/// Errors propagate to the caller unchanged; there is no retry, streaming,
/// or caching at this layer.
pub trait CompletionProvider: Send + Sync {
    /// Submit `prompt` and return the first completion's message text,
    /// whitespace-trimmed.
    fn complete<'a>(
        &'a self,
        prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>>;
}

/// A configurable mock implementing [`CompletionProvider`] for tests.
///
/// Returns a fixed response (success or error) for every call and counts
/// calls so tests can assert whether the inference step was reached.
#[cfg(any(test, feature = "mock"))]
pub struct MockProvider {
    response: Result<String, String>,
    call_count: std::sync::atomic::AtomicUsize,
}

#[cfg(any(test, feature = "mock"))]
impl MockProvider {
    /// Create a mock that always succeeds with `text`.
    pub fn succeeding(text: &str) -> Self {
        Self {
            response: Ok(text.to_string()),
            call_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    /// Create a mock that always fails with a malformed-response error
    /// carrying `message`.
    pub fn failing(message: &str) -> Self {
        Self {
            response: Err(message.to_string()),
            call_count: std::sync::atomic::AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.call_count.load(std::sync::atomic::Ordering::SeqCst)
    }
}

#[cfg(any(test, feature = "mock"))]
impl CompletionProvider for MockProvider {
    fn complete<'a>(
        &'a self,
        _prompt: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<String, LlmError>> + Send + 'a>> {
        self.call_count
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        let response = self
            .response
            .clone()
            .map_err(LlmError::MalformedResponse);
        Box::pin(async move { response })
    }
}
