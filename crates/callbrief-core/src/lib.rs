pub mod backend;
pub mod classifier;
pub mod config;
pub mod groq;
pub mod llm;
pub mod prompt;
pub mod text;

// Re-export for convenience
pub use backend::{BackendError, PdfBackend};
pub use classifier::looks_like_transcript;
pub use config::AnalyzerConfig;
pub use groq::GroqClient;
pub use llm::{CompletionProvider, LlmError};
pub use prompt::build_summary_prompt;
pub use text::{truncate_transcript, MAX_TRANSCRIPT_CHARS};
