use std::sync::Arc;

use callbrief_core::{AnalyzerConfig, CompletionProvider, PdfBackend};

/// Shared application state accessible from all handlers.
///
/// Constructed once in `main` and immutable thereafter; the provider and
/// backend are injected so tests can substitute doubles.
pub struct AppState {
    pub config: AnalyzerConfig,
    pub provider: Arc<dyn CompletionProvider>,
    pub pdf_backend: Arc<dyn PdfBackend>,
}
