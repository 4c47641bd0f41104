use callbrief_core::{BackendError, PdfBackend};

/// [`PdfBackend`] implementation over the pure-Rust `pdf-extract` crate.
///
/// This crate isolates the extraction dependency so the rest of the
/// workspace only sees the bytes-to-text trait. `pdf-extract` joins page
/// text with newlines itself, which matches the backend contract.
#[derive(Debug, Default)]
pub struct PdfExtractBackend;

impl PdfExtractBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for PdfExtractBackend {
    fn extract_text(&self, data: &[u8]) -> Result<String, BackendError> {
        pdf_extract::extract_text_from_mem(data)
            .map_err(|e| BackendError::ExtractionError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garbage_bytes_error() {
        let backend = PdfExtractBackend::new();
        assert!(backend.extract_text(b"not a pdf at all").is_err());
    }

    #[test]
    fn test_empty_input_error() {
        let backend = PdfExtractBackend::new();
        assert!(backend.extract_text(&[]).is_err());
    }
}
