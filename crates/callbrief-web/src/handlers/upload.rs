use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use callbrief_core::{build_summary_prompt, looks_like_transcript, truncate_transcript};

use crate::models::{AnalysisResponse, ErrorResponse};
use crate::state::AppState;
use crate::upload::{parse_multipart, UploadedFile};

const NOT_A_TRANSCRIPT: &str = "Document does not appear to be an earnings call transcript.";

/// Outcome of the analysis pipeline. Both variants serialize to HTTP 200;
/// clients distinguish them by body keys (`error` vs `filename`/`analysis`).
pub enum UploadOutcome {
    Analysis(AnalysisResponse),
    Error(ErrorResponse),
}

impl IntoResponse for UploadOutcome {
    fn into_response(self) -> Response {
        match self {
            UploadOutcome::Analysis(body) => Json(body).into_response(),
            UploadOutcome::Error(body) => Json(body).into_response(),
        }
    }
}

pub async fn upload(State(state): State<Arc<AppState>>, multipart: Multipart) -> Response {
    let file = match parse_multipart(multipart).await {
        Ok(file) => file,
        Err(message) => {
            return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(message))).into_response();
        }
    };

    analyze_upload(&state, file).await.into_response()
}

/// Run the upload pipeline: content-type check, extraction, truncation,
/// classification, summarization. Straight-line with four early exits,
/// each terminal for the request.
pub async fn analyze_upload(state: &AppState, file: UploadedFile) -> UploadOutcome {
    if file.content_type.as_deref() != Some("application/pdf") {
        return UploadOutcome::Error(ErrorResponse::new("Only PDF files are supported"));
    }

    // Extraction is CPU-bound; keep it off the async executor.
    let backend = Arc::clone(&state.pdf_backend);
    let data = file.data;
    let extracted = match tokio::task::spawn_blocking(move || backend.extract_text(&data)).await {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            tracing::warn!(filename = %file.filename, error = %e, "PDF extraction failed");
            return UploadOutcome::Error(ErrorResponse::new(format!(
                "PDF extraction failed: {}",
                e
            )));
        }
        Err(e) => {
            tracing::warn!(filename = %file.filename, error = %e, "extraction task panicked");
            return UploadOutcome::Error(ErrorResponse::new(format!(
                "PDF extraction failed: {}",
                e
            )));
        }
    };

    if extracted.trim().is_empty() {
        return UploadOutcome::Error(ErrorResponse::new(
            "Could not extract text. Ensure PDF contains selectable text.",
        ));
    }

    let transcript = truncate_transcript(&extracted, state.config.max_transcript_chars);

    if !looks_like_transcript(transcript) {
        tracing::info!(filename = %file.filename, "document rejected by transcript gate");
        return UploadOutcome::Analysis(AnalysisResponse {
            filename: file.filename,
            analysis: NOT_A_TRANSCRIPT.to_string(),
        });
    }

    let prompt = build_summary_prompt(transcript);
    let summary = match state.provider.complete(&prompt).await {
        Ok(summary) => summary,
        Err(e) => {
            tracing::warn!(filename = %file.filename, error = %e, "inference call failed");
            return UploadOutcome::Error(ErrorResponse::new(format!(
                "AI processing failed: {}",
                e
            )));
        }
    };

    tracing::info!(filename = %file.filename, "analysis complete");
    UploadOutcome::Analysis(AnalysisResponse {
        filename: file.filename,
        analysis: summary,
    })
}
