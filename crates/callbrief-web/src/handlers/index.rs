use axum::Json;

use crate::models::StatusResponse;

pub async fn index() -> Json<StatusResponse> {
    Json(StatusResponse {
        status: "Earnings Transcript Analyzer Running",
    })
}
