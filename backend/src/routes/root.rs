use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct WelcomeResponse {
    message: String,
}

/// Welcome endpoint
///
/// Static response, performs no storage access.
#[allow(clippy::unused_async)]
pub async fn handler() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the aioboto3 FastAPI app!".to_string(),
    })
}
