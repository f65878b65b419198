use axum::{routing::get, Json, Router};

use crate::services::rest::payloads::greeting::GreetingPayload;

pub fn get_routes() -> Router {
    Router::new().route("/", get(root))
}

/// The payload is built fresh on every request, nothing is shared
/// between calls.
pub async fn root() -> Json<GreetingPayload> {
    Json(GreetingPayload {
        message: "Hello, FastAPI!".to_string(),
    })
}
