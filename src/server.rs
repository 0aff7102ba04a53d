//! HTTP boundary for the chat service.
//!
//! One route, `POST /api/chat`, always answering 200 with a textual response;
//! the orchestrator maps every failure to a fixed message. CORS is left open
//! so the demo UI can run on a different port.

use crate::chat::ChatService;
use crate::models::{ChatRequest, ChatResponse};
use axum::{extract::State, routing::post, Json, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub fn router(service: Arc<ChatService>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/chat", post(send_message))
        .with_state(service)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn send_message(
    State(service): State<Arc<ChatService>>,
    Json(request): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = service.respond(&request.message).await;
    Json(ChatResponse { response })
}
