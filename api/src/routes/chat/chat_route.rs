//! POST /chat: resolves one message against the FAQ table.

use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json,
    body::Bytes,
    extract::{ConnectInfo, FromRequest, Request, State},
};
use faq_core::ANONYMOUS_SESSION;
use tracing::{debug, warn};

use crate::{
    core::app_state::AppState,
    error_handler::AppError,
    routes::chat::chat_request::{ChatRequest, ChatResponse},
};

/// Handler: POST /chat
///
/// A missing or malformed body behaves like `{}` and yields the
/// "Please type a message." reply rather than an HTTP error. A body that
/// cannot be read at all (e.g. over axum's body limit) is rejected with the
/// rejection's status, and nothing is logged.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:5000/chat \
///   -H 'content-type: application/json' \
///   -d '{"text":"hostel fees","session_id":"web-42"}'
/// ```
pub async fn chat_route(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> Result<Json<ChatResponse>, AppError> {
    let request_id = request
        .headers()
        .get("X-Request-Id")
        .and_then(|h| h.to_str().ok())
        .unwrap_or("-")
        .to_string();
    let peer = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    let bytes = Bytes::from_request(request, &state).await.map_err(|e| {
        warn!(target: "api::chat", request_id = %request_id, error = %e, "failed to read chat body");
        AppError::Body(e)
    })?;
    let body = ChatRequest::from_slice(&bytes);

    let session_id = body
        .session_id
        .filter(|s| !s.is_empty())
        .or(peer)
        .unwrap_or_else(|| ANONYMOUS_SESSION.to_string());
    let text = body.text.unwrap_or_default();

    let result = state.conversation.reply(&session_id, &text).await;

    debug!(
        target: "api::chat",
        request_id = %request_id,
        session = %session_id,
        source = result.source.as_str(),
        score = result.score,
        "chat resolved"
    );

    Ok(Json(result.into()))
}
