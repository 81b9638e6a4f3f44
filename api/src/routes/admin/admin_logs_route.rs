use std::sync::Arc;

use axum::{Json, extract::State};
use chat_log::LogEntry;

use crate::core::app_state::AppState;

/// Most entries the admin view returns.
pub const ADMIN_LOG_LIMIT: usize = 500;

/// Handler: GET /admin/logs: newest first, storage problems read as empty.
pub async fn admin_logs_route(State(state): State<Arc<AppState>>) -> Json<Vec<LogEntry>> {
    Json(state.conversation.log().recent(ADMIN_LOG_LIMIT).await)
}
