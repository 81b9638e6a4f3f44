use std::sync::Arc;

use axum::{Json, extract::State};
use faq_core::QaEntry;

use crate::core::app_state::AppState;

/// Handler: GET /admin/static_qa: the whole corpus in order.
pub async fn static_qa_route(State(state): State<Arc<AppState>>) -> Json<Vec<QaEntry>> {
    Json(state.conversation.resolver().corpus().entries().to_vec())
}
