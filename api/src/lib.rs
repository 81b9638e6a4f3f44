use std::{net::SocketAddr, sync::Arc};

pub mod core;
pub mod error_handler;
mod routes;

use axum::{
    Router,
    routing::{get, post},
};
use faq_core::FaqConfig;
use tokio::signal;
use tracing::{error, info};

use crate::{
    core::{app_config::ApiConfig, app_state::AppState},
    error_handler::AppError,
    routes::{
        admin::{admin_logs_route::admin_logs_route, static_qa_route::static_qa_route},
        chat::chat_route::chat_route,
    },
};

/// Reads configuration, builds the index, then serves until Ctrl+C.
pub async fn start() -> Result<(), AppError> {
    let api_cfg = ApiConfig::from_env();
    let faq_cfg = FaqConfig::from_env()?;

    // Index build happens here, before any request can arrive.
    let state = Arc::new(AppState::from_config(&api_cfg, &faq_cfg)?);

    let listener = tokio::net::TcpListener::bind(&api_cfg.address)
        .await
        .map_err(|source| AppError::Bind {
            address: api_cfg.address.clone(),
            source,
        })?;

    info!(target: "api::server", address = %api_cfg.address, "listening");

    axum::serve(
        listener,
        router(state).into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await
    .map_err(AppError::Server)?;

    info!(target: "api::server", "server stopped");
    Ok(())
}

/// All routes over the shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/chat", post(chat_route))
        .route("/admin/logs", get(admin_logs_route))
        .route("/admin/static_qa", get(static_qa_route))
        .fallback(not_found)
        .with_state(state)
}

async fn not_found() -> AppError {
    AppError::NotFound
}

/// Returns a future that resolves when Ctrl+C is pressed
async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        error!(target: "api::server", error = %e, "failed to listen for shutdown signal");
        // without a signal handler the server runs until killed
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        extract::ConnectInfo,
        http::{Request, StatusCode},
    };
    use chat_log::{InMemoryLogStore, JsonFileLogStore};
    use faq_core::{Conversation, ReplyResolver};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    use super::*;

    fn state_with(log: Arc<dyn chat_log::ChatLogStore>) -> Arc<AppState> {
        let resolver = Arc::new(ReplyResolver::from_config(&FaqConfig::default()).unwrap());
        Arc::new(AppState::new(Conversation::new(resolver, log)))
    }

    fn post_chat(body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/chat")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn json_body(res: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn chat_returns_reply_source_and_score() {
        let app = router(state_with(Arc::new(InMemoryLogStore::new())));
        let res = app
            .oneshot(post_chat(r#"{"text":"hi","session_id":"web-1"}"#))
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let v = json_body(res).await;
        assert_eq!(v["source"], "ai");
        assert_eq!(v["reply"], "Hello, I am Sidra. How can I help you?");
        assert_eq!(v["score"], 1.0);
    }

    #[tokio::test]
    async fn empty_text_is_an_error_reply_with_200() {
        let app = router(state_with(Arc::new(InMemoryLogStore::new())));
        let res = app.oneshot(post_chat(r#"{"text":"   "}"#)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(
            json_body(res).await,
            json!({"reply": "Please type a message.", "source": "error", "score": 0.0})
        );
    }

    #[tokio::test]
    async fn malformed_body_is_treated_as_empty() {
        let app = router(state_with(Arc::new(InMemoryLogStore::new())));
        let res = app.oneshot(post_chat("{oops")).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_eq!(json_body(res).await["source"], "error");
    }

    #[tokio::test]
    async fn session_defaults_to_peer_then_anonymous() {
        let log = Arc::new(InMemoryLogStore::new());
        let app = router(state_with(log.clone()));

        let mut req = post_chat(r#"{"text":"library"}"#);
        req.extensions_mut()
            .insert(ConnectInfo(SocketAddr::from(([10, 1, 2, 3], 5555))));
        app.clone().oneshot(req).await.unwrap();
        app.oneshot(post_chat(r#"{"text":"library"}"#)).await.unwrap();

        let sessions: Vec<String> = log.snapshot().into_iter().map(|e| e.session_id).collect();
        assert_eq!(sessions, vec!["10.1.2.3".to_string(), "anonymous".to_string()]);
    }

    #[tokio::test]
    async fn long_message_is_resolved_and_logged_verbatim() {
        let log = Arc::new(InMemoryLogStore::new());
        let app = router(state_with(log.clone()));

        let text = format!("hostel fees {}", "x".repeat(70_000));
        let body = json!({"text": &text, "session_id": "s"}).to_string();
        let res = app.oneshot(post_chat(&body)).await.unwrap();
        assert_eq!(res.status(), StatusCode::OK);
        assert_ne!(json_body(res).await["source"], "error");

        let logged = log.snapshot();
        assert_eq!(logged.len(), 1);
        assert_eq!(logged[0].query, text);
    }

    #[tokio::test]
    async fn unreadable_body_is_rejected_without_a_log_entry() {
        let log = Arc::new(InMemoryLogStore::new());
        let app = router(state_with(log.clone()));

        // over axum's default 2 MB body limit
        let text = "x".repeat(3 * 1024 * 1024);
        let body = json!({ "text": text }).to_string();
        let res = app.oneshot(post_chat(&body)).await.unwrap();
        assert_eq!(res.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(json_body(res).await["error"], "PAYLOAD_TOO_LARGE");
        assert!(log.snapshot().is_empty());
    }

    #[tokio::test]
    async fn mistyped_text_keeps_the_session_id() {
        let log = Arc::new(InMemoryLogStore::new());
        let app = router(state_with(log.clone()));

        let res = app
            .oneshot(post_chat(r#"{"text":123,"session_id":"s"}"#))
            .await
            .unwrap();
        assert_eq!(json_body(res).await["source"], "error");
        assert_eq!(log.snapshot()[0].session_id, "s");
    }

    #[tokio::test]
    async fn only_an_empty_session_id_counts_as_absent() {
        let log = Arc::new(InMemoryLogStore::new());
        let app = router(state_with(log.clone()));

        app.clone()
            .oneshot(post_chat(r#"{"text":"library","session_id":"  "}"#))
            .await
            .unwrap();
        app.oneshot(post_chat(r#"{"text":"library","session_id":""}"#))
            .await
            .unwrap();

        let sessions: Vec<String> = log.snapshot().into_iter().map(|e| e.session_id).collect();
        assert_eq!(sessions, vec!["  ".to_string(), "anonymous".to_string()]);
    }

    #[tokio::test]
    async fn admin_logs_are_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let log = Arc::new(JsonFileLogStore::new(dir.path().join("logs.json")));
        let app = router(state_with(log));

        for text in ["hi", "when will admissions close", "asdkjasd random gibberish"] {
            let body = json!({"text": text, "session_id": "s"}).to_string();
            app.clone().oneshot(post_chat(&body)).await.unwrap();
        }

        let res = app
            .oneshot(Request::get("/admin/logs").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let v = json_body(res).await;
        let sources: Vec<&str> = v
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["source"].as_str().unwrap())
            .collect();
        assert_eq!(sources, vec!["fallback", "rule", "ai"]);
        assert_eq!(v[2]["query"], "hi");
        assert_eq!(v[2]["session"], "s");
        assert!(v[2]["ts"].as_f64().unwrap() > 0.0);
    }

    #[tokio::test]
    async fn static_qa_lists_the_corpus_in_order() {
        let app = router(state_with(Arc::new(InMemoryLogStore::new())));
        let res = app
            .oneshot(Request::get("/admin/static_qa").body(Body::empty()).unwrap())
            .await
            .unwrap();
        let v = json_body(res).await;
        let rows = v.as_array().unwrap();
        assert_eq!(rows.len(), faq_core::Corpus::builtin().len());
        assert_eq!(rows[0], json!({"question": "hi", "answer": "Hello, I am Sidra. How can I help you?"}));
    }

    #[tokio::test]
    async fn unknown_route_is_404_json() {
        let app = router(state_with(Arc::new(InMemoryLogStore::new())));
        let res = app
            .oneshot(Request::get("/nope").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
        assert_eq!(json_body(res).await["error"], "NOT_FOUND");
    }
}
