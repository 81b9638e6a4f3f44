use std::sync::Arc;

use chat_log::JsonFileLogStore;
use faq_core::{Conversation, FaqConfig, FaqError, ReplyResolver};
use tracing::info;

use crate::core::app_config::ApiConfig;

/// Shared state for all HTTP handlers.
///
/// The resolver inside is built once before the listener starts and never
/// mutated; only the log sink sees writes.
#[derive(Clone)]
pub struct AppState {
    pub conversation: Conversation,
}

impl AppState {
    pub fn new(conversation: Conversation) -> Self {
        Self { conversation }
    }

    /// Builds the index and opens the JSON log store.
    pub fn from_config(api: &ApiConfig, faq: &FaqConfig) -> Result<Self, FaqError> {
        let resolver = Arc::new(ReplyResolver::from_config(faq)?);
        let log = Arc::new(JsonFileLogStore::new(api.logs_path.clone()));

        info!(
            target: "api::state",
            logs = %api.logs_path.display(),
            threshold = faq.match_threshold,
            questions = resolver.corpus().len(),
            "chat state ready"
        );

        Ok(Self::new(Conversation::new(resolver, log)))
    }
}
