use std::path::PathBuf;

/// Listener and storage settings for the HTTP layer.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// `host:port` to bind, e.g. "0.0.0.0:5000".
    pub address: String,
    /// JSON file holding the conversation log.
    pub logs_path: PathBuf,
}

impl ApiConfig {
    /// Load from `API_ADDRESS` and `CHAT_LOGS_PATH`, both optional.
    pub fn from_env() -> Self {
        Self {
            address: std::env::var("API_ADDRESS").unwrap_or_else(|_| "0.0.0.0:5000".into()),
            logs_path: std::env::var("CHAT_LOGS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("logs.json")),
        }
    }
}
