use thiserror::Error;

#[derive(Error, Debug)]
pub enum InsightsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown intent type: {0}")]
    UnknownIntentType(String),

    #[error("Invalid intent params for {kind}: {message}")]
    InvalidIntent { kind: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Query cancelled")]
    Cancelled,
}

impl InsightsError {
    /// 将 std::io::Error 按错误类型归类，附带出错路径
    pub fn from_io(err: std::io::Error, path: &str) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => InsightsError::PermissionDenied(path.to_string()),
            std::io::ErrorKind::NotFound => InsightsError::NotFound(path.to_string()),
            _ => InsightsError::Io(err),
        }
    }
}
