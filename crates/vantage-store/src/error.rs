use thiserror::Error;

use vantage_client::ApiError;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Passed through verbatim so subscribers see the client's uniform
    /// "`<path>` failed: `<status>`" message.
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("snapshot io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("chat not found: {0}")]
    ChatNotFound(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
