// src/feed/error.rs
use thiserror::Error;

use crate::core::NetError;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error(transparent)]
    Net(#[from] NetError),

    #[error("feed body does not contain a setResponse(...) envelope")]
    Envelope,

    #[error("feed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("feed has no table (status: {status})")]
    MissingTable { status: String },
}
