// API module - backend seam for the query exchange
pub mod client;

pub use client::HttpQueryBackend;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{QueryRequest, QueryResponse};

/// Everything that can fail during one exchange. Every variant collapses
/// into the same fixed user-facing reply at the exchange boundary; the
/// distinction only exists for diagnostics.
#[derive(Debug, Error)]
pub enum ExchangeError {
    #[error("backend returned HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

/// One request/response round trip against the answering backend
#[async_trait]
pub trait QueryBackend: Send + Sync {
    async fn query(&self, request: &QueryRequest) -> Result<QueryResponse, ExchangeError>;
}
