use serde::Serialize;

/// Body of one query exchange, POSTed to the backend `/chat` endpoint
#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest {
    pub query: String,
    pub use_two_vectors: bool,
    pub session_id: String,
}

impl QueryRequest {
    /// The double-vector retrieval flag is always sent as `true`; it is not
    /// user-configurable in this client.
    pub fn new(query: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            use_two_vectors: true,
            session_id: session_id.into(),
        }
    }
}
