use serde::Deserialize;

use super::types::Source;

/// Successful reply from the backend `/chat` endpoint. The backend also
/// echoes the session id and the accumulated history; only the fields this
/// client consumes are deserialized and the rest are ignored.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub response: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub session_id: Option<String>,
}
