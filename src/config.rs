/// Default backend origin for local development
pub const DEV_API_URL: &str = "http://127.0.0.1:8000";

/// Base path used when running behind the production reverse proxy
pub const PRODUCTION_API_BASE: &str = "/api";

/// Configuration for the JuriChat client, resolved once at startup and
/// passed down. The timeout/retry/limit fields mirror the deployment
/// configuration but are not enforced by the exchange (see DESIGN.md).
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend (`/api` behind the production proxy)
    pub api_base: String,
    /// Request timeout in milliseconds. Declared, not enforced.
    pub request_timeout_ms: u64,
    /// Maximum retry attempts. Declared, not enforced: exactly one attempt
    /// is made per accepted submission.
    pub max_retries: u32,
    /// Delay between retries in milliseconds. Declared, not enforced.
    pub retry_delay_ms: u64,
    /// Maximum accepted query length. Declared, not enforced.
    pub max_message_length: usize,
    /// History entries the backend keeps per session. Declared, not enforced.
    pub max_history_items: usize,
    /// Double-vector retrieval flag, fixed on
    pub use_two_vectors: bool,
    /// Whether the backend persists conversations to Cosmos DB.
    /// Informational on the client side.
    pub use_cosmos_db: bool,
}

impl ClientConfig {
    /// Resolve the backend base URL: the production proxy path wins, then
    /// an explicit override, then the local development default.
    pub fn resolve(production: bool, override_url: Option<String>, use_cosmos_db: bool) -> Self {
        let api_base = if production {
            PRODUCTION_API_BASE.to_string()
        } else if let Some(url) = override_url {
            url.trim_end_matches('/').to_string()
        } else {
            DEV_API_URL.to_string()
        };

        Self {
            api_base,
            request_timeout_ms: 60_000,
            max_retries: 3,
            retry_delay_ms: 1_000,
            max_message_length: 5_000,
            max_history_items: 50,
            use_two_vectors: true,
            use_cosmos_db,
        }
    }

    /// Full URL of the chat endpoint
    pub fn chat_endpoint(&self) -> String {
        format!("{}/chat", self.api_base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_uses_proxy_base() {
        let config = ClientConfig::resolve(true, Some("http://elsewhere:9999".to_string()), false);
        assert_eq!(config.api_base, "/api");
        assert_eq!(config.chat_endpoint(), "/api/chat");
    }

    #[test]
    fn override_beats_development_default() {
        let config = ClientConfig::resolve(false, Some("http://localhost:8001/".to_string()), false);
        assert_eq!(config.chat_endpoint(), "http://localhost:8001/chat");
    }

    #[test]
    fn development_default_when_nothing_set() {
        let config = ClientConfig::resolve(false, None, false);
        assert_eq!(config.chat_endpoint(), "http://127.0.0.1:8000/chat");
    }

    #[test]
    fn declared_limits_carry_deployment_values() {
        let config = ClientConfig::resolve(false, None, true);
        assert_eq!(config.request_timeout_ms, 60_000);
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_ms, 1_000);
        assert_eq!(config.max_message_length, 5_000);
        assert_eq!(config.max_history_items, 50);
        assert!(config.use_two_vectors);
        assert!(config.use_cosmos_db);
    }
}
