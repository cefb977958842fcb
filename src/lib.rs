//! JuriChat Application Library
//!
//! Terminal client for the CGR dictámenes assistant. Owns the persisted
//! session identifier, the append-only conversation log and the
//! single-flight query exchange against the answering backend.

pub mod api;
pub mod app;
pub mod chat;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;

// Re-exports from local modules
pub use api::{ExchangeError, HttpQueryBackend, QueryBackend};
pub use chat::{ClockIdSource, ExchangeState, IdSource, SessionStore, ERROR_REPLY};
pub use cli::Cli;
pub use config::ClientConfig;
pub use logging::ConversationLogger;
pub use models::{Message, QueryRequest, QueryResponse, Role, Source};

/// Main JuriChat application struct
pub struct JuriChat {
    pub config: ClientConfig,
    pub session_id: String,
    pub backend: Box<dyn QueryBackend>,
    pub messages: Vec<Message>,
    pub state: ExchangeState,
    pub logger: Option<ConversationLogger>,
    pub verbose: bool,
}

impl JuriChat {
    pub fn new(config: ClientConfig, session_id: String, backend: Box<dyn QueryBackend>) -> Self {
        Self {
            config,
            session_id,
            backend,
            messages: Vec::new(),
            state: ExchangeState::Idle,
            logger: None,
            verbose: false,
        }
    }

    /// Submit one user query. Returns the assistant reply that was appended
    /// once the exchange settled, or `None` when the submission was dropped
    /// (blank input, or an exchange already pending).
    pub async fn send_query(&mut self, text: &str) -> Option<&Message> {
        chat::exchange::send_query(self, text).await
    }

    /// Most recent assistant message, if any
    pub fn last_assistant(&self) -> Option<&Message> {
        self.messages.iter().rev().find(|m| m.role == Role::Assistant)
    }
}
