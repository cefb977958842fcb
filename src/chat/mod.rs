// Chat module - session identity, exchange state and the query exchange
pub mod exchange;
pub mod session;
pub mod state;

// Re-export commonly used items
pub use exchange::ERROR_REPLY;
pub use session::{ClockIdSource, IdSource, SessionStore};
pub use state::ExchangeState;
