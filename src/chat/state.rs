/// Single-flight gate for the query exchange. At most one exchange may be
/// outstanding; a submission while `Pending` is dropped, not queued.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExchangeState {
    #[default]
    Idle,
    Pending,
}

impl ExchangeState {
    /// Attempt the `Idle -> Pending` transition. Returns `false` when an
    /// exchange is already outstanding.
    pub fn begin(&mut self) -> bool {
        match self {
            ExchangeState::Idle => {
                *self = ExchangeState::Pending;
                true
            }
            ExchangeState::Pending => false,
        }
    }

    /// `Pending -> Idle`, unconditionally. Called once the exchange
    /// settles, whatever the outcome, so the client can never stay stuck
    /// pending after a settled exchange.
    pub fn settle(&mut self) {
        *self = ExchangeState::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ExchangeState::Pending)
    }
}
