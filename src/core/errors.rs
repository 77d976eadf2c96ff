use thiserror::Error;

/// Error type for wallet session operations.
///
/// Every variant is recovered at the boundary of the operation that raised it
/// and surfaced to the host as a human-readable message; none of these are
/// fatal to the embedding application.
#[derive(Debug, Error)]
pub enum SessionError {
    /// No injected wallet provider was found in the host environment.
    #[error("wallet provider not found: install a browser wallet extension")]
    ProviderNotFound,

    /// The user (or provider) declined the interactive authorization request.
    #[error("wallet authorization rejected: {0}")]
    AuthorizationRejected(String),

    /// The provider refused to switch (or add) the requested chain.
    #[error("network switch failed: {0}")]
    NetworkSwitch(String),

    /// The balance query failed; the previous balance is kept.
    #[error("balance query failed: {0}")]
    BalanceQuery(String),

    /// An operation that requires an active session was called without one.
    #[error("wallet not connected")]
    NotConnected,

    /// The recipient does not satisfy the chain's address format.
    #[error("invalid recipient address: {0}")]
    InvalidAddress(String),

    /// The amount is non-numeric, negative, or otherwise unparseable.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The provider rejected the transfer submission.
    #[error("transfer submission failed: {0}")]
    Submission(String),

    /// Configuration loading/parsing errors.
    #[error("configuration error: {0}")]
    Config(String),
}

impl SessionError {
    /// Stable machine-readable code for host UIs that switch on error kind.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::ProviderNotFound => "provider_not_found",
            Self::AuthorizationRejected(_) => "authorization_rejected",
            Self::NetworkSwitch(_) => "network_switch_failed",
            Self::BalanceQuery(_) => "balance_query_failed",
            Self::NotConnected => "not_connected",
            Self::InvalidAddress(_) => "invalid_address",
            Self::InvalidAmount(_) => "invalid_amount",
            Self::Submission(_) => "submission_failed",
            Self::Config(_) => "config_error",
        }
    }
}
