use thiserror::Error;

/// An error returned by the wallet provider.
///
/// Carries the provider's numeric error code alongside the message so callers
/// can branch on well-known codes (EIP-1193 / EIP-1474 conventions).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("provider error {code}: {message}")]
pub struct ProviderError {
    pub code: i64,
    pub message: String,
}

impl ProviderError {
    /// The user rejected the request (EIP-1193).
    pub const USER_REJECTED: i64 = 4001;
    /// The requested chain is not known to the wallet (EIP-3085/3326).
    pub const UNRECOGNIZED_CHAIN: i64 = 4902;

    pub fn new(code: i64, message: impl Into<String>) -> Self {
        Self { code, message: message.into() }
    }

    pub fn user_rejected(message: impl Into<String>) -> Self {
        Self::new(Self::USER_REJECTED, message)
    }

    pub fn unrecognized_chain(message: impl Into<String>) -> Self {
        Self::new(Self::UNRECOGNIZED_CHAIN, message)
    }

    pub fn is_user_rejected(&self) -> bool {
        self.code == Self::USER_REJECTED
    }

    pub fn is_unrecognized_chain(&self) -> bool {
        self.code == Self::UNRECOGNIZED_CHAIN
    }
}
