use std::sync::Arc;

use crate::provider::traits::WalletProvider;

/// Looks up the wallet provider available in the host environment.
///
/// The explicit-injection counterpart of an ambient `window.ethereum` probe:
/// the host constructs a detector once and hands it to
/// [`ConnectionController::initialize`](crate::ConnectionController::initialize).
pub trait ProviderDetector: Send + Sync {
    fn detect(&self) -> Option<Arc<dyn WalletProvider>>;
}

/// A detector over a provider handle the host already holds (or knows is
/// missing).
pub struct InjectedProvider(Option<Arc<dyn WalletProvider>>);

impl InjectedProvider {
    pub fn present(provider: Arc<dyn WalletProvider>) -> Self {
        Self(Some(provider))
    }

    pub fn absent() -> Self {
        Self(None)
    }
}

impl ProviderDetector for InjectedProvider {
    fn detect(&self) -> Option<Arc<dyn WalletProvider>> {
        self.0.clone()
    }
}
