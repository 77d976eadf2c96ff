use std::sync::Arc;

use parking_lot::{Mutex, RwLock};
use tracing::{debug, info, warn};

use crate::core::chain::ChainDescriptor;
use crate::core::config::SessionConfig;
use crate::core::errors::SessionError;
use crate::provider::detect::ProviderDetector;
use crate::provider::error::ProviderError;
use crate::provider::traits::WalletProvider;
use crate::session::store::SessionStore;

type ReloadHook = Box<dyn Fn(&str) + Send + Sync>;

/// Orchestrates connect, network-switch and disconnect flows against the
/// wallet provider, writing every outcome into the [`SessionStore`].
///
/// Constructed once per application instance and passed by reference to
/// consumers; there is no ambient global lookup. The `busy` flag it maintains
/// is a best-effort UI guard, not a lock — provider notifications may
/// interleave with any in-flight operation.
pub struct ConnectionController {
    store: Arc<SessionStore>,
    config: SessionConfig,
    provider: RwLock<Option<Arc<dyn WalletProvider>>>,
    reload_hook: Mutex<Option<ReloadHook>>,
}

impl ConnectionController {
    pub fn new(store: Arc<SessionStore>, config: SessionConfig) -> Self {
        Self {
            store,
            config,
            provider: RwLock::new(None),
            reload_hook: Mutex::new(None),
        }
    }

    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Registers the host callback invoked when the provider reports a chain
    /// change. The host is expected to tear down and rebuild its
    /// chain-dependent context; no partial reconciliation happens here.
    pub fn on_reload(&self, hook: impl Fn(&str) + Send + Sync + 'static) {
        *self.reload_hook.lock() = Some(Box::new(hook));
    }

    pub(crate) fn provider(&self) -> Result<Arc<dyn WalletProvider>, SessionError> {
        self.provider.read().clone().ok_or(SessionError::ProviderNotFound)
    }

    /// Detects the provider and seeds the session.
    ///
    /// A missing provider is not a failure of this call: it records a
    /// [`SessionError::ProviderNotFound`] message and leaves the session
    /// disconnected. With a provider present, any already-authorized account
    /// is adopted without prompting the user, and its balance refreshed.
    pub async fn initialize(&self, detector: &dyn ProviderDetector) {
        let Some(provider) = detector.detect() else {
            let err = SessionError::ProviderNotFound;
            warn!("{}", err);
            self.store.set_error(&err);
            return;
        };
        *self.provider.write() = Some(provider.clone());

        match provider.chain_id().await {
            Ok(chain_id) => {
                debug!(chain_id = %chain_id, "provider detected");
                self.store.set_chain_id(&chain_id);
            }
            Err(e) => warn!("failed to query chain id: {}", e),
        }

        match provider.accounts().await {
            Ok(accounts) => {
                if let Some(address) = accounts.first().filter(|a| !a.is_empty()) {
                    info!(address = %address, "restored authorized account");
                    self.store.set_connected(address);
                    self.refresh_balance(address).await;
                } else {
                    debug!("no authorized accounts");
                }
            }
            Err(e) => {
                warn!("failed to query authorized accounts: {}", e);
                self.store.set_error(&format!("failed to initialize wallet session: {}", e));
            }
        }
    }

    /// Requests interactive authorization and establishes the session.
    ///
    /// On success the provider is steered to the configured target chain if
    /// it reports a different one, and the balance is refreshed. On failure
    /// the error is recorded as `last_error` and the connection state is left
    /// unchanged. `busy` is reset on every exit path.
    pub async fn connect(&self) -> Result<(), SessionError> {
        self.store.set_busy(true);
        self.store.clear_error();
        let result = self.connect_inner().await;
        if let Err(ref e) = result {
            warn!("connect failed: {}", e);
            self.store.set_error(e);
        }
        self.store.set_busy(false);
        result
    }

    async fn connect_inner(&self) -> Result<(), SessionError> {
        let provider = self.provider()?;

        let accounts = provider
            .request_accounts()
            .await
            .map_err(|e| SessionError::AuthorizationRejected(e.to_string()))?;

        let Some(address) = accounts.first().filter(|a| !a.is_empty()).cloned() else {
            debug!("authorization returned no accounts");
            return Ok(());
        };
        info!(address = %address, "wallet connected");
        self.store.set_connected(&address);

        match provider.chain_id().await {
            Ok(current) => {
                self.store.set_chain_id(&current);
                if !self.config.target_chain.matches_id(&current) {
                    debug!(current = %current, target = %self.config.target_chain.chain_id,
                        "provider on a different chain");
                    // A failed switch is surfaced via last_error but does not
                    // undo the connection.
                    let _ = self.switch_to_chain(&self.config.target_chain).await;
                }
            }
            Err(e) => warn!("failed to query chain id: {}", e),
        }

        self.refresh_balance(&address).await;
        Ok(())
    }

    /// Asks the provider to switch its active chain, falling back to a single
    /// add-chain request when the chain is unknown to the wallet. Any other
    /// failure is recorded as `last_error` and the switch is abandoned; no
    /// retry is attempted.
    pub async fn switch_to_chain(&self, descriptor: &ChainDescriptor) -> Result<(), SessionError> {
        let provider = self.provider()?;
        info!(chain = %descriptor.chain_name, chain_id = %descriptor.chain_id, "switching chain");

        match provider.switch_chain(&descriptor.chain_id).await {
            Ok(()) => {
                self.store.set_chain_id(&descriptor.chain_id);
                Ok(())
            }
            Err(e) if e.is_unrecognized_chain() => {
                info!("chain unknown to wallet, requesting add");
                match provider.add_chain(descriptor).await {
                    Ok(()) => {
                        self.store.set_chain_id(&descriptor.chain_id);
                        Ok(())
                    }
                    Err(e) => self.abandon_switch(e),
                }
            }
            Err(e) => self.abandon_switch(e),
        }
    }

    fn abandon_switch(&self, cause: ProviderError) -> Result<(), SessionError> {
        let err = SessionError::NetworkSwitch(cause.to_string());
        warn!("{}", err);
        self.store.set_error(&err);
        Err(err)
    }

    /// Resets the session to its disconnected state. The provider handle is
    /// kept so a later `connect` can re-authorize without re-detection.
    pub fn disconnect(&self) {
        info!("wallet disconnected");
        self.store.reset_disconnected();
    }

    /// Handles an external `accountsChanged` notification. Fires at any time,
    /// including mid-operation, and makes no assumption about `busy`.
    ///
    /// An empty list, or a blank first entry, is treated as revocation so the
    /// session never holds `connected` with an empty address.
    pub async fn on_accounts_changed(&self, accounts: Vec<String>) {
        match accounts.first().filter(|a| !a.is_empty()) {
            None => {
                debug!("accounts revoked by provider");
                self.disconnect();
            }
            Some(address) => {
                debug!(address = %address, "active account changed");
                self.store.set_address(address);
                self.refresh_balance(address).await;
            }
        }
    }

    /// Handles an external `chainChanged` notification by asking the host to
    /// rebuild its context. Chain-dependent session state is deliberately not
    /// reconciled piecemeal.
    pub fn on_chain_changed(&self, chain_id: &str) {
        info!(chain_id = %chain_id, "chain changed, requesting host reload");
        if let Some(hook) = self.reload_hook.lock().as_ref() {
            hook(chain_id);
        }
    }
}
