use async_trait::async_trait;
use ethers::types::U256;

use crate::core::chain::ChainDescriptor;
use crate::provider::error::ProviderError;

/// Defines the interface to the external wallet provider.
///
/// Implementations wrap whatever the host environment injects (a browser
/// extension bridge, a remote signer, a test double). Every method suspends
/// the caller until the provider answers; once issued, a call runs to
/// completion or failure — there is no cancellation and no internal timeout.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// The provider's active chain id as a 0x-prefixed hex string
    /// (`eth_chainId`).
    async fn chain_id(&self) -> Result<String, ProviderError>;

    /// Accounts already authorized for this application, without prompting
    /// the user (`eth_accounts`).
    async fn accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Prompts the user to authorize account access
    /// (`eth_requestAccounts`).
    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError>;

    /// Asks the wallet to switch its active chain
    /// (`wallet_switchEthereumChain`).
    async fn switch_chain(&self, chain_id: &str) -> Result<(), ProviderError>;

    /// Asks the wallet to add a chain it does not know yet
    /// (`wallet_addEthereumChain`).
    async fn add_chain(&self, descriptor: &ChainDescriptor) -> Result<(), ProviderError>;

    /// Raw balance of `address` in the chain's smallest unit.
    async fn get_balance(&self, address: &str) -> Result<U256, ProviderError>;

    /// Submits a value transfer and resolves with the transaction id once the
    /// provider acknowledges submission. Acknowledgment is not confirmation.
    async fn send_transfer(
        &self,
        from: &str,
        to: &str,
        value: U256,
    ) -> Result<String, ProviderError>;
}
