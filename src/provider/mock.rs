//! Scripted wallet provider for tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use ethers::types::U256;
use parking_lot::Mutex;

use crate::core::chain::ChainDescriptor;
use crate::provider::error::ProviderError;
use crate::provider::traits::WalletProvider;

/// A provider call observed by [`MockWalletProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    ChainId,
    Accounts,
    RequestAccounts,
    SwitchChain(String),
    AddChain(ChainDescriptor),
    GetBalance(String),
    SendTransfer { from: String, to: String, value: U256 },
}

/// Wallet provider double with per-method response queues and a call log.
///
/// Each call pops the next scripted response for its method; an unscripted
/// call fails with a distinctive error rather than panicking, so tests can
/// also assert that a code path issued no provider call at all.
#[derive(Default)]
pub struct MockWalletProvider {
    calls: Mutex<Vec<MockCall>>,
    chain_ids: Mutex<VecDeque<Result<String, ProviderError>>>,
    accounts: Mutex<VecDeque<Result<Vec<String>, ProviderError>>>,
    requested_accounts: Mutex<VecDeque<Result<Vec<String>, ProviderError>>>,
    switch_results: Mutex<VecDeque<Result<(), ProviderError>>>,
    add_results: Mutex<VecDeque<Result<(), ProviderError>>>,
    balances: Mutex<VecDeque<Result<U256, ProviderError>>>,
    transfers: Mutex<VecDeque<Result<String, ProviderError>>>,
}

impl MockWalletProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_chain_id(&self, id: &str) {
        self.chain_ids.lock().push_back(Ok(id.to_string()));
    }

    pub fn push_accounts(&self, accounts: Vec<&str>) {
        self.accounts.lock().push_back(Ok(accounts.into_iter().map(String::from).collect()));
    }

    pub fn push_accounts_err(&self, err: ProviderError) {
        self.accounts.lock().push_back(Err(err));
    }

    pub fn push_request_accounts(&self, accounts: Vec<&str>) {
        self.requested_accounts
            .lock()
            .push_back(Ok(accounts.into_iter().map(String::from).collect()));
    }

    pub fn push_request_accounts_err(&self, err: ProviderError) {
        self.requested_accounts.lock().push_back(Err(err));
    }

    pub fn push_switch_ok(&self) {
        self.switch_results.lock().push_back(Ok(()));
    }

    pub fn push_switch_err(&self, err: ProviderError) {
        self.switch_results.lock().push_back(Err(err));
    }

    pub fn push_add_ok(&self) {
        self.add_results.lock().push_back(Ok(()));
    }

    pub fn push_add_err(&self, err: ProviderError) {
        self.add_results.lock().push_back(Err(err));
    }

    pub fn push_balance(&self, raw: U256) {
        self.balances.lock().push_back(Ok(raw));
    }

    pub fn push_balance_err(&self, err: ProviderError) {
        self.balances.lock().push_back(Err(err));
    }

    pub fn push_transfer(&self, tx_id: &str) {
        self.transfers.lock().push_back(Ok(tx_id.to_string()));
    }

    pub fn push_transfer_err(&self, err: ProviderError) {
        self.transfers.lock().push_back(Err(err));
    }

    /// Every call issued against this provider, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, matches: impl Fn(&MockCall) -> bool) -> usize {
        self.calls.lock().iter().filter(|c| matches(c)).count()
    }

    fn record(&self, call: MockCall) {
        self.calls.lock().push(call);
    }

    fn pop<T>(queue: &Mutex<VecDeque<Result<T, ProviderError>>>) -> Result<T, ProviderError> {
        queue
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ProviderError::new(-32603, "no scripted response")))
    }
}

#[async_trait]
impl WalletProvider for MockWalletProvider {
    async fn chain_id(&self) -> Result<String, ProviderError> {
        self.record(MockCall::ChainId);
        Self::pop(&self.chain_ids)
    }

    async fn accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.record(MockCall::Accounts);
        Self::pop(&self.accounts)
    }

    async fn request_accounts(&self) -> Result<Vec<String>, ProviderError> {
        self.record(MockCall::RequestAccounts);
        Self::pop(&self.requested_accounts)
    }

    async fn switch_chain(&self, chain_id: &str) -> Result<(), ProviderError> {
        self.record(MockCall::SwitchChain(chain_id.to_string()));
        Self::pop(&self.switch_results)
    }

    async fn add_chain(&self, descriptor: &ChainDescriptor) -> Result<(), ProviderError> {
        self.record(MockCall::AddChain(descriptor.clone()));
        Self::pop(&self.add_results)
    }

    async fn get_balance(&self, address: &str) -> Result<U256, ProviderError> {
        self.record(MockCall::GetBalance(address.to_string()));
        Self::pop(&self.balances)
    }

    async fn send_transfer(
        &self,
        from: &str,
        to: &str,
        value: U256,
    ) -> Result<String, ProviderError> {
        self.record(MockCall::SendTransfer {
            from: from.to_string(),
            to: to.to_string(),
            value,
        });
        Self::pop(&self.transfers)
    }
}
