//! Transfer submission: the validation ladder and provider interaction.

use std::sync::Arc;

use ethers::types::U256;
use pretty_assertions::assert_eq;

use wallet_session::provider::mock::{MockCall, MockWalletProvider};
use wallet_session::{
    ConnectionController, InjectedProvider, ProviderError, SessionConfig, SessionError,
    SessionStore, TransferRequest,
};

const ADDR: &str = "0x742d35Cc6634C0532925a3b844Bc454e4438f44e";
const RECIPIENT: &str = "0x8ba1f109551bD432803012645Ac136ddd64DBA72";

fn one_eth() -> U256 {
    U256::exp10(18)
}

fn request(recipient: &str, amount: &str) -> TransferRequest {
    TransferRequest { recipient: recipient.to_string(), amount: amount.to_string() }
}

async fn connected_controller(mock: &Arc<MockWalletProvider>) -> ConnectionController {
    let _ = tracing_subscriber::fmt().with_env_filter("wallet_session=debug").try_init();
    let controller =
        ConnectionController::new(Arc::new(SessionStore::new()), SessionConfig::default());
    mock.push_chain_id("0xaa36a7");
    mock.push_accounts(vec![ADDR]);
    mock.push_balance(one_eth());
    controller.initialize(&InjectedProvider::present(mock.clone())).await;
    assert!(controller.store().snapshot().connected);
    controller
}

#[tokio::test]
async fn submit_without_session_fails_locally() {
    let mock = Arc::new(MockWalletProvider::new());
    mock.push_chain_id("0xaa36a7");
    mock.push_accounts(vec![]);
    let controller =
        ConnectionController::new(Arc::new(SessionStore::new()), SessionConfig::default());
    controller.initialize(&InjectedProvider::present(mock.clone())).await;

    let err = controller.submit_transfer(&request(RECIPIENT, "0.5")).await.unwrap_err();
    assert!(matches!(err, SessionError::NotConnected));
    assert_eq!(mock.call_count(|c| matches!(c, MockCall::SendTransfer { .. })), 0);
}

#[tokio::test]
async fn submit_invalid_recipient_issues_no_provider_call() {
    let mock = Arc::new(MockWalletProvider::new());
    let controller = connected_controller(&mock).await;
    let calls_before = mock.calls().len();

    let err = controller.submit_transfer(&request("not-an-address", "0.5")).await.unwrap_err();
    assert!(matches!(err, SessionError::InvalidAddress(_)));
    assert_eq!(mock.calls().len(), calls_before);
}

#[tokio::test]
async fn submit_negative_amount_issues_no_provider_call() {
    let mock = Arc::new(MockWalletProvider::new());
    let controller = connected_controller(&mock).await;
    let calls_before = mock.calls().len();

    let err = controller.submit_transfer(&request(RECIPIENT, "-1")).await.unwrap_err();
    assert!(matches!(err, SessionError::InvalidAmount(_)));
    assert_eq!(mock.calls().len(), calls_before);
}

#[tokio::test]
async fn submit_non_numeric_amount_issues_no_provider_call() {
    let mock = Arc::new(MockWalletProvider::new());
    let controller = connected_controller(&mock).await;
    let calls_before = mock.calls().len();

    let err = controller.submit_transfer(&request(RECIPIENT, "lots")).await.unwrap_err();
    assert!(matches!(err, SessionError::InvalidAmount(_)));
    assert_eq!(mock.calls().len(), calls_before);
}

#[tokio::test]
async fn submit_returns_tx_id_and_refreshes_balance() {
    let mock = Arc::new(MockWalletProvider::new());
    let controller = connected_controller(&mock).await;

    mock.push_transfer("0xdeadbeef");
    mock.push_balance(one_eth() / U256::from(2u64));
    let tx_id = controller.submit_transfer(&request(RECIPIENT, "0.5")).await.unwrap();
    assert_eq!(tx_id, "0xdeadbeef");

    let expected_value = U256::exp10(18) / U256::from(2u64);
    assert_eq!(
        mock.call_count(|c| matches!(
            c,
            MockCall::SendTransfer { from, to, value }
                if from == ADDR && to == RECIPIENT && *value == expected_value
        )),
        1
    );
    assert_eq!(controller.store().snapshot().balance_display, "0.5000");
}

#[tokio::test]
async fn submit_rejection_carries_provider_message_without_retry() {
    let mock = Arc::new(MockWalletProvider::new());
    let controller = connected_controller(&mock).await;

    mock.push_transfer_err(ProviderError::user_rejected("insufficient funds"));
    let err = controller.submit_transfer(&request(RECIPIENT, "0.5")).await.unwrap_err();
    match err {
        SessionError::Submission(message) => assert_eq!(message, "insufficient funds"),
        other => panic!("expected Submission, got {:?}", other),
    }
    assert_eq!(mock.call_count(|c| matches!(c, MockCall::SendTransfer { .. })), 1);
    // The failed submission does not touch the balance.
    assert_eq!(controller.store().snapshot().balance_display, "1.0000");
}
