use tracing::info;

use crate::core::errors::SessionError;
use crate::core::units;
use crate::session::controller::ConnectionController;

/// A value transfer as entered by the user. Ephemeral: validated per
/// submission and discarded afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    /// Recipient address in the chain's address format.
    pub recipient: String,
    /// Amount in the display denomination (e.g. "0.5").
    pub amount: String,
}

impl ConnectionController {
    /// Validates and submits a value transfer.
    ///
    /// Validation happens strictly before any provider call: an inactive
    /// session, a malformed recipient, or a non-numeric/negative amount all
    /// fail locally. The submission itself blocks until the provider
    /// acknowledges it with a transaction id — acknowledgment, not finality.
    /// On success the balance is refreshed; on provider rejection the
    /// provider's message is returned as [`SessionError::Submission`] with no
    /// retry.
    pub async fn submit_transfer(&self, request: &TransferRequest) -> Result<String, SessionError> {
        let session = self.store().snapshot();
        if !session.connected {
            return Err(SessionError::NotConnected);
        }
        let from = session.address.ok_or(SessionError::NotConnected)?;

        if !units::validate_address(&request.recipient) {
            return Err(SessionError::InvalidAddress(request.recipient.clone()));
        }

        let decimals = self.config().target_chain.native_currency.decimals;
        let value = units::parse_amount(&request.amount, decimals)?;

        let provider = self.provider()?;
        info!(to = %request.recipient, amount = %request.amount, "submitting transfer");
        let tx_id = provider
            .send_transfer(&from, &request.recipient, value)
            .await
            .map_err(|e| SessionError::Submission(e.message))?;

        info!(tx_id = %tx_id, "transfer submitted");
        self.refresh_balance(&from).await;
        Ok(tx_id)
    }
}
