//! Balance refresh: raw provider balance in, formatted display string out.

use tracing::{debug, warn};

use crate::core::errors::SessionError;
use crate::core::units;
use crate::session::controller::ConnectionController;

impl ConnectionController {
    /// Queries the provider for `address`'s raw balance, converts it to the
    /// display denomination using the target chain's decimals, and writes the
    /// rounded result into the session store.
    ///
    /// On failure the previous balance is left untouched and the error is
    /// recorded as `last_error`.
    pub async fn refresh_balance(&self, address: &str) {
        let provider = match self.provider() {
            Ok(p) => p,
            Err(e) => {
                self.store().set_error(&e);
                return;
            }
        };

        debug!(address = %address, "refreshing balance");
        match provider.get_balance(address).await {
            Ok(raw) => {
                let decimals = self.config().target_chain.native_currency.decimals;
                let formatted =
                    units::format_display(raw, decimals, self.config().balance_display_digits);
                debug!(balance = %formatted, "balance updated");
                self.store().set_balance_display(formatted);
            }
            Err(e) => {
                let err = SessionError::BalanceQuery(e.to_string());
                warn!("{}", err);
                self.store().set_error(&err);
            }
        }
    }
}
