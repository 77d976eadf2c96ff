//! Wallet connection/session state machine for host applications that embed
//! an injected wallet provider.
//!
//! The crate owns no keys and performs no signing: every sensitive operation
//! (authorization, chain switching, balance computation, transfer broadcast)
//! is delegated to an external [`provider::WalletProvider`]. What lives here
//! is the session record, the connect/switch/disconnect orchestration, balance
//! display formatting, and transfer validation.

pub mod core;
pub mod provider;
pub mod session;

pub use crate::core::chain::{ChainDescriptor, NativeCurrency};
pub use crate::core::config::SessionConfig;
pub use crate::core::errors::SessionError;
pub use crate::provider::detect::{InjectedProvider, ProviderDetector};
pub use crate::provider::error::ProviderError;
pub use crate::provider::traits::WalletProvider;
pub use crate::session::controller::ConnectionController;
pub use crate::session::events::{spawn_event_pump, EventPump, ProviderEvent};
pub use crate::session::store::{Session, SessionStore, SubscriptionId};
pub use crate::session::transfer::TransferRequest;
