pub mod balance;
pub mod controller;
pub mod events;
pub mod store;
pub mod transfer;

pub use controller::ConnectionController;
pub use events::{spawn_event_pump, EventPump, ProviderEvent};
pub use store::{Session, SessionStore, SubscriptionId};
pub use transfer::TransferRequest;
