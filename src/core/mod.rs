pub mod chain;
pub mod config;
pub mod errors;
pub mod units;

pub use chain::{ChainDescriptor, NativeCurrency};
pub use config::SessionConfig;
pub use errors::SessionError;
