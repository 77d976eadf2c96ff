pub mod detect;
pub mod error;
pub mod mock;
pub mod traits;

pub use detect::{InjectedProvider, ProviderDetector};
pub use error::ProviderError;
pub use traits::WalletProvider;
